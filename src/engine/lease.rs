use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaseError {
    /// No engine handle exists yet; a sync must run before `acquire`.
    NoEngine,
    /// A plane's length disagrees with the handle's `width * height`.
    PlaneLengthMismatch {
        plane: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for LeaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEngine => {
                write!(f, "no engine handle to lease; sync the viewport first")
            }
            Self::PlaneLengthMismatch {
                plane,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "plane {} holds {} bytes, expected {}",
                    plane, actual, expected
                )
            }
        }
    }
}

impl Error for LeaseError {}

/// Non-owning, generation-stamped view over the engine's three colour planes.
///
/// A lease is only meaningful for the sync it was acquired after; it is
/// re-acquired on every frame and never cached. The generation stamp lets the
/// render pipeline fail fast if a stale lease ever reaches the compositor,
/// and the borrow of the binding statically prevents holding one across a
/// mutating engine call.
#[derive(Debug)]
pub struct BufferLease<'a> {
    plane_r: &'a [u8],
    plane_g: &'a [u8],
    plane_b: &'a [u8],
    width: u32,
    height: u32,
    generation: u64,
}

impl<'a> BufferLease<'a> {
    /// Snapshots the plane locations for a handle of the given dimensions,
    /// verifying that each plane holds exactly `width * height` bytes.
    pub(crate) fn new(
        plane_r: &'a [u8],
        plane_g: &'a [u8],
        plane_b: &'a [u8],
        width: u32,
        height: u32,
        generation: u64,
    ) -> Result<Self, LeaseError> {
        let expected = (width as usize) * (height as usize);

        for (plane, bytes) in [("R", plane_r), ("G", plane_g), ("B", plane_b)] {
            if bytes.len() != expected {
                return Err(LeaseError::PlaneLengthMismatch {
                    plane,
                    expected,
                    actual: bytes.len(),
                });
            }
        }

        Ok(Self {
            plane_r,
            plane_g,
            plane_b,
            width,
            height,
            generation,
        })
    }

    /// Reads the colour at `(row, col)`, row-major.
    ///
    /// # Panics
    /// Panics if `(row, col)` lies outside the leased dimensions.
    #[must_use]
    pub fn rgb_at(&self, row: u32, col: u32) -> Colour {
        assert!(
            row < self.height && col < self.width,
            "plane read ({}, {}) outside {}x{} lease",
            row,
            col,
            self.width,
            self.height
        );

        let index = (row as usize) * (self.width as usize) + (col as usize);
        Colour {
            r: self.plane_r[index],
            g: self.plane_g[index],
            b: self.plane_b[index],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_planes_of_exact_size() {
        let plane = vec![0_u8; 6];

        let lease = BufferLease::new(&plane, &plane, &plane, 3, 2, 1);

        let lease = lease.expect("planes match 3x2");
        assert_eq!(lease.width(), 3);
        assert_eq!(lease.height(), 2);
        assert_eq!(lease.generation(), 1);
    }

    #[test]
    fn test_new_rejects_short_plane_and_names_it() {
        let good = vec![0_u8; 6];
        let short = vec![0_u8; 5];

        let result = BufferLease::new(&good, &short, &good, 3, 2, 1);

        assert_eq!(
            result.unwrap_err(),
            LeaseError::PlaneLengthMismatch {
                plane: "G",
                expected: 6,
                actual: 5,
            }
        );
    }

    #[test]
    fn test_new_rejects_oversized_plane() {
        let good = vec![0_u8; 6];
        let long = vec![0_u8; 7];

        let result = BufferLease::new(&good, &good, &long, 3, 2, 1);

        assert_eq!(
            result.unwrap_err(),
            LeaseError::PlaneLengthMismatch {
                plane: "B",
                expected: 6,
                actual: 7,
            }
        );
    }

    #[test]
    fn test_rgb_at_reads_row_major() {
        let plane_r: Vec<u8> = (0..6).collect();
        let plane_g: Vec<u8> = (10..16).collect();
        let plane_b: Vec<u8> = (20..26).collect();
        let lease = BufferLease::new(&plane_r, &plane_g, &plane_b, 3, 2, 0).unwrap();

        // index(row=1, col=2) = 1 * 3 + 2 = 5
        assert_eq!(
            lease.rgb_at(1, 2),
            Colour {
                r: 5,
                g: 15,
                b: 25,
            }
        );
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_rgb_at_outside_lease_panics() {
        let plane = vec![0_u8; 6];
        let lease = BufferLease::new(&plane, &plane, &plane, 3, 2, 0).unwrap();

        let _ = lease.rgb_at(2, 0);
    }
}
