use crate::core::data::surface::Surface;
use crate::engine::lease::BufferLease;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeError {
    /// The surface and the lease disagree on pixel count: the last resize
    /// and the last sync went out of step. Fatal, never truncated.
    SizeMismatch {
        surface_width: u32,
        surface_height: u32,
        lease_width: u32,
        lease_height: u32,
    },
}

impl fmt::Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                surface_width,
                surface_height,
                lease_width,
                lease_height,
            } => {
                write!(
                    f,
                    "surface {}x{} does not match leased planes {}x{}",
                    surface_width, surface_height, lease_width, lease_height
                )
            }
        }
    }
}

impl Error for CompositeError {}

/// Paints every leased pixel onto the surface, exact colours, no blending.
pub fn composite<S: Surface>(
    lease: &BufferLease<'_>,
    surface: &mut S,
) -> Result<(), CompositeError> {
    if surface.width() != lease.width() || surface.height() != lease.height() {
        return Err(CompositeError::SizeMismatch {
            surface_width: surface.width(),
            surface_height: surface.height(),
            lease_width: lease.width(),
            lease_height: lease.height(),
        });
    }

    for row in 0..lease.height() {
        for col in 0..lease.width() {
            surface.set_pixel(col, row, lease.rgb_at(row, col));
        }
    }

    Ok(())
}
