use std::error::Error;
use std::fmt;

/// Absolute parameters an engine handle is created from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineParams {
    pub width: u32,
    pub height: u32,
    pub origin_x: i64,
    pub origin_y: i64,
    pub zoom_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    InvalidDimensions { width: u32, height: u32 },
    InvalidZoom { zoom_factor: f64 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "engine dimensions must be positive: {}x{}", width, height)
            }
            Self::InvalidZoom { zoom_factor } => {
                write!(
                    f,
                    "zoom factor must be positive and finite: {}",
                    zoom_factor
                )
            }
        }
    }
}

impl Error for EngineError {}

/// Factory side of the external compute engine.
///
/// `create` performs the full initial pixel computation synchronously and
/// only fails on invalid parameters.
pub trait FractalEngine {
    type Handle: EngineHandle;

    fn create(&self, params: &EngineParams) -> Result<Self::Handle, EngineError>;
}

/// A live engine instance bound to the dimensions it was created with.
///
/// The engine owns the plane memory. Plane slices are valid only until the
/// next mutating call; callers must re-read them after every `update`. The
/// pan/zoom mutators adjust parameters without recomputing the planes; the
/// host follows every batch of mutations with exactly one `update`.
pub trait EngineHandle {
    /// Recomputes all three planes in place for the current parameters.
    fn update(&mut self);

    fn zoom_in(&mut self) -> f64;
    fn zoom_out(&mut self) -> f64;
    fn move_horizontal(&mut self, delta: i64) -> i64;
    fn move_vertical(&mut self, delta: i64) -> i64;

    /// Red plane, `width * height` bytes, row-major.
    fn plane_r(&self) -> &[u8];
    /// Green plane, same layout as `plane_r`.
    fn plane_g(&self) -> &[u8];
    /// Blue plane, same layout as `plane_r`.
    fn plane_b(&self) -> &[u8];

    fn width(&self) -> u32;
    fn height(&self) -> u32;
}
