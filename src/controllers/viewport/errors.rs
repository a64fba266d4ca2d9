use crate::controllers::viewport::compositor::CompositeError;
use crate::engine::contract::EngineError;
use crate::engine::lease::LeaseError;
use std::error::Error;
use std::fmt;

/// Anything that can abort a redraw cycle. The previous frame stays on
/// screen; no retry is meaningful because every step is deterministic.
#[derive(Debug, PartialEq)]
pub enum RedrawError {
    Engine(EngineError),
    Lease(LeaseError),
    /// A lease outlived a mutating sync before reaching the compositor.
    StaleLease {
        lease_generation: u64,
        engine_generation: u64,
    },
    Composite(CompositeError),
}

impl fmt::Display for RedrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engine(e) => write!(f, "engine sync failed: {}", e),
            Self::Lease(e) => write!(f, "buffer lease failed: {}", e),
            Self::StaleLease {
                lease_generation,
                engine_generation,
            } => {
                write!(
                    f,
                    "stale lease: generation {} but engine is at {}",
                    lease_generation, engine_generation
                )
            }
            Self::Composite(e) => write!(f, "composite failed: {}", e),
        }
    }
}

impl Error for RedrawError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            Self::Lease(e) => Some(e),
            Self::StaleLease { .. } => None,
            Self::Composite(e) => Some(e),
        }
    }
}

impl From<EngineError> for RedrawError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

impl From<LeaseError> for RedrawError {
    fn from(e: LeaseError) -> Self {
        Self::Lease(e)
    }
}

impl From<CompositeError> for RedrawError {
    fn from(e: CompositeError) -> Self {
        Self::Composite(e)
    }
}
