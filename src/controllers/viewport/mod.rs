//! The viewport render pipeline.
//!
//! Input commands become named transitions on the viewport state; the
//! scheduler coalesces the resulting redraw requests into at most one
//! engine-sync + composite cycle per display frame.

pub mod compositor;
mod controller;
pub mod errors;
mod scheduler;

pub use controller::{RedrawOutcome, ViewportController};
pub use scheduler::RenderScheduler;
