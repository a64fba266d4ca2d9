pub mod adapters;
mod controllers;
mod core;
mod engine;
mod input;
#[cfg(feature = "gui")]
mod presenters;
mod storage;

pub use controllers::viewport::{RedrawOutcome, ViewportController};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::surface::{FrameSurface, Surface};
pub use engine::contract::{EngineError, EngineHandle, EngineParams, FractalEngine};
pub use engine::demo::GradientEngine;
pub use input::command::{Command, command_for_key};
pub use storage::write_ppm::write_ppm;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
