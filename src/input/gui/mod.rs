//! GUI input adapter for the interactive viewer.
//!
//! Provides a windowed interface using winit for window management and
//! pixels for framebuffer rendering.

mod app;

pub use app::run_gui;
