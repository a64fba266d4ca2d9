//! Input adapters for the fractal viewer.
//!
//! Raw key input is mapped to an explicit command enumeration before it
//! reaches the viewport controller; the mapping is windowing-free so it
//! tests without a GUI.

pub mod command;
#[cfg(feature = "gui")]
pub mod gui;
