pub mod colour;
pub mod surface;
pub mod viewport;
