use crate::core::data::surface::{FrameSurface, Surface};
use std::io::Write;
use std::path::Path;

/// Writes the surface as a binary PPM snapshot.
pub fn write_ppm(surface: &FrameSurface, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", surface.width(), surface.height())?;
    writeln!(file, "255")?;
    file.write_all(surface.data())?;

    Ok(())
}
