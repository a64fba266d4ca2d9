//! Pixel format conversion for presentation adapters.

use crate::core::data::surface::FrameSurface;

/// Expands a composited RGB surface into an opaque RGBA framebuffer.
///
/// # Panics
/// Panics if `rgba` is not sized for the surface
/// (`width * height * 4` bytes).
pub fn surface_to_rgba(surface: &FrameSurface, rgba: &mut [u8]) {
    let src = surface.data();
    let expected = (src.len() / 3) * 4;
    assert_eq!(
        rgba.len(),
        expected,
        "rgba length {} does not match surface pixels ({} expected)",
        rgba.len(),
        expected
    );

    for (src_px, dst_px) in src.chunks_exact(3).zip(rgba.chunks_exact_mut(4)) {
        dst_px[..3].copy_from_slice(src_px);
        dst_px[3] = 255;
    }
}
