use crate::adapters::pixel_format::surface_to_rgba;
use crate::core::data::surface::{FrameSurface, Surface};
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

/// Presents composited frames through a `pixels` framebuffer.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    #[must_use]
    pub fn new(window: &'static Window) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create pixels surface");

        Self {
            pixels,
            width: size.width,
            height: size.height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Copies the surface into the RGBA framebuffer and renders it.
    ///
    /// A surface mid-resize (dimensions not yet matching the framebuffer) is
    /// skipped; the next scheduled frame carries the consistent sizes.
    pub fn present(&mut self, surface: &FrameSurface) -> Result<(), pixels::Error> {
        if surface.width() != self.width || surface.height() != self.height {
            return Ok(());
        }

        surface_to_rgba(surface, self.pixels.frame_mut());
        self.pixels.render()
    }
}
