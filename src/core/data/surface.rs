use crate::core::data::colour::Colour;

/// Output side of the compositor: anything that can take a 1x1 pixel write.
///
/// Implementations declare their dimensions up front; the compositor refuses
/// to paint a surface whose dimensions disagree with the lease it holds, so
/// `set_pixel` is only ever called with `x < width()` and `y < height()`.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_pixel(&mut self, x: u32, y: u32, colour: Colour);
}

/// In-memory RGB surface, row-major, three bytes per pixel.
///
/// Used directly by the headless binary and tests, and as the staging buffer
/// the GUI presenter converts to RGBA.
#[derive(Debug)]
pub struct FrameSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameSurface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 3],
        }
    }

    /// Replaces the surface with a zeroed one of the new dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data = vec![0; (width as usize) * (height as usize) * 3];
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// # Panics
    /// Panics if `(x, y)` lies outside the surface.
    #[must_use]
    pub fn pixel_at(&self, x: u32, y: u32) -> Colour {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} surface",
            x,
            y,
            self.width,
            self.height
        );

        let index = self.pixel_index(x, y);
        Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
        }
    }

    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 3
    }
}

impl Surface for FrameSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) {
        let index = self.pixel_index(x, y);
        self.data[index] = colour.r;
        self.data[index + 1] = colour.g;
        self.data[index + 2] = colour.b;
    }
}
