use crate::core::data::viewport::ZOOM_STEP;
use crate::engine::contract::{EngineError, EngineHandle, EngineParams, FractalEngine};
use rayon::prelude::*;

/// Built-in stand-in for the external compute engine: a deterministic
/// plasma-like pattern whose colours shift with origin and zoom. It exists so
/// the binary, the GUI, tests, and benches have a concrete engine; the real
/// fractal math lives behind the same contract.
#[derive(Debug, Default)]
pub struct GradientEngine;

impl GradientEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FractalEngine for GradientEngine {
    type Handle = GradientHandle;

    fn create(&self, params: &EngineParams) -> Result<GradientHandle, EngineError> {
        if params.width == 0 || params.height == 0 {
            return Err(EngineError::InvalidDimensions {
                width: params.width,
                height: params.height,
            });
        }
        if !(params.zoom_factor.is_finite() && params.zoom_factor > 0.0) {
            return Err(EngineError::InvalidZoom {
                zoom_factor: params.zoom_factor,
            });
        }

        let size = (params.width as usize) * (params.height as usize);
        let mut handle = GradientHandle {
            width: params.width,
            height: params.height,
            origin_x: params.origin_x,
            origin_y: params.origin_y,
            zoom_factor: params.zoom_factor,
            plane_r: vec![0; size],
            plane_g: vec![0; size],
            plane_b: vec![0; size],
        };
        handle.update();
        Ok(handle)
    }
}

/// Three dense colour planes plus the position they were computed for.
#[derive(Debug)]
pub struct GradientHandle {
    width: u32,
    height: u32,
    origin_x: i64,
    origin_y: i64,
    zoom_factor: f64,
    plane_r: Vec<u8>,
    plane_g: Vec<u8>,
    plane_b: Vec<u8>,
}

fn channel(v: f64) -> u8 {
    ((v.sin() * 0.5 + 0.5) * 255.0) as u8
}

fn sample(origin_x: i64, origin_y: i64, zoom_factor: f64, col: u32, row: u32) -> (u8, u8, u8) {
    let world_x = origin_x as f64 + f64::from(col) / zoom_factor;
    let world_y = origin_y as f64 + f64::from(row) / zoom_factor;

    (
        channel(world_x * 0.031),
        channel(world_y * 0.027),
        channel((world_x + world_y) * 0.017),
    )
}

impl EngineHandle for GradientHandle {
    fn update(&mut self) {
        let width = self.width as usize;
        let (origin_x, origin_y) = (self.origin_x, self.origin_y);
        let zoom_factor = self.zoom_factor;

        self.plane_r
            .par_chunks_mut(width)
            .zip(self.plane_g.par_chunks_mut(width))
            .zip(self.plane_b.par_chunks_mut(width))
            .enumerate()
            .for_each(|(row, ((row_r, row_g), row_b))| {
                for col in 0..width {
                    let (r, g, b) =
                        sample(origin_x, origin_y, zoom_factor, col as u32, row as u32);
                    row_r[col] = r;
                    row_g[col] = g;
                    row_b[col] = b;
                }
            });
    }

    fn zoom_in(&mut self) -> f64 {
        self.zoom_factor *= ZOOM_STEP;
        self.zoom_factor
    }

    fn zoom_out(&mut self) -> f64 {
        self.zoom_factor /= ZOOM_STEP;
        self.zoom_factor
    }

    fn move_horizontal(&mut self, delta: i64) -> i64 {
        self.origin_x = self.origin_x.wrapping_add(delta);
        self.origin_x
    }

    fn move_vertical(&mut self, delta: i64) -> i64 {
        self.origin_y = self.origin_y.wrapping_add(delta);
        self.origin_y
    }

    fn plane_r(&self) -> &[u8] {
        &self.plane_r
    }

    fn plane_g(&self) -> &[u8] {
        &self.plane_g
    }

    fn plane_b(&self) -> &[u8] {
        &self.plane_b
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
