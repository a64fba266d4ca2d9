/// Multiplicative zoom step applied by a single `zoom_in`/`zoom_out`.
pub const ZOOM_STEP: f64 = 1.1;

/// Divisor turning a surface dimension into a keyboard pan step, so panning
/// speed stays constant in screen pixels regardless of world-space scale.
pub const RELATIVE_MOVE_FACTOR: u32 = 50;

// The zoom factor is derived from an integer exponent so that a step in and a
// step out cancel exactly. The clamps keep the factor well inside f64 range
// and stop degenerate views: 1.1^-64 ~ 0.0022, 1.1^192 ~ 9e7.
const ZOOM_EXPONENT_MIN: i32 = -64;
const ZOOM_EXPONENT_MAX: i32 = 192;

/// Net effect of all viewport transitions since the last engine sync.
///
/// Pan deltas and zoom steps accumulate; a resize trumps everything because
/// the engine's plane layout depends on dimensions and forces re-creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportDelta {
    pub pan_x: i64,
    pub pan_y: i64,
    pub zoom_steps: i32,
    pub resized: bool,
}

/// Pan/zoom/dimension state of the single viewport.
///
/// All mutation goes through the named transitions below; every transition
/// marks the state dirty, and the accumulated delta is consumed exactly once
/// by the next engine sync.
#[derive(Debug)]
pub struct ViewportState {
    origin_x: i64,
    origin_y: i64,
    zoom_exponent: i32,
    width: u32,
    height: u32,
    dirty: bool,
    pending: ViewportDelta,
}

impl ViewportState {
    /// Creates the viewport; dimensions are clamped to at least 1.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            origin_x: 0,
            origin_y: 0,
            zoom_exponent: 0,
            width: width.max(1),
            height: height.max(1),
            dirty: false,
            pending: ViewportDelta::default(),
        }
    }

    /// Replaces the surface dimensions, clamping each to at least 1.
    ///
    /// Always forces engine re-creation on the next sync, even if the clamped
    /// dimensions end up unchanged.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.pending.resized = true;
        self.dirty = true;
    }

    /// Steps the zoom in by one `ZOOM_STEP`; a step past the clamp is a no-op
    /// that leaves the state clean. Returns the new factor.
    pub fn zoom_in(&mut self) -> f64 {
        if self.zoom_exponent < ZOOM_EXPONENT_MAX {
            self.zoom_exponent += 1;
            self.pending.zoom_steps += 1;
            self.dirty = true;
        }
        self.zoom_factor()
    }

    /// Steps the zoom out by one `ZOOM_STEP`; clamped like `zoom_in`.
    pub fn zoom_out(&mut self) -> f64 {
        if self.zoom_exponent > ZOOM_EXPONENT_MIN {
            self.zoom_exponent -= 1;
            self.pending.zoom_steps -= 1;
            self.dirty = true;
        }
        self.zoom_factor()
    }

    /// Adds `delta` to the horizontal origin and returns the new coordinate.
    /// Wrapping arithmetic keeps `move(d)` then `move(-d)` exact for any `d`.
    pub fn move_horizontal(&mut self, delta: i64) -> i64 {
        self.origin_x = self.origin_x.wrapping_add(delta);
        self.pending.pan_x = self.pending.pan_x.wrapping_add(delta);
        self.dirty = true;
        self.origin_x
    }

    /// Adds `delta` to the vertical origin and returns the new coordinate.
    pub fn move_vertical(&mut self, delta: i64) -> i64 {
        self.origin_y = self.origin_y.wrapping_add(delta);
        self.pending.pan_y = self.pending.pan_y.wrapping_add(delta);
        self.dirty = true;
        self.origin_y
    }

    /// Consumes the accumulated delta, clearing the dirty flag.
    ///
    /// Returns `None` when no transition ran since the last call, `Some`
    /// otherwise (even when the transitions netted out to zero, because the
    /// sync policy still runs one explicit engine update per dirty frame).
    pub fn take_pending(&mut self) -> Option<ViewportDelta> {
        if !self.dirty {
            return None;
        }

        self.dirty = false;
        Some(std::mem::take(&mut self.pending))
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn origin_x(&self) -> i64 {
        self.origin_x
    }

    #[must_use]
    pub fn origin_y(&self) -> i64 {
        self.origin_y
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        ZOOM_STEP.powi(self.zoom_exponent)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Pan step for one keyboard press: proportional to the visible pixel span,
/// never below one world unit.
#[must_use]
pub fn pan_step(dimension: u32) -> i64 {
    i64::from((dimension / RELATIVE_MOVE_FACTOR).max(1))
}
