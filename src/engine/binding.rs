use crate::core::data::viewport::ViewportState;
use crate::engine::contract::{EngineError, EngineHandle, EngineParams, FractalEngine};
use crate::engine::lease::{BufferLease, LeaseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// A size change (or the absence of any handle) forced a fresh handle
    /// and a full recompute.
    Recreated,
    /// Pan/zoom deltas were applied to the live handle followed by one
    /// in-place recompute.
    Updated,
    /// The viewport was clean; no engine call ran and leases stay valid.
    Unchanged,
}

/// Adapter owning the engine handle lifecycle.
///
/// Re-creation is reserved for dimension changes, because plane layout is
/// size-dependent; the common pan/zoom interaction reuses the live handle
/// and recomputes in place. Every mutating sync advances the generation,
/// invalidating all outstanding leases.
pub struct EngineBinding<E: FractalEngine> {
    engine: E,
    handle: Option<E::Handle>,
    generation: u64,
}

impl<E: FractalEngine> EngineBinding<E> {
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            handle: None,
            generation: 0,
        }
    }

    /// Reconciles the engine with the viewport, consuming its pending delta.
    ///
    /// Policy: every dirty frame ends in exactly one explicit recompute: a
    /// `create` when dimensions changed, otherwise the mutator batch followed
    /// by one `update`. A failed `create` drops no previous handle state
    /// changes on the floor: the binding is left without a handle and the
    /// caller aborts the redraw.
    pub fn sync(&mut self, viewport: &mut ViewportState) -> Result<SyncOutcome, EngineError> {
        let delta = viewport.take_pending();

        let dimensions_changed = self
            .handle
            .as_ref()
            .is_none_or(|handle| {
                handle.width() != viewport.width() || handle.height() != viewport.height()
            });

        if dimensions_changed || delta.is_some_and(|d| d.resized) {
            self.handle = None;
            let params = EngineParams {
                width: viewport.width(),
                height: viewport.height(),
                origin_x: viewport.origin_x(),
                origin_y: viewport.origin_y(),
                zoom_factor: viewport.zoom_factor(),
            };
            self.handle = Some(self.engine.create(&params)?);
            self.generation += 1;
            return Ok(SyncOutcome::Recreated);
        }

        let Some(delta) = delta else {
            return Ok(SyncOutcome::Unchanged);
        };

        let handle = self
            .handle
            .as_mut()
            .expect("dimensions matched, so a handle exists");

        if delta.pan_x != 0 {
            handle.move_horizontal(delta.pan_x);
        }
        if delta.pan_y != 0 {
            handle.move_vertical(delta.pan_y);
        }
        for _ in 0..delta.zoom_steps.unsigned_abs() {
            if delta.zoom_steps > 0 {
                handle.zoom_in();
            } else {
                handle.zoom_out();
            }
        }

        handle.update();
        self.generation += 1;
        Ok(SyncOutcome::Updated)
    }

    /// Snapshots the current plane locations into a lease stamped with the
    /// current generation. Fails before the first successful sync.
    pub fn acquire(&self) -> Result<BufferLease<'_>, LeaseError> {
        let handle = self.handle.as_ref().ok_or(LeaseError::NoEngine)?;

        BufferLease::new(
            handle.plane_r(),
            handle.plane_g(),
            handle.plane_b(),
            handle.width(),
            handle.height(),
            self.generation,
        )
    }

    /// Stale-lease guard: true while no mutating sync ran since `acquire`.
    #[must_use]
    pub fn lease_is_current(&self, lease: &BufferLease<'_>) -> bool {
        lease.generation() == self.generation
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
