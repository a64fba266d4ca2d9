use crate::controllers::viewport::compositor::composite;
use crate::controllers::viewport::errors::RedrawError;
use crate::controllers::viewport::scheduler::RenderScheduler;
use crate::core::data::surface::Surface;
use crate::core::data::viewport::{ViewportState, pan_step};
use crate::engine::binding::{EngineBinding, SyncOutcome};
use crate::engine::contract::FractalEngine;
use crate::input::command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawOutcome {
    /// One sync + composite cycle ran.
    Painted { sync: SyncOutcome, generation: u64 },
    /// No redraw request occurred since the last frame; nothing ran.
    Clean,
}

/// Sole owner of the viewport state machine and the engine binding.
///
/// Input commands become named viewport transitions; every transition ends
/// with one `request_redraw`. The actual engine sync and paint are deferred
/// to `redraw`, which the host calls once per display frame, so rapid inputs
/// coalesce into a single cycle rendering the latest state.
pub struct ViewportController<E: FractalEngine> {
    viewport: ViewportState,
    binding: EngineBinding<E>,
    scheduler: RenderScheduler,
}

impl<E: FractalEngine> ViewportController<E> {
    /// Creates the controller with an initial frame already requested, so the
    /// first `redraw` performs the initial engine creation and paint.
    #[must_use]
    pub fn new(engine: E, width: u32, height: u32) -> Self {
        let mut scheduler = RenderScheduler::new();
        let _ = scheduler.request_redraw();

        Self {
            viewport: ViewportState::new(width, height),
            binding: EngineBinding::new(engine),
            scheduler,
        }
    }

    /// Applies one recognized input command.
    ///
    /// Returns `true` when the caller must arrange a display-frame callback,
    /// `false` when the request coalesced into an already-scheduled frame.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::ZoomIn => {
                self.viewport.zoom_in();
            }
            Command::ZoomOut => {
                self.viewport.zoom_out();
            }
            Command::PanUp => {
                let step = pan_step(self.viewport.height());
                self.viewport.move_vertical(-step);
            }
            Command::PanDown => {
                let step = pan_step(self.viewport.height());
                self.viewport.move_vertical(step);
            }
            Command::PanLeft => {
                let step = pan_step(self.viewport.width());
                self.viewport.move_horizontal(-step);
            }
            Command::PanRight => {
                let step = pan_step(self.viewport.width());
                self.viewport.move_horizontal(step);
            }
        }

        self.scheduler.request_redraw()
    }

    /// Surface-resize transition; same return contract as `apply`.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        self.viewport.resize(width, height);
        self.scheduler.request_redraw()
    }

    /// The frame boundary: runs at most one engine-sync + composite cycle
    /// against the viewport as it stands now.
    ///
    /// On error the redraw aborts and the surface keeps its previous
    /// contents; the failure will recur until the triggering state changes.
    pub fn redraw<S: Surface>(&mut self, surface: &mut S) -> Result<RedrawOutcome, RedrawError> {
        if !self.scheduler.begin_frame() {
            return Ok(RedrawOutcome::Clean);
        }

        let sync = self.binding.sync(&mut self.viewport)?;
        let lease = self.binding.acquire()?;

        if !self.binding.lease_is_current(&lease) {
            return Err(RedrawError::StaleLease {
                lease_generation: lease.generation(),
                engine_generation: self.binding.generation(),
            });
        }

        composite(&lease, surface)?;

        Ok(RedrawOutcome::Painted {
            sync,
            generation: lease.generation(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    #[must_use]
    pub fn redraw_pending(&self) -> bool {
        self.scheduler.is_scheduled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::surface::FrameSurface;
    use crate::core::data::viewport::ZOOM_STEP;
    use crate::engine::contract::{EngineError, EngineHandle, EngineParams};
    use crate::engine::demo::GradientEngine;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Engine whose planes hold a constant byte, bumped on every recompute,
    /// so each paint is distinguishable on the surface.
    struct CountingEngine {
        creates: Rc<Cell<u32>>,
        recomputes: Rc<Cell<u32>>,
    }

    struct CountingHandle {
        width: u32,
        height: u32,
        origin_x: i64,
        origin_y: i64,
        zoom_factor: f64,
        planes: (Vec<u8>, Vec<u8>, Vec<u8>),
        recomputes: Rc<Cell<u32>>,
    }

    impl CountingEngine {
        fn new() -> (Self, Rc<Cell<u32>>, Rc<Cell<u32>>) {
            let creates = Rc::new(Cell::new(0));
            let recomputes = Rc::new(Cell::new(0));
            (
                Self {
                    creates: Rc::clone(&creates),
                    recomputes: Rc::clone(&recomputes),
                },
                creates,
                recomputes,
            )
        }
    }

    impl FractalEngine for CountingEngine {
        type Handle = CountingHandle;

        fn create(&self, params: &EngineParams) -> Result<CountingHandle, EngineError> {
            self.creates.set(self.creates.get() + 1);
            self.recomputes.set(self.recomputes.get() + 1);
            let size = (params.width as usize) * (params.height as usize);
            let fill = self.recomputes.get() as u8;
            Ok(CountingHandle {
                width: params.width,
                height: params.height,
                origin_x: params.origin_x,
                origin_y: params.origin_y,
                zoom_factor: params.zoom_factor,
                planes: (vec![fill; size], vec![fill; size], vec![fill; size]),
                recomputes: Rc::clone(&self.recomputes),
            })
        }
    }

    impl EngineHandle for CountingHandle {
        fn update(&mut self) {
            self.recomputes.set(self.recomputes.get() + 1);
            let fill = self.recomputes.get() as u8;
            for plane in [&mut self.planes.0, &mut self.planes.1, &mut self.planes.2] {
                plane.fill(fill);
            }
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
            &self.planes.0
        }

        fn plane_g(&self) -> &[u8] {
            &self.planes.1
        }

        fn plane_b(&self) -> &[u8] {
            &self.planes.2
        }

        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }
    }

    #[test]
    fn initial_redraw_creates_engine_and_paints() {
        let (engine, creates, _) = CountingEngine::new();
        let mut controller = ViewportController::new(engine, 4, 3);
        let mut surface = FrameSurface::new(4, 3);

        let outcome = controller.redraw(&mut surface).unwrap();

        assert_eq!(
            outcome,
            RedrawOutcome::Painted {
                sync: SyncOutcome::Recreated,
                generation: 1,
            }
        );
        assert_eq!(creates.get(), 1);
        assert!(surface.data().iter().all(|&b| b == 1));
    }

    #[test]
    fn redraw_without_requests_is_clean() {
        let (engine, creates, _) = CountingEngine::new();
        let mut controller = ViewportController::new(engine, 4, 3);
        let mut surface = FrameSurface::new(4, 3);
        let _ = controller.redraw(&mut surface).unwrap();

        let outcome = controller.redraw(&mut surface).unwrap();

        assert_eq!(outcome, RedrawOutcome::Clean);
        assert_eq!(creates.get(), 1);
    }

    #[test]
    fn rapid_commands_coalesce_into_one_sync_and_one_paint() {
        let (engine, creates, recomputes) = CountingEngine::new();
        let mut controller = ViewportController::new(engine, 100, 100);
        let mut surface = FrameSurface::new(100, 100);
        let _ = controller.redraw(&mut surface).unwrap();
        let recomputes_before = recomputes.get();

        // A burst of input within one frame interval.
        let mut callbacks = 0;
        for command in [
            Command::PanRight,
            Command::PanRight,
            Command::PanDown,
            Command::ZoomIn,
            Command::ZoomIn,
            Command::PanLeft,
        ] {
            if controller.apply(command) {
                callbacks += 1;
            }
        }
        assert_eq!(callbacks, 1);

        let outcome = controller.redraw(&mut surface).unwrap();

        assert!(matches!(
            outcome,
            RedrawOutcome::Painted {
                sync: SyncOutcome::Updated,
                ..
            }
        ));
        assert_eq!(creates.get(), 1, "pan/zoom must not recreate the handle");
        assert_eq!(recomputes.get(), recomputes_before + 1);
    }

    #[test]
    fn redraw_uses_the_state_as_of_the_frame_boundary() {
        let (engine, _, _) = CountingEngine::new();
        let mut controller = ViewportController::new(engine, 100, 100);
        let mut surface = FrameSurface::new(100, 100);
        let _ = controller.redraw(&mut surface).unwrap();

        // +2 then -2 pan steps net out; the boundary sees the latest state.
        controller.apply(Command::PanRight);
        controller.apply(Command::PanRight);
        controller.apply(Command::PanLeft);
        controller.apply(Command::PanLeft);
        let _ = controller.redraw(&mut surface).unwrap();

        assert_eq!(controller.viewport().origin_x(), 0);
    }

    #[test]
    fn pan_commands_step_proportionally_to_dimensions() {
        let (engine, _, _) = CountingEngine::new();
        let mut controller = ViewportController::new(engine, 800, 600);

        controller.apply(Command::PanRight);
        assert_eq!(controller.viewport().origin_x(), 16); // 800 / 50

        controller.apply(Command::PanUp);
        assert_eq!(controller.viewport().origin_y(), -12); // -(600 / 50)
    }

    #[test]
    fn zoom_commands_adjust_the_factor() {
        let (engine, _, _) = CountingEngine::new();
        let mut controller = ViewportController::new(engine, 800, 600);

        controller.apply(Command::ZoomIn);
        assert_eq!(controller.viewport().zoom_factor(), ZOOM_STEP);

        controller.apply(Command::ZoomOut);
        assert_eq!(controller.viewport().zoom_factor(), 1.0);
    }

    #[test]
    fn resize_recreates_and_paints_the_new_extent() {
        let (engine, creates, _) = CountingEngine::new();
        let mut controller = ViewportController::new(engine, 10, 10);
        let mut surface = FrameSurface::new(10, 10);
        let _ = controller.redraw(&mut surface).unwrap();

        let must_arrange = controller.resize(3, 2);
        assert!(must_arrange);
        surface.resize(3, 2);
        let outcome = controller.redraw(&mut surface).unwrap();

        assert!(matches!(
            outcome,
            RedrawOutcome::Painted {
                sync: SyncOutcome::Recreated,
                ..
            }
        ));
        assert_eq!(creates.get(), 2);
        assert_eq!(surface.data().len(), 18);
        assert!(surface.data().iter().all(|&b| b == 2));
    }

    #[test]
    fn zero_dimension_resize_clamps_and_paints_when_the_surface_follows() {
        let (engine, _, _) = CountingEngine::new();
        let mut controller = ViewportController::new(engine, 8, 6);
        let mut surface = FrameSurface::new(8, 6);
        let _ = controller.redraw(&mut surface).unwrap();

        // A minimized window reports zero width; the viewport clamps to 1
        // and the surface adopts the clamped dimensions, as the windowed
        // host does.
        controller.resize(0, 6);
        surface.resize(controller.viewport().width(), controller.viewport().height());
        let outcome = controller.redraw(&mut surface).unwrap();

        assert!(matches!(
            outcome,
            RedrawOutcome::Painted {
                sync: SyncOutcome::Recreated,
                ..
            }
        ));
        assert_eq!(controller.viewport().width(), 1);
        assert_eq!(surface.data().len(), 18); // 1 * 6 * 3
    }

    #[test]
    fn size_mismatch_aborts_and_preserves_the_previous_frame() {
        let (engine, _, _) = CountingEngine::new();
        let mut controller = ViewportController::new(engine, 4, 4);
        let mut surface = FrameSurface::new(4, 4);
        let _ = controller.redraw(&mut surface).unwrap();
        let previous = surface.data().to_vec();

        // Viewport resized, surface deliberately not.
        controller.resize(8, 8);
        let result = controller.redraw(&mut surface);

        assert!(matches!(result, Err(RedrawError::Composite(_))));
        assert_eq!(surface.data(), &previous[..]);
    }

    #[test]
    fn engine_failure_aborts_the_redraw() {
        struct FailingEngine;

        impl FractalEngine for FailingEngine {
            type Handle = CountingHandle;

            fn create(&self, params: &EngineParams) -> Result<CountingHandle, EngineError> {
                Err(EngineError::InvalidDimensions {
                    width: params.width,
                    height: params.height,
                })
            }
        }

        let mut controller = ViewportController::new(FailingEngine, 4, 4);
        let mut surface = FrameSurface::new(4, 4);

        let result = controller.redraw(&mut surface);

        assert!(matches!(result, Err(RedrawError::Engine(_))));
        assert!(surface.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn end_to_end_full_grid_paint_with_demo_engine() {
        let mut controller = ViewportController::new(GradientEngine::new(), 800, 600);
        let mut surface = FrameSurface::new(800, 600);

        let outcome = controller.redraw(&mut surface).unwrap();

        assert!(matches!(outcome, RedrawOutcome::Painted { .. }));
        assert_eq!(surface.data().len(), 800 * 600 * 3);

        // The pattern varies horizontally, so a painted frame cannot be
        // uniform the way the zeroed starting surface was.
        let first = surface.pixel_at(0, 0);
        assert!((0..800_u32).any(|x| surface.pixel_at(x, 0) != first));
    }

    #[test]
    fn end_to_end_zoom_and_pan_never_degenerate() {
        let mut controller = ViewportController::new(GradientEngine::new(), 64, 48);
        let mut surface = FrameSurface::new(64, 48);
        let _ = controller.redraw(&mut surface).unwrap();

        for _ in 0..300 {
            controller.apply(Command::ZoomIn);
            assert!(controller.viewport().zoom_factor() > 0.0);
        }
        let outcome = controller.redraw(&mut surface).unwrap();

        assert!(matches!(outcome, RedrawOutcome::Painted { .. }));
    }
}
