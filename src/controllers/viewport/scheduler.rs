#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameState {
    Idle,
    FrameScheduled,
}

/// Coalesces redraw requests into at most one engine-sync + paint cycle per
/// display frame.
///
/// Requests arriving while a frame is already scheduled collapse into it; the
/// cycle that eventually runs reads the viewport as it stands at the frame
/// boundary, so stale intermediate states are implicitly discarded. There is
/// no cancellation token because nothing runs in parallel.
#[derive(Debug)]
pub struct RenderScheduler {
    state: FrameState,
}

impl RenderScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FrameState::Idle,
        }
    }

    /// Records that the viewport changed since the last paint.
    ///
    /// Returns `true` when the caller must arrange one display-frame
    /// callback; `false` when a frame is already scheduled and the request
    /// coalesced into it.
    pub fn request_redraw(&mut self) -> bool {
        match self.state {
            FrameState::Idle => {
                self.state = FrameState::FrameScheduled;
                true
            }
            FrameState::FrameScheduled => false,
        }
    }

    /// Marks the frame boundary, returning whether at least one request
    /// occurred since the last paint. Always leaves the scheduler idle.
    pub fn begin_frame(&mut self) -> bool {
        let was_scheduled = self.state == FrameState::FrameScheduled;
        self.state = FrameState::Idle;
        was_scheduled
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.state == FrameState::FrameScheduled
    }
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RenderScheduler;

    #[test]
    fn first_request_schedules_a_frame() {
        let mut scheduler = RenderScheduler::new();

        assert!(scheduler.request_redraw());
        assert!(scheduler.is_scheduled());
    }

    #[test]
    fn requests_before_the_frame_boundary_coalesce() {
        let mut scheduler = RenderScheduler::new();

        assert!(scheduler.request_redraw());
        for _ in 0..50 {
            assert!(!scheduler.request_redraw());
        }
        assert!(scheduler.is_scheduled());
    }

    #[test]
    fn begin_frame_reports_pending_and_returns_to_idle() {
        let mut scheduler = RenderScheduler::new();
        let _ = scheduler.request_redraw();

        assert!(scheduler.begin_frame());
        assert!(!scheduler.is_scheduled());
    }

    #[test]
    fn begin_frame_without_requests_reports_nothing_pending() {
        let mut scheduler = RenderScheduler::new();

        assert!(!scheduler.begin_frame());
    }

    #[test]
    fn request_after_frame_boundary_schedules_again() {
        let mut scheduler = RenderScheduler::new();
        let _ = scheduler.request_redraw();
        let _ = scheduler.begin_frame();

        assert!(scheduler.request_redraw());
    }

    #[test]
    fn n_requests_in_one_interval_yield_exactly_one_frame() {
        let mut scheduler = RenderScheduler::new();
        let mut callbacks_arranged = 0;

        for _ in 0..100 {
            if scheduler.request_redraw() {
                callbacks_arranged += 1;
            }
        }
        assert_eq!(callbacks_arranged, 1);

        let mut frames_run = 0;
        if scheduler.begin_frame() {
            frames_run += 1;
        }
        if scheduler.begin_frame() {
            frames_run += 1;
        }
        assert_eq!(frames_run, 1);
    }
}
