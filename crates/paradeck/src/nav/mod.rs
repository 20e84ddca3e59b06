pub mod fullscreen;
pub mod input;

use fullscreen::{FullscreenError, FullscreenHost};
use input::Action;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    NotStarted,
    Started,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub phase: Phase,
    /// Only meaningful once started; then always within `0..slide_count`.
    pub active_index: usize,
}

/// Sole owner of the session's navigation state.
///
/// The slide index moves along a linear chain clamped at both ends. Fullscreen
/// requests go through the host and never affect navigation.
#[derive(Debug)]
pub struct NavigationController<F: FullscreenHost> {
    state: NavigationState,
    slide_count: usize,
    host: F,
    last_fullscreen_error: Option<FullscreenError>,
}

impl<F: FullscreenHost> NavigationController<F> {
    /// `slide_count` comes from a `SlideRegistry`, which guarantees it is non-zero.
    pub fn new(slide_count: usize, host: F) -> Self {
        debug_assert!(slide_count >= 1, "a deck has at least one slide");
        Self {
            state: NavigationState::default(),
            slide_count: slide_count.max(1),
            host,
            last_fullscreen_error: None,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn is_started(&self) -> bool {
        self.state.phase == Phase::Started
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn host_mut(&mut self) -> &mut F {
        &mut self.host
    }

    /// Fill fraction of the progress bar: `(active_index + 1) / slide_count`.
    pub fn progress_fraction(&self) -> f32 {
        (self.state.active_index + 1) as f32 / self.slide_count as f32
    }

    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.state.active_index + 1, self.slide_count)
    }

    /// Take the most recent fullscreen failure, if any.
    pub fn take_fullscreen_error(&mut self) -> Option<FullscreenError> {
        self.last_fullscreen_error.take()
    }

    pub fn start(&mut self) {
        self.state = NavigationState {
            phase: Phase::Started,
            active_index: 0,
        };
        tracing::info!(slides = self.slide_count, "presentation started");

        let result = self.host.request_fullscreen();
        self.note_fullscreen_result(result);
    }

    /// Move to the next slide. Returns whether the index changed.
    pub fn advance(&mut self) -> bool {
        if self.state.active_index + 1 >= self.slide_count {
            return false;
        }
        self.state.active_index += 1;
        tracing::debug!(index = self.state.active_index, "advance");
        true
    }

    /// Move to the previous slide. Returns whether the index changed.
    pub fn retreat(&mut self) -> bool {
        if self.state.active_index == 0 {
            return false;
        }
        self.state.active_index -= 1;
        tracing::debug!(index = self.state.active_index, "retreat");
        true
    }

    pub fn toggle_fullscreen(&mut self) {
        let result = if self.host.is_fullscreen() {
            self.host.exit_fullscreen()
        } else {
            self.host.request_fullscreen()
        };
        self.note_fullscreen_result(result);
    }

    /// Apply an input action. `Quit` is window management and is left to the caller.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Advance => self.advance(),
            Action::Retreat => self.retreat(),
            Action::ToggleFullscreen => {
                self.toggle_fullscreen();
                false
            }
            Action::Quit => false,
        }
    }

    fn note_fullscreen_result(&mut self, result: Result<(), FullscreenError>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "fullscreen request failed, staying windowed");
            self.last_fullscreen_error = Some(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// In-memory host that can be told to reject requests.
    #[derive(Debug, Default)]
    struct FakeHost {
        fullscreen: bool,
        reject: bool,
        requests: usize,
        exits: usize,
    }

    impl FullscreenHost for FakeHost {
        fn is_fullscreen(&self) -> bool {
            self.fullscreen
        }

        fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
            self.requests += 1;
            if self.reject {
                return Err(FullscreenError::Denied);
            }
            self.fullscreen = true;
            Ok(())
        }

        fn exit_fullscreen(&mut self) -> Result<(), FullscreenError> {
            self.exits += 1;
            self.fullscreen = false;
            Ok(())
        }
    }

    fn started(n: usize) -> NavigationController<FakeHost> {
        let mut nav = NavigationController::new(n, FakeHost::default());
        nav.start();
        nav
    }

    #[test]
    fn test_initial_state() {
        let nav = NavigationController::new(9, FakeHost::default());
        assert_eq!(
            nav.state(),
            NavigationState {
                phase: Phase::NotStarted,
                active_index: 0
            }
        );
        assert!(!nav.is_started());
        assert_eq!(nav.host.requests, 0);
    }

    #[test]
    fn test_start_requests_fullscreen() {
        let nav = started(9);
        assert!(nav.is_started());
        assert_eq!(nav.active_index(), 0);
        assert_eq!(nav.host.requests, 1);
        assert!(nav.host.is_fullscreen());
    }

    #[test]
    fn test_start_resets_index() {
        let mut nav = started(9);
        nav.advance();
        nav.advance();
        nav.advance();
        assert_eq!(nav.active_index(), 3);
        nav.start();
        assert!(nav.is_started());
        assert_eq!(nav.active_index(), 0);
    }

    #[test]
    fn test_start_survives_rejected_fullscreen() {
        let host = FakeHost {
            reject: true,
            ..Default::default()
        };
        let mut nav = NavigationController::new(9, host);
        nav.start();
        assert_eq!(
            nav.state(),
            NavigationState {
                phase: Phase::Started,
                active_index: 0
            }
        );
        assert!(!nav.host.is_fullscreen());
        assert_eq!(nav.take_fullscreen_error(), Some(FullscreenError::Denied));
        assert_eq!(nav.take_fullscreen_error(), None);
        // navigation still works
        assert!(nav.advance());
        assert_eq!(nav.active_index(), 1);
    }

    #[test]
    fn test_advance_to_end_of_nine() {
        let mut nav = started(9);
        for _ in 0..8 {
            assert!(nav.advance());
        }
        assert_eq!(nav.active_index(), 8);
        let before = nav.state();
        assert!(!nav.advance());
        assert_eq!(nav.state(), before);
    }

    #[test]
    fn test_retreat_to_start_of_nine() {
        let mut nav = started(9);
        for _ in 0..8 {
            nav.advance();
        }
        for _ in 0..8 {
            assert!(nav.retreat());
        }
        assert_eq!(nav.active_index(), 0);
        let before = nav.state();
        assert!(!nav.retreat());
        assert_eq!(nav.state(), before);
    }

    #[test]
    fn test_single_slide_deck_never_moves() {
        let mut nav = started(1);
        assert!(!nav.advance());
        assert!(!nav.retreat());
        assert_eq!(nav.active_index(), 0);
        assert_eq!(nav.progress_fraction(), 1.0);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    #[case(9)]
    #[case(40)]
    fn test_index_stays_in_bounds(#[case] n: usize) {
        let mut nav = started(n);
        // deterministic pseudo-random walk biased in both directions
        let mut seed: u32 = 0x2545_F491 ^ n as u32;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let before = nav.active_index();
            let moved = if seed % 3 == 0 {
                nav.retreat()
            } else {
                nav.advance()
            };
            let after = nav.active_index();
            assert!(after < n, "index {after} out of bounds for {n} slides");
            assert_eq!(moved, before != after);
            assert!(after.abs_diff(before) <= 1);
        }
    }

    #[rstest]
    #[case(1)]
    #[case(4)]
    #[case(9)]
    fn test_progress_fraction(#[case] n: usize) {
        let mut nav = started(n);
        for k in 0..n {
            assert_eq!(nav.active_index(), k);
            assert_eq!(nav.progress_fraction(), (k + 1) as f32 / n as f32);
            assert_eq!(nav.counter_label(), format!("{} / {}", k + 1, n));
            nav.advance();
        }
    }

    #[test]
    fn test_toggle_fullscreen_round_trip() {
        let mut nav = started(3);
        assert!(nav.host.is_fullscreen());
        nav.toggle_fullscreen();
        assert!(!nav.host.is_fullscreen());
        assert_eq!(nav.host.exits, 1);
        nav.toggle_fullscreen();
        assert!(nav.host.is_fullscreen());
        assert_eq!(nav.host.requests, 2);
    }

    #[test]
    fn test_toggle_failure_leaves_navigation_untouched() {
        let mut nav = started(5);
        nav.advance();
        nav.host_mut().fullscreen = false;
        nav.host_mut().reject = true;
        let before = nav.state();
        nav.toggle_fullscreen();
        assert_eq!(nav.state(), before);
        assert_eq!(nav.take_fullscreen_error(), Some(FullscreenError::Denied));
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let mut nav = started(3);
        assert!(nav.apply(Action::Advance));
        assert!(nav.apply(Action::Advance));
        assert!(!nav.apply(Action::Advance));
        assert!(nav.apply(Action::Retreat));
        assert!(!nav.apply(Action::Quit));
        assert_eq!(nav.active_index(), 1);
        assert!(!nav.apply(Action::ToggleFullscreen));
        assert!(!nav.host.is_fullscreen());
    }
}
