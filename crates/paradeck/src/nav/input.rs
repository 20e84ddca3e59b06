//! Input mapping for the presentation.
//!
//! Keyboard and click input is reduced to [`Action`]s by pure functions so the
//! bindings can be tested without a window. The shell only consults these while the
//! presentation is started.

use eframe::egui;

/// Something the controller (or the window) should do in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Advance,
    Retreat,
    ToggleFullscreen,
    Quit,
}

/// The keys the presentation listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowRight,
    ArrowLeft,
    Space,
    F,
    Q,
}

impl NavKey {
    pub fn from_egui(key: egui::Key) -> Option<Self> {
        match key {
            egui::Key::ArrowRight => Some(Self::ArrowRight),
            egui::Key::ArrowLeft => Some(Self::ArrowLeft),
            egui::Key::Space => Some(Self::Space),
            egui::Key::F => Some(Self::F),
            egui::Key::Q => Some(Self::Q),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
}

impl From<egui::Modifiers> for Modifiers {
    fn from(m: egui::Modifiers) -> Self {
        Self { shift: m.shift }
    }
}

/// Map a key press to an action.
///
/// Space is overloaded: unmodified it advances, with shift held it retreats.
pub fn map_key(key: NavKey, modifiers: Modifiers) -> Option<Action> {
    match key {
        NavKey::ArrowRight => Some(Action::Advance),
        NavKey::Space if modifiers.shift => Some(Action::Retreat),
        NavKey::Space => Some(Action::Advance),
        NavKey::ArrowLeft => Some(Action::Retreat),
        NavKey::F => Some(Action::ToggleFullscreen),
        NavKey::Q => Some(Action::Quit),
    }
}

/// Actions for every key press in this frame, paired with the position of their
/// event so they can be merged with clicks in dispatch order.
pub fn keyed_actions(events: &[egui::Event]) -> Vec<(usize, Action)> {
    events
        .iter()
        .enumerate()
        .filter_map(|(i, event)| match event {
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => NavKey::from_egui(*key)
                .and_then(|k| map_key(k, (*modifiers).into()))
                .map(|a| (i, a)),
            _ => None,
        })
        .collect()
}

/// Position of the primary-button release that completes a click this frame.
pub fn click_release_index(events: &[egui::Event]) -> Option<usize> {
    events.iter().rposition(|event| {
        matches!(
            event,
            egui::Event::PointerButton {
                button: egui::PointerButton::Primary,
                pressed: false,
                ..
            }
        )
    })
}

/// Merge key actions and the frame's click action into one sequence in event
/// order. A click whose release was not seen in the events goes last.
pub fn in_event_order(
    keys: Vec<(usize, Action)>,
    click: Option<Action>,
    click_at: Option<usize>,
) -> Vec<Action> {
    let mut ordered = keys;
    if let Some(action) = click {
        let at = click_at.unwrap_or(usize::MAX);
        let slot = ordered.partition_point(|(i, _)| *i < at);
        ordered.insert(slot, (at, action));
    }
    ordered.into_iter().map(|(_, a)| a).collect()
}

/// Interactive elements. A click on any of these never reaches the slide surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Start,
    Previous,
    Next,
    Fullscreen,
    PlayPause,
    Speed,
    DiagramElement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    SlideSurface,
    Control(ControlKind),
}

/// Per-frame collector of click targets.
#[derive(Debug, Default)]
pub struct ClickRouter {
    targets: Vec<ClickTarget>,
}

impl ClickRouter {
    pub fn record(&mut self, target: ClickTarget) {
        self.targets.push(target);
    }

    pub fn record_control(&mut self, kind: ControlKind, response: &egui::Response) -> bool {
        let clicked = response.clicked();
        if clicked {
            self.record(ClickTarget::Control(kind));
        }
        clicked
    }

    /// Resolve the frame's clicks and reset for the next frame.
    pub fn finish(&mut self) -> Option<Action> {
        let action = resolve_clicks(&self.targets);
        self.targets.clear();
        action
    }
}

/// A surface click advances, unless a control was hit in the same gesture.
pub fn resolve_clicks(targets: &[ClickTarget]) -> Option<Action> {
    let control_hit = targets
        .iter()
        .any(|t| matches!(t, ClickTarget::Control(_)));
    let surface_hit = targets.contains(&ClickTarget::SlideSurface);
    if surface_hit && !control_hit {
        Some(Action::Advance)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SHIFT: Modifiers = Modifiers { shift: true };
    const NONE: Modifiers = Modifiers { shift: false };

    #[rstest]
    #[case(NavKey::ArrowRight, NONE, Some(Action::Advance))]
    #[case(NavKey::ArrowRight, SHIFT, Some(Action::Advance))]
    #[case(NavKey::Space, NONE, Some(Action::Advance))]
    #[case(NavKey::Space, SHIFT, Some(Action::Retreat))]
    #[case(NavKey::ArrowLeft, NONE, Some(Action::Retreat))]
    #[case(NavKey::ArrowLeft, SHIFT, Some(Action::Retreat))]
    #[case(NavKey::F, NONE, Some(Action::ToggleFullscreen))]
    #[case(NavKey::Q, NONE, Some(Action::Quit))]
    fn test_map_key(
        #[case] key: NavKey,
        #[case] modifiers: Modifiers,
        #[case] expected: Option<Action>,
    ) {
        assert_eq!(map_key(key, modifiers), expected);
    }

    #[test]
    fn test_shift_space_matches_backward_key() {
        assert_eq!(
            map_key(NavKey::Space, SHIFT),
            map_key(NavKey::ArrowLeft, NONE)
        );
        assert_eq!(
            map_key(NavKey::Space, NONE),
            map_key(NavKey::ArrowRight, NONE)
        );
    }

    #[test]
    fn test_unbound_egui_keys_are_ignored() {
        assert_eq!(NavKey::from_egui(egui::Key::A), None);
        assert_eq!(NavKey::from_egui(egui::Key::Enter), None);
        assert_eq!(NavKey::from_egui(egui::Key::Space), Some(NavKey::Space));
    }

    fn key_event(key: egui::Key, pressed: bool, shift: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: egui::Modifiers {
                shift,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_key_actions_preserve_order() {
        let events = vec![
            key_event(egui::Key::Space, true, false),
            key_event(egui::Key::Space, false, false),
            key_event(egui::Key::Space, true, true),
            key_event(egui::Key::B, true, false),
            key_event(egui::Key::ArrowRight, true, false),
        ];
        let actions: Vec<Action> = keyed_actions(&events).into_iter().map(|(_, a)| a).collect();
        assert_eq!(
            actions,
            vec![Action::Advance, Action::Retreat, Action::Advance]
        );
    }

    fn release_event() -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(10.0, 10.0),
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::default(),
        }
    }

    #[test]
    fn test_keyed_actions_keep_event_positions() {
        let events = vec![
            key_event(egui::Key::ArrowRight, true, false),
            release_event(),
            key_event(egui::Key::Space, true, true),
        ];
        assert_eq!(
            keyed_actions(&events),
            vec![(0, Action::Advance), (2, Action::Retreat)]
        );
        assert_eq!(click_release_index(&events), Some(1));
    }

    #[test]
    fn test_press_is_not_a_release() {
        let events = vec![egui::Event::PointerButton {
            pos: egui::pos2(10.0, 10.0),
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::default(),
        }];
        assert_eq!(click_release_index(&events), None);
    }

    #[rstest]
    #[case(Some(1), vec![Action::Retreat, Action::Advance, Action::Quit])]
    #[case(Some(0), vec![Action::Advance, Action::Retreat, Action::Quit])]
    #[case(Some(5), vec![Action::Retreat, Action::Quit, Action::Advance])]
    #[case(None, vec![Action::Retreat, Action::Quit, Action::Advance])]
    fn test_click_merges_in_event_order(
        #[case] click_at: Option<usize>,
        #[case] expected: Vec<Action>,
    ) {
        let keys = vec![(0, Action::Retreat), (2, Action::Quit)];
        assert_eq!(in_event_order(keys, Some(Action::Advance), click_at), expected);
    }

    #[test]
    fn test_no_click_keeps_keys() {
        let keys = vec![(3, Action::Advance)];
        assert_eq!(in_event_order(keys, None, Some(1)), vec![Action::Advance]);
    }

    #[rstest]
    #[case(&[ClickTarget::SlideSurface], Some(Action::Advance))]
    #[case(&[ClickTarget::Control(ControlKind::PlayPause)], None)]
    #[case(&[ClickTarget::SlideSurface, ClickTarget::Control(ControlKind::Speed)], None)]
    #[case(&[ClickTarget::Control(ControlKind::Next), ClickTarget::SlideSurface], None)]
    #[case(&[ClickTarget::Control(ControlKind::Start)], None)]
    fn test_resolve_clicks(#[case] targets: &[ClickTarget], #[case] expected: Option<Action>) {
        assert_eq!(resolve_clicks(targets), expected);
    }

    #[test]
    fn test_router_resets_each_frame() {
        let mut router = ClickRouter::default();
        router.record(ClickTarget::Control(ControlKind::Fullscreen));
        router.record(ClickTarget::SlideSurface);
        assert_eq!(router.finish(), None);
        router.record(ClickTarget::SlideSurface);
        assert_eq!(router.finish(), Some(Action::Advance));
        // nothing recorded since the last finish
        assert_eq!(router.finish(), None);
    }
}
