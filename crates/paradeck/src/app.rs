use std::time::Instant;

use eframe::egui::{self, FontId, Pos2, Sense};

use crate::deck::{SlideContent, SlideRegistry};
use crate::nav::NavigationController;
use crate::nav::fullscreen::{FullscreenPolicy, ViewportFullscreen};
use crate::nav::input::{self, Action, ClickRouter, ClickTarget, ControlKind};
use crate::render::chrome::{self, HoverFade, ProgressBar};
use crate::render::diagram::playback::{DiagramPlayback, Speed};
use crate::render::text::{self, Align};
use crate::render::transition::{SlideTransition, StageFrame};
use crate::render::{self, DiagramSlot, SlideFrame};
use crate::theme::Theme;

const TITLE: &str = "Computing Paradigms";

/// Slide age by which every entrance animation has finished.
const SETTLED_AGE: f32 = 10.0;

/// Launch options, resolved from CLI flags over the config file.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub allow_fullscreen: bool,
    pub reduced_motion: bool,
    pub speed: Speed,
}

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        let duration = 2.5;
        let fade_start = 2.0;
        if elapsed < fade_start {
            1.0
        } else if elapsed < duration {
            1.0 - (elapsed - fade_start) / (duration - fade_start)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= 2.5
    }
}

/// The slide currently on stage and the state that lives exactly as long as it does.
struct MountedSlide {
    index: usize,
    /// Seconds since mounting, for one-shot entrance animations.
    age: f32,
    playback: Option<DiagramPlayback>,
}

struct PresentationApp {
    deck: SlideRegistry,
    nav: NavigationController<ViewportFullscreen>,
    theme: Theme,
    settings: Settings,
    on_stage: Option<MountedSlide>,
    transition: Option<SlideTransition>,
    progress: ProgressBar,
    controls: HoverFade,
    clicks: ClickRouter,
    toast: Option<Toast>,
}

impl PresentationApp {
    fn new(deck: SlideRegistry, settings: Settings) -> Self {
        let host =
            ViewportFullscreen::new(FullscreenPolicy::from_allowed(settings.allow_fullscreen));
        Self {
            nav: NavigationController::new(deck.len(), host),
            deck,
            theme: Theme::default(),
            settings,
            on_stage: None,
            transition: None,
            progress: ProgressBar::default(),
            controls: HoverFade::default(),
            clicks: ClickRouter::default(),
            toast: None,
        }
    }

    fn mount(&self, index: usize) -> MountedSlide {
        let diagram = self.deck.get(index).and_then(|s| s.content.diagram());
        tracing::debug!(index, ?diagram, "mounting slide");
        let reduced = self.settings.reduced_motion;
        MountedSlide {
            index,
            age: if reduced { SETTLED_AGE } else { 0.0 },
            playback: diagram.map(|_| DiagramPlayback::new(reduced, self.settings.speed)),
        }
    }

    /// Apply an action and start (or retarget) a transition if the slide changed.
    fn handle_action(&mut self, action: Action) {
        let from = self.nav.active_index();
        if !self.nav.apply(action) {
            return;
        }
        tracing::trace!(?action, state = ?self.nav.state(), "action applied");
        let to = self.nav.active_index();
        match self.transition.as_mut() {
            Some(t) => t.retarget(to),
            None => self.transition = Some(SlideTransition::new(from, to)),
        }
    }

    fn stage_frame(&self) -> StageFrame {
        match &self.transition {
            Some(t) => t.frame(),
            None => StageFrame {
                slide: self.nav.active_index(),
                opacity: 1.0,
                offset_x: 0.0,
                interactive: true,
            },
        }
    }

    fn tick(&mut self, dt: f32) {
        if let Some(t) = self.transition.as_mut() {
            t.tick(dt);
            if t.is_complete() {
                self.transition = None;
            }
        }

        let visible = self.stage_frame().slide;
        if self.on_stage.as_ref().map(|m| m.index) != Some(visible) {
            self.on_stage = Some(self.mount(visible));
        }
        if let Some(mounted) = self.on_stage.as_mut() {
            mounted.age += dt;
            if let Some(playback) = mounted.playback.as_mut() {
                playback.tick(dt);
            }
        }

        self.progress.set_target(self.nav.progress_fraction());
        self.progress.tick(dt);
    }

    fn is_animating(&self) -> bool {
        if self.toast.is_some() {
            return true;
        }
        if !self.nav.is_started() {
            return false;
        }
        let slide_moving = self.on_stage.as_ref().is_some_and(|m| {
            m.age < SETTLED_AGE
                || m.playback.as_ref().is_some_and(|p| p.is_playing())
                || self
                    .deck
                    .get(m.index)
                    .is_some_and(|s| matches!(s.content, SlideContent::Closing { .. }))
        });
        self.transition.is_some()
            || !self.progress.is_settled()
            || !self.controls.is_settled()
            || slide_moving
    }

    /// Paint the stage and register its click targets. Returns the action of a
    /// clicked floating button, applied later with the frame's other input.
    fn draw_stage(&mut self, ui: &mut egui::Ui, rect: egui::Rect, dt: f32) -> Option<Action> {
        let stage = render::letterbox(rect);
        let scale = render::compute_scale(stage);
        ui.painter().rect_filled(stage, 0.0, self.theme.background);

        // registered first so every control drawn later sits above it
        let surface = ui.interact(stage, ui.id().with("slide_surface"), Sense::click());
        if surface.clicked() {
            self.clicks.record(ClickTarget::SlideSurface);
        }

        let frame = self.stage_frame();
        let mut slide_ui = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(stage)
                .id_salt("stage_clip"),
        );
        slide_ui.set_clip_rect(stage);

        if let (Some(slide), Some(mounted)) = (self.deck.get(frame.slide), self.on_stage.as_mut())
        {
            let slide_frame = SlideFrame {
                rect: stage.translate(egui::vec2(frame.offset_x * scale, 0.0)),
                opacity: frame.opacity,
                scale,
                age: mounted.age,
            };
            let id = ui.id().with(("diagram", mounted.index));
            let clicks = &mut self.clicks;
            let diagram = mounted.playback.as_mut().map(|playback| DiagramSlot {
                playback,
                interactive: frame.interactive,
                clicks,
                id,
            });
            render::render_slide(&slide_ui, slide, &self.theme, &slide_frame, diagram);
        }

        chrome::draw_progress(ui, stage, self.progress.value(), &self.theme, scale);
        chrome::draw_counter(ui, stage, &self.nav.counter_label(), &self.theme, scale);

        let reveal = chrome::floating_area(stage, scale).expand(24.0 * scale);
        let hovered = ui
            .ctx()
            .pointer_hover_pos()
            .is_some_and(|pos| reveal.contains(pos));
        self.controls.tick(hovered, dt);
        let id = ui.id().with("floating_controls");
        chrome::draw_floating_controls(
            ui,
            stage,
            self.controls.opacity(),
            &self.theme,
            scale,
            id,
            &mut self.clicks,
        )
    }

    fn draw_start_screen(&mut self, ui: &egui::Ui, rect: egui::Rect) {
        let theme = &self.theme;
        let s = (rect.height() / 800.0).clamp(0.8, 1.6);
        ui.painter().rect_filled(rect, 0.0, theme.background);

        let card = egui::Rect::from_center_size(rect.center(), egui::vec2(448.0, 420.0) * s);
        ui.painter().rect(
            card,
            16.0 * s,
            Theme::mix(theme.background, theme.surface, 0.5),
            egui::Stroke::new(1.0, Theme::mix(theme.background, theme.border, 0.6)),
            egui::StrokeKind::Inside,
        );
        let inner = card.shrink(32.0 * s);
        let mut y = inner.top();

        let title = text::draw_text(
            ui,
            TITLE,
            Pos2::new(inner.center().x, y),
            FontId::proportional(30.0 * s),
            theme.heading_color,
            inner.width(),
            Align::Center,
        );
        y += title.y + 8.0 * s;
        let sub = text::draw_text(
            ui,
            "Interactive Presentation",
            Pos2::new(inner.center().x, y),
            FontId::proportional(16.0 * s),
            theme.muted,
            inner.width(),
            Align::Center,
        );
        y += sub.y + 32.0 * s;

        let help = egui::Rect::from_min_size(
            Pos2::new(inner.left(), y),
            egui::vec2(inner.width(), 124.0 * s),
        );
        draw_controls_card(ui, help, theme, s);
        y = help.bottom() + 32.0 * s;

        let button = egui::Rect::from_min_size(
            Pos2::new(inner.left(), y),
            egui::vec2(inner.width(), 60.0 * s),
        );
        let response = ui.interact(button, ui.id().with("start_button"), Sense::click());
        let hovered = response.hovered();
        let shown = if hovered {
            egui::Rect::from_center_size(button.center(), button.size() * 1.05)
        } else {
            button
        };
        let (left, right) = if hovered {
            (theme.cyan, egui::Color32::from_rgb(0x3B, 0x82, 0xF6))
        } else {
            (
                egui::Color32::from_rgb(0x08, 0x91, 0xB2),
                egui::Color32::from_rgb(0x25, 0x63, 0xEB),
            )
        };
        text::gradient_rect(ui.painter(), shown, left, right, false);

        let label = ui.painter().layout_no_wrap(
            "Start Presentation".to_string(),
            FontId::proportional(20.0 * s),
            egui::Color32::WHITE,
        );
        let icon = 14.0 * s;
        let gap = 12.0 * s;
        let total = icon + gap + label.rect.width();
        let x = shown.center().x - total / 2.0;
        let c = Pos2::new(x + icon / 2.0, shown.center().y);
        ui.painter().add(egui::Shape::convex_polygon(
            vec![
                c + egui::vec2(-icon * 0.45, -icon * 0.6),
                c + egui::vec2(icon * 0.55, 0.0),
                c + egui::vec2(-icon * 0.45, icon * 0.6),
            ],
            egui::Color32::WHITE,
            egui::Stroke::NONE,
        ));
        ui.painter().galley(
            Pos2::new(x + icon + gap, shown.center().y - label.rect.height() / 2.0),
            label,
            egui::Color32::WHITE,
        );

        if self.clicks.record_control(ControlKind::Start, &response) {
            self.nav.start();
        }
    }

    fn draw_toast(&self, ui: &egui::Ui, rect: egui::Rect) {
        let Some(toast) = &self.toast else {
            return;
        };
        let opacity = toast.opacity();
        if opacity <= 0.0 {
            return;
        }
        let scale = render::compute_scale(rect).max(0.6);
        let toast_color = Theme::with_opacity(self.theme.foreground, opacity * 0.9);
        let toast_bg = Theme::with_opacity(self.theme.surface, opacity * 0.9);
        let galley = ui.painter().layout_no_wrap(
            toast.message.clone(),
            FontId::proportional(20.0 * scale),
            toast_color,
        );
        let padding = 16.0 * scale;
        let toast_rect = egui::Rect::from_min_size(
            egui::pos2(
                rect.center().x - galley.rect.width() / 2.0 - padding,
                rect.bottom() - 120.0 * scale,
            ),
            egui::vec2(
                galley.rect.width() + padding * 2.0,
                galley.rect.height() + padding * 2.0,
            ),
        );
        ui.painter().rect_filled(toast_rect, 8.0 * scale, toast_bg);
        let text_pos = egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
        ui.painter().galley(text_pos, galley, toast_color);
    }
}

/// Key reference on the start screen.
fn draw_controls_card(ui: &egui::Ui, rect: egui::Rect, theme: &Theme, s: f32) {
    let painter = ui.painter();
    painter.rect_filled(rect, 8.0 * s, theme.surface);
    let inner = rect.shrink(16.0 * s);
    let font = FontId::proportional(14.0 * s);

    painter.text(
        inner.left_top(),
        egui::Align2::LEFT_TOP,
        "Controls:",
        font.clone(),
        theme.heading_color,
    );
    let rule_y = inner.top() + 26.0 * s;
    painter.hline(
        inner.x_range(),
        rule_y,
        egui::Stroke::new(1.0, theme.border),
    );

    let rows: [(&str, [&str; 2]); 2] = [
        ("Next", ["Space", "\u{2192}"]),
        ("Prev", ["Shift+Space", "\u{2190}"]),
    ];
    let mut y = rule_y + 18.0 * s;
    for (name, keys) in rows {
        painter.text(
            Pos2::new(inner.left(), y),
            egui::Align2::LEFT_CENTER,
            name,
            font.clone(),
            theme.foreground,
        );
        // laid out right to left: last key, "or", first key
        let mut x = inner.right();
        x = draw_kbd(painter, keys[1], Pos2::new(x, y), theme, s) - 8.0 * s;
        let or = painter.text(
            Pos2::new(x, y),
            egui::Align2::RIGHT_CENTER,
            "or",
            font.clone(),
            theme.muted,
        );
        x = or.left() - 8.0 * s;
        draw_kbd(painter, keys[0], Pos2::new(x, y), theme, s);
        y += 30.0 * s;
    }
}

/// Key cap whose right edge sits at `right_center`. Returns its left edge.
fn draw_kbd(painter: &egui::Painter, label: &str, right_center: Pos2, theme: &Theme, s: f32) -> f32 {
    let galley = painter.layout_no_wrap(
        label.to_string(),
        FontId::monospace(13.0 * s),
        theme.heading_color,
    );
    let size = galley.rect.size() + egui::vec2(16.0, 6.0) * s;
    let rect = egui::Rect::from_min_size(
        Pos2::new(right_center.x - size.x, right_center.y - size.y / 2.0),
        size,
    );
    painter.rect_filled(rect, 4.0 * s, theme.border);
    painter.galley(
        rect.center() - galley.rect.size() / 2.0,
        galley,
        theme.heading_color,
    );
    rect.left()
}

impl PresentationApp {
    /// Run one frame against `ctx`.
    fn show(&mut self, ctx: &egui::Context) {
        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        self.nav.host_mut().sync(ctx);

        // keys are only bound once the presentation has started
        let (keys, click_at) = if self.nav.is_started() {
            ctx.input(|i| {
                (
                    input::keyed_actions(&i.events),
                    input::click_release_index(&i.events),
                )
            })
        } else {
            (Vec::new(), None)
        };

        if self.nav.is_started() {
            self.tick(dt);
        }
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let pressed = egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(self.theme.backdrop)
                    .inner_margin(0.0),
            )
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let pressed = if self.nav.is_started() {
                    self.draw_stage(ui, rect, dt)
                } else {
                    self.draw_start_screen(ui, rect);
                    None
                };
                self.draw_toast(ui, rect);
                pressed
            })
            .inner;

        // a pressed button suppresses the surface click, so at most one is set
        let surface = self.clicks.finish();
        let click = pressed.or(surface);

        // Viewport commands go out after the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        for action in input::in_event_order(keys, click, click_at) {
            if action == Action::Quit {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            } else {
                self.handle_action(action);
            }
        }
        if let Some(err) = self.nav.take_fullscreen_error() {
            self.toast = Some(Toast::new(format!("Fullscreen unavailable: {err}")));
        }
        self.nav.host_mut().flush(ctx);

        if self.is_animating() {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for PresentationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

pub fn run(settings: Settings) -> anyhow::Result<()> {
    let deck = SlideRegistry::builtin()?;

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1280.0, 720.0])
        .with_min_inner_size([640.0, 360.0])
        .with_title(TITLE);
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let app = PresentationApp::new(deck, settings);
    tracing::debug!(slides = app.nav.slide_count(), ?settings, "launching presentation");
    eframe::run_native(TITLE, options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(reduced_motion: bool) -> PresentationApp {
        PresentationApp::new(
            SlideRegistry::builtin().unwrap(),
            Settings {
                allow_fullscreen: true,
                reduced_motion,
                speed: Speed::Normal,
            },
        )
    }

    fn started(reduced_motion: bool) -> PresentationApp {
        let mut app = app(reduced_motion);
        app.nav.start();
        app.tick(0.0);
        app
    }

    #[test]
    fn test_start_mounts_first_slide() {
        let app = started(false);
        let mounted = app.on_stage.as_ref().unwrap();
        assert_eq!(mounted.index, 0);
        assert!(mounted.playback.is_none());
        assert!(app.transition.is_none());
    }

    #[test]
    fn test_advance_runs_exit_then_enter() {
        let mut app = started(false);
        app.handle_action(Action::Advance);
        assert_eq!(app.nav.active_index(), 1);
        // old slide still on stage while it leaves
        app.tick(0.1);
        assert_eq!(app.on_stage.as_ref().unwrap().index, 0);
        assert!(!app.stage_frame().interactive);

        app.tick(0.5);
        let mounted = app.on_stage.as_ref().unwrap();
        assert_eq!(mounted.index, 1);
        assert!(mounted.playback.is_some());
        assert!(app.stage_frame().interactive);
    }

    #[test]
    fn test_boundary_actions_do_not_transition() {
        let mut app = started(false);
        app.handle_action(Action::Retreat);
        assert!(app.transition.is_none());
        assert_eq!(app.nav.active_index(), 0);
    }

    #[test]
    fn test_mid_transition_change_retargets() {
        let mut app = started(false);
        app.handle_action(Action::Advance);
        app.tick(0.1);
        app.handle_action(Action::Advance);
        let t = app.transition.as_ref().unwrap();
        assert_eq!((t.from, t.to), (0, 2));
        for _ in 0..20 {
            app.tick(0.1);
        }
        assert!(app.transition.is_none());
        assert_eq!(app.on_stage.as_ref().unwrap().index, 2);
    }

    #[test]
    fn test_playback_is_recreated_per_mount() {
        let mut app = started(false);
        app.handle_action(Action::Advance);
        for _ in 0..20 {
            app.tick(0.1);
        }
        let playback = app.on_stage.as_mut().unwrap().playback.as_mut().unwrap();
        playback.set_speed(Speed::Double);

        app.handle_action(Action::Advance);
        for _ in 0..20 {
            app.tick(0.1);
        }
        assert_eq!(app.on_stage.as_ref().unwrap().index, 2);
        app.handle_action(Action::Retreat);
        for _ in 0..20 {
            app.tick(0.1);
        }
        let mounted = app.on_stage.as_ref().unwrap();
        assert_eq!(mounted.index, 1);
        assert_eq!(mounted.playback.as_ref().unwrap().speed(), Speed::Normal);
    }

    #[test]
    fn test_reduced_motion_mounts_settled_and_paused() {
        let mut app = started(true);
        app.handle_action(Action::Advance);
        for _ in 0..20 {
            app.tick(0.1);
        }
        let mounted = app.on_stage.as_ref().unwrap();
        assert!(mounted.age >= SETTLED_AGE);
        assert!(!mounted.playback.as_ref().unwrap().is_playing());
    }

    #[test]
    fn test_progress_follows_controller() {
        let mut app = started(false);
        app.handle_action(Action::Advance);
        for _ in 0..10 {
            app.tick(0.1);
        }
        assert!((app.progress.value() - app.nav.progress_fraction()).abs() < 1e-6);
    }

    #[test]
    fn test_windowed_start_reports_error() {
        let mut app = PresentationApp::new(
            SlideRegistry::builtin().unwrap(),
            Settings {
                allow_fullscreen: false,
                reduced_motion: false,
                speed: Speed::Normal,
            },
        );
        app.nav.start();
        assert!(app.nav.is_started());
        assert!(app.nav.take_fullscreen_error().is_some());
    }

    fn screen() -> egui::Rect {
        egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(1280.0, 720.0))
    }

    fn stage() -> egui::Rect {
        render::letterbox(screen())
    }

    fn run_frame(app: &mut PresentationApp, ctx: &egui::Context, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            screen_rect: Some(screen()),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.show(ctx));
    }

    fn button(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    /// Hover, press and release at `pos`. `after` is delivered in the release frame.
    fn click(app: &mut PresentationApp, ctx: &egui::Context, pos: Pos2, after: Vec<egui::Event>) {
        run_frame(app, ctx, vec![egui::Event::PointerMoved(pos)]);
        run_frame(app, ctx, vec![button(pos, true)]);
        let mut events = vec![button(pos, false)];
        events.extend(after);
        run_frame(app, ctx, events);
    }

    /// Centre of the floating button at `slot` (0 previous, 1 next).
    fn floating_button(slot: usize) -> Pos2 {
        let stage = stage();
        let scale = render::compute_scale(stage);
        let area = chrome::floating_area(stage, scale);
        let size = area.height();
        let x = area.left() + slot as f32 * (size + 8.0 * scale) + size / 2.0;
        Pos2::new(x, area.center().y)
    }

    fn live() -> (PresentationApp, egui::Context) {
        let mut app = started(false);
        let ctx = egui::Context::default();
        run_frame(&mut app, &ctx, Vec::new());
        (app, ctx)
    }

    #[test]
    fn test_surface_click_advances_once() {
        let (mut app, ctx) = live();
        click(&mut app, &ctx, stage().center(), Vec::new());
        assert_eq!(app.nav.active_index(), 1);
        run_frame(&mut app, &ctx, Vec::new());
        assert_eq!(app.nav.active_index(), 1);
    }

    #[test]
    fn test_floating_buttons_sit_above_the_surface() {
        let (mut app, ctx) = live();
        click(&mut app, &ctx, floating_button(1), Vec::new());
        assert_eq!(app.nav.active_index(), 1);
        click(&mut app, &ctx, floating_button(1), Vec::new());
        assert_eq!(app.nav.active_index(), 2);
        click(&mut app, &ctx, floating_button(0), Vec::new());
        assert_eq!(app.nav.active_index(), 1);
    }

    #[test]
    fn test_keys_ignored_before_start() {
        let mut app = app(false);
        let ctx = egui::Context::default();
        let right = egui::Event::Key {
            key: egui::Key::ArrowRight,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::default(),
        };
        run_frame(&mut app, &ctx, vec![right]);
        assert!(!app.nav.is_started());
        assert_eq!(app.nav.active_index(), 0);
    }

    #[test]
    fn test_click_and_key_apply_in_event_order() {
        let (mut app, ctx) = live();
        for _ in 0..8 {
            app.handle_action(Action::Advance);
        }
        for _ in 0..30 {
            app.tick(0.1);
        }
        assert_eq!(app.nav.active_index(), 8);

        // the click lands first and is a no-op at the end, then shift+space retreats
        let shift_space = egui::Event::Key {
            key: egui::Key::Space,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::SHIFT,
        };
        click(&mut app, &ctx, stage().center(), vec![shift_space]);
        assert_eq!(app.nav.active_index(), 7);
    }
}
