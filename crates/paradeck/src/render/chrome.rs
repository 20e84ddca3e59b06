//! Stage chrome drawn over the slides: progress bar, slide counter and the floating
//! navigation buttons.

use eframe::egui::{self, FontId, Pos2, Sense};

use crate::nav::input::{Action, ClickRouter, ControlKind};
use crate::render::text;
use crate::render::transition::ease_in_out;
use crate::theme::Theme;

/// Seconds for the progress bar to reach a new target.
pub const PROGRESS_DURATION: f32 = 0.3;
/// Seconds for the floating buttons to fade in or out.
pub const FADE_DURATION: f32 = 0.3;

/// Displayed fill of the progress bar, easing toward the controller's fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    from: f32,
    to: f32,
    elapsed: f32,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            elapsed: PROGRESS_DURATION,
        }
    }
}

impl ProgressBar {
    /// Point the bar at a new fraction, starting from whatever is shown now.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.to).abs() < f32::EPSILON {
            return;
        }
        self.from = self.value();
        self.to = target;
        self.elapsed = 0.0;
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(PROGRESS_DURATION);
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= PROGRESS_DURATION
    }

    pub fn value(&self) -> f32 {
        let t = ease_in_out(self.elapsed / PROGRESS_DURATION);
        self.from + (self.to - self.from) * t
    }
}

/// Opacity of the floating buttons, fading toward 1 while hovered and 0 otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoverFade {
    opacity: f32,
}

impl HoverFade {
    pub fn tick(&mut self, hovered: bool, dt: f32) {
        let step = dt.max(0.0) / FADE_DURATION;
        self.opacity = if hovered {
            (self.opacity + step).min(1.0)
        } else {
            (self.opacity - step).max(0.0)
        };
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_settled(&self) -> bool {
        self.opacity == 0.0 || self.opacity == 1.0
    }
}

/// Thin bar along the top edge of the stage.
pub fn draw_progress(ui: &egui::Ui, stage: egui::Rect, fraction: f32, theme: &Theme, scale: f32) {
    let height = (4.0 * scale).max(2.0);
    let track = egui::Rect::from_min_size(stage.min, egui::vec2(stage.width(), height));
    ui.painter().rect_filled(track, 0.0, theme.surface);
    let fill = egui::Rect::from_min_size(
        stage.min,
        egui::vec2(stage.width() * fraction.clamp(0.0, 1.0), height),
    );
    if fill.width() > 0.0 {
        text::gradient_rect(ui.painter(), fill, theme.cyan, theme.purple, false);
    }
}

/// `k / N` in the bottom-left corner of the stage.
pub fn draw_counter(ui: &egui::Ui, stage: egui::Rect, label: &str, theme: &Theme, scale: f32) {
    let margin = 24.0 * scale;
    ui.painter().text(
        Pos2::new(stage.left() + margin, stage.bottom() - margin),
        egui::Align2::LEFT_BOTTOM,
        label,
        FontId::monospace(theme.small_size * scale),
        Theme::mix(theme.border, theme.muted, 0.3),
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    Previous,
    Next,
    Fullscreen,
}

impl Glyph {
    fn control(self) -> ControlKind {
        match self {
            Self::Previous => ControlKind::Previous,
            Self::Next => ControlKind::Next,
            Self::Fullscreen => ControlKind::Fullscreen,
        }
    }

    fn action(self) -> Action {
        match self {
            Self::Previous => Action::Retreat,
            Self::Next => Action::Advance,
            Self::Fullscreen => Action::ToggleFullscreen,
        }
    }
}

/// Rect covering the floating buttons; hovering it reveals them.
pub fn floating_area(stage: egui::Rect, scale: f32) -> egui::Rect {
    let margin = 24.0 * scale;
    let size = button_size(scale);
    let gap = 8.0 * scale;
    let width = size * 3.0 + gap * 2.0 + 8.0 * scale;
    egui::Rect::from_min_size(
        Pos2::new(
            stage.right() - margin - width,
            stage.bottom() - margin - size,
        ),
        egui::vec2(width, size),
    )
}

fn button_size(scale: f32) -> f32 {
    (56.0 * scale).max(28.0)
}

/// Previous, Next and Fullscreen buttons in the bottom-right corner of the stage.
///
/// Clicks are recorded as controls so they never also count as a surface click.
/// Returns the action of the clicked button, if any.
pub fn draw_floating_controls(
    ui: &egui::Ui,
    stage: egui::Rect,
    opacity: f32,
    theme: &Theme,
    scale: f32,
    id: egui::Id,
    clicks: &mut ClickRouter,
) -> Option<Action> {
    let area = floating_area(stage, scale);
    let size = button_size(scale);
    let gap = 8.0 * scale;
    let mut clicked = None;

    let mut x = area.left();
    for glyph in [Glyph::Previous, Glyph::Next, Glyph::Fullscreen] {
        if glyph == Glyph::Fullscreen {
            x += 8.0 * scale;
        }
        let rect = egui::Rect::from_min_size(Pos2::new(x, area.top()), egui::vec2(size, size));
        x += size + gap;

        let response = ui.interact(rect, id.with(glyph.control()), Sense::click());
        if clicks.record_control(glyph.control(), &response) {
            clicked = Some(glyph.action());
        }
        if opacity <= 0.0 {
            continue;
        }
        let fill = if response.hovered() {
            theme.border
        } else {
            theme.surface
        };
        ui.painter().circle_filled(
            rect.center(),
            size / 2.0,
            Theme::with_opacity(fill, opacity * 0.85),
        );
        draw_glyph(ui, glyph, rect, theme, opacity, scale);
    }
    clicked
}

fn draw_glyph(
    ui: &egui::Ui,
    glyph: Glyph,
    rect: egui::Rect,
    theme: &Theme,
    opacity: f32,
    scale: f32,
) {
    let c = rect.center();
    let s = rect.width() * 0.18;
    let stroke = egui::Stroke::new(
        (2.5 * scale).max(1.5),
        Theme::with_opacity(theme.heading_color, opacity),
    );
    let painter = ui.painter();
    match glyph {
        Glyph::Previous => {
            painter.line(
                vec![
                    c + egui::vec2(s * 0.5, -s),
                    c + egui::vec2(-s * 0.5, 0.0),
                    c + egui::vec2(s * 0.5, s),
                ],
                stroke,
            );
        }
        Glyph::Next => {
            painter.line(
                vec![
                    c + egui::vec2(-s * 0.5, -s),
                    c + egui::vec2(s * 0.5, 0.0),
                    c + egui::vec2(-s * 0.5, s),
                ],
                stroke,
            );
        }
        Glyph::Fullscreen => {
            let k = s * 0.5;
            for (sx, sy) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
                let corner = c + egui::vec2(sx * s, sy * s);
                painter.line(
                    vec![
                        corner - egui::vec2(0.0, sy * k),
                        corner,
                        corner - egui::vec2(sx * k, 0.0),
                    ],
                    stroke,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_reaches_target() {
        let mut bar = ProgressBar::default();
        assert_eq!(bar.value(), 0.0);
        bar.set_target(1.0 / 9.0);
        assert!(!bar.is_settled());
        assert_eq!(bar.value(), 0.0);
        bar.tick(PROGRESS_DURATION / 2.0);
        assert!(bar.value() > 0.0 && bar.value() < 1.0 / 9.0);
        bar.tick(PROGRESS_DURATION);
        assert!(bar.is_settled());
        assert!((bar.value() - 1.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_progress_bar_retarget_starts_from_shown_value() {
        let mut bar = ProgressBar::default();
        bar.set_target(1.0);
        bar.tick(PROGRESS_DURATION / 2.0);
        let shown = bar.value();
        bar.set_target(0.0);
        assert!((bar.value() - shown).abs() < 1e-6);
    }

    #[test]
    fn test_hover_fade() {
        let mut fade = HoverFade::default();
        assert_eq!(fade.opacity(), 0.0);
        fade.tick(true, FADE_DURATION / 2.0);
        assert!((fade.opacity() - 0.5).abs() < 1e-6);
        assert!(!fade.is_settled());
        fade.tick(true, FADE_DURATION);
        assert_eq!(fade.opacity(), 1.0);
        fade.tick(false, FADE_DURATION * 2.0);
        assert_eq!(fade.opacity(), 0.0);
        assert!(fade.is_settled());
    }

    #[test]
    fn test_glyph_actions() {
        assert_eq!(Glyph::Previous.action(), Action::Retreat);
        assert_eq!(Glyph::Next.action(), Action::Advance);
        assert_eq!(Glyph::Fullscreen.action(), Action::ToggleFullscreen);
    }
}
