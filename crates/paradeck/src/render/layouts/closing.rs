use eframe::egui::{self, FontId, Pos2};

use crate::render::SlideFrame;
use crate::render::diagram::pulse;
use crate::render::text::{self, Align};
use crate::render::transition::{ease_in_out, ease_spring};
use crate::theme::Theme;

/// Final slide: a glowing headline that springs in, then the prompt for questions.
pub fn render(ui: &egui::Ui, headline: &str, prompt: &str, theme: &Theme, frame: &SlideFrame) {
    let rect = frame.rect;
    let scale = frame.scale;
    let opacity = frame.opacity;
    let center = rect.center();

    // keyed on slide age, not a playback clock
    let breath = pulse(frame.age);
    text::soft_glow(
        ui.painter(),
        center - egui::vec2(120.0 * scale, 0.0),
        420.0 * scale,
        theme.cyan,
        opacity * 0.3 * breath,
    );
    text::soft_glow(
        ui.painter(),
        center + egui::vec2(120.0 * scale, 0.0),
        420.0 * scale,
        theme.purple,
        opacity * 0.3 * breath,
    );

    let t = frame.appear(0.0, 0.8);
    let grow = 0.5 + 0.5 * ease_spring(t);
    let headline_opacity = opacity * ease_in_out(t);
    let size = theme.hero_size * scale * grow;
    let hero = text::draw_gradient(
        ui,
        headline,
        Pos2::new(center.x, center.y - size * 0.75),
        size,
        theme.cyan,
        theme.purple,
        headline_opacity,
        rect.width(),
        Align::Center,
    );

    let p = ease_in_out(frame.appear(0.5, 0.5));
    if p <= 0.0 {
        return;
    }
    text::draw_text(
        ui,
        prompt,
        Pos2::new(
            center.x,
            center.y - size * 0.75 + hero.y + 32.0 * scale + 50.0 * scale * (1.0 - p),
        ),
        FontId::proportional(theme.subtitle_size * scale),
        Theme::with_opacity(theme.muted, opacity * p),
        rect.width(),
        Align::Center,
    );
}
