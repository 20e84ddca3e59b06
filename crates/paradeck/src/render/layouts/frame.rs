use eframe::egui::{self, FontId, Pos2};

use crate::render::SlideFrame;
use crate::render::text::{self, Align};
use crate::render::transition::ease_in_out;
use crate::theme::Theme;

/// Shared chrome of a content slide: background glows, gradient title and an optional
/// subtitle with an accent bar. Returns the rect left for the slide body.
pub fn draw(
    ui: &egui::Ui,
    title: &str,
    subtitle: Option<&str>,
    theme: &Theme,
    frame: &SlideFrame,
) -> egui::Rect {
    let rect = frame.rect;
    let scale = frame.scale;
    let opacity = frame.opacity;
    let padding = 96.0 * scale;
    let painter = ui.painter();

    text::soft_glow(
        painter,
        Pos2::new(rect.right() - 120.0 * scale, rect.top() + 60.0 * scale),
        300.0 * scale,
        theme.cyan,
        opacity,
    );
    text::soft_glow(
        painter,
        Pos2::new(rect.left() + 120.0 * scale, rect.bottom() - 60.0 * scale),
        300.0 * scale,
        theme.purple,
        opacity,
    );

    let content = rect.shrink(padding);
    let heading_in = ease_in_out(frame.appear(0.0, 0.6));
    let heading_opacity = opacity * heading_in;
    let mut y = content.top() - 20.0 * scale * (1.0 - heading_in);

    let size = text::draw_gradient(
        ui,
        title,
        Pos2::new(content.left(), y),
        theme.h1_size * scale,
        theme.cyan,
        theme.purple,
        heading_opacity,
        content.width(),
        Align::Left,
    );
    y += size.y + 12.0 * scale;

    if let Some(subtitle) = subtitle {
        let bar_width = 6.0 * scale;
        let gap = 24.0 * scale;
        let sub = text::draw_text(
            ui,
            subtitle,
            Pos2::new(content.left() + bar_width + gap, y),
            FontId::proportional(theme.subtitle_size * scale),
            Theme::with_opacity(theme.muted, heading_opacity),
            content.width() - bar_width - gap,
            Align::Left,
        );
        let bar = egui::Rect::from_min_size(
            Pos2::new(content.left(), y),
            egui::vec2(bar_width, sub.y),
        );
        ui.painter()
            .rect_filled(bar, 0.0, Theme::with_opacity(theme.cyan, heading_opacity));
        y += sub.y;
    }

    y += 48.0 * scale;
    egui::Rect::from_min_max(Pos2::new(content.left(), y), content.max)
}

/// Body entrance: fades in and grows from 98% after the heading.
pub fn body_progress(frame: &SlideFrame) -> f32 {
    ease_in_out(frame.appear(0.2, 0.6))
}
