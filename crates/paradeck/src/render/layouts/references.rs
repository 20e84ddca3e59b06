use eframe::egui::{self, FontId, Pos2};

use crate::render::SlideFrame;
use crate::render::layouts::frame;
use crate::render::text::{self, Align};
use crate::render::transition::ease_in_out;
use crate::theme::Theme;

/// Numbered reference list; entries slide in from the right one by one.
pub fn render(ui: &egui::Ui, title: &str, entries: &[&str], theme: &Theme, frame: &SlideFrame) {
    let body = frame::draw(ui, title, None, theme, frame);
    let scale = frame.scale;
    let opacity = frame.opacity;
    let pad = 28.0 * scale;
    let gap = 20.0 * scale;
    let marker_w = 72.0 * scale;
    let pointer = ui.ctx().pointer_hover_pos();

    let mut y = body.top();
    for (idx, entry) in entries.iter().enumerate() {
        let p = ease_in_out(frame.appear(0.2 + idx as f32 * 0.1, 0.4));
        if p <= 0.0 {
            continue;
        }
        let a = opacity * p;
        let left = body.left() + 20.0 * scale * (1.0 - p);
        let text_w = body.width() - marker_w - pad * 2.0;

        let galley = ui.painter().layout(
            entry.to_string(),
            FontId::proportional(theme.body_size * scale),
            Theme::with_opacity(theme.foreground, a),
            text_w,
        );
        let rect = egui::Rect::from_min_size(
            Pos2::new(left, y),
            egui::vec2(body.width(), galley.rect.height() + pad * 2.0),
        );
        let hovered = pointer.is_some_and(|pos| rect.contains(pos));
        ui.painter().rect_filled(
            rect,
            6.0 * scale,
            Theme::with_opacity(theme.surface, a * if hovered { 0.6 } else { 0.3 }),
        );
        text::draw_text(
            ui,
            &format!("[{}]", idx + 1),
            Pos2::new(rect.left() + pad, rect.top() + pad),
            FontId::monospace(theme.body_size * scale),
            Theme::with_opacity(theme.cyan, a),
            marker_w,
            Align::Left,
        );
        ui.painter().galley(
            Pos2::new(rect.left() + pad + marker_w, rect.top() + pad),
            galley,
            egui::Color32::TRANSPARENT,
        );
        y = rect.bottom() + gap;
    }
}
