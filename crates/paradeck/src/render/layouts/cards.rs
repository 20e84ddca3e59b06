use eframe::egui::{self, FontId, Pos2};

use crate::deck::content::FeatureCard;
use crate::render::SlideFrame;
use crate::render::layouts::frame;
use crate::render::text::{self, Align};
use crate::render::transition::ease_in_out;
use crate::theme::Theme;

/// Lead paragraph followed by a row of feature cards sliding in from the left.
pub fn render(
    ui: &egui::Ui,
    title: &str,
    subtitle: &str,
    lead: &str,
    cards: &[FeatureCard],
    theme: &Theme,
    frame: &SlideFrame,
) {
    let body = frame::draw(ui, title, Some(subtitle), theme, frame);
    let scale = frame.scale;
    let opacity = frame.opacity * frame::body_progress(frame);

    let lead_size = text::draw_text(
        ui,
        lead,
        body.min,
        FontId::proportional(theme.body_size * scale),
        Theme::with_opacity(theme.foreground, opacity),
        body.width(),
        Align::Left,
    );

    if cards.is_empty() {
        return;
    }
    let gap = 48.0 * scale;
    let top = body.top() + lead_size.y + 64.0 * scale;
    let count = cards.len() as f32;
    let card_w = (body.width() - gap * (count - 1.0)) / count;
    let card_h = 240.0 * scale;
    let accent = 8.0 * scale;
    let pad = 36.0 * scale;

    for (idx, card) in cards.iter().enumerate() {
        let p = ease_in_out(frame.appear(0.3 + idx as f32 * 0.2, 0.5));
        if p <= 0.0 {
            continue;
        }
        let a = opacity * p;
        let rect = egui::Rect::from_min_size(
            Pos2::new(
                body.left() + idx as f32 * (card_w + gap) - 20.0 * scale * (1.0 - p),
                top,
            ),
            egui::vec2(card_w, card_h),
        );
        ui.painter()
            .rect_filled(rect, 10.0 * scale, Theme::with_opacity(theme.surface, a * 0.5));
        ui.painter().rect_filled(
            egui::Rect::from_min_size(rect.min, egui::vec2(accent, card_h)),
            egui::CornerRadius {
                nw: (10.0 * scale) as u8,
                sw: (10.0 * scale) as u8,
                ne: 0,
                se: 0,
            },
            Theme::with_opacity(theme.purple, a),
        );

        let inner = egui::Rect::from_min_max(
            Pos2::new(rect.left() + accent + pad, rect.top() + pad),
            Pos2::new(rect.right() - pad, rect.bottom() - pad),
        );
        let heading = text::draw_text(
            ui,
            card.title,
            inner.min,
            FontId::proportional(theme.subtitle_size * scale),
            Theme::with_opacity(theme.heading_color, a),
            inner.width(),
            Align::Left,
        );
        text::draw_text(
            ui,
            card.description,
            Pos2::new(inner.left(), inner.top() + heading.y + 16.0 * scale),
            FontId::proportional(theme.small_size * scale),
            Theme::with_opacity(theme.muted, a),
            inner.width(),
            Align::Left,
        );
    }
}
