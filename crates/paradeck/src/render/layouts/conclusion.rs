use eframe::egui::{self, FontFamily, FontId, Pos2};

use crate::render::SlideFrame;
use crate::render::layouts::frame;
use crate::render::text;
use crate::theme::Theme;

/// Closing argument: paragraphs with the paradigm names highlighted and a quote box
/// between the first paragraph and the rest.
pub fn render(
    ui: &egui::Ui,
    title: &str,
    paragraphs: &[&str],
    quote: &str,
    theme: &Theme,
    frame: &SlideFrame,
) {
    let body = frame::draw(ui, title, None, theme, frame);
    let scale = frame.scale;
    let opacity = frame.opacity * frame::body_progress(frame);
    if opacity <= 0.0 {
        return;
    }

    let width = body.width().min(1100.0 * scale);
    let size = theme.subtitle_size * scale;
    let gap = 40.0 * scale;
    let base = Theme::with_opacity(theme.foreground, opacity);
    let highlights = [
        ("HPC", Theme::with_opacity(theme.cyan, opacity)),
        ("Grid", Theme::with_opacity(theme.purple, opacity)),
        ("Cluster", Theme::with_opacity(theme.cyan, opacity)),
    ];

    let mut y = body.top();
    for (idx, paragraph) in paragraphs.iter().enumerate() {
        let used = text::draw_highlighted(
            ui,
            paragraph,
            Pos2::new(body.left(), y),
            size,
            base,
            &highlights,
            width,
        );
        y += used.y + gap;
        if idx == 0 {
            y += draw_quote(ui, quote, Pos2::new(body.left(), y), width, theme, opacity, scale);
            y += gap;
        }
    }
    if paragraphs.is_empty() {
        draw_quote(ui, quote, body.min, width, theme, opacity, scale);
    }
}

/// Quote box with a green accent bar. Returns its height.
fn draw_quote(
    ui: &egui::Ui,
    quote: &str,
    pos: Pos2,
    width: f32,
    theme: &Theme,
    opacity: f32,
    scale: f32,
) -> f32 {
    let pad = 36.0 * scale;
    let bar = 8.0 * scale;
    let mut job = egui::text::LayoutJob::single_section(
        quote.to_string(),
        egui::text::TextFormat {
            font_id: FontId::new(theme.subtitle_size * scale, FontFamily::Proportional),
            color: Theme::with_opacity(theme.heading_color, opacity),
            italics: true,
            ..Default::default()
        },
    );
    job.wrap.max_width = width - bar - pad * 2.0;
    let galley = ui.painter().layout_job(job);
    let height = galley.rect.height() + pad * 2.0;
    let rect = egui::Rect::from_min_size(pos, egui::vec2(width, height));
    ui.painter()
        .rect_filled(rect, 10.0 * scale, Theme::with_opacity(theme.surface, opacity));
    ui.painter().rect_filled(
        egui::Rect::from_min_size(rect.min, egui::vec2(bar, height)),
        egui::CornerRadius {
            nw: (10.0 * scale) as u8,
            sw: (10.0 * scale) as u8,
            ne: 0,
            se: 0,
        },
        Theme::with_opacity(theme.green, opacity),
    );
    ui.painter().galley(
        Pos2::new(rect.left() + bar + pad, rect.top() + pad),
        galley,
        egui::Color32::TRANSPARENT,
    );
    height
}
