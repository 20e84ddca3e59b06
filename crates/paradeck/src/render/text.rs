use eframe::egui::{self, Color32, FontFamily, FontId, Pos2};

use crate::deck::content::Bullet;
use crate::theme::Theme;

/// Horizontal placement of a laid-out galley.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

fn format(size: f32, family: FontFamily, color: Color32) -> egui::text::TextFormat {
    egui::text::TextFormat {
        font_id: FontId::new(size, family),
        color,
        ..Default::default()
    }
}

/// Lay out text with a left-to-right colour gradient, one section per character.
pub fn gradient_job(
    text: &str,
    font_size: f32,
    from: Color32,
    to: Color32,
    opacity: f32,
    max_width: f32,
) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;
    let count = text.chars().count().max(2) - 1;
    let mut buf = [0u8; 4];
    for (i, ch) in text.chars().enumerate() {
        let color = Theme::with_opacity(Theme::mix(from, to, i as f32 / count as f32), opacity);
        job.append(
            ch.encode_utf8(&mut buf),
            0.0,
            format(font_size, FontFamily::Proportional, color),
        );
    }
    job
}

/// Lay out a paragraph where whole words listed in `highlights` take their own colour.
pub fn highlight_job(
    text: &str,
    font_size: f32,
    base: Color32,
    highlights: &[(&str, Color32)],
    max_width: f32,
) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;
    for token in text.split_inclusive(' ') {
        let word = token.trim_end_matches([' ', ',', '.', ';', ':']);
        match highlights.iter().find(|(w, _)| *w == word) {
            Some(&(_, color)) => {
                job.append(word, 0.0, format(font_size, FontFamily::Proportional, color));
                let rest = &token[word.len()..];
                if !rest.is_empty() {
                    job.append(rest, 0.0, format(font_size, FontFamily::Proportional, base));
                }
            }
            None => job.append(token, 0.0, format(font_size, FontFamily::Proportional, base)),
        }
    }
    job
}

/// Draw a paragraph with highlighted words. Returns the size used.
pub fn draw_highlighted(
    ui: &egui::Ui,
    text: &str,
    pos: Pos2,
    font_size: f32,
    base: Color32,
    highlights: &[(&str, Color32)],
    max_width: f32,
) -> egui::Vec2 {
    let job = highlight_job(text, font_size, base, highlights, max_width);
    paint_job(ui, job, pos, Align::Left)
}

fn paint_job(ui: &egui::Ui, job: egui::text::LayoutJob, pos: Pos2, align: Align) -> egui::Vec2 {
    let galley = ui.painter().layout_job(job);
    let size = galley.rect.size();
    let x = match align {
        Align::Left => pos.x,
        Align::Center => pos.x - size.x / 2.0,
    };
    ui.painter()
        .galley(Pos2::new(x, pos.y), galley, Color32::TRANSPARENT);
    size
}

/// Draw gradient text between two opaque colours. For `Align::Center`, `pos.x` is the
/// centre line. Returns the size used.
#[allow(clippy::too_many_arguments)]
pub fn draw_gradient(
    ui: &egui::Ui,
    text: &str,
    pos: Pos2,
    font_size: f32,
    from: Color32,
    to: Color32,
    opacity: f32,
    max_width: f32,
    align: Align,
) -> egui::Vec2 {
    let job = gradient_job(text, font_size, from, to, opacity, max_width);
    paint_job(ui, job, pos, align)
}

/// Draw wrapped text in a single colour. Returns the size used.
pub fn draw_text(
    ui: &egui::Ui,
    text: &str,
    pos: Pos2,
    font: FontId,
    color: Color32,
    max_width: f32,
    align: Align,
) -> egui::Vec2 {
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;
    job.append(text, 0.0, format(font.size, font.family, color));
    paint_job(ui, job, pos, align)
}

/// Draw a bullet with an optional emphasised lead-in. Returns height used.
#[allow(clippy::too_many_arguments)]
pub fn draw_bullet(
    ui: &egui::Ui,
    bullet: &Bullet,
    theme: &Theme,
    marker: Color32,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let font_size = theme.body_size * scale;
    let dot_radius = 5.0 * scale;
    let indent = 32.0 * scale;

    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width - indent;
    if !bullet.label.is_empty() {
        let label_color = Theme::with_opacity(theme.heading_color, opacity);
        job.append(
            bullet.label,
            0.0,
            format(font_size + 1.0, FontFamily::Proportional, label_color),
        );
        job.append(" ", 0.0, format(font_size, FontFamily::Proportional, label_color));
    }
    let body_color = Theme::with_opacity(theme.foreground, opacity);
    job.append(
        bullet.text,
        0.0,
        format(font_size, FontFamily::Proportional, body_color),
    );

    let galley = ui.painter().layout_job(job);
    let height = galley.rect.height();
    // centre of the first text row
    let first_row_mid = font_size * 0.62;

    ui.painter().circle_filled(
        Pos2::new(pos.x + dot_radius, pos.y + first_row_mid),
        dot_radius,
        Theme::with_opacity(marker, opacity),
    );
    ui.painter().galley(
        Pos2::new(pos.x + indent, pos.y),
        galley,
        Color32::TRANSPARENT,
    );
    height
}

/// Fill a rect with a vertical or horizontal two-colour gradient.
pub fn gradient_rect(
    painter: &egui::Painter,
    rect: egui::Rect,
    start: Color32,
    end: Color32,
    vertical: bool,
) {
    let (tl, tr, bl, br) = if vertical {
        (start, start, end, end)
    } else {
        (start, end, start, end)
    };
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), tl);
    mesh.colored_vertex(rect.right_top(), tr);
    mesh.colored_vertex(rect.left_bottom(), bl);
    mesh.colored_vertex(rect.right_bottom(), br);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    painter.add(egui::Shape::mesh(mesh));
}

/// Soft glow: concentric translucent circles fading outwards.
pub fn soft_glow(painter: &egui::Painter, center: Pos2, radius: f32, color: Color32, opacity: f32) {
    const RINGS: usize = 12;
    for i in 0..RINGS {
        let t = i as f32 / RINGS as f32;
        let r = radius * (1.0 - t * 0.85);
        painter.circle_filled(center, r, Theme::with_opacity(color, opacity * 0.06));
    }
}
