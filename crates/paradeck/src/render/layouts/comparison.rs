use eframe::egui::{self, FontId, Pos2};

use crate::deck::content::ComparisonRow;
use crate::render::SlideFrame;
use crate::render::layouts::frame;
use crate::render::text::{self, Align};
use crate::render::transition::ease_in_out;
use crate::theme::Theme;

/// Relative widths of the feature, cluster and grid columns.
const COLUMNS: [f32; 3] = [0.26, 0.37, 0.37];

/// Three-column table; rows slide in one after another and highlight on hover.
pub fn render(
    ui: &egui::Ui,
    title: &str,
    subtitle: &str,
    headers: &[&str; 3],
    rows: &[ComparisonRow],
    theme: &Theme,
    frame: &SlideFrame,
) {
    let body = frame::draw(ui, title, Some(subtitle), theme, frame);
    let scale = frame.scale;
    let opacity = frame.opacity * frame::body_progress(frame);
    if opacity <= 0.0 {
        return;
    }

    let pad = 28.0 * scale;
    let row_h = theme.body_size * scale + pad * 2.0;
    let table = egui::Rect::from_min_size(
        body.min,
        egui::vec2(body.width(), row_h * (rows.len() + 1) as f32),
    );
    let radius = 16.0 * scale;
    let line = egui::Stroke::new(1.5 * scale, Theme::with_opacity(theme.border, opacity));
    let painter = ui.painter();

    painter.rect_filled(table, radius, Theme::with_opacity(theme.surface, opacity * 0.3));
    let header = egui::Rect::from_min_size(table.min, egui::vec2(table.width(), row_h));
    painter.rect_filled(
        header,
        egui::CornerRadius {
            nw: radius as u8,
            ne: radius as u8,
            sw: 0,
            se: 0,
        },
        Theme::with_opacity(theme.surface, opacity),
    );

    let header_colors = [theme.heading_color, theme.cyan, theme.purple];
    let mut x = table.left();
    for ((label, color), width) in headers.iter().zip(header_colors).zip(COLUMNS) {
        let w = width * table.width();
        text::draw_text(
            ui,
            label,
            Pos2::new(x + pad, header.top() + pad),
            FontId::proportional(theme.body_size * scale),
            Theme::with_opacity(color, opacity),
            w - pad * 2.0,
            Align::Left,
        );
        x += w;
    }
    painter.hline(table.x_range(), header.bottom(), line);

    let pointer = ui.ctx().pointer_hover_pos();
    for (idx, row) in rows.iter().enumerate() {
        let p = ease_in_out(frame.appear(0.3 + idx as f32 * 0.1, 0.4));
        if p <= 0.0 {
            continue;
        }
        let a = opacity * p;
        let top = header.bottom() + idx as f32 * row_h;
        let rect = egui::Rect::from_min_size(
            Pos2::new(table.left(), top),
            egui::vec2(table.width(), row_h),
        );
        if pointer.is_some_and(|pos| rect.contains(pos)) {
            painter.rect_filled(rect, 0.0, Theme::with_opacity(theme.border, a * 0.3));
        }

        let shift = -10.0 * scale * (1.0 - p);
        let cells = [
            (row.feature, theme.heading_color),
            (row.cluster, theme.foreground),
            (row.grid, theme.foreground),
        ];
        let mut x = table.left() + shift;
        for ((cell, color), width) in cells.into_iter().zip(COLUMNS) {
            let w = width * table.width();
            text::draw_text(
                ui,
                cell,
                Pos2::new(x + pad, top + pad),
                FontId::proportional(theme.body_size * scale),
                Theme::with_opacity(color, a),
                w - pad * 2.0,
                Align::Left,
            );
            x += w;
        }
        if idx + 1 < rows.len() {
            painter.hline(
                table.x_range(),
                rect.bottom(),
                egui::Stroke::new(1.0 * scale, Theme::with_opacity(theme.border, a * 0.5)),
            );
        }
    }

    painter.rect_stroke(table, radius, line, egui::StrokeKind::Inside);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_fill_the_table() {
        assert!((COLUMNS.iter().sum::<f32>() - 1.0).abs() < 1e-6);
    }
}
