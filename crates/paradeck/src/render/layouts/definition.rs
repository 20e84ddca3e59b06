use eframe::egui::{self, FontId, Pos2};

use crate::deck::DiagramKind;
use crate::deck::content::Bullet;
use crate::render::layouts::frame;
use crate::render::text::{self, Align};
use crate::render::{DiagramSlot, SlideFrame, diagram};
use crate::theme::Theme;

/// Two-column slide: definition and bullets on one side, a live diagram on the other.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    title: &str,
    subtitle: &str,
    definition: &str,
    bullets: &[Bullet],
    kind: DiagramKind,
    diagram_first: bool,
    theme: &Theme,
    frame: &SlideFrame,
    slot: Option<DiagramSlot<'_>>,
) {
    let body = frame::draw(ui, title, Some(subtitle), theme, frame);
    let scale = frame.scale;
    let progress = frame::body_progress(frame);
    let opacity = frame.opacity * progress;
    if opacity <= 0.0 {
        return;
    }

    let gap = 72.0 * scale;
    let col_w = (body.width() - gap) / 2.0;
    let left = egui::Rect::from_min_size(body.min, egui::vec2(col_w, body.height()));
    let right = egui::Rect::from_min_size(
        Pos2::new(body.left() + col_w + gap, body.top()),
        egui::vec2(col_w, body.height()),
    );
    let (text_col, diagram_col) = if diagram_first {
        (right, left)
    } else {
        (left, right)
    };

    let marker = match kind {
        DiagramKind::Cluster => theme.cyan,
        DiagramKind::ProcessingBars | DiagramKind::Grid => theme.purple,
    };
    draw_text_column(ui, definition, bullets, marker, theme, text_col, opacity, scale);

    let panel_h = (diagram_col.height() * 0.85).min(520.0 * scale);
    let panel = egui::Rect::from_center_size(
        diagram_col.center(),
        egui::vec2(diagram_col.width(), panel_h) * (0.98 + 0.02 * progress),
    );
    let (fill, fill_alpha) = match kind {
        DiagramKind::ProcessingBars => (theme.surface, 1.0),
        _ => (theme.background, 0.5),
    };
    ui.painter().rect(
        panel,
        24.0 * scale,
        Theme::with_opacity(fill, opacity * fill_alpha),
        egui::Stroke::new(1.5 * scale, Theme::with_opacity(theme.border, opacity)),
        egui::StrokeKind::Inside,
    );

    if let Some(slot) = slot {
        diagram::draw(ui, kind, panel, theme, opacity, frame, slot);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_text_column(
    ui: &egui::Ui,
    definition: &str,
    bullets: &[Bullet],
    marker: egui::Color32,
    theme: &Theme,
    col: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let bullet_spacing = 18.0 * scale;
    let mut height = 0.0;
    // measure pass so the column can be centred vertically
    let def_galley = ui.painter().layout(
        definition.to_string(),
        FontId::proportional(theme.body_size * scale),
        theme.foreground,
        col.width(),
    );
    height += def_galley.rect.height() + 32.0 * scale;
    height += bullets.len() as f32 * (theme.body_size * scale * 2.4 + bullet_spacing);

    let mut y = (col.center().y - height / 2.0).max(col.top());
    let def = text::draw_text(
        ui,
        definition,
        Pos2::new(col.left(), y),
        FontId::proportional(theme.body_size * scale),
        Theme::with_opacity(theme.foreground, opacity),
        col.width(),
        Align::Left,
    );
    y += def.y + 32.0 * scale;

    for bullet in bullets {
        let h = text::draw_bullet(
            ui,
            bullet,
            theme,
            marker,
            Pos2::new(col.left(), y),
            col.width(),
            opacity,
            scale,
        );
        y += h + bullet_spacing;
    }
}
