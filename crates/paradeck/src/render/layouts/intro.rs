use eframe::egui::{self, FontId, Pos2};

use crate::deck::content::TeamMember;
use crate::render::SlideFrame;
use crate::render::text::{self, Align};
use crate::render::transition::ease_in_out;
use crate::theme::Theme;

/// Title slide: hero headline, tagline and a grid of team member cards.
pub fn render(
    ui: &egui::Ui,
    headline: &str,
    tagline: &str,
    team: &[TeamMember],
    theme: &Theme,
    frame: &SlideFrame,
) {
    let rect = frame.rect;
    let scale = frame.scale;
    let opacity = frame.opacity;
    let center_x = rect.center().x;

    let hero_in = ease_in_out(frame.appear(0.0, 0.8));
    let hero_opacity = opacity * hero_in;
    let hero_size = theme.hero_size * scale * (0.8 + 0.2 * hero_in);

    let cols = 3usize;
    let rows = team.len().div_ceil(cols);
    let card_w = 380.0 * scale;
    let card_h = 120.0 * scale;
    let gap = 36.0 * scale;
    let grid_h = rows as f32 * card_h + rows.saturating_sub(1) as f32 * gap;
    let block_h = hero_size * 1.2 + theme.subtitle_size * scale * 1.6 + 72.0 * scale + grid_h;
    let mut y = rect.center().y - block_h / 2.0;

    let hero = text::draw_gradient(
        ui,
        headline,
        Pos2::new(center_x, y),
        hero_size,
        theme.cyan,
        theme.purple,
        hero_opacity,
        rect.width(),
        Align::Center,
    );
    y += hero.y + 16.0 * scale;

    let tag = text::draw_text(
        ui,
        tagline,
        Pos2::new(center_x, y),
        FontId::proportional(theme.subtitle_size * 1.1 * scale),
        Theme::with_opacity(theme.foreground, hero_opacity),
        rect.width(),
        Align::Center,
    );
    y += tag.y + 72.0 * scale;

    let grid_w = cols as f32 * card_w + (cols - 1) as f32 * gap;
    let grid_left = center_x - grid_w / 2.0;
    let pointer = ui.ctx().pointer_hover_pos();

    for (idx, member) in team.iter().enumerate() {
        let p = ease_in_out(frame.appear(0.5 + idx as f32 * 0.1, 0.4));
        if p <= 0.0 {
            continue;
        }
        let row = idx / cols;
        let col = idx % cols;
        // last row is centred when it is not full
        let in_row = (team.len() - row * cols).min(cols);
        let row_w = in_row as f32 * card_w + in_row.saturating_sub(1) as f32 * gap;
        let row_left = grid_left + (grid_w - row_w) / 2.0;
        let card = egui::Rect::from_min_size(
            Pos2::new(
                row_left + col as f32 * (card_w + gap),
                y + row as f32 * (card_h + gap) + 20.0 * scale * (1.0 - p),
            ),
            egui::vec2(card_w, card_h),
        );
        let a = opacity * p;
        let hovered = pointer.is_some_and(|pos| card.contains(pos));
        let border = if hovered {
            Theme::with_opacity(theme.cyan, a * 0.5)
        } else {
            Theme::with_opacity(theme.border, a)
        };
        ui.painter().rect(
            card,
            16.0 * scale,
            Theme::with_opacity(theme.surface, a * 0.5),
            egui::Stroke::new(1.5 * scale, border),
            egui::StrokeKind::Inside,
        );
        let inner = card.shrink(24.0 * scale);
        let name = text::draw_text(
            ui,
            member.name,
            inner.left_top(),
            FontId::proportional(theme.body_size * scale),
            Theme::with_opacity(theme.heading_color, a),
            inner.width(),
            Align::Left,
        );
        text::draw_text(
            ui,
            &format!("ID: {}", member.id),
            Pos2::new(inner.left(), inner.top() + name.y + 6.0 * scale),
            FontId::monospace(theme.mono_size * scale),
            Theme::with_opacity(theme.cyan, a),
            inner.width(),
            Align::Left,
        );
    }
}
