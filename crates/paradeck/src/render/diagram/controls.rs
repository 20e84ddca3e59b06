use eframe::egui::{self, FontId, Pos2, Sense};

use crate::nav::input::{ClickRouter, ControlKind};
use crate::render::diagram::playback::{DiagramPlayback, Speed};
use crate::theme::Theme;

/// Play/pause and speed selector in the top-right corner of a diagram panel.
///
/// When `interactive` is false the strip is painted but registers no widgets, so a
/// leaving slide cannot swallow clicks. Returns the strip rect.
#[allow(clippy::too_many_arguments)]
pub fn draw(
    ui: &egui::Ui,
    panel: egui::Rect,
    playback: &mut DiagramPlayback,
    interactive: bool,
    clicks: &mut ClickRouter,
    id: egui::Id,
    theme: &Theme,
    opacity: f32,
    scale: f32,
) -> egui::Rect {
    let margin = 16.0 * scale;
    let height = 32.0 * scale;
    let play_w = 36.0 * scale;
    let speed_w = 48.0 * scale;
    let gap = 6.0 * scale;
    let width = play_w + gap + Speed::ALL.len() as f32 * (speed_w + gap) - gap;

    let strip = egui::Rect::from_min_size(
        Pos2::new(panel.right() - margin - width, panel.top() + margin),
        egui::vec2(width, height),
    );
    let pointer = ui.ctx().pointer_hover_pos();

    let play_rect = egui::Rect::from_min_size(strip.min, egui::vec2(play_w, height));
    if interactive {
        let response = ui.interact(play_rect, id.with("play_pause"), Sense::click());
        if clicks.record_control(ControlKind::PlayPause, &response) {
            playback.toggle_playing();
        }
    }
    let hovered = interactive && pointer.is_some_and(|p| play_rect.contains(p));
    button_frame(ui, play_rect, false, hovered, theme, opacity, scale);
    draw_play_icon(ui, play_rect, playback.is_playing(), theme, opacity, scale);

    let mut x = play_rect.right() + gap;
    for speed in Speed::ALL {
        let rect = egui::Rect::from_min_size(Pos2::new(x, strip.top()), egui::vec2(speed_w, height));
        x += speed_w + gap;
        if interactive {
            let response = ui.interact(rect, id.with(("speed", speed.label())), Sense::click());
            if clicks.record_control(ControlKind::Speed, &response) {
                playback.set_speed(speed);
            }
        }
        let selected = playback.speed() == speed;
        let hovered = interactive && pointer.is_some_and(|p| rect.contains(p));
        button_frame(ui, rect, selected, hovered, theme, opacity, scale);

        let color = if selected { theme.cyan } else { theme.muted };
        let galley = ui.painter().layout_no_wrap(
            speed.to_string(),
            FontId::monospace(15.0 * scale),
            Theme::with_opacity(color, opacity),
        );
        let pos = rect.center() - galley.rect.size() / 2.0;
        ui.painter().galley(pos, galley, egui::Color32::TRANSPARENT);
    }

    strip
}

fn button_frame(
    ui: &egui::Ui,
    rect: egui::Rect,
    selected: bool,
    hovered: bool,
    theme: &Theme,
    opacity: f32,
    scale: f32,
) {
    let border = if selected || hovered {
        Theme::with_opacity(theme.cyan, opacity * 0.6)
    } else {
        Theme::with_opacity(theme.border, opacity)
    };
    let fill_alpha = if selected { 0.9 } else { 0.6 };
    ui.painter().rect(
        rect,
        6.0 * scale,
        Theme::with_opacity(theme.surface, opacity * fill_alpha),
        egui::Stroke::new(1.0 * scale, border),
        egui::StrokeKind::Inside,
    );
}

/// Pause bars while playing, a play triangle while paused.
fn draw_play_icon(
    ui: &egui::Ui,
    rect: egui::Rect,
    playing: bool,
    theme: &Theme,
    opacity: f32,
    scale: f32,
) {
    let color = Theme::with_opacity(theme.foreground, opacity);
    let c = rect.center();
    let s = 7.0 * scale;
    if playing {
        let bar = egui::vec2(3.5 * scale, 2.0 * s);
        for dx in [-3.5 * scale, 3.5 * scale] {
            ui.painter().rect_filled(
                egui::Rect::from_center_size(c + egui::vec2(dx, 0.0), bar),
                1.0 * scale,
                color,
            );
        }
    } else {
        ui.painter().add(egui::Shape::convex_polygon(
            vec![
                c + egui::vec2(-s * 0.6, -s),
                c + egui::vec2(s, 0.0),
                c + egui::vec2(-s * 0.6, s),
            ],
            color,
            egui::Stroke::NONE,
        ));
    }
}
