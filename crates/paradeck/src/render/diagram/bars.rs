use eframe::egui::{self, Color32, FontId};

use super::playback::ElementId;
use super::{Canvas, Hotspot, loop_phase};
use crate::render::text;
use crate::render::transition::ease_in_out;
use crate::theme::Theme;

const BARS: usize = 4;
const BAR_WIDTH: f32 = 32.0;
const BAR_GAP: f32 = 8.0;
const KEYFRAMES: [f32; 5] = [20.0, 60.0, 30.0, 80.0, 40.0];
const CYCLE: f32 = 1.5;

/// Height of bar `i` at playback time `time`, in diagram units.
///
/// Each bar holds the first keyframe until its stagger delay has passed, then loops
/// through the keyframes, easing between evenly spaced stops.
pub fn bar_height(i: usize, time: f32) -> f32 {
    let local = time - i as f32 * 0.1;
    if local <= 0.0 {
        return KEYFRAMES[0];
    }
    let segments = KEYFRAMES.len() - 1;
    let pos = loop_phase(local, CYCLE) * segments as f32;
    let seg = (pos.floor() as usize).min(segments - 1);
    let t = ease_in_out(pos - seg as f32);
    let (a, b) = (KEYFRAMES[seg], KEYFRAMES[seg + 1]);
    a + (b - a) * t
}

/// Four bars pumping through a workload, standing in for parallel cores.
pub fn draw(canvas: &Canvas<'_>, _ui: &egui::Ui) -> Vec<Hotspot> {
    let theme = canvas.theme;
    let unit = canvas.unit;
    let painter = canvas.painter;

    // soft wash fading down from the top of the panel
    text::gradient_rect(
        painter,
        canvas.area,
        Theme::with_opacity(theme.cyan, canvas.opacity * 0.1),
        Color32::TRANSPARENT,
        true,
    );

    let row_w = BARS as f32 * BAR_WIDTH + (BARS - 1) as f32 * BAR_GAP;
    let base = canvas.pos(-row_w / 2.0, 40.0);
    let max_h = KEYFRAMES.iter().copied().fold(0.0, f32::max);
    let bright = theme.cyan;
    let deep = Theme::mix(theme.cyan, Color32::from_rgb(0x08, 0x91, 0xB2), 0.9);

    let mut hotspots = Vec::with_capacity(BARS);
    for i in 0..BARS {
        let left = base.x + i as f32 * (BAR_WIDTH + BAR_GAP) * unit;
        let height = bar_height(i, canvas.time) * unit;
        let rect = egui::Rect::from_min_max(
            egui::pos2(left, base.y - height),
            egui::pos2(left + BAR_WIDTH * unit, base.y),
        );
        let id = ElementId(i);
        let (top, bottom) = if canvas.hovered == Some(id) {
            (theme.heading_color, bright)
        } else {
            (bright, deep)
        };
        text::gradient_rect(
            painter,
            rect,
            Theme::with_opacity(top, canvas.opacity),
            Theme::with_opacity(bottom, canvas.opacity),
            true,
        );
        hotspots.push(Hotspot {
            id,
            rect: egui::Rect::from_min_max(
                egui::pos2(rect.left(), base.y - max_h * unit),
                rect.max,
            ),
            label: format!("Core {}", i + 1),
        });
    }

    painter.text(
        canvas.pos(0.0, 64.0),
        egui::Align2::CENTER_TOP,
        "Processing...",
        FontId::monospace(15.0 * unit),
        Theme::with_opacity(Theme::mix(theme.cyan, theme.heading_color, 0.6), canvas.opacity),
    );
    hotspots
}
