use eframe::egui::{self, FontId, Pos2};

use super::playback::ElementId;
use super::{Canvas, Hotspot, pulse};
use crate::render::appear;
use crate::render::transition::{ease_in_out, ease_spring};
use crate::theme::Theme;

const NODES: usize = 6;
const RADIUS: f32 = 120.0;
const NODE_SIZE: f32 = 48.0;

pub const SWITCH: ElementId = ElementId(0);

/// Element id of the `i`th node around the switch.
pub fn node(i: usize) -> ElementId {
    ElementId(i + 1)
}

/// Final offset of node `i` from the switch, in diagram units.
pub fn node_offset(i: usize) -> egui::Vec2 {
    let angle = (i as f32 * 60.0).to_radians();
    egui::vec2(angle.cos(), angle.sin()) * RADIUS
}

/// Central switch with six nodes wired to it over a LAN.
pub fn draw(canvas: &Canvas<'_>, ui: &egui::Ui) -> Vec<Hotspot> {
    let theme = canvas.theme;
    let painter = canvas.painter;
    let unit = canvas.unit;
    let center = canvas.center();
    let mut hotspots = Vec::with_capacity(NODES + 1);

    let led = pulse(canvas.time);
    let mut nodes = Vec::with_capacity(NODES);
    for i in 0..NODES {
        let t = appear(canvas.age, 0.5 + i as f32 * 0.1, 0.5);
        let target = center + node_offset(i) * unit;
        let pos = center + (target - center) * ease_spring(t);
        let opacity = canvas.opacity * t.min(1.0);

        // link grows from the switch towards the node's final position
        let drawn = ease_in_out(appear(canvas.age, 1.0 + i as f32 * 0.1, 0.5));
        if drawn > 0.0 && opacity > 0.0 {
            painter.line_segment(
                [center, center + (pos - center) * drawn],
                egui::Stroke::new(2.0 * unit, Theme::with_opacity(theme.border, opacity)),
            );
        }
        nodes.push((pos, opacity));
    }

    for (i, &(pos, opacity)) in nodes.iter().enumerate() {
        if opacity <= 0.0 {
            continue;
        }
        let id = node(i);
        let rect = egui::Rect::from_center_size(pos, egui::vec2(NODE_SIZE, NODE_SIZE) * unit);
        let border = if canvas.hovered == Some(id) {
            theme.cyan
        } else {
            Theme::mix(theme.border, theme.muted, 0.4)
        };
        painter.rect(
            rect,
            4.0 * unit,
            Theme::with_opacity(theme.surface, opacity),
            egui::Stroke::new(1.0 * unit, Theme::with_opacity(border, opacity)),
            egui::StrokeKind::Inside,
        );
        let screen = egui::Rect::from_center_size(
            pos - egui::vec2(0.0, 5.0 * unit),
            egui::vec2(32.0, 22.0) * unit,
        );
        painter.rect_filled(
            screen,
            2.0 * unit,
            Theme::with_opacity(theme.background, opacity),
        );
        painter.circle_filled(
            Pos2::new(pos.x, screen.bottom() + 8.0 * unit),
            2.5 * unit,
            Theme::with_opacity(theme.green, opacity * led),
        );
        hotspots.push(Hotspot {
            id,
            rect,
            label: format!("Node {}", i + 1),
        });
    }

    let grow = ease_in_out(appear(canvas.age, 0.0, 0.5));
    if grow > 0.0 {
        let rect = egui::Rect::from_center_size(center, egui::vec2(96.0, 48.0) * unit * grow);
        let glow = if canvas.hovered == Some(SWITCH) { 0.8 } else { 0.5 };
        painter.rect_filled(
            rect.expand(6.0 * unit * grow),
            12.0 * unit,
            Theme::with_opacity(theme.cyan, canvas.opacity * glow * 0.25),
        );
        painter.rect(
            rect,
            8.0 * unit,
            Theme::with_opacity(Theme::mix(theme.surface, theme.border, 0.6), canvas.opacity),
            egui::Stroke::new(1.0 * unit, Theme::with_opacity(theme.cyan, canvas.opacity)),
            egui::StrokeKind::Inside,
        );
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "SWITCH",
            FontId::proportional(12.0 * unit * grow),
            Theme::with_opacity(theme.heading_color, canvas.opacity),
        );
        hotspots.push(Hotspot {
            id: SWITCH,
            rect,
            label: "Switch".to_string(),
        });
    }

    canvas.caption("Tight Coupling via LAN", ui);
    hotspots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_sit_on_the_ring() {
        for i in 0..NODES {
            assert!((node_offset(i).length() - RADIUS).abs() < 1e-3);
        }
        assert!((node_offset(0).x - RADIUS).abs() < 1e-3);
        assert!((node_offset(3).x + RADIUS).abs() < 1e-3);
    }

    #[test]
    fn test_node_ids_distinct_from_switch() {
        let ids: Vec<_> = (0..NODES).map(node).collect();
        assert!(!ids.contains(&SWITCH));
        assert_eq!(ids.last(), Some(&ElementId(NODES)));
    }
}
