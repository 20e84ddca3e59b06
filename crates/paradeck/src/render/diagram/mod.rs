pub mod bars;
pub mod cluster;
pub mod controls;
pub mod grid;
pub mod playback;

use eframe::egui::{self, FontId, Pos2, Sense};

use crate::deck::DiagramKind;
use crate::nav::input::ControlKind;
use crate::render::text::{self, Align};
use crate::render::{DiagramSlot, SlideFrame};
use crate::theme::Theme;

use playback::ElementId;

/// A hoverable element of a diagram and the label shown while it is active.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot {
    pub id: ElementId,
    pub rect: egui::Rect,
    pub label: String,
}

/// Inputs shared by every diagram painter.
pub struct Canvas<'a> {
    pub painter: &'a egui::Painter,
    pub theme: &'a Theme,
    /// Drawing area inside the panel, below the control strip.
    pub area: egui::Rect,
    /// Size of one diagram unit in points.
    pub unit: f32,
    pub opacity: f32,
    /// Entrance clock at playback speed, for one-shot entrances.
    pub age: f32,
    /// Playback clock, for looping animations.
    pub time: f32,
    pub hovered: Option<ElementId>,
}

impl Canvas<'_> {
    pub fn center(&self) -> Pos2 {
        self.area.center() - egui::vec2(0.0, 20.0 * self.unit)
    }

    pub fn pos(&self, x: f32, y: f32) -> Pos2 {
        self.center() + egui::vec2(x * self.unit, y * self.unit)
    }

    pub fn caption(&self, label: &str, ui: &egui::Ui) {
        text::draw_text(
            ui,
            label,
            self.pos(0.0, 150.0),
            FontId::proportional(16.0 * self.unit),
            Theme::with_opacity(self.theme.muted, self.opacity),
            self.area.width(),
            Align::Center,
        );
    }
}

/// Draw a diagram with its playback controls inside `panel`.
pub fn draw(
    ui: &egui::Ui,
    kind: DiagramKind,
    panel: egui::Rect,
    theme: &Theme,
    opacity: f32,
    frame: &SlideFrame,
    slot: DiagramSlot<'_>,
) {
    let scale = frame.scale;
    let DiagramSlot {
        playback,
        interactive,
        clicks,
        id,
    } = slot;

    let strip = controls::draw(
        ui,
        panel,
        playback,
        interactive,
        clicks,
        id,
        theme,
        opacity,
        scale,
    );

    let area = egui::Rect::from_min_max(
        Pos2::new(panel.left(), strip.bottom()),
        panel.max,
    )
    .shrink(16.0 * scale);
    let unit = (area.width() / 520.0).min(area.height() / 340.0);

    let painter = ui.painter_at(panel);
    let canvas = Canvas {
        painter: &painter,
        theme,
        area,
        unit,
        opacity,
        age: playback.entrance(),
        time: playback.time(),
        hovered: playback.hovered(),
    };

    let hotspots = match kind {
        DiagramKind::ProcessingBars => bars::draw(&canvas, ui),
        DiagramKind::Cluster => cluster::draw(&canvas, ui),
        DiagramKind::Grid => grid::draw(&canvas, ui),
    };

    if !interactive {
        return;
    }

    let mut hit = None;
    for spot in &hotspots {
        let response = ui.interact(spot.rect, id.with(("element", spot.id.0)), Sense::click());
        clicks.record_control(ControlKind::DiagramElement, &response);
        if response.hovered() {
            hit = Some(spot.id);
        }
    }
    playback.track_hover(hit);

    if let Some(spot) = hit.and_then(|h| hotspots.iter().find(|s| s.id == h)) {
        draw_label(&painter, spot, theme, opacity, unit);
    }
}

/// Contextual label above the active element.
fn draw_label(painter: &egui::Painter, spot: &Hotspot, theme: &Theme, opacity: f32, unit: f32) {
    let galley = painter.layout_no_wrap(
        spot.label.clone(),
        FontId::proportional(15.0 * unit),
        Theme::with_opacity(theme.heading_color, opacity),
    );
    let padding = egui::vec2(10.0, 6.0) * unit;
    let size = galley.rect.size() + padding * 2.0;
    let rect = egui::Rect::from_center_size(
        Pos2::new(
            spot.rect.center().x,
            spot.rect.top() - size.y / 2.0 - 6.0 * unit,
        ),
        size,
    );
    painter.rect(
        rect,
        6.0 * unit,
        Theme::with_opacity(theme.surface, opacity * 0.95),
        egui::Stroke::new(1.0, Theme::with_opacity(theme.cyan, opacity * 0.6)),
        egui::StrokeKind::Inside,
    );
    painter.galley(rect.min + padding, galley, egui::Color32::TRANSPARENT);
}

/// Sawtooth phase in `0..1` of a loop with the given period.
pub fn loop_phase(time: f32, period: f32) -> f32 {
    if period <= 0.0 {
        return 0.0;
    }
    (time.max(0.0) % period) / period
}

/// Breathing opacity: 1 at rest, dipping to 0.5 once every two seconds.
pub fn pulse(time: f32) -> f32 {
    let phase = loop_phase(time, 2.0);
    0.75 + 0.25 * (phase * std::f32::consts::TAU).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_phase_wraps() {
        assert_eq!(loop_phase(0.0, 2.0), 0.0);
        assert_eq!(loop_phase(1.0, 2.0), 0.5);
        assert_eq!(loop_phase(3.0, 2.0), 0.5);
        assert_eq!(loop_phase(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_pulse_range() {
        assert_eq!(pulse(0.0), 1.0);
        assert!((pulse(1.0) - 0.5).abs() < 1e-5);
        for i in 0..100 {
            let v = pulse(i as f32 * 0.037);
            assert!((0.5..=1.0).contains(&v));
        }
    }
}
