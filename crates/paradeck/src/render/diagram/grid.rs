use eframe::egui::{self, Color32, FontId, Pos2};

use super::playback::ElementId;
use super::{Canvas, Hotspot, loop_phase};
use crate::render::appear;
use crate::render::transition::ease_spring;
use crate::theme::Theme;

const SITES: [&str; 3] = ["Site A", "Site B", "Site C"];
const SITE_SPACING: f32 = 160.0;
const SITE_RADIUS: f32 = 40.0;
const ARC_PERIOD: f32 = 2.0;

/// Cloud outline as quadratic segments in a 100x100 box: start, then (control, end) pairs.
const CLOUD_START: (f32, f32) = (25.0, 60.0);
const CLOUD: [((f32, f32), (f32, f32)); 8] = [
    ((10.0, 60.0), (10.0, 45.0)),
    ((10.0, 30.0), (25.0, 30.0)),
    ((30.0, 10.0), (50.0, 10.0)),
    ((70.0, 10.0), (75.0, 30.0)),
    ((90.0, 30.0), (90.0, 45.0)),
    ((90.0, 60.0), (75.0, 60.0)),
    ((70.0, 80.0), (50.0, 80.0)),
    ((30.0, 80.0), (25.0, 60.0)),
];

pub fn site(i: usize) -> ElementId {
    ElementId(i)
}

/// Horizontal offset of site `i`, centred on the middle site.
pub fn site_offset(i: usize) -> f32 {
    (i as f32 - 1.0) * SITE_SPACING
}

/// Point on a quadratic bezier.
fn quad(a: Pos2, c: Pos2, b: Pos2, t: f32) -> Pos2 {
    let u = 1.0 - t;
    Pos2::new(
        u * u * a.x + 2.0 * u * t * c.x + t * t * b.x,
        u * u * a.y + 2.0 * u * t * c.y + t * t * b.y,
    )
}

/// Sample `count` segments of a quadratic bezier, including both ends.
fn sample_quad(a: Pos2, c: Pos2, b: Pos2, count: usize) -> Vec<Pos2> {
    (0..=count)
        .map(|i| quad(a, c, b, i as f32 / count as f32))
        .collect()
}

/// Several independent sites joined over a WAN, floating on an internet cloud.
pub fn draw(canvas: &Canvas<'_>, ui: &egui::Ui) -> Vec<Hotspot> {
    let theme = canvas.theme;
    let unit = canvas.unit;

    draw_cloud(canvas, 0.2 * appear(canvas.age, 0.0, 1.0));
    draw_arc(canvas);

    let mut hotspots = Vec::with_capacity(SITES.len());
    for (i, name) in SITES.iter().enumerate() {
        let t = appear(canvas.age, i as f32 * 0.3, 0.6);
        if t <= 0.0 {
            continue;
        }
        let rise = 50.0 * (1.0 - ease_spring(t));
        let opacity = canvas.opacity * t;
        let center = canvas.pos(site_offset(i), rise);
        let radius = SITE_RADIUS * unit;
        let id = site(i);
        let hovered = canvas.hovered == Some(id);

        canvas.painter.circle_filled(
            center,
            radius,
            Theme::with_opacity(theme.background, opacity * 0.8),
        );
        let ring = if hovered { theme.cyan } else { theme.purple };
        canvas.painter.extend(egui::Shape::dashed_line(
            &circle_points(center, radius, 48),
            egui::Stroke::new(2.0 * unit, Theme::with_opacity(ring, opacity)),
            6.0 * unit,
            4.0 * unit,
        ));
        canvas.painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            *name,
            FontId::proportional(13.0 * unit),
            Theme::with_opacity(Theme::mix(theme.purple, theme.heading_color, 0.5), opacity),
        );
        canvas.painter.text(
            center + egui::vec2(0.0, radius + 8.0 * unit),
            egui::Align2::CENTER_TOP,
            "Resource Domain",
            FontId::proportional(11.0 * unit),
            Theme::with_opacity(theme.muted, opacity * 0.8),
        );

        hotspots.push(Hotspot {
            id,
            rect: egui::Rect::from_center_size(center, egui::vec2(2.0 * radius, 2.0 * radius)),
            label: format!("{name}: independent administrative domain"),
        });
    }

    canvas.caption("Loose Coupling via WAN / Middleware", ui);
    hotspots
}

fn draw_cloud(canvas: &Canvas<'_>, alpha: f32) {
    if alpha <= 0.0 {
        return;
    }
    let size = egui::vec2(300.0, 200.0) * canvas.unit;
    let origin = canvas.center() - size / 2.0;
    let map = |(x, y): (f32, f32)| origin + egui::vec2(x / 100.0 * size.x, y / 100.0 * size.y);

    let mut outline = Vec::new();
    let mut from = map(CLOUD_START);
    for (ctrl, to) in CLOUD {
        let to = map(to);
        let mut segment = sample_quad(from, map(ctrl), to, 8);
        segment.pop();
        outline.extend(segment);
        from = to;
    }

    // the cloud is star-shaped around its middle, so a fan fills it
    let color = Theme::with_opacity(Color32::WHITE, canvas.opacity * alpha);
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(map((50.0, 45.0)), color);
    for p in &outline {
        mesh.colored_vertex(*p, color);
    }
    let n = outline.len() as u32;
    for i in 0..n {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }
    canvas.painter.add(egui::Shape::mesh(mesh));
}

/// Dashed arc over the outer sites, with a tracer that redraws it every loop.
fn draw_arc(canvas: &Canvas<'_>) {
    let theme = canvas.theme;
    let unit = canvas.unit;
    let appear_t = appear(canvas.age, 0.6, 0.6);
    if appear_t <= 0.0 {
        return;
    }
    let lift = -SITE_RADIUS;
    let start = canvas.pos(site_offset(0), lift);
    let end = canvas.pos(site_offset(SITES.len() - 1), lift);
    let ctrl = canvas.pos(0.0, lift - 100.0);
    let path = sample_quad(start, ctrl, end, 48);
    let opacity = canvas.opacity * appear_t;

    canvas.painter.extend(egui::Shape::dashed_line(
        &path,
        egui::Stroke::new(1.5 * unit, Theme::with_opacity(theme.purple, opacity * 0.25)),
        5.0 * unit,
        5.0 * unit,
    ));

    let drawn = loop_phase(canvas.time, ARC_PERIOD);
    let count = ((path.len() - 1) as f32 * drawn).round() as usize + 1;
    if count >= 2 {
        canvas.painter.extend(egui::Shape::dashed_line(
            &path[..count],
            egui::Stroke::new(2.0 * unit, Theme::with_opacity(theme.purple, opacity)),
            5.0 * unit,
            5.0 * unit,
        ));
    }
}

fn circle_points(center: Pos2, radius: f32, segments: usize) -> Vec<Pos2> {
    (0..=segments)
        .map(|i| {
            let a = i as f32 / segments as f32 * std::f32::consts::TAU;
            center + egui::vec2(a.cos(), a.sin()) * radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_offsets_centre_the_middle_site() {
        assert_eq!(site_offset(0), -160.0);
        assert_eq!(site_offset(1), 0.0);
        assert_eq!(site_offset(2), 160.0);
    }

    #[test]
    fn test_quad_endpoints() {
        let a = Pos2::new(0.0, 0.0);
        let c = Pos2::new(5.0, 10.0);
        let b = Pos2::new(10.0, 0.0);
        assert_eq!(quad(a, c, b, 0.0), a);
        assert_eq!(quad(a, c, b, 1.0), b);
        assert_eq!(quad(a, c, b, 0.5), Pos2::new(5.0, 5.0));
    }

    #[test]
    fn test_cloud_outline_is_closed() {
        let last = CLOUD[CLOUD.len() - 1].1;
        assert_eq!(last, CLOUD_START);
    }
}
