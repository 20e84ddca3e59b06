pub mod chrome;
pub mod diagram;
pub mod layouts;
pub mod text;
pub mod transition;

use eframe::egui;

use crate::deck::{Slide, SlideContent};
use crate::nav::input::ClickRouter;
use crate::theme::Theme;

use diagram::playback::DiagramPlayback;

/// Where and how a slide is painted this frame.
#[derive(Debug, Clone, Copy)]
pub struct SlideFrame {
    pub rect: egui::Rect,
    pub opacity: f32,
    pub scale: f32,
    /// Seconds since the slide was mounted; drives one-shot entrance animations.
    pub age: f32,
}

impl SlideFrame {
    /// Entrance progress in `0..=1` for an element that starts after `delay`.
    pub fn appear(&self, delay: f32, duration: f32) -> f32 {
        appear(self.age, delay, duration)
    }
}

/// The mounted diagram of the slide being painted, if the slide has one.
pub struct DiagramSlot<'a> {
    pub playback: &'a mut DiagramPlayback,
    /// False while the slide is leaving the stage: painted, but not clickable.
    pub interactive: bool,
    pub clicks: &'a mut ClickRouter,
    pub id: egui::Id,
}

pub fn appear(age: f32, delay: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return if age >= delay { 1.0 } else { 0.0 };
    }
    ((age - delay) / duration).clamp(0.0, 1.0)
}

/// Reference-size scale factor for a 16:9 stage.
pub fn compute_scale(rect: egui::Rect) -> f32 {
    let ref_w = 1920.0;
    let ref_h = 1080.0;
    (rect.width() / ref_w).min(rect.height() / ref_h)
}

/// Largest 16:9 rect centred in `outer`.
pub fn letterbox(outer: egui::Rect) -> egui::Rect {
    let (w, h) = if outer.width() * 9.0 > outer.height() * 16.0 {
        (outer.height() * 16.0 / 9.0, outer.height())
    } else {
        (outer.width(), outer.width() * 9.0 / 16.0)
    };
    egui::Rect::from_center_size(outer.center(), egui::vec2(w, h))
}

/// Render a single slide using its layout.
pub fn render_slide(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    frame: &SlideFrame,
    diagram: Option<DiagramSlot<'_>>,
) {
    match slide.content {
        SlideContent::Intro {
            headline,
            tagline,
            team,
        } => layouts::intro::render(ui, headline, tagline, team, theme, frame),
        SlideContent::Definition {
            subtitle,
            definition,
            bullets,
            diagram: kind,
            diagram_first,
        } => layouts::definition::render(
            ui,
            slide.title,
            subtitle,
            definition,
            bullets,
            kind,
            diagram_first,
            theme,
            frame,
            diagram,
        ),
        SlideContent::Cards {
            subtitle,
            lead,
            cards,
        } => layouts::cards::render(ui, slide.title, subtitle, lead, cards, theme, frame),
        SlideContent::Comparison {
            subtitle,
            headers,
            rows,
        } => layouts::comparison::render(ui, slide.title, subtitle, &headers, rows, theme, frame),
        SlideContent::Conclusion { paragraphs, quote } => {
            layouts::conclusion::render(ui, slide.title, paragraphs, quote, theme, frame)
        }
        SlideContent::References { entries } => {
            layouts::references::render(ui, slide.title, entries, theme, frame)
        }
        SlideContent::Closing { headline, prompt } => {
            layouts::closing::render(ui, headline, prompt, theme, frame)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appear() {
        assert_eq!(appear(0.0, 0.5, 0.5), 0.0);
        assert_eq!(appear(0.75, 0.5, 0.5), 0.5);
        assert_eq!(appear(10.0, 0.5, 0.5), 1.0);
        assert_eq!(appear(0.5, 0.5, 0.0), 1.0);
    }

    #[test]
    fn test_letterbox_wide_window() {
        let outer = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(2000.0, 900.0));
        let stage = letterbox(outer);
        assert_eq!(stage.height(), 900.0);
        assert_eq!(stage.width(), 1600.0);
        assert_eq!(stage.center(), outer.center());
    }

    #[test]
    fn test_letterbox_tall_window() {
        let outer = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1600.0, 1600.0));
        let stage = letterbox(outer);
        assert_eq!(stage.width(), 1600.0);
        assert_eq!(stage.height(), 900.0);
    }

    #[test]
    fn test_compute_scale() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(960.0, 540.0));
        assert_eq!(compute_scale(rect), 0.5);
    }
}
