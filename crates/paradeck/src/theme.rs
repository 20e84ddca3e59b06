use eframe::egui::Color32;

/// Colours and type sizes of the deck, expressed at the 1920x1080 reference size.
#[derive(Debug, Clone)]
pub struct Theme {
    pub backdrop: Color32,
    pub background: Color32,
    pub surface: Color32,
    pub border: Color32,
    pub foreground: Color32,
    pub muted: Color32,
    pub heading_color: Color32,
    pub cyan: Color32,
    pub purple: Color32,
    pub green: Color32,
    pub hero_size: f32,
    pub h1_size: f32,
    pub subtitle_size: f32,
    pub body_size: f32,
    pub small_size: f32,
    pub mono_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Self {
            backdrop: Color32::BLACK,
            background: Color32::from_rgb(0x02, 0x06, 0x17),
            surface: Color32::from_rgb(0x1E, 0x29, 0x3B),
            border: Color32::from_rgb(0x33, 0x41, 0x55),
            foreground: Color32::from_rgb(0xCB, 0xD5, 0xE1),
            muted: Color32::from_rgb(0x94, 0xA3, 0xB8),
            heading_color: Color32::from_rgb(0xF1, 0xF5, 0xF9),
            cyan: Color32::from_rgb(0x22, 0xD3, 0xEE),
            purple: Color32::from_rgb(0xA8, 0x55, 0xF7),
            green: Color32::from_rgb(0x22, 0xC5, 0x5E),
            hero_size: 128.0,
            h1_size: 84.0,
            subtitle_size: 38.0,
            body_size: 34.0,
            small_size: 26.0,
            mono_size: 24.0,
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        let alpha = (color.a() as f32 * opacity.clamp(0.0, 1.0)) as u8;
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
    }

    /// Linear blend between two colours, used for the cyan→purple gradients.
    pub fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
        let t = t.clamp(0.0, 1.0);
        let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
        Color32::from_rgba_unmultiplied(
            lerp(a.r(), b.r()),
            lerp(a.g(), b.g()),
            lerp(a.b(), b.b()),
            lerp(a.a(), b.a()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_opacity() {
        let c = Theme::with_opacity(Color32::from_rgb(10, 20, 30), 0.5);
        assert_eq!(c.a(), 127);
        let hidden = Theme::with_opacity(Color32::WHITE, -1.0);
        assert_eq!(hidden.a(), 0);
    }

    #[test]
    fn test_mix_endpoints() {
        let theme = Theme::slate();
        assert_eq!(Theme::mix(theme.cyan, theme.purple, 0.0), theme.cyan);
        assert_eq!(Theme::mix(theme.cyan, theme.purple, 1.0), theme.purple);
    }
}
