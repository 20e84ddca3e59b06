/// Seconds for the outgoing slide to leave, and again for the incoming one to enter.
pub const PHASE_DURATION: f32 = 0.5;
/// Horizontal travel of a slide while it fades, at the reference size.
pub const TRAVEL: f32 = 50.0;

/// An exit-then-enter slide change. The outgoing slide fully leaves before the
/// incoming one appears, so at most one slide is on stage at any moment.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideTransition {
    pub from: usize,
    pub to: usize,
    elapsed: f32,
}

/// What the stage should paint this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageFrame {
    pub slide: usize,
    pub opacity: f32,
    /// Offset in reference units; negative is to the left.
    pub offset_x: f32,
    /// Whether the painted slide accepts clicks on its own controls.
    pub interactive: bool,
}

impl SlideTransition {
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(PHASE_DURATION * 2.0);
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= PHASE_DURATION * 2.0
    }

    fn is_exiting(&self) -> bool {
        self.elapsed < PHASE_DURATION
    }

    /// Point the transition at a new destination.
    ///
    /// While the old slide is still leaving only the destination changes. Once the
    /// incoming slide is on stage, it becomes the slide that leaves next.
    pub fn retarget(&mut self, to: usize) {
        if self.is_exiting() {
            self.to = to;
        } else {
            let visible = self.to;
            let entered = self.elapsed - PHASE_DURATION;
            self.from = visible;
            self.to = to;
            // resume the exit from the incoming slide's current opacity
            self.elapsed = (PHASE_DURATION - entered).max(0.0);
        }
    }

    pub fn frame(&self) -> StageFrame {
        if self.is_exiting() {
            let p = ease_slide(self.elapsed / PHASE_DURATION);
            StageFrame {
                slide: self.from,
                opacity: 1.0 - p,
                offset_x: -TRAVEL * p,
                interactive: false,
            }
        } else {
            let p = ease_slide((self.elapsed - PHASE_DURATION) / PHASE_DURATION);
            StageFrame {
                slide: self.to,
                opacity: p,
                offset_x: TRAVEL * (1.0 - p),
                interactive: true,
            }
        }
    }
}

/// `cubic-bezier(0.32, 0.72, 0, 1)`: fast start, long settle.
pub fn ease_slide(t: f32) -> f32 {
    cubic_bezier(0.32, 0.72, 0.0, 1.0, t)
}

pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Overshooting ease-out that settles like a lightly damped spring.
pub fn ease_spring(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let c1 = 1.2;
    let c3 = c1 + 1.0;
    1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
}

/// Evaluate a CSS-style cubic bezier timing function at `x`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    if x == 0.0 || x == 1.0 {
        return x;
    }
    let bez = |a: f32, b: f32, t: f32| {
        let mt = 1.0 - t;
        3.0 * mt * mt * t * a + 3.0 * mt * t * t * b + t * t * t
    };
    let bez_dt = |a: f32, b: f32, t: f32| {
        let mt = 1.0 - t;
        3.0 * mt * mt * a + 6.0 * mt * t * (b - a) + 3.0 * t * t * (1.0 - b)
    };

    // Newton steps, falling back to bisection when the slope flattens
    let mut t = x;
    for _ in 0..8 {
        let err = bez(x1, x2, t) - x;
        if err.abs() < 1e-5 {
            return bez(y1, y2, t);
        }
        let d = bez_dt(x1, x2, t);
        if d.abs() < 1e-6 {
            break;
        }
        t = (t - err / d).clamp(0.0, 1.0);
    }
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    t = x;
    for _ in 0..32 {
        let v = bez(x1, x2, t);
        if (v - x).abs() < 1e-5 {
            break;
        }
        if v < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    bez(y1, y2, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints_and_monotonic() {
        assert_eq!(ease_slide(0.0), 0.0);
        assert_eq!(ease_slide(1.0), 1.0);
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_slide(i as f32 / 100.0);
            assert!(v >= prev - 1e-4, "not monotonic at {i}: {v} < {prev}");
            prev = v;
        }
        // front-loaded curve
        assert!(ease_slide(0.5) > 0.8);
    }

    #[test]
    fn test_ease_in_out_symmetry() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
    }

    #[test]
    fn test_ease_spring_overshoots_then_settles() {
        assert!(ease_spring(0.0).abs() < 1e-6);
        assert!((ease_spring(1.0) - 1.0).abs() < 1e-6);
        let peak = (1..100)
            .map(|i| ease_spring(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_exit_then_enter() {
        let mut t = SlideTransition::new(2, 3);
        let f = t.frame();
        assert_eq!(f.slide, 2);
        assert!(!f.interactive);
        assert_eq!(f.opacity, 1.0);

        t.tick(PHASE_DURATION + 0.01);
        let f = t.frame();
        assert_eq!(f.slide, 3);
        assert!(f.interactive);
        assert!(f.offset_x > 0.0);

        t.tick(PHASE_DURATION);
        assert!(t.is_complete());
        let f = t.frame();
        assert_eq!(f.slide, 3);
        assert_eq!(f.opacity, 1.0);
        assert_eq!(f.offset_x, 0.0);
    }

    #[test]
    fn test_retarget_while_exiting_keeps_outgoing_slide() {
        let mut t = SlideTransition::new(0, 1);
        t.tick(0.2);
        t.retarget(2);
        assert_eq!(t.from, 0);
        assert_eq!(t.to, 2);
        assert_eq!(t.frame().slide, 0);
    }

    #[test]
    fn test_retarget_while_entering_exits_visible_slide() {
        let mut t = SlideTransition::new(0, 1);
        t.tick(PHASE_DURATION + 0.1);
        t.retarget(2);
        assert_eq!(t.from, 1);
        assert_eq!(t.to, 2);
        let f = t.frame();
        assert_eq!(f.slide, 1);
        assert!(!f.interactive);
    }

    #[test]
    fn test_never_two_interactive_slides() {
        let mut t = SlideTransition::new(4, 5);
        let mut interactive_slides = std::collections::HashSet::new();
        while !t.is_complete() {
            let f = t.frame();
            if f.interactive {
                interactive_slides.insert(f.slide);
            }
            t.tick(0.05);
        }
        assert_eq!(interactive_slides.into_iter().collect::<Vec<_>>(), vec![5]);
    }
}
