//! Animated net background simulation
//!
//! A `points × points` grid of slowly drifting points. Points closer than
//! `max_distance` are linked, and with `mouse_controls` on the pointer is
//! linked to nearby points too. The dashboard never reads this back; the TUI
//! only draws it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::config::BackgroundSettings;

const MAX_SPEED: f64 = 0.35;

/// Upper bound on `points`; links are computed pairwise every frame
pub const MAX_POINTS_PER_SIDE: u16 = 32;

/// A drifting point in field coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetPoint {
    pub x: f64,
    pub y: f64,
    vx: f64,
    vy: f64,
}

/// The net simulation
#[derive(Debug, Clone)]
pub struct NetField {
    points: Vec<NetPoint>,
    width: f64,
    height: f64,
    max_distance: f64,
    mouse_controls: bool,
    pointer: Option<(f64, f64)>,
    rng: StdRng,
}

impl NetField {
    pub fn new(settings: &BackgroundSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Deterministic field for tests and reproducible demos
    pub fn seeded(settings: &BackgroundSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: &BackgroundSettings, mut rng: StdRng) -> Self {
        let scale = if settings.scale > 0.0 { settings.scale } else { 1.0 };
        let spacing = settings.spacing.max(1.0) * scale;
        if settings.points > MAX_POINTS_PER_SIDE {
            warn!(
                "background.points = {} is too dense, using {}",
                settings.points, MAX_POINTS_PER_SIDE
            );
        }
        let per_side = usize::from(settings.points.min(MAX_POINTS_PER_SIDE));
        let size = spacing * per_side as f64;

        let mut points = Vec::with_capacity(per_side * per_side);
        for row in 0..per_side {
            for col in 0..per_side {
                let jitter_x = rng.gen_range(-0.4..=0.4) * spacing;
                let jitter_y = rng.gen_range(-0.4..=0.4) * spacing;
                points.push(NetPoint {
                    x: ((col as f64 + 0.5) * spacing + jitter_x).clamp(0.0, size),
                    y: ((row as f64 + 0.5) * spacing + jitter_y).clamp(0.0, size),
                    vx: rng.gen_range(-MAX_SPEED..=MAX_SPEED) * scale,
                    vy: rng.gen_range(-MAX_SPEED..=MAX_SPEED) * scale,
                });
            }
        }

        Self {
            points,
            width: size,
            height: size,
            max_distance: settings.max_distance * scale,
            mouse_controls: settings.mouse_controls,
            pointer: None,
            rng,
        }
    }

    pub fn points(&self) -> &[NetPoint] {
        &self.points
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    /// Move every point one step, bouncing off the field edges
    pub fn tick(&mut self) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.points {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > width {
                p.vx = -p.vx;
                p.x = p.x.clamp(0.0, width);
            }
            if p.y < 0.0 || p.y > height {
                p.vy = -p.vy;
                p.y = p.y.clamp(0.0, height);
            }
        }

        // Occasional nudge keeps the net from settling into straight lines
        if !self.points.is_empty() && self.rng.gen_bool(0.05) {
            let idx = self.rng.gen_range(0..self.points.len());
            let p = &mut self.points[idx];
            p.vx = (p.vx + self.rng.gen_range(-0.1..=0.1)).clamp(-MAX_SPEED, MAX_SPEED);
            p.vy = (p.vy + self.rng.gen_range(-0.1..=0.1)).clamp(-MAX_SPEED, MAX_SPEED);
        }
    }

    /// Track the pointer, given as a fraction of the drawn area.
    /// Ignored unless mouse controls are enabled.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        if !self.mouse_controls {
            return;
        }
        self.pointer = Some((
            x.clamp(0.0, 1.0) * self.width,
            y.clamp(0.0, 1.0) * self.height,
        ));
    }

    /// Index pairs `(a, b)` with `a < b` of points closer than `max_distance`
    pub fn links(&self) -> Vec<(usize, usize)> {
        let limit = self.max_distance * self.max_distance;
        let mut links = Vec::new();
        for (a, pa) in self.points.iter().enumerate() {
            for (offset, pb) in self.points[a + 1..].iter().enumerate() {
                if distance_sq(pa.x, pa.y, pb.x, pb.y) < limit {
                    links.push((a, a + 1 + offset));
                }
            }
        }
        links
    }

    /// Indices of points linked to the pointer
    pub fn pointer_links(&self) -> Vec<usize> {
        let Some((px, py)) = self.pointer else {
            return Vec::new();
        };
        let limit = self.max_distance * self.max_distance;
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| distance_sq(p.x, p.y, px, py) < limit)
            .map(|(i, _)| i)
            .collect()
    }
}

fn distance_sq(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_has_points_squared() {
        let field = NetField::seeded(&BackgroundSettings::default(), 7);
        assert_eq!(field.points().len(), 144);
        assert_eq!(field.width(), 12.0 * 18.0);
    }

    #[test]
    fn test_dense_grid_is_clamped() {
        let settings = BackgroundSettings {
            points: 300,
            ..BackgroundSettings::default()
        };
        let field = NetField::seeded(&settings, 7);
        let per_side = usize::from(MAX_POINTS_PER_SIDE);
        assert_eq!(field.points().len(), per_side * per_side);
    }

    #[test]
    fn test_points_stay_inside_field() {
        let mut field = NetField::seeded(&BackgroundSettings::default(), 42);
        for _ in 0..2_000 {
            field.tick();
        }
        for p in field.points() {
            assert!((0.0..=field.width()).contains(&p.x));
            assert!((0.0..=field.height()).contains(&p.y));
        }
    }

    #[test]
    fn test_links_respect_max_distance() {
        let settings = BackgroundSettings::default();
        let field = NetField::seeded(&settings, 3);
        let links = field.links();
        assert!(!links.is_empty());
        for (a, b) in links {
            assert!(a < b);
            let (pa, pb) = (field.points()[a], field.points()[b]);
            assert!(distance_sq(pa.x, pa.y, pb.x, pb.y).sqrt() < settings.max_distance);
        }
    }

    #[test]
    fn test_pointer_ignored_without_mouse_controls() {
        let settings = BackgroundSettings {
            mouse_controls: false,
            ..Default::default()
        };
        let mut field = NetField::seeded(&settings, 1);
        field.set_pointer(0.5, 0.5);
        assert_eq!(field.pointer(), None);
        assert!(field.pointer_links().is_empty());
    }

    #[test]
    fn test_pointer_links_nearby_points() {
        let mut field = NetField::seeded(&BackgroundSettings::default(), 9);
        field.set_pointer(0.5, 0.5);
        let (px, py) = field.pointer().unwrap();
        assert_eq!((px, py), (108.0, 108.0));
        assert!(!field.pointer_links().is_empty());
    }

    #[test]
    fn test_zero_points_is_empty_field() {
        let settings = BackgroundSettings {
            points: 0,
            ..Default::default()
        };
        let mut field = NetField::seeded(&settings, 0);
        field.tick();
        assert!(field.points().is_empty());
        assert!(field.links().is_empty());
    }
}
