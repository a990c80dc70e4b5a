use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A position in viewport percentages.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Coordinate) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Rectangle that keeps roaming elements clear of the viewport edges and
/// the sticky navbar.
#[derive(Debug, Clone, PartialEq)]
pub struct SafeArea {
    pub x: RangeInclusive<f64>,
    pub y: RangeInclusive<f64>,
}

impl Default for SafeArea {
    fn default() -> Self {
        Self {
            x: 15.0..=85.0,
            y: 25.0..=75.0,
        }
    }
}

impl SafeArea {
    pub fn clamp(&self, point: Coordinate) -> Coordinate {
        Coordinate {
            x: point.x.clamp(*self.x.start(), *self.x.end()),
            y: point.y.clamp(*self.y.start(), *self.y.end()),
        }
    }

    pub fn contains(&self, point: &Coordinate) -> bool {
        self.x.contains(&point.x) && self.y.contains(&point.y)
    }

    pub fn center(&self) -> Coordinate {
        Coordinate {
            x: (self.x.start() + self.x.end()) / 2.0,
            y: (self.y.start() + self.y.end()) / 2.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.x.end() - self.x.start()
    }

    pub fn height(&self) -> f64 {
        self.y.end() - self.y.start()
    }
}

/// Damped chase of `current` toward `target`.
///
/// Each tick closes a fixed fraction `damping` of the remaining gap on both
/// axes at once. The chase never finishes; a new target simply becomes the
/// next thing to chase from wherever `current` is.
#[derive(Debug, Clone)]
pub struct Interpolator {
    current: Coordinate,
    target: Coordinate,
    damping: f64,
    area: SafeArea,
}

impl Interpolator {
    pub fn new(start: Coordinate, damping: f64, area: SafeArea) -> Self {
        let start = area.clamp(start);
        Self {
            current: start,
            target: start,
            damping: damping.clamp(f64::EPSILON, 1.0),
            area,
        }
    }

    pub fn current(&self) -> Coordinate {
        self.current
    }

    pub fn target(&self) -> Coordinate {
        self.target
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn area(&self) -> &SafeArea {
        &self.area
    }

    pub fn retarget(&mut self, target: Coordinate) {
        self.target = self.area.clamp(target);
    }

    pub fn tick(&mut self) -> Coordinate {
        let next = Coordinate {
            x: self.current.x + (self.target.x - self.current.x) * self.damping,
            y: self.current.y + (self.target.y - self.current.y) * self.damping,
        };
        self.current = self.area.clamp(next);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_tick_moves_fraction_of_gap() {
        let mut interp = Interpolator::new(Coordinate::new(50.0, 50.0), 0.05, SafeArea::default());
        interp.retarget(Coordinate::new(70.0, 30.0));

        let next = interp.tick();
        assert_close(next.x, 51.0);
        assert_close(next.y, 49.0);

        // both axes advance on the same tick
        let next = interp.tick();
        assert!(next.x > 51.0 && next.y < 49.0);
    }

    #[test]
    fn test_approaches_target_without_reaching_past_it() {
        let mut interp = Interpolator::new(Coordinate::new(20.0, 30.0), 0.02, SafeArea::default());
        let target = Coordinate::new(80.0, 70.0);
        interp.retarget(target);

        let mut last = interp.current().distance(&target);
        for _ in 0..500 {
            let now = interp.tick().distance(&target);
            assert!(now <= last);
            last = now;
        }
        assert!(last < 0.01);
        assert!(interp.current().x <= target.x + 1e-9);
        assert!(interp.current().y <= target.y + 1e-9);
    }

    #[test]
    fn test_targets_are_clamped() {
        let mut interp = Interpolator::new(Coordinate::new(0.0, 100.0), 0.5, SafeArea::default());
        assert_eq!(interp.current(), Coordinate::new(15.0, 75.0));

        interp.retarget(Coordinate::new(-40.0, 300.0));
        assert_eq!(interp.target(), Coordinate::new(15.0, 75.0));

        interp.retarget(Coordinate::new(99.0, 1.0));
        assert_eq!(interp.target(), Coordinate::new(85.0, 25.0));
    }

    #[test]
    fn test_current_stays_in_safe_area() {
        let area = SafeArea::default();
        let mut interp = Interpolator::new(area.center(), 1.0, area.clone());
        let corners = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(100.0, 0.0),
            Coordinate::new(100.0, 100.0),
            Coordinate::new(0.0, 100.0),
        ];
        for corner in corners.iter().cycle().take(40) {
            interp.retarget(*corner);
            for _ in 0..3 {
                assert!(area.contains(&interp.tick()));
            }
        }
    }

    #[test]
    fn test_retarget_mid_flight_is_continuous() {
        let mut interp = Interpolator::new(Coordinate::new(50.0, 50.0), 0.05, SafeArea::default());
        interp.retarget(Coordinate::new(85.0, 75.0));
        for _ in 0..10 {
            interp.tick();
        }
        let before = interp.current();

        interp.retarget(Coordinate::new(15.0, 25.0));
        assert_eq!(interp.current(), before);

        let after = interp.tick();
        let max_step_x = interp.damping() * (15.0 - before.x).abs();
        let max_step_y = interp.damping() * (25.0 - before.y).abs();
        assert!((after.x - before.x).abs() <= max_step_x + 1e-9);
        assert!((after.y - before.y).abs() <= max_step_y + 1e-9);
    }
}
