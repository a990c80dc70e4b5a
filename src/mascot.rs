use std::f64::consts::PI;

use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::motion::{Coordinate, Interpolator, SafeArea};
use crate::section::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MascotKind {
    Fish,
    Spaceship,
}

impl MascotKind {
    pub fn profile(self) -> &'static MascotProfile {
        match self {
            MascotKind::Fish => &FISH,
            MascotKind::Spaceship => &SPACESHIP,
        }
    }
}

/// Movement and presentation constants for one mascot.
#[derive(Debug)]
pub struct MascotProfile {
    pub kind: MascotKind,
    pub emoji: &'static str,
    pub verb: &'static str,
    pub tick_ms: u64,
    pub damping: f64,
    pub wander_ms: u64,
    pub jitter: (f64, f64),
    /// Percent the label floats above the mascot, and its minimum top.
    pub label_offset: f64,
    pub label_min_top: f64,
    pub burst: BurstProfile,
    anchors: [Coordinate; 5],
}

/// Click feedback: `count` particles released `stagger_ms` apart.
#[derive(Debug)]
pub struct BurstProfile {
    pub count: usize,
    pub stagger_ms: u64,
    pub lifetime_ms: u64,
    pub glow_ms: Option<u64>,
}

static FISH: MascotProfile = MascotProfile {
    kind: MascotKind::Fish,
    emoji: "🐠",
    verb: "swimming",
    tick_ms: 50,
    damping: 0.02,
    wander_ms: 4000,
    jitter: (15.0, 15.0),
    label_offset: 10.0,
    label_min_top: 3.0,
    burst: BurstProfile {
        count: 8,
        stagger_ms: 80,
        lifetime_ms: 2000,
        glow_ms: None,
    },
    // indexed by Section::ALL order
    anchors: [
        Coordinate::new(20.0, 30.0),
        Coordinate::new(80.0, 40.0),
        Coordinate::new(15.0, 60.0),
        Coordinate::new(75.0, 25.0),
        Coordinate::new(30.0, 70.0),
    ],
};

static SPACESHIP: MascotProfile = MascotProfile {
    kind: MascotKind::Spaceship,
    emoji: "🚀",
    verb: "flying",
    tick_ms: 30,
    damping: 0.05,
    wander_ms: 3000,
    jitter: (15.0, 15.0),
    label_offset: 12.0,
    label_min_top: 5.0,
    burst: BurstProfile {
        count: 12,
        stagger_ms: 50,
        lifetime_ms: 1500,
        glow_ms: Some(1000),
    },
    anchors: [
        Coordinate::new(75.0, 25.0),
        Coordinate::new(25.0, 35.0),
        Coordinate::new(80.0, 60.0),
        Coordinate::new(20.0, 70.0),
        Coordinate::new(70.0, 45.0),
    ],
};

impl MascotProfile {
    pub fn anchor(&self, section: Section) -> Coordinate {
        let index = Section::ALL
            .iter()
            .position(|s| *s == section)
            .unwrap_or_default();
        self.anchors[index]
    }

    /// Where the mascot heads as soon as `section` becomes active.
    pub fn section_target(&self, section: Section, area: &SafeArea) -> Coordinate {
        area.clamp(self.anchor(section))
    }

    /// Idle drift around the section anchor.
    pub fn wander_target<R: Rng>(
        &self,
        section: Section,
        area: &SafeArea,
        rng: &mut R,
    ) -> Coordinate {
        let base = self.anchor(section);
        let (range_x, range_y) = self.jitter;
        area.clamp(Coordinate {
            x: base.x + (rng.random::<f64>() - 0.5) * range_x,
            y: base.y + (rng.random::<f64>() - 0.5) * range_y,
        })
    }

    /// Anywhere in the safe area, ignoring the active section.
    pub fn free_roam_target<R: Rng>(&self, area: &SafeArea, rng: &mut R) -> Coordinate {
        Coordinate {
            x: area.x.start() + rng.random::<f64>() * area.width(),
            y: area.y.start() + rng.random::<f64>() * area.height(),
        }
    }

    /// Top of the section label, kept clear of the viewport edge.
    pub fn label_top(&self, position: Coordinate) -> f64 {
        (position.y - self.label_offset).max(self.label_min_top)
    }

    pub fn label_text(&self, section: Section) -> String {
        match self.kind {
            MascotKind::Fish => format!("{} {} | Full Stack Developer", self.emoji, section.label()),
            MascotKind::Spaceship => format!("{} {}", self.emoji, section.label()),
        }
    }

    /// Particles released by a click at `origin`.
    pub fn burst<R: Rng>(&self, origin: Coordinate, rng: &mut R) -> Vec<Particle> {
        let count = self.burst.count;
        (0..count)
            .map(|i| {
                let (angle, distance, spread) = match self.kind {
                    // bubbles drift mostly upward
                    MascotKind::Fish => (
                        PI / 6.0 + (rng.random::<f64>() - 0.5) * (PI / 3.0),
                        40.0 + rng.random::<f64>() * 30.0,
                        (0.2, -0.3),
                    ),
                    MascotKind::Spaceship => (
                        (i as f64 / count as f64) * PI * 2.0,
                        60.0 + rng.random::<f64>() * 40.0,
                        (0.3, 0.3),
                    ),
                };
                Particle {
                    start: origin,
                    end: Coordinate {
                        x: origin.x + angle.cos() * distance * spread.0,
                        y: origin.y + angle.sin() * distance * spread.1,
                    },
                    delay_ms: i as u64 * self.burst.stagger_ms,
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub start: Coordinate,
    pub end: Coordinate,
    pub delay_ms: u64,
}

/// What moved the target last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retarget {
    Section(Section),
    Wander(Section),
    Click,
}

/// A mascot roaming the viewport: section tracking, idle wandering and
/// click-driven free roam on top of one [`Interpolator`].
///
/// A click wins over idle wandering: wander requests are ignored until a
/// full wander interval has passed since the last click.
#[derive(Debug, Clone)]
pub struct Roamer {
    profile: &'static MascotProfile,
    motion: Interpolator,
    section: Section,
    last_click_ms: Option<f64>,
    rng: SmallRng,
}

impl Roamer {
    pub fn new(kind: MascotKind, seed: u64) -> Self {
        let area = SafeArea::default();
        let profile = kind.profile();
        Self {
            profile,
            motion: Interpolator::new(area.center(), profile.damping, area),
            section: Section::default(),
            last_click_ms: None,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn profile(&self) -> &'static MascotProfile {
        self.profile
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn current(&self) -> Coordinate {
        self.motion.current()
    }

    pub fn target(&self) -> Coordinate {
        self.motion.target()
    }

    pub fn tick(&mut self) -> Coordinate {
        self.motion.tick()
    }

    pub fn enter_section(&mut self, section: Section) -> Coordinate {
        self.section = section;
        let target = self.profile.section_target(section, self.motion.area());
        self.motion.retarget(target);
        self.log(Retarget::Section(section));
        target
    }

    pub fn wander(&mut self, now_ms: f64) -> Option<Coordinate> {
        if let Some(clicked) = self.last_click_ms {
            if now_ms - clicked < self.profile.wander_ms as f64 {
                return None;
            }
        }
        let target = self
            .profile
            .wander_target(self.section, self.motion.area(), &mut self.rng);
        self.motion.retarget(target);
        self.log(Retarget::Wander(self.section));
        Some(target)
    }

    pub fn click(&mut self, now_ms: f64) -> Coordinate {
        self.last_click_ms = Some(now_ms);
        let previous = self.motion.target();
        let mut target = self.profile.free_roam_target(self.motion.area(), &mut self.rng);
        if target == previous {
            target = self.profile.free_roam_target(self.motion.area(), &mut self.rng);
        }
        self.motion.retarget(target);
        self.log(Retarget::Click);
        target
    }

    pub fn burst(&mut self) -> Vec<Particle> {
        let origin = self.motion.current();
        self.profile.burst(origin, &mut self.rng)
    }

    fn log(&self, cause: Retarget) {
        let target = self.motion.target();
        log::debug!(
            "{} {} toward {:.1}%, {:.1}% ({:?})",
            self.profile.emoji,
            self.profile.verb,
            target.x,
            target.y,
            cause,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_targets_match_anchors() {
        let area = SafeArea::default();
        let fish = MascotKind::Fish.profile();
        assert_eq!(fish.section_target(Section::About, &area), Coordinate::new(80.0, 40.0));
        let ship = MascotKind::Spaceship.profile();
        assert_eq!(ship.section_target(Section::Projects, &area), Coordinate::new(20.0, 70.0));

        for kind in [MascotKind::Fish, MascotKind::Spaceship] {
            for section in Section::ALL {
                assert!(area.contains(&kind.profile().anchor(section)));
            }
        }
    }

    #[test]
    fn test_wander_is_deterministic_for_seed() {
        let area = SafeArea::default();
        let profile = MascotKind::Fish.profile();
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);

        let first = profile.wander_target(Section::Skills, &area, &mut a);
        let second = profile.wander_target(Section::Skills, &area, &mut b);
        assert_eq!(first, second);
    }

    #[test]
    fn test_wander_stays_near_anchor_and_in_area() {
        let area = SafeArea::default();
        let mut rng = SmallRng::seed_from_u64(42);
        for kind in [MascotKind::Fish, MascotKind::Spaceship] {
            let profile = kind.profile();
            for section in Section::ALL {
                let anchor = profile.anchor(section);
                for _ in 0..50 {
                    let t = profile.wander_target(section, &area, &mut rng);
                    assert!(area.contains(&t));
                    assert!((t.x - anchor.x).abs() <= profile.jitter.0 / 2.0);
                    assert!((t.y - anchor.y).abs() <= profile.jitter.1 / 2.0);
                }
            }
        }
    }

    #[test]
    fn test_ticks_stay_in_safe_area() {
        let mut roamer = Roamer::new(MascotKind::Spaceship, 3);
        let area = SafeArea::default();
        let mut now = 0.0;
        for step in 0..2000 {
            if step % 100 == 0 {
                roamer.enter_section(Section::ALL[(step / 100) % 5]);
            }
            if step % 37 == 0 {
                roamer.wander(now);
            }
            if step % 211 == 0 {
                roamer.click(now);
            }
            assert!(area.contains(&roamer.tick()));
            now += 30.0;
        }
    }

    #[test]
    fn test_click_picks_new_target_mid_flight() {
        let mut roamer = Roamer::new(MascotKind::Fish, 11);
        roamer.enter_section(Section::Contact);
        for _ in 0..5 {
            roamer.tick();
        }
        let before = roamer.target();
        let in_flight = roamer.current();

        let clicked = roamer.click(1000.0);
        assert_ne!(clicked, before);
        assert_eq!(roamer.target(), clicked);
        // the position itself does not jump
        assert_eq!(roamer.current(), in_flight);
        assert!(SafeArea::default().contains(&clicked));
    }

    #[test]
    fn test_click_preempts_idle_wander() {
        let mut roamer = Roamer::new(MascotKind::Fish, 5);
        let clicked = roamer.click(10_000.0);

        // wander timer fires right after the click
        assert_eq!(roamer.wander(10_500.0), None);
        assert_eq!(roamer.target(), clicked);
        assert_eq!(roamer.wander(13_999.0), None);

        // a full interval later wandering resumes
        assert!(roamer.wander(14_000.0).is_some());
    }

    #[test]
    fn test_section_change_overrides_click() {
        let mut roamer = Roamer::new(MascotKind::Spaceship, 5);
        roamer.click(0.0);
        let target = roamer.enter_section(Section::About);
        assert_eq!(target, Coordinate::new(25.0, 35.0));
        assert_eq!(roamer.section(), Section::About);
    }

    #[test]
    fn test_burst_shapes() {
        let mut rng = SmallRng::seed_from_u64(1);
        let origin = Coordinate::new(50.0, 50.0);

        let bubbles = MascotKind::Fish.profile().burst(origin, &mut rng);
        assert_eq!(bubbles.len(), 8);
        assert_eq!(bubbles[7].delay_ms, 7 * 80);
        assert!(bubbles.iter().all(|p| p.end.y < origin.y));

        let stars = MascotKind::Spaceship.profile().burst(origin, &mut rng);
        assert_eq!(stars.len(), 12);
        assert_eq!(stars[11].delay_ms, 11 * 50);
        // first star heads straight right
        assert!(stars[0].end.x > origin.x);
        assert!((stars[0].end.y - origin.y).abs() < 1e-9);
    }

    #[test]
    fn test_label_placement() {
        let fish = MascotKind::Fish.profile();
        assert_eq!(fish.label_top(Coordinate::new(50.0, 40.0)), 30.0);
        assert_eq!(fish.label_top(Coordinate::new(50.0, 8.0)), 3.0);
        assert_eq!(
            fish.label_text(Section::Projects),
            "🐠 Projects | Full Stack Developer"
        );
        let ship = MascotKind::Spaceship.profile();
        assert_eq!(ship.label_top(Coordinate::new(50.0, 10.0)), 5.0);
        assert_eq!(ship.label_text(Section::Home), "🚀 Home");
    }
}
