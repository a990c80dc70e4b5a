use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named regions of the page, in scan priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Order the sections appear on the page and in navigation.
    pub const PAGE_ORDER: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Anchor id of the section element, also used for `#fragment` links.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct ParseSectionError(String);

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

/// Absolute vertical extent of a section anchor, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y <= self.bottom()
    }
}

/// Tracks which section sits at the vertical centre of the viewport.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    active: Section,
}

impl ScrollTracker {
    pub fn new(initial: Section) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Feeds one scroll reading. `bounds` is asked for each section in
    /// priority order and returns `None` when the anchor is not on the page.
    ///
    /// Returns the newly active section only when it changed. When nothing
    /// brackets the viewport centre the previous section stays active.
    pub fn observe<F>(&mut self, scroll_y: f64, viewport_height: f64, mut bounds: F) -> Option<Section>
    where
        F: FnMut(Section) -> Option<SectionBounds>,
    {
        let reference = scroll_y + viewport_height / 2.0;
        let hit = Section::ALL
            .into_iter()
            .find(|section| bounds(*section).is_some_and(|b| b.contains(reference)))?;
        if hit == self.active {
            return None;
        }
        self.active = hit;
        Some(hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Page layout in render order: each section is 800px tall.
    fn page_layout(section: Section) -> Option<SectionBounds> {
        let top = match section {
            Section::Home => 0.0,
            Section::About => 800.0,
            Section::Projects => 1600.0,
            Section::Skills => 2400.0,
            Section::Contact => 3200.0,
        };
        Some(SectionBounds::new(top, 800.0))
    }

    #[test]
    fn test_section_round_trip() {
        for section in Section::ALL {
            let parsed: Section = section.to_string().parse().unwrap();
            assert_eq!(parsed, section);
        }
        assert!("footer".parse::<Section>().is_err());
        assert_eq!(Section::Projects.href(), "#projects");
        assert_eq!(Section::Skills.label(), "Skills");
    }

    #[test]
    fn test_observe_reports_changes_only() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.active(), Section::Home);

        // centre at 400 -> still home
        assert_eq!(tracker.observe(0.0, 800.0, page_layout), None);

        // centre at 1200 -> about
        assert_eq!(tracker.observe(800.0, 800.0, page_layout), Some(Section::About));
        assert_eq!(tracker.observe(850.0, 800.0, page_layout), None);
        assert_eq!(tracker.active(), Section::About);
    }

    #[test]
    fn test_scroll_home_to_projects_changes_once() {
        let mut tracker = ScrollTracker::default();
        let mut changes = Vec::new();

        // Jump straight from home to the middle of projects, with a burst of
        // intermediate scroll events landing inside projects.
        for scroll_y in [0.0, 10.0, 1400.0, 1450.0, 1500.0, 1550.0, 1580.0] {
            if let Some(section) = tracker.observe(scroll_y, 800.0, page_layout) {
                changes.push(section);
            }
        }

        assert_eq!(changes, vec![Section::Projects]);
    }

    #[test]
    fn test_gap_keeps_previous_section() {
        let with_gap = |section: Section| match section {
            Section::Home => Some(SectionBounds::new(0.0, 500.0)),
            Section::About => Some(SectionBounds::new(1500.0, 500.0)),
            _ => None,
        };
        let mut tracker = ScrollTracker::new(Section::Home);

        // centre at 1000 lands between home and about
        assert_eq!(tracker.observe(600.0, 800.0, with_gap), None);
        assert_eq!(tracker.active(), Section::Home);

        assert_eq!(tracker.observe(1400.0, 800.0, with_gap), Some(Section::About));
        assert_eq!(tracker.observe(600.0, 800.0, with_gap), None);
        assert_eq!(tracker.active(), Section::About);
    }

    #[test]
    fn test_priority_order_on_shared_edge() {
        // skills and projects share the edge at 1000; skills is scanned first
        let touching = |section: Section| match section {
            Section::Skills => Some(SectionBounds::new(0.0, 1000.0)),
            Section::Projects => Some(SectionBounds::new(1000.0, 1000.0)),
            _ => None,
        };
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.observe(600.0, 800.0, touching), Some(Section::Skills));
    }
}
