use serde::{Deserialize, Serialize};

/// Fraction of the viewport height used as the activation line for sections.
pub const VIEWPORT_SCROLL_THRESHOLD: f64 = 0.25;
/// How far, in px, before the end of the hero the navbar stops counting as "at top".
pub const NAVBAR_HERO_OFFSET: f64 = 100.0;

/// Page sections reachable from the navbar, in page order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Hero,
    About,
    Journey,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Journey,
        Section::Experience,
        Section::Contact,
    ];
}

/// Where a section's box currently sits relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub bottom: f64,
}

/// Keeps track of which section the navbar should mark as active.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTracker {
    active: Section,
}

impl ScrollTracker {
    pub fn new(active: Section) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Re-evaluate after a scroll.
    ///
    /// The first section, in page order, that crosses the activation line wins. When none
    /// does (sections missing from `bounds` are skipped) the previous section stays active.
    pub fn update(&mut self, viewport_height: f64, bounds: &[SectionBounds]) -> Section {
        if let Some(section) = detect_section(viewport_height, bounds) {
            self.active = section;
        }
        self.active
    }
}

pub fn detect_section(viewport_height: f64, bounds: &[SectionBounds]) -> Option<Section> {
    let threshold = viewport_height * VIEWPORT_SCROLL_THRESHOLD;

    Section::ALL.into_iter().find(|section| {
        bounds
            .iter()
            .find(|bound| bound.section == *section)
            .is_some_and(|bound| bound.top <= threshold && bound.bottom >= threshold * 0.5)
    })
}

/// Whether the page is still scrolled within the hero, which keeps the navbar expanded.
pub fn is_at_top(scroll_y: f64, hero_height: f64) -> bool {
    scroll_y < hero_height - NAVBAR_HERO_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(section: Section, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            section,
            top,
            bottom: top + height,
        }
    }

    #[test]
    fn hero_active_on_load() {
        let mut tracker = ScrollTracker::default();
        let layout = [bounds(Section::Hero, 0.0, 900.0), bounds(Section::About, 900.0, 800.0)];

        assert_eq!(tracker.update(800.0, &layout), Section::Hero);
    }

    #[test]
    fn section_crossing_the_line_becomes_active() {
        let mut tracker = ScrollTracker::default();
        // threshold is 200px, hero ends at 50px and about starts at 150px
        let layout = [
            bounds(Section::Hero, -850.0, 900.0),
            bounds(Section::About, 150.0, 800.0),
        ];

        assert_eq!(tracker.update(800.0, &layout), Section::About);
    }

    #[test]
    fn earlier_section_wins_while_still_visible() {
        let mut tracker = ScrollTracker::default();
        // hero bottom at 120px hasn't passed half the threshold (100px) yet
        let layout = [
            bounds(Section::Hero, -780.0, 900.0),
            bounds(Section::About, 120.0, 800.0),
        ];

        assert_eq!(tracker.update(800.0, &layout), Section::Hero);
    }

    #[test]
    fn keeps_previous_section_when_nothing_matches() {
        let mut tracker = ScrollTracker::new(Section::Journey);
        let layout = [bounds(Section::Experience, 500.0, 400.0)];

        assert_eq!(tracker.update(800.0, &layout), Section::Journey);
    }

    #[test]
    fn page_order_beats_bounds_order() {
        let layout = [
            bounds(Section::Contact, 0.0, 800.0),
            bounds(Section::Experience, 0.0, 800.0),
        ];

        assert_eq!(detect_section(800.0, &layout), Some(Section::Experience));
    }

    #[test]
    fn navbar_collapses_near_end_of_hero() {
        assert!(is_at_top(0.0, 900.0));
        assert!(is_at_top(799.0, 900.0));
        assert!(!is_at_top(800.0, 900.0));
        assert!(!is_at_top(1200.0, 900.0));
    }
}
