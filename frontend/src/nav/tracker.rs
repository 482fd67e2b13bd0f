//! Active-section tracking for the sticky project navigation.
//!
//! The tracker knows nothing about the DOM. Visibility comes in through
//! [`ViewportObserver`] registrations and [`SectionTracker::on_visibility`]
//! batches; scrolling goes out through [`PageScroller`]. The browser-backed
//! implementations live in `nav::dom`.

use std::collections::HashSet;

/// One entry of the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: String,
    pub target_id: String,
}

impl NavigationItem {
    pub fn new(label: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target_id: target_id.into(),
        }
    }
}

/// The window a section has to enter before it counts as "in view".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdBand {
    /// Height hidden behind the fixed header and sticky nav.
    pub top_offset_px: f64,
    /// Bottom share of the viewport that never activates a section.
    pub bottom_cutoff_percent: f64,
    /// Fraction of the section that must sit inside the band.
    pub visible_ratio: f64,
    /// Breathing room left above a section after navigating to it.
    pub scroll_buffer_px: f64,
}

impl Default for ThresholdBand {
    fn default() -> Self {
        Self {
            top_offset_px: 140.0,
            bottom_cutoff_percent: 60.0,
            visible_ratio: 0.2,
            scroll_buffer_px: 16.0,
        }
    }
}

impl ThresholdBand {
    /// CSS margin string in the form `IntersectionObserver` expects.
    pub fn root_margin(&self) -> String {
        format!(
            "-{}px 0px -{}% 0px",
            self.top_offset_px, self.bottom_cutoff_percent
        )
    }

    /// Document offset to scroll to so the section lands just below the header.
    pub fn scroll_destination(&self, section_top: f64) -> f64 {
        section_top - self.top_offset_px + self.scroll_buffer_px
    }
}

/// A single record from a visibility notification batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityEntry {
    pub target_id: String,
    pub is_intersecting: bool,
}

impl VisibilityEntry {
    pub fn visible(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            is_intersecting: true,
        }
    }

    pub fn hidden(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            is_intersecting: false,
        }
    }
}

/// Registers sections for viewport-visibility notifications.
pub trait ViewportObserver {
    /// Starts watching the section with `target_id`. Returns `false` when the
    /// section does not exist on the page.
    fn observe(&mut self, target_id: &str) -> bool;

    /// Stops every registration made so far.
    fn disconnect(&mut self);
}

/// Reads section positions and drives page scrolling.
#[cfg_attr(test, mockall::automock)]
pub trait PageScroller {
    /// Document-relative top of the section, or `None` when it is missing.
    fn section_top(&self, target_id: &str) -> Option<f64>;

    fn smooth_scroll_to(&self, top: f64);
}

pub struct SectionTracker<O, S> {
    items: Vec<NavigationItem>,
    band: ThresholdBand,
    observer: O,
    scroller: S,
    observed: HashSet<String>,
    observing: bool,
    active_target: Option<String>,
}

impl<O: ViewportObserver, S: PageScroller> SectionTracker<O, S> {
    pub fn new(items: Vec<NavigationItem>, band: ThresholdBand, observer: O, scroller: S) -> Self {
        let active_target = items.first().map(|item| item.target_id.clone());
        Self {
            items,
            band,
            observer,
            scroller,
            observed: HashSet::new(),
            observing: false,
            active_target,
        }
    }

    pub fn active_target(&self) -> Option<&str> {
        self.active_target.as_deref()
    }

    fn is_configured(&self, target_id: &str) -> bool {
        self.items.iter().any(|item| item.target_id == target_id)
    }

    /// Registers every configured section that is not watched yet.
    ///
    /// Sections missing from the page are skipped and picked up by a later call.
    pub fn start_observation(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.observing = true;
        for item in &self.items {
            if self.observed.contains(&item.target_id) {
                continue;
            }
            if self.observer.observe(&item.target_id) {
                self.observed.insert(item.target_id.clone());
            } else {
                log::debug!("section '{}' not found, not observing it", item.target_id);
            }
        }
    }

    /// Applies one notification batch. Within a batch the last intersecting
    /// entry wins; no top-most preference is applied.
    ///
    /// Returns whether the active target changed.
    pub fn on_visibility(&mut self, entries: &[VisibilityEntry]) -> bool {
        if !self.observing {
            return false;
        }
        let before = self.active_target.clone();
        for entry in entries {
            if entry.is_intersecting && self.is_configured(&entry.target_id) {
                self.active_target = Some(entry.target_id.clone());
            }
        }
        before != self.active_target
    }

    /// Smooth-scrolls to a section. The active target is left alone; it moves
    /// once the scroll settles and the section reports itself visible.
    ///
    /// Returns whether a scroll was requested.
    pub fn navigate(&self, target_id: &str) -> bool {
        if !self.is_configured(target_id) {
            log::debug!("ignoring navigation to unknown section '{}'", target_id);
            return false;
        }
        let Some(section_top) = self.scroller.section_top(target_id) else {
            log::debug!("section '{}' is not on the page", target_id);
            return false;
        };
        self.scroller
            .smooth_scroll_to(self.band.scroll_destination(section_top));
        true
    }

    /// Releases all observation. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.observing || !self.observed.is_empty() {
            self.observer.disconnect();
        }
        self.observed.clear();
        self.observing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Stand-in for the browser: holds the page's sections and remembers registrations.
    #[derive(Clone, Default)]
    struct FakeViewport {
        inner: Rc<RefCell<FakeViewportState>>,
    }

    #[derive(Default)]
    struct FakeViewportState {
        sections: HashSet<String>,
        registrations: Vec<String>,
        disconnects: usize,
    }

    impl FakeViewport {
        fn with_sections(ids: &[&str]) -> Self {
            let viewport = Self::default();
            viewport
                .inner
                .borrow_mut()
                .sections
                .extend(ids.iter().map(|id| id.to_string()));
            viewport
        }

        fn registrations(&self) -> Vec<String> {
            self.inner.borrow().registrations.clone()
        }

        fn disconnects(&self) -> usize {
            self.inner.borrow().disconnects
        }

        /// What a real observer would deliver: one entry per live registration.
        fn notify(&self, target_id: &str, is_intersecting: bool) -> Vec<VisibilityEntry> {
            self.inner
                .borrow()
                .registrations
                .iter()
                .filter(|id| id.as_str() == target_id)
                .map(|id| VisibilityEntry {
                    target_id: id.clone(),
                    is_intersecting,
                })
                .collect()
        }
    }

    impl ViewportObserver for FakeViewport {
        fn observe(&mut self, target_id: &str) -> bool {
            let mut state = self.inner.borrow_mut();
            if !state.sections.contains(target_id) {
                return false;
            }
            state.registrations.push(target_id.to_string());
            true
        }

        fn disconnect(&mut self) {
            let mut state = self.inner.borrow_mut();
            state.registrations.clear();
            state.disconnects += 1;
        }
    }

    fn campaign_items() -> Vec<NavigationItem> {
        vec![
            NavigationItem::new("Story", "story"),
            NavigationItem::new("Rewards", "rewards"),
            NavigationItem::new("FAQ", "faq"),
        ]
    }

    fn idle_scroller() -> MockPageScroller {
        let mut scroller = MockPageScroller::new();
        scroller.expect_section_top().never();
        scroller.expect_smooth_scroll_to().never();
        scroller
    }

    fn tracker_with(
        viewport: &FakeViewport,
        scroller: MockPageScroller,
    ) -> SectionTracker<FakeViewport, MockPageScroller> {
        SectionTracker::new(
            campaign_items(),
            ThresholdBand::default(),
            viewport.clone(),
            scroller,
        )
    }

    #[test]
    fn band_matches_header_layout() {
        let band = ThresholdBand::default();
        assert_eq!(band.root_margin(), "-140px 0px -60% 0px");
        assert_eq!(band.scroll_destination(1000.0), 876.0);
    }

    #[test]
    fn empty_list_has_no_active_target_and_observes_nothing() {
        let viewport = FakeViewport::with_sections(&["story"]);
        let mut tracker =
            SectionTracker::new(Vec::new(), ThresholdBand::default(), viewport.clone(), idle_scroller());

        tracker.start_observation();

        assert_eq!(tracker.active_target(), None);
        assert!(viewport.registrations().is_empty());
        assert!(!tracker.on_visibility(&[VisibilityEntry::visible("story")]));
        assert_eq!(tracker.active_target(), None);
    }

    #[test]
    fn first_item_is_active_initially() {
        let viewport = FakeViewport::with_sections(&["story", "rewards", "faq"]);
        let tracker = tracker_with(&viewport, idle_scroller());
        assert_eq!(tracker.active_target(), Some("story"));
    }

    #[test]
    fn active_target_follows_latest_visible_section() {
        let viewport = FakeViewport::with_sections(&["story", "rewards", "faq"]);
        let mut tracker = tracker_with(&viewport, idle_scroller());
        tracker.start_observation();

        for id in ["rewards", "faq", "story", "faq"] {
            tracker.on_visibility(&viewport.notify(id, true));
            assert_eq!(tracker.active_target(), Some(id));
        }
    }

    #[test]
    fn leaving_sections_do_not_change_active_target() {
        let viewport = FakeViewport::with_sections(&["story", "rewards", "faq"]);
        let mut tracker = tracker_with(&viewport, idle_scroller());
        tracker.start_observation();

        tracker.on_visibility(&viewport.notify("rewards", true));
        let changed = tracker.on_visibility(&viewport.notify("rewards", false));

        assert!(!changed);
        assert_eq!(tracker.active_target(), Some("rewards"));
    }

    #[test]
    fn last_intersecting_entry_in_a_batch_wins() {
        let viewport = FakeViewport::with_sections(&["story", "rewards", "faq"]);
        let mut tracker = tracker_with(&viewport, idle_scroller());
        tracker.start_observation();

        tracker.on_visibility(&[
            VisibilityEntry::visible("faq"),
            VisibilityEntry::visible("rewards"),
            VisibilityEntry::hidden("story"),
        ]);

        assert_eq!(tracker.active_target(), Some("rewards"));
    }

    #[test]
    fn entries_for_unconfigured_sections_are_ignored() {
        let viewport = FakeViewport::with_sections(&["story", "rewards", "faq"]);
        let mut tracker = tracker_with(&viewport, idle_scroller());
        tracker.start_observation();

        assert!(!tracker.on_visibility(&[VisibilityEntry::visible("hero")]));
        assert_eq!(tracker.active_target(), Some("story"));
    }

    #[test]
    fn navigate_to_unknown_id_is_a_no_op() {
        let viewport = FakeViewport::with_sections(&["story", "rewards", "faq"]);
        let mut tracker = tracker_with(&viewport, idle_scroller());
        tracker.start_observation();
        tracker.on_visibility(&viewport.notify("rewards", true));

        assert!(!tracker.navigate("team"));
        assert_eq!(tracker.active_target(), Some("rewards"));
    }

    #[test]
    fn navigate_to_missing_section_issues_no_scroll() {
        let viewport = FakeViewport::with_sections(&["story", "rewards"]);
        let mut scroller = MockPageScroller::new();
        scroller
            .expect_section_top()
            .with(eq("faq"))
            .times(1)
            .return_const(None::<f64>);
        scroller.expect_smooth_scroll_to().never();
        let tracker = tracker_with(&viewport, scroller);

        assert!(!tracker.navigate("faq"));
        assert_eq!(tracker.active_target(), Some("story"));
    }

    #[test]
    fn navigate_issues_exactly_one_offset_scroll() {
        let viewport = FakeViewport::with_sections(&["story", "rewards", "faq"]);
        let mut scroller = MockPageScroller::new();
        scroller
            .expect_section_top()
            .with(eq("rewards"))
            .return_const(Some(2400.0_f64));
        scroller
            .expect_smooth_scroll_to()
            .with(eq(2400.0 - 140.0 + 16.0))
            .times(1)
            .return_const(());
        let tracker = tracker_with(&viewport, scroller);

        assert!(tracker.navigate("rewards"));
    }

    #[test]
    fn teardown_stops_updates_and_is_repeatable() {
        let viewport = FakeViewport::with_sections(&["story", "rewards", "faq"]);
        let mut tracker = tracker_with(&viewport, idle_scroller());
        tracker.start_observation();

        tracker.teardown();
        tracker.teardown();

        assert!(!tracker.on_visibility(&[VisibilityEntry::visible("faq")]));
        assert_eq!(tracker.active_target(), Some("story"));
        assert!(viewport.registrations().is_empty());
        assert_eq!(viewport.disconnects(), 1);
    }

    #[test]
    fn starting_twice_registers_each_section_once() {
        let viewport = FakeViewport::with_sections(&["story", "rewards", "faq"]);
        let mut tracker = tracker_with(&viewport, idle_scroller());

        tracker.start_observation();
        tracker.start_observation();

        assert_eq!(viewport.registrations(), vec!["story", "rewards", "faq"]);
        assert_eq!(viewport.notify("faq", true).len(), 1);
    }

    #[test]
    fn sections_that_appear_later_are_picked_up() {
        let viewport = FakeViewport::with_sections(&["story"]);
        let mut tracker = tracker_with(&viewport, idle_scroller());
        tracker.start_observation();
        assert_eq!(viewport.registrations(), vec!["story"]);

        viewport
            .inner
            .borrow_mut()
            .sections
            .extend(["rewards".to_string(), "faq".to_string()]);
        tracker.start_observation();

        assert_eq!(viewport.registrations(), vec!["story", "rewards", "faq"]);
    }

    #[test]
    fn restart_after_teardown_observes_again() {
        let viewport = FakeViewport::with_sections(&["story", "rewards", "faq"]);
        let mut tracker = tracker_with(&viewport, idle_scroller());
        tracker.start_observation();
        tracker.teardown();

        tracker.start_observation();
        tracker.on_visibility(&viewport.notify("faq", true));

        assert_eq!(viewport.registrations().len(), 3);
        assert_eq!(tracker.active_target(), Some("faq"));
    }

    #[test]
    fn navigation_waits_for_visibility_confirmation() {
        let viewport = FakeViewport::with_sections(&["story", "rewards", "faq"]);
        let mut scroller = MockPageScroller::new();
        scroller
            .expect_section_top()
            .with(eq("faq"))
            .return_const(Some(3600.0_f64));
        scroller
            .expect_smooth_scroll_to()
            .with(eq(3476.0))
            .times(1)
            .return_const(());
        let mut tracker = tracker_with(&viewport, scroller);
        tracker.start_observation();
        assert_eq!(tracker.active_target(), Some("story"));

        tracker.on_visibility(&viewport.notify("rewards", true));
        assert_eq!(tracker.active_target(), Some("rewards"));

        assert!(tracker.navigate("faq"));
        assert_eq!(tracker.active_target(), Some("rewards"));

        tracker.on_visibility(&viewport.notify("faq", true));
        assert_eq!(tracker.active_target(), Some("faq"));
    }
}
