//! Page-level UI flags: mobile menu and back-to-top visibility.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiFlags {
    pub is_menu_open: bool,
    pub show_back_to_top: bool,
}

impl UiFlags {
    /// Hamburger control.
    pub fn toggle_menu(&mut self) {
        self.is_menu_open = !self.is_menu_open;
    }

    /// Following a navigation link always closes the menu.
    pub fn select_nav_link(&mut self) {
        self.is_menu_open = false;
    }

    /// Record the latest vertical scroll offset.
    ///
    /// Returns `true` when `show_back_to_top` changed, so callers can skip
    /// notifying subscribers on the (very common) no-op scroll.
    pub fn observe_scroll(&mut self, offset: f64, threshold: f64) -> bool {
        let visible = offset > threshold;
        let changed = visible != self.show_back_to_top;
        self.show_back_to_top = visible;
        changed
    }

    pub fn hamburger_class(&self) -> &'static str {
        if self.is_menu_open { "hamburger open" } else { "hamburger" }
    }

    pub fn nav_class(&self) -> &'static str {
        if self.is_menu_open { "nav-mobile-open" } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 300.0;

    #[test]
    fn starts_closed_and_hidden() {
        let flags = UiFlags::default();
        assert!(!flags.is_menu_open);
        assert!(!flags.show_back_to_top);
    }

    #[test]
    fn back_to_top_tracks_latest_offset() {
        let mut flags = UiFlags::default();
        let seen: Vec<bool> = [0.0, 150.0, 301.0, 299.0, 500.0]
            .into_iter()
            .map(|y| {
                flags.observe_scroll(y, THRESHOLD);
                flags.show_back_to_top
            })
            .collect();
        assert_eq!(seen, vec![false, false, true, false, true]);
    }

    #[test]
    fn threshold_itself_is_not_past() {
        let mut flags = UiFlags::default();
        flags.observe_scroll(300.0, THRESHOLD);
        assert!(!flags.show_back_to_top);
        flags.observe_scroll(300.5, THRESHOLD);
        assert!(flags.show_back_to_top);
    }

    #[test]
    fn observe_scroll_reports_changes_only() {
        let mut flags = UiFlags::default();
        assert!(!flags.observe_scroll(10.0, THRESHOLD));
        assert!(flags.observe_scroll(400.0, THRESHOLD));
        assert!(!flags.observe_scroll(800.0, THRESHOLD));
        assert!(flags.observe_scroll(0.0, THRESHOLD));
    }

    #[test]
    fn scrolling_leaves_menu_alone() {
        let mut flags = UiFlags {
            is_menu_open: true,
            ..Default::default()
        };
        flags.observe_scroll(1000.0, THRESHOLD);
        assert!(flags.is_menu_open);
    }

    #[test]
    fn toggle_parity() {
        for start in [false, true] {
            for n in 0..6 {
                let mut flags = UiFlags {
                    is_menu_open: start,
                    ..Default::default()
                };
                for _ in 0..n {
                    flags.toggle_menu();
                }
                let expected = if n % 2 == 0 { start } else { !start };
                assert_eq!(flags.is_menu_open, expected, "start={start} n={n}");
            }
        }
    }

    #[test]
    fn nav_link_closes_menu_from_any_state() {
        for start in [false, true] {
            let mut flags = UiFlags {
                is_menu_open: start,
                ..Default::default()
            };
            flags.select_nav_link();
            assert!(!flags.is_menu_open);
        }
    }

    #[test]
    fn classes_follow_menu_state() {
        let mut flags = UiFlags::default();
        assert_eq!(flags.hamburger_class(), "hamburger");
        assert_eq!(flags.nav_class(), "");
        flags.toggle_menu();
        assert_eq!(flags.hamburger_class(), "hamburger open");
        assert_eq!(flags.nav_class(), "nav-mobile-open");
    }
}
