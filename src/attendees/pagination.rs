/// Attendees shown per page. The API pages with the same size.
pub const PAGE_SIZE: u64 = 10;

/// Number of pages needed to show `total` attendees
pub fn total_pages(total: u64) -> u32 {
    total.div_ceil(PAGE_SIZE).try_into().unwrap_or(u32::MAX)
}

/// Footer navigation controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
}

impl PageNav {
    pub const ALL: [PageNav; 4] = [PageNav::First, PageNav::Previous, PageNav::Next, PageNav::Last];

    /// Whether the control is inert at the current position.
    /// Boundaries are checked with equality only; nothing is clamped.
    pub fn is_disabled(self, page: u32, total_pages: u32) -> bool {
        match self {
            PageNav::First | PageNav::Previous => page == 1,
            PageNav::Next | PageNav::Last => page == total_pages,
        }
    }

    /// Page the control leads to
    pub fn target(self, page: u32, total_pages: u32) -> u32 {
        match self {
            PageNav::First => 1,
            PageNav::Previous => page.saturating_sub(1).max(1),
            PageNav::Next => page.saturating_add(1),
            // An empty result still has page 1
            PageNav::Last => total_pages.max(1),
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            PageNav::First => "«",
            PageNav::Previous => "‹",
            PageNav::Next => "›",
            PageNav::Last => "»",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageNav::First => "Primeira página",
            PageNav::Previous => "Página anterior",
            PageNav::Next => "Próxima página",
            PageNav::Last => "Última página",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(25), 3);
    }

    #[test]
    fn test_targets_from_middle_page() {
        assert_eq!(PageNav::First.target(2, 3), 1);
        assert_eq!(PageNav::Previous.target(2, 3), 1);
        assert_eq!(PageNav::Next.target(2, 3), 3);
        assert_eq!(PageNav::Last.target(2, 3), 3);
    }

    #[test]
    fn test_first_page_disables_backward_controls() {
        assert!(PageNav::First.is_disabled(1, 3));
        assert!(PageNav::Previous.is_disabled(1, 3));
        assert!(!PageNav::Next.is_disabled(1, 3));
        assert!(!PageNav::Last.is_disabled(1, 3));
    }

    #[test]
    fn test_last_page_disables_forward_controls() {
        assert!(!PageNav::First.is_disabled(3, 3));
        assert!(!PageNav::Previous.is_disabled(3, 3));
        assert!(PageNav::Next.is_disabled(3, 3));
        assert!(PageNav::Last.is_disabled(3, 3));
    }

    #[test]
    fn test_single_page_disables_everything() {
        for nav in PageNav::ALL {
            assert!(nav.is_disabled(1, 1), "{nav:?} should be disabled");
        }
    }

    #[test]
    fn test_past_last_page_keeps_forward_controls_enabled() {
        // No clamping: only exact equality disables next/last
        assert!(!PageNav::Next.is_disabled(5, 3));
        assert_eq!(PageNav::Next.target(5, 3), 6);
        assert_eq!(PageNav::Last.target(5, 3), 3);
    }

    #[test]
    fn test_last_on_empty_result_stays_on_page_one() {
        assert_eq!(PageNav::Last.target(1, 0), 1);
    }
}
