//! Pagination cursor shared by every list accessor.
//!
//! # Design
//! A window is `(skip, limit)`: zero-based offset plus page size. Two default
//! profiles exist and are chosen per resource by the accessor that owns it:
//! feed-style listings use [`Page::FEED`] `(0, 20)`, a user's own historical
//! items use [`Page::OWN`] `(0, 100)`. The unsigned fields make a negative
//! offset unrepresentable; a zero `limit` is passed through untouched — the
//! backend is the sole authority on clamping and rejection, as it is on
//! totals and ordering.

/// An offset/window pair controlling list results.
///
/// There is deliberately no `Default` impl: the right default depends on the
/// resource, and each list accessor substitutes its own documented profile
/// when the caller passes `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u32,
    pub limit: u32,
}

impl Page {
    /// Feed-style default window.
    pub const FEED: Page = Page { skip: 0, limit: 20 };

    /// Management-style default window for a user's own items.
    pub const OWN: Page = Page { skip: 0, limit: 100 };

    pub const fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    /// The window immediately after this one: `skip` advances by `limit`,
    /// `limit` stays. Saturates at `u32::MAX` instead of overflowing.
    pub const fn next(self) -> Self {
        Self {
            skip: self.skip.saturating_add(self.limit),
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_profile_is_twenty_from_zero() {
        assert_eq!(Page::FEED, Page::new(0, 20));
    }

    #[test]
    fn own_items_profile_is_one_hundred_from_zero() {
        assert_eq!(Page::OWN, Page::new(0, 100));
    }

    #[test]
    fn next_advances_skip_by_limit() {
        let first = Page::new(0, 20);
        let second = first.next();
        assert_eq!(second, Page::new(20, 20));
        assert_eq!(second.next(), Page::new(40, 20));
    }

    #[test]
    fn zero_limit_is_representable_and_untouched() {
        // Local validation is the backend's job; the client must not clamp.
        let page = Page::new(5, 0);
        assert_eq!(page.limit, 0);
    }

    #[test]
    fn next_saturates_instead_of_overflowing() {
        let page = Page::new(u32::MAX - 10, 20);
        assert_eq!(page.next(), Page::new(u32::MAX, 20));
    }
}
