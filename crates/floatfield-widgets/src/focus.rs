//! Keyboard focus cycling across a fixed set of fields.

/// Which slot lost and which gained focus in one move.
///
/// Hosts call the lost slot's `on_focus_lost` before the gained slot's
/// `on_focus_gained`, so at most one field is ever active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusChange {
    /// Slot that was focused before the move.
    pub lost: Option<usize>,
    /// Slot focused after the move.
    pub gained: Option<usize>,
}

impl FocusChange {
    /// Whether the move changed anything.
    pub fn is_empty(&self) -> bool {
        self.lost.is_none() && self.gained.is_none()
    }
}

/// Tracks the focused slot among `N`. Starts with nothing focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing<const N: usize> {
    focused: Option<usize>,
}

impl<const N: usize> FocusRing<N> {
    /// A ring with nothing focused.
    pub fn new() -> Self {
        Self { focused: None }
    }

    /// The focused slot, if any.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Whether slot `index` has focus.
    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == Some(index)
    }

    /// Move to the next slot, wrapping after the last. From nothing, focus
    /// the first slot.
    pub fn focus_next(&mut self) -> FocusChange {
        let next = match self.focused {
            Some(i) => (i + 1) % N.max(1),
            None => 0,
        };
        self.focus(next)
    }

    /// Move to the previous slot, wrapping before the first. From nothing,
    /// focus the last slot.
    pub fn focus_prev(&mut self) -> FocusChange {
        let prev = match self.focused {
            Some(i) => (i + N - 1) % N.max(1),
            None => N.saturating_sub(1),
        };
        self.focus(prev)
    }

    /// Focus slot `index`, clamped to the valid range.
    pub fn focus(&mut self, index: usize) -> FocusChange {
        if N == 0 {
            return FocusChange::default();
        }
        let index = index.min(N - 1);
        if self.focused == Some(index) {
            return FocusChange::default();
        }
        let lost = self.focused.replace(index);
        FocusChange {
            lost,
            gained: Some(index),
        }
    }

    /// Drop focus entirely.
    pub fn clear(&mut self) -> FocusChange {
        FocusChange {
            lost: self.focused.take(),
            gained: None,
        }
    }
}

impl<const N: usize> Default for FocusRing<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unfocused() {
        let ring = FocusRing::<3>::new();
        assert_eq!(ring.focused(), None);
        assert!(!ring.is_focused(0));
    }

    #[test]
    fn next_from_nothing_focuses_first() {
        let mut ring = FocusRing::<3>::new();
        let change = ring.focus_next();
        assert_eq!(change, FocusChange { lost: None, gained: Some(0) });
        assert!(ring.is_focused(0));
    }

    #[test]
    fn next_wraps_and_reports_both_ends() {
        let mut ring = FocusRing::<3>::new();
        ring.focus(2);
        let change = ring.focus_next();
        assert_eq!(change, FocusChange { lost: Some(2), gained: Some(0) });
    }

    #[test]
    fn prev_wraps() {
        let mut ring = FocusRing::<3>::new();
        assert_eq!(ring.focus_prev().gained, Some(2));
        ring.focus(0);
        assert_eq!(ring.focus_prev().gained, Some(2));
    }

    #[test]
    fn focus_clamps_and_ignores_repeats() {
        let mut ring = FocusRing::<3>::new();
        assert_eq!(ring.focus(10).gained, Some(2));
        assert!(ring.focus(2).is_empty());
    }

    #[test]
    fn clear_reports_lost_slot() {
        let mut ring = FocusRing::<2>::new();
        ring.focus(1);
        assert_eq!(ring.clear(), FocusChange { lost: Some(1), gained: None });
        assert_eq!(ring.focused(), None);
        assert!(ring.clear().is_empty());
    }

    #[test]
    fn empty_ring_never_focuses() {
        let mut ring = FocusRing::<0>::new();
        assert!(ring.focus_next().is_empty());
        assert!(ring.focus_prev().is_empty());
        assert_eq!(ring.focused(), None);
    }
}
