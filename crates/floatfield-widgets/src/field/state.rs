//! The label state machine.

/// Where the label sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelState {
    /// Full size, inline with the text row.
    #[default]
    Resting,
    /// Shrunk and lifted onto the frame.
    Raised,
}

/// Focus/content combination, derived from the field and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldState {
    /// Unfocused with no content.
    Empty,
    /// Focused with no content.
    FocusedEmpty,
    /// Has content, focused or not.
    HasContent,
}

impl FieldState {
    /// Derive the state from focus and the live content.
    pub fn derive(focused: bool, content_empty: bool) -> Self {
        match (focused, content_empty) {
            (_, false) => FieldState::HasContent,
            (true, true) => FieldState::FocusedEmpty,
            (false, true) => FieldState::Empty,
        }
    }
}

/// Events that can move the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Focus arrived.
    FocusGained {
        /// Whether the field raises on focus alone.
        raise_on_focus: bool,
    },
    /// Focus left.
    FocusLost {
        /// Whether the content is empty.
        empty: bool,
    },
    /// Content was replaced.
    ContentChanged {
        /// Whether the new content is empty.
        empty: bool,
        /// Whether the field is focused.
        focused: bool,
    },
    /// The return key was pressed.
    Submit {
        /// Whether the content is empty.
        empty: bool,
    },
}

impl LabelState {
    /// The state after `trigger`. Unlisted combinations keep the current
    /// state, so re-entering a state is a no-op.
    pub fn next(self, trigger: Trigger) -> Self {
        match trigger {
            Trigger::FocusGained { raise_on_focus: true } => LabelState::Raised,
            Trigger::ContentChanged { empty: false, .. } => LabelState::Raised,
            Trigger::ContentChanged { empty: true, focused: false } => LabelState::Resting,
            Trigger::FocusLost { empty: true } | Trigger::Submit { empty: true } => {
                LabelState::Resting
            }
            _ => self,
        }
    }

    /// Raise progress this state animates toward.
    pub fn progress(self) -> f32 {
        match self {
            LabelState::Resting => 0.0,
            LabelState::Raised => 1.0,
        }
    }
}
