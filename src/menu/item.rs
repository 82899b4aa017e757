//! A single menu entry
//!
//! [`MenuItem`] carries a caller-assigned id, a label, an enabled flag and a
//! [`CheckState`]. Plain items commit the run on Enter; checkable items flip
//! their checkbox instead.

/// Caller-assigned item identifier. Not positional, not unique.
pub type ItemId = i32;

/// Whether an item shows a checkbox, and its value if it does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    #[default]
    Plain,
    Checkable(bool),
}

impl CheckState {
    pub fn is_checkable(self) -> bool {
        matches!(self, CheckState::Checkable(_))
    }

    /// Checkbox value, `None` for plain items
    pub fn checked(self) -> Option<bool> {
        match self {
            CheckState::Plain => None,
            CheckState::Checkable(value) => Some(value),
        }
    }

    /// Flip the checkbox in place. Returns the new value, or `None` for plain items.
    pub fn toggle(&mut self) -> Option<bool> {
        match self {
            CheckState::Plain => None,
            CheckState::Checkable(value) => {
                *value = !*value;
                Some(*value)
            }
        }
    }

    /// Row prefix drawn in front of the label (same width as the plain indent)
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            CheckState::Plain => None,
            CheckState::Checkable(true) => Some("[X] "),
            CheckState::Checkable(false) => Some("[ ] "),
        }
    }
}

/// One entry of a [`Menu`](super::Menu)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuItem {
    pub id: ItemId,
    pub text: String,
    pub enabled: bool,
    pub check: CheckState,
}

impl MenuItem {
    /// Enabled plain item with id 0
    pub fn new(text: impl Into<String>) -> Self {
        MenuItem {
            id: 0,
            text: text.into(),
            enabled: true,
            check: CheckState::Plain,
        }
    }

    /// Enabled item with a checkbox set to `checked`
    pub fn checkable(text: impl Into<String>, checked: bool) -> Self {
        MenuItem {
            check: CheckState::Checkable(checked),
            ..MenuItem::new(text)
        }
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn disabled(self) -> Self {
        self.with_enabled(false)
    }

    pub fn is_checkable(&self) -> bool {
        self.check.is_checkable()
    }

    pub fn checked(&self) -> Option<bool> {
        self.check.checked()
    }
}

impl Default for MenuItem {
    fn default() -> Self {
        MenuItem::new("")
    }
}
