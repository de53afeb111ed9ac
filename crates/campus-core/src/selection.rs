//! Mutually exclusive selection.
//!
//! Unlike a list cursor, a [`Choice`] can never be empty: exactly one option
//! is active from construction onwards.

/// Exactly one active option out of a fixed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice<T> {
    active: T,
}

impl<T: Copy + PartialEq> Choice<T> {
    /// Create a choice with `initial` active.
    pub fn new(initial: T) -> Self {
        Self { active: initial }
    }

    /// Get the active option.
    pub fn active(&self) -> T {
        self.active
    }

    /// Activate `option`, deactivating whatever was active.
    ///
    /// Returns `true` if the active option changed.
    pub fn select(&mut self, option: T) -> bool {
        if self.active == option {
            return false;
        }
        self.active = option;
        true
    }

    /// Check if an option is the active one.
    pub fn is_active(&self, option: T) -> bool {
        self.active == option
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Panel {
        First,
        Second,
        Third,
    }

    #[test]
    fn test_new_choice_has_initial_active() {
        let choice = Choice::new(Panel::Second);
        assert_eq!(choice.active(), Panel::Second);
        assert!(choice.is_active(Panel::Second));
        assert!(!choice.is_active(Panel::First));
    }

    #[test]
    fn test_select_switches_exclusively() {
        let mut choice = Choice::new(Panel::First);

        assert!(choice.select(Panel::Third));
        assert!(choice.is_active(Panel::Third));
        assert!(!choice.is_active(Panel::First));
        assert!(!choice.is_active(Panel::Second));
    }

    #[test]
    fn test_reselecting_active_is_noop() {
        let mut choice = Choice::new(Panel::First);
        choice.select(Panel::Second);

        assert!(!choice.select(Panel::Second));
        assert_eq!(choice.active(), Panel::Second);
    }
}
