//! Change notifications for observable arrays.

use core::fmt;

/// The kind of mutation that happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeAction {
    /// An element was inserted
    Added,
    /// An element was removed
    Removed,
    /// The array was cleared
    Reset,
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChangeAction::Added => "added",
            ChangeAction::Removed => "removed",
            ChangeAction::Reset => "reset",
        };
        f.write_str(name)
    }
}

/// A single change notification.
///
/// Events carry only the action. Observers receive the array's elements,
/// as they stand after the mutation, next to the event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    /// What happened
    pub action: ChangeAction,
}

impl ChangeEvent {
    /// Creates an event for `action`.
    #[inline]
    pub fn new(action: ChangeAction) -> Self {
        Self { action }
    }

    /// An `Added` event.
    #[inline]
    pub fn added() -> Self {
        Self::new(ChangeAction::Added)
    }

    /// A `Removed` event.
    #[inline]
    pub fn removed() -> Self {
        Self::new(ChangeAction::Removed)
    }

    /// A `Reset` event.
    #[inline]
    pub fn reset() -> Self {
        Self::new(ChangeAction::Reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_event_constructors() {
        assert_eq!(ChangeEvent::added().action, ChangeAction::Added);
        assert_eq!(ChangeEvent::removed().action, ChangeAction::Removed);
        assert_eq!(ChangeEvent::reset(), ChangeEvent::new(ChangeAction::Reset));
    }

    #[test]
    fn test_action_display() {
        assert_eq!(ChangeAction::Removed.to_string(), "removed");
    }
}
