//! Animate-in trigger state
//!
//! A request arms the trigger and the animator's completion report disarms
//! it. The two events are distinct, so an unpaired completion cannot flip
//! the trigger back into the requested state.

/// Animate-in trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimateIn {
    #[default]
    Idle,
    Requested,
}

impl AnimateIn {
    /// Arm the trigger. Returns false when a request was already pending
    /// (the new request is coalesced into it).
    pub fn request(&mut self) -> bool {
        match self {
            Self::Idle => {
                *self = Self::Requested;
                true
            }
            Self::Requested => false,
        }
    }

    /// Acknowledge completion. Returns false if nothing was pending.
    pub fn complete(&mut self) -> bool {
        match self {
            Self::Requested => {
                *self = Self::Idle;
                true
            }
            Self::Idle => false,
        }
    }

    /// Drop a pending request without completion
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_requested(&self) -> bool {
        matches!(self, Self::Requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_then_complete_round_trip() {
        let mut trigger = AnimateIn::default();
        assert!(!trigger.is_requested());

        assert!(trigger.request());
        assert!(trigger.is_requested());

        assert!(trigger.complete());
        assert_eq!(trigger, AnimateIn::Idle);
    }

    #[test]
    fn test_second_request_is_coalesced() {
        let mut trigger = AnimateIn::default();
        trigger.request();
        assert!(!trigger.request());
        assert!(trigger.is_requested());

        // One completion settles both requests
        trigger.complete();
        assert_eq!(trigger, AnimateIn::Idle);
    }

    #[test]
    fn test_stray_completion_is_ignored() {
        let mut trigger = AnimateIn::default();
        assert!(!trigger.complete());
        assert_eq!(trigger, AnimateIn::Idle);
    }

    #[test]
    fn test_cancel() {
        let mut trigger = AnimateIn::Requested;
        trigger.cancel();
        assert_eq!(trigger, AnimateIn::Idle);
    }
}
