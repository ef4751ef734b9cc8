//! Guards against duplicate submission of the same action.
//!
//! Each user action that talks to the API (booking, saving a form, logging in)
//! owns one [`InFlight`]. While a token from [`InFlight::try_begin`] is alive,
//! further attempts are refused.

use crate::error::BookingError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct InFlight {
    name: &'static str,
    busy: Arc<AtomicBool>,
}

impl InFlight {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Marks the action as running, or fails with `InProgress` if it already is.
    pub fn try_begin(&self) -> Result<InFlightToken, BookingError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlightToken {
                busy: self.busy.clone(),
            })
            .map_err(|_| BookingError::InProgress(self.name.to_string()))
    }

    pub fn is_active(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Clears the in-flight flag when dropped.
#[derive(Debug)]
pub struct InFlightToken {
    busy: Arc<AtomicBool>,
}

impl Drop for InFlightToken {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_is_rejected() {
        let guard = InFlight::new("booking");
        let token = guard.try_begin().unwrap();
        assert!(guard.is_active());

        let err = guard.try_begin().unwrap_err();
        assert!(matches!(err, BookingError::InProgress(ref name) if name == "booking"));

        drop(token);
        assert!(!guard.is_active());
        assert!(guard.try_begin().is_ok());
    }

    #[test]
    fn test_clones_share_state() {
        let guard = InFlight::new("saving");
        let other = guard.clone();
        let _token = guard.try_begin().unwrap();
        assert!(other.try_begin().is_err());
    }

    #[tokio::test]
    async fn test_token_released_across_await() {
        let guard = InFlight::new("login");
        {
            let _token = guard.try_begin().unwrap();
            tokio::task::yield_now().await;
            assert!(guard.is_active());
        }
        assert!(!guard.is_active());
    }
}
