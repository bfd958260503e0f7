//! Per-form single-flight guard.
//!
//! A client tags a submission with `x-form-id`. While a request for the same
//! flow and form is outstanding, resubmissions are refused. The guard is held
//! for the whole handler lifetime and released on drop, whatever the outcome.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::http::HeaderMap;

use crate::errors::AppError;

pub const FORM_ID_HEADER: &str = "x-form-id";

pub const IN_FLIGHT_MESSAGE: &str =
    "This form already has a request in progress. Please wait for it to finish.";

#[derive(Clone, Default)]
pub struct SingleFlight {
    in_flight: Arc<Mutex<HashSet<String>>>,
}

/// Held while a form's request is outstanding.
#[derive(Debug)]
pub struct FlightGuard {
    key: String,
    in_flight: Arc<Mutex<HashSet<String>>>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `key`, or returns `None` if it is already claimed.
    pub fn try_acquire(&self, key: impl Into<String>) -> Option<FlightGuard> {
        let key = key.into();
        if !lock(&self.in_flight).insert(key.clone()) {
            return None;
        }
        Some(FlightGuard {
            key,
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    /// Claims the form named by the `x-form-id` header for `flow`.
    ///
    /// Requests without the header are not guarded and get `Ok(None)`.
    pub fn acquire_form(
        &self,
        flow: &str,
        headers: &HeaderMap,
    ) -> Result<Option<FlightGuard>, AppError> {
        let Some(form_id) = headers
            .get(FORM_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        else {
            return Ok(None);
        };

        self.try_acquire(flight_key(flow, form_id))
            .map(Some)
            .ok_or_else(|| AppError::InFlight(IN_FLIGHT_MESSAGE.to_string()))
    }

    #[cfg(test)]
    pub fn is_in_flight(&self, key: &str) -> bool {
        lock(&self.in_flight).contains(key)
    }
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        lock(&self.in_flight).remove(&self.key);
    }
}

pub fn flight_key(flow: &str, form_id: &str) -> String {
    format!("{flow}:{form_id}")
}

// The set stays consistent even if a holder panicked, so poisoning is ignored.
fn lock(set: &Mutex<HashSet<String>>) -> MutexGuard<'_, HashSet<String>> {
    set.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
