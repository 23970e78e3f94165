//! Correlation ids for generation requests.
//!
//! A [`RequestTrace`] is created the moment a request is accepted. Its
//! [`RequestId`] is handed explicitly to every pipeline stage and log line,
//! and the elapsed time is measured from acceptance until the response is
//! serialised.
use std::{
    fmt,
    time::{Duration, Instant},
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Random 128-bit identifier (UUID v4), rendered in hyphenated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Identity and start instant of one generation request.
#[derive(Debug, Clone)]
pub struct RequestTrace {
    id: RequestId,
    accepted_at: Instant,
}

impl RequestTrace {
    /// Assign a fresh id and start the clock.
    pub fn start() -> Self {
        Self {
            id: RequestId::new(),
            accepted_at: Instant::now(),
        }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn elapsed(&self) -> Duration {
        self.accepted_at.elapsed()
    }

    /// Elapsed time formatted the way responses report it, e.g. `"412ms"`.
    pub fn response_time(&self) -> String {
        format_millis(self.elapsed())
    }
}

pub fn format_millis(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}
