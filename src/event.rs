//! Gateway lifecycle events
//!
//! Plain data holders; nothing here talks to the gateway.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dispatched when a gateway session is successfully resumed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeEvent {
    /// Servers that handled the resume, for debugging
    #[serde(rename = "_trace", default)]
    trace: Vec<String>,
}

impl ResumeEvent {
    pub fn new(trace: Vec<String>) -> Self {
        Self { trace }
    }

    pub fn trace(&self) -> &[String] {
        &self.trace
    }
}

impl fmt::Display for ResumeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResumeEvent{{trace=[{}]}}", self.trace.join(", "))
    }
}
