//! Analytics capability injected into the screens.
//!
//! Screens hand `AnalyticsEvent`s to an `Analytics` handle. The handle
//! forwards them to whatever `AnalyticsSink` the app was wired with and
//! drops sink failures on the floor: emission is fire-and-forget.

pub mod events;
mod sinks;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::AnalyticsError;

pub use sinks::{NoopAnalytics, RecordingAnalytics, TracingAnalytics};

/// A flat event parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Int(i64),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(value) => f.write_str(value),
            ParamValue::Int(value) => write!(f, "{value}"),
        }
    }
}

/// Event parameters keyed by name, in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventParams(BTreeMap<String, ParamValue>);

impl EventParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.0.insert(key.to_owned(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// A named event with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    name: String,
    params: EventParams,
}

impl AnalyticsEvent {
    #[must_use]
    pub fn new(name: impl Into<String>, params: EventParams) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn params(&self) -> &EventParams {
        &self.params
    }

    #[must_use]
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }
}

/// Destination for analytics events (telemetry backend, log, test double).
///
/// Implementations must return promptly; callers never wait on delivery.
pub trait AnalyticsSink: Send + Sync {
    /// # Errors
    ///
    /// Returns `AnalyticsError` if the sink could not accept the event.
    fn log_event(&self, name: &str, params: &EventParams) -> Result<(), AnalyticsError>;
}

/// Fire-and-forget handle over an `AnalyticsSink`.
#[derive(Clone)]
pub struct Analytics {
    sink: Arc<dyn AnalyticsSink>,
}

impl Analytics {
    #[must_use]
    pub fn new(sink: Arc<dyn AnalyticsSink>) -> Self {
        Self { sink }
    }

    /// Handle that discards every event.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Arc::new(NoopAnalytics))
    }

    /// Emit an event. Sink failures are logged and swallowed.
    pub fn log(&self, event: &AnalyticsEvent) {
        if let Err(err) = self.sink.log_event(event.name(), event.params()) {
            tracing::debug!(event = event.name(), error = %err, "analytics event dropped");
        }
    }
}

impl fmt::Debug for Analytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analytics").finish_non_exhaustive()
    }
}
