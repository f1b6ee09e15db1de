use std::sync::{Arc, Mutex};

use crate::analytics::{AnalyticsEvent, AnalyticsSink, EventParams};
use crate::error::AnalyticsError;

/// Writes each event as a structured `tracing` record under the `analytics` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn log_event(&self, name: &str, params: &EventParams) -> Result<(), AnalyticsError> {
        let params = serde_json::to_string(params).map_err(|_| AnalyticsError::Rejected {
            name: name.to_owned(),
        })?;
        tracing::info!(target: "analytics", event = name, %params, "analytics event");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn log_event(&self, _name: &str, _params: &EventParams) -> Result<(), AnalyticsError> {
        Ok(())
    }
}

/// In-memory sink that keeps every event, for asserting on emissions in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnalytics {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl RecordingAnalytics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.events()
            .iter()
            .map(|event| event.name().to_owned())
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.events.lock() {
            guard.clear();
        }
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn log_event(&self, name: &str, params: &EventParams) -> Result<(), AnalyticsError> {
        let mut guard = self
            .events
            .lock()
            .map_err(|e| AnalyticsError::Unavailable(e.to_string()))?;
        guard.push(AnalyticsEvent::new(name, params.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingAnalytics::new();
        sink.log_event("first", &EventParams::new()).unwrap();
        sink.log_event("second", &EventParams::new().with("k", "v")).unwrap();
        assert_eq!(sink.names(), vec!["first", "second"]);

        sink.clear();
        assert!(sink.events().is_empty());
    }

    #[test]
    fn tracing_sink_accepts_events() {
        let params = EventParams::new().with("screen_name", "home_screen");
        assert!(TracingAnalytics.log_event("screen_view", &params).is_ok());
    }
}
