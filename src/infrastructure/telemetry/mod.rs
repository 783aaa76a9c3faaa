//! Telemetry sink that writes events to the log

use async_trait::async_trait;
use crate::domain::traits::Telemetry;

/// Emits each event as a structured `telemetry` log record
pub struct TracingTelemetry {
    plugin_id: String,
}

impl TracingTelemetry {
    pub fn new(plugin_id: impl Into<String>) -> Self {
        Self { plugin_id: plugin_id.into() }
    }
}

#[async_trait]
impl Telemetry for TracingTelemetry {
    async fn track_event(&self, event: &str, user_id: &str) {
        tracing::info!(target: "telemetry", plugin = %self.plugin_id, event, user_id, "event tracked");
    }
}
