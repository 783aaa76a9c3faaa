use async_trait::async_trait;

pub const EVENT_DISCONNECT: &str = "disconnect";

/// Telemetry trait - fire-and-forget usage analytics
#[async_trait]
pub trait Telemetry: Send + Sync {
    async fn track_event(&self, event: &str, user_id: &str);
}
