//! Domain traits - Abstractions for infrastructure implementations

pub mod platform;
pub mod provider;
pub mod store;
pub mod telemetry;

pub use platform::ChatPlatform;
pub use provider::MeetingProvider;
pub use store::Store;
pub use telemetry::{Telemetry, EVENT_DISCONNECT};
