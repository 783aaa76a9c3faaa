//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Chat platform integrations (console, Mattermost)
//! - Storage: Session key-value store
//! - Provider: MS Teams session teardown
//! - Telemetry: Usage events

pub mod adapters;
pub mod config;
pub mod provider;
pub mod storage;
pub mod telemetry;
