//! Domain layer - Core types with no knowledge of concrete platforms
//! 
//! This layer contains:
//! - Entities: Users, channels, posts and command invocations
//! - Traits: Collaborator capabilities (ChatPlatform, MeetingProvider, Telemetry, Store)

pub mod entities;
pub mod traits;
