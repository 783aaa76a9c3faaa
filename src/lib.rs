//! Slash-command dispatcher for the MS Teams Meetings chat plugin.
//!
//! `/mstmeetings [start|disconnect|help]` is tokenized, routed to its
//! handler and answered through the [`ChatPlatform`] the dispatcher was
//! built with.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::errors::{AppError, CommandError, PlatformError, ProviderError};
pub use application::messaging::{CommandDispatcher, CommandOutcome, CommandSettings};
pub use domain::entities::{CommandDefinition, CommandInvocation, CommandResponse, Post};
pub use domain::traits::{ChatPlatform, MeetingProvider, Telemetry};
