//! Domain entities - request-scoped values exchanged with the platform

pub mod user;
pub mod channel;
pub mod post;
pub mod command;

pub use user::User;
pub use channel::{Channel, ChannelMember, ChannelType};
pub use post::{MeetingProps, MeetingStatus, Post};
pub use command::{Action, CommandDefinition, CommandInvocation, CommandResponse, ParsedCommand};
