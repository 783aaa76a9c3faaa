//! Application services - one per command action

pub mod connection_service;
pub mod help_service;
pub mod meeting_service;

pub use connection_service::ConnectionService;
pub use help_service::{help_header, help_text};
pub use meeting_service::{MeetingService, MEMBERS_PAGE_SIZE};
