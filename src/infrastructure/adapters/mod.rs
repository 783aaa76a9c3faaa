//! Chat platform adapters

pub mod console;
pub mod mattermost;

pub use console::ConsolePlatform;
pub use mattermost::MattermostPlatform;
