//! Command handling - parsing, routing and replies

pub mod dispatcher;
pub mod parser;
pub mod response;

pub use dispatcher::{CommandDispatcher, CommandSettings};
pub use response::{CommandOutcome, HandlerResult, Reply};
