//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Messaging: Command parsing, dispatching and replies
//! - Services: Action handlers (start, disconnect, help)
//! - Errors: Domain-specific errors

pub mod errors;
pub mod messaging;
pub mod services;
