//! Command parser - Turns a raw command line into a ParsedCommand

use crate::domain::entities::ParsedCommand;
use crate::application::errors::CommandError;

/// Split on whitespace into non-empty tokens
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Parse a command line. The trigger is not validated here.
pub fn parse(text: &str) -> Result<ParsedCommand, CommandError> {
    let mut tokens = tokenize(text).into_iter();
    let trigger = tokens.next().ok_or(CommandError::InvalidCommand)?;
    let action = tokens.next();
    let args = tokens.collect();

    Ok(ParsedCommand { trigger, action, args })
}
