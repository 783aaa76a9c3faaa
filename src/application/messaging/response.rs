//! Handler replies and the dispatcher's outcome

use crate::domain::entities::Post;
use crate::application::errors::CommandError;

/// What a handler produced when it did not fail
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reply {
    pub text: String,
    /// Channel-visible post created as a side effect
    pub post: Option<Post>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            post: None,
        }
    }

    pub fn silent() -> Self {
        Self::default()
    }

    pub fn posted(post: Post) -> Self {
        Self {
            text: String::new(),
            post: Some(post),
        }
    }
}

/// Handler result
pub type HandlerResult = Result<Reply, CommandError>;

/// Result of executing one command: response text, side effect and error
#[derive(Debug, Default)]
pub struct CommandOutcome {
    pub text: String,
    pub post: Option<Post>,
    pub error: Option<CommandError>,
}

impl CommandOutcome {
    /// Nothing to show and nothing to log
    pub fn is_silent(&self) -> bool {
        self.text.is_empty() && self.error.is_none()
    }
}

impl From<HandlerResult> for CommandOutcome {
    fn from(result: HandlerResult) -> Self {
        match result {
            Ok(reply) => Self {
                text: reply.text,
                post: reply.post,
                error: None,
            },
            Err(err) if err.is_recoverable() => Self {
                text: err.user_message().unwrap_or_default(),
                post: None,
                error: None,
            },
            Err(err) => Self {
                text: err.user_message().unwrap_or_default(),
                post: None,
                error: Some(err),
            },
        }
    }
}
