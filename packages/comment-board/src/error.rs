//! Error types for board actions.

use comments_client::{CommentId, CommentsError};
use thiserror::Error;

use crate::view::ActionKind;

/// Result type for approve/delete actions on the board.
pub type BoardResult<T> = std::result::Result<T, BoardError>;

/// Why an approve/delete action did not end with a fresh render.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The server rejected or never received the mutation; nothing changed
    /// and no reload was attempted.
    #[error("Failed to {} comment {id}: {source}", verb(.action))]
    Mutation {
        action: ActionKind,
        id: CommentId,
        #[source]
        source: CommentsError,
    },

    /// The mutation was applied but the follow-up load failed, so the
    /// previous render is still on screen.
    #[error("Comment {id} was {}, but reloading failed: {source}", past(.action))]
    Reload {
        action: ActionKind,
        id: CommentId,
        #[source]
        source: CommentsError,
    },
}

impl BoardError {
    /// Whether the server already applied the change. Retrying an applied
    /// mutation is not safe.
    pub fn is_applied(&self) -> bool {
        matches!(self, BoardError::Reload { .. })
    }

    pub fn source_error(&self) -> &CommentsError {
        match self {
            BoardError::Mutation { source, .. } | BoardError::Reload { source, .. } => source,
        }
    }
}

fn verb(action: &ActionKind) -> &'static str {
    match action {
        ActionKind::Approve => "approve",
        ActionKind::Delete => "delete",
    }
}

fn past(action: &ActionKind) -> &'static str {
    match action {
        ActionKind::Approve => "approved",
        ActionKind::Delete => "deleted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comments_client::TransportError;

    #[test]
    fn test_messages_name_what_failed() {
        let mutation = BoardError::Mutation {
            action: ActionKind::Approve,
            id: 4.into(),
            source: TransportError::Status {
                status: 404,
                body: String::new(),
            }
            .into(),
        };
        let reload = BoardError::Reload {
            action: ActionKind::Delete,
            id: 4.into(),
            source: CommentsError::Decode("expected a sequence".into()),
        };

        assert!(!mutation.is_applied());
        assert!(mutation
            .to_string()
            .starts_with("Failed to approve comment 4: Transport error"));
        assert!(reload.is_applied());
        assert_eq!(
            reload.to_string(),
            "Comment 4 was deleted, but reloading failed: Decode error: expected a sequence"
        );
        assert!(reload.source_error().is_decode());
    }
}
