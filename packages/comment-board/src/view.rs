//! View nodes: the renderable form of one comment and its controls.

use comments_client::{Comment, CommentId};
use std::fmt;

/// What a control does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Approve,
    Delete,
}

/// A control attached to a view node, bound to the comment it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub comment_id: CommentId,
    pub label: String,
}

/// Renderable representation of one comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    pub comment_id: CommentId,
    /// `"{author}: {text}"`
    pub label: String,
    pub actions: Vec<Action>,
}

impl ViewNode {
    pub fn action(&self, kind: ActionKind) -> Option<&Action> {
        self.actions.iter().find(|a| a.kind == kind)
    }

    pub fn has_approve(&self) -> bool {
        self.action(ActionKind::Approve).is_some()
    }
}

impl fmt::Display for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        for action in &self.actions {
            write!(f, " [{}]", action.label)?;
        }
        Ok(())
    }
}

/// Captions for the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLabels {
    pub approve: String,
    pub delete: String,
}

impl Default for BoardLabels {
    fn default() -> Self {
        Self {
            approve: "Approve".to_string(),
            delete: "Delete".to_string(),
        }
    }
}

/// Build the view node for one comment.
///
/// The approve control is present only while the comment is pending; the
/// delete control is always present.
pub fn build_view_node(comment: &Comment, labels: &BoardLabels) -> ViewNode {
    let mut actions = Vec::with_capacity(2);

    if !comment.approved {
        actions.push(Action {
            kind: ActionKind::Approve,
            comment_id: comment.id.clone(),
            label: labels.approve.clone(),
        });
    }
    actions.push(Action {
        kind: ActionKind::Delete,
        comment_id: comment.id.clone(),
        label: labels.delete.clone(),
    });

    ViewNode {
        comment_id: comment.id.clone(),
        label: format!("{}: {}", comment.author, comment.text),
        actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_comment_has_both_controls() {
        let node = build_view_node(&Comment::new(1, "Ann", "hello", false), &BoardLabels::default());

        assert_eq!(node.label, "Ann: hello");
        assert!(node.has_approve());
        assert_eq!(
            node.actions.iter().map(|a| a.kind).collect::<Vec<_>>(),
            vec![ActionKind::Approve, ActionKind::Delete]
        );
        assert!(node.actions.iter().all(|a| a.comment_id == CommentId::from(1)));
    }

    #[test]
    fn test_approved_comment_has_only_delete() {
        let node = build_view_node(&Comment::new(2, "Bo", "hi", true), &BoardLabels::default());

        assert!(!node.has_approve());
        assert_eq!(node.actions.len(), 1);
        assert_eq!(node.actions[0].kind, ActionKind::Delete);
    }

    #[test]
    fn test_display_uses_configured_labels() {
        let labels = BoardLabels {
            approve: "Schválit".into(),
            delete: "Smazat".into(),
        };
        let node = build_view_node(&Comment::new(3, "Cy", "ahoj", false), &labels);

        assert_eq!(node.to_string(), "Cy: ahoj [Schválit] [Smazat]");
    }
}
