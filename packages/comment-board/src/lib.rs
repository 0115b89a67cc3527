//! Comment moderation board.
//!
//! Splits the comment collection into a pending list and an approved list,
//! renders each comment with its controls, and reloads everything from the
//! server after every successful approve or delete.
//!
//! # Example
//!
//! ```rust,ignore
//! use comment_board::{BoardTargets, CommentBoard, ListTarget};
//! use comments_client::CommentsClient;
//!
//! let board = CommentBoard::init(
//!     CommentsClient::new("http://localhost:8080"),
//!     BoardTargets {
//!         pending: ListTarget::new(),
//!         approved: ListTarget::new(),
//!     },
//! );
//!
//! board.load().await?;
//! let first = &board.targets().pending.children()[0];
//! board.on_approve_requested(&first.comment_id).await?;
//! ```

pub mod board;
pub mod error;
pub mod partition;
pub mod target;
pub mod view;

pub use board::{render, BoardPhase, BoardTargets, BoardView, CommentBoard, LoadOutcome};
pub use error::{BoardError, BoardResult};
pub use partition::{partition, Partition};
pub use target::{ListTarget, RenderTarget};
pub use view::{build_view_node, Action, ActionKind, BoardLabels, ViewNode};

pub use comments_client::{Comment, CommentId, CommentStore, CommentsError, Result};
