//! The moderation board: owns the current render and the reload protocol.
//!
//! The board never patches its render. Every state change goes through
//! [`CommentBoard::load`], which fetches the full collection and replaces both
//! lists. Mutations only ever trigger a fresh load after they succeed.
//!
//! # Overlapping loads
//!
//! Each load takes a generation number when it starts. A finished load is
//! applied only if its generation is newer than the render currently on
//! screen, so a slow response can never overwrite a newer one.
//!
//! # Action errors
//!
//! Approve/delete report [`BoardError::Mutation`] when the server change
//! failed (no reload happens) and [`BoardError::Reload`] when the change was
//! applied but the follow-up load failed.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use comments_client::{Comment, CommentId, CommentStore, Result};
use tracing::{debug, info, warn};

use crate::error::{BoardError, BoardResult};
use crate::partition::partition;
use crate::target::RenderTarget;
use crate::view::{build_view_node, Action, ActionKind, BoardLabels, ViewNode};

/// Where the two lists are rendered.
#[derive(Debug, Clone)]
pub struct BoardTargets<T> {
    pub pending: T,
    pub approved: T,
}

/// View nodes of both lists as last rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    pub pending: Vec<ViewNode>,
    pub approved: Vec<ViewNode>,
}

impl BoardView {
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.approved.is_empty()
    }
}

/// Result of a load that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fetched snapshot was rendered.
    Rendered(BoardView),
    /// A newer load had already rendered; this snapshot was dropped.
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardPhase {
    Idle,
    Loading,
    Mutating,
}

/// Build both lists from one snapshot.
pub fn render(comments: &[Comment], labels: &BoardLabels) -> BoardView {
    let split = partition(comments);
    BoardView {
        pending: split
            .pending
            .into_iter()
            .map(|c| build_view_node(c, labels))
            .collect(),
        approved: split
            .approved
            .into_iter()
            .map(|c| build_view_node(c, labels))
            .collect(),
    }
}

#[derive(Default)]
struct Rendered {
    generation: u64,
    view: BoardView,
}

/// Counts an operation in flight for as long as it lives.
struct InflightGuard<'a>(&'a AtomicUsize);

impl<'a> InflightGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self(counter)
    }
}

impl Drop for InflightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

pub struct CommentBoard<S, T> {
    store: S,
    targets: BoardTargets<T>,
    labels: BoardLabels,
    issued: AtomicU64,
    rendered: Mutex<Rendered>,
    loads_in_flight: AtomicUsize,
    mutations_in_flight: AtomicUsize,
}

impl<S, T> CommentBoard<S, T>
where
    S: CommentStore,
    T: RenderTarget,
{
    /// Create a board writing into `targets`. Nothing is fetched until
    /// [`load`](Self::load) is called.
    pub fn init(store: S, targets: BoardTargets<T>) -> Self {
        Self {
            store,
            targets,
            labels: BoardLabels::default(),
            issued: AtomicU64::new(0),
            rendered: Mutex::new(Rendered::default()),
            loads_in_flight: AtomicUsize::new(0),
            mutations_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_labels(mut self, labels: BoardLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn targets(&self) -> &BoardTargets<T> {
        &self.targets
    }

    /// The render currently on screen.
    pub fn snapshot(&self) -> BoardView {
        self.rendered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .view
            .clone()
    }

    pub fn phase(&self) -> BoardPhase {
        if self.loads_in_flight.load(Ordering::Acquire) > 0 {
            BoardPhase::Loading
        } else if self.mutations_in_flight.load(Ordering::Acquire) > 0 {
            BoardPhase::Mutating
        } else {
            BoardPhase::Idle
        }
    }

    /// Fetch the full collection and replace both lists.
    ///
    /// On failure the previous render is left untouched.
    pub async fn load(&self) -> Result<LoadOutcome> {
        let generation = self.issued.fetch_add(1, Ordering::AcqRel) + 1;
        let _loading = InflightGuard::enter(&self.loads_in_flight);

        let comments = match self.store.fetch_all().await {
            Ok(comments) => comments,
            Err(err) => {
                warn!(generation, error = %err, "Comment load failed, keeping previous render");
                return Err(err);
            }
        };

        let view = render(&comments, &self.labels);

        let mut rendered = self
            .rendered
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if generation < rendered.generation {
            debug!(
                generation,
                current = rendered.generation,
                "Discarding superseded comment load"
            );
            return Ok(LoadOutcome::Superseded);
        }

        self.targets.pending.replace_children(view.pending.clone());
        self.targets.approved.replace_children(view.approved.clone());
        rendered.generation = generation;
        rendered.view = view.clone();

        info!(
            generation,
            count = comments.len(),
            pending = view.pending.len(),
            approved = view.approved.len(),
            "Comment board rendered"
        );
        Ok(LoadOutcome::Rendered(view))
    }

    /// Approve a comment, then reload. A failed approve does not reload.
    pub async fn on_approve_requested(&self, id: &CommentId) -> BoardResult<LoadOutcome> {
        self.mutate_then_load(ActionKind::Approve, id).await
    }

    /// Delete a comment, then reload. A failed delete does not reload.
    pub async fn on_delete_requested(&self, id: &CommentId) -> BoardResult<LoadOutcome> {
        self.mutate_then_load(ActionKind::Delete, id).await
    }

    /// Run the handler a rendered control is wired to.
    pub async fn dispatch(&self, action: &Action) -> BoardResult<LoadOutcome> {
        self.mutate_then_load(action.kind, &action.comment_id).await
    }

    async fn mutate_then_load(&self, kind: ActionKind, id: &CommentId) -> BoardResult<LoadOutcome> {
        {
            let _mutating = InflightGuard::enter(&self.mutations_in_flight);
            let result = match kind {
                ActionKind::Approve => self.store.approve(id).await,
                ActionKind::Delete => self.store.delete(id).await,
            };
            if let Err(err) = result {
                warn!(comment_id = %id, action = ?kind, error = %err, "Comment mutation failed");
                return Err(BoardError::Mutation {
                    action: kind,
                    id: id.clone(),
                    source: err,
                });
            }
        }

        self.load().await.map_err(|err| BoardError::Reload {
            action: kind,
            id: id.clone(),
            source: err,
        })
    }
}
