//! In-memory [`CommentStore`] for tests.
//!
//! `MockCommentStore` behaves like a tiny server: approve flips the flag on
//! its stored collection and delete removes the entry, so a re-fetch after a
//! mutation sees the change. Failures can be injected per operation and
//! fetches can be held open to force interleavings.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

use crate::{Comment, CommentId, CommentStore, CommentsError, Result, TransportError};

/// A call observed by the mock, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    FetchAll,
    Approve(CommentId),
    Delete(CommentId),
}

/// Failure to inject into the next call of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Network,
    Status(u16),
    Decode,
}

impl Failure {
    fn into_error(self) -> CommentsError {
        match self {
            Failure::Network => TransportError::Network("connection refused".into()).into(),
            Failure::Status(status) => TransportError::Status {
                status,
                body: String::new(),
            }
            .into(),
            Failure::Decode => CommentsError::Decode("expected a sequence".into()),
        }
    }
}

#[derive(Default)]
struct State {
    comments: Vec<Comment>,
    calls: Vec<StoreCall>,
    fetch_failures: VecDeque<Failure>,
    approve_failures: VecDeque<Failure>,
    delete_failures: VecDeque<Failure>,
    held_fetches: VecDeque<oneshot::Receiver<()>>,
}

/// Clones share state, so a test can keep a handle after giving one away.
#[derive(Clone, Default)]
pub struct MockCommentStore {
    state: Arc<Mutex<State>>,
}

/// Releases a fetch held by [`MockCommentStore::hold_next_fetch`].
pub struct FetchRelease(oneshot::Sender<()>);

impl FetchRelease {
    pub fn release(self) {
        let _ = self.0.send(());
    }
}

impl MockCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comments(comments: Vec<Comment>) -> Self {
        let store = Self::new();
        store.set_comments(comments);
        store
    }

    /// Replace the stored collection (simulates another editor's change).
    pub fn set_comments(&self, comments: Vec<Comment>) {
        self.state.lock().unwrap().comments = comments;
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.state.lock().unwrap().comments.clone()
    }

    pub fn fail_next_fetch(&self, failure: Failure) {
        self.state.lock().unwrap().fetch_failures.push_back(failure);
    }

    pub fn fail_next_approve(&self, failure: Failure) {
        self.state.lock().unwrap().approve_failures.push_back(failure);
    }

    pub fn fail_next_delete(&self, failure: Failure) {
        self.state.lock().unwrap().delete_failures.push_back(failure);
    }

    /// Hold the next fetch after it has captured its snapshot; it completes
    /// only once the returned handle is released (or dropped).
    pub fn hold_next_fetch(&self) -> FetchRelease {
        let (tx, rx) = oneshot::channel();
        self.state.lock().unwrap().held_fetches.push_back(rx);
        FetchRelease(tx)
    }

    /// Get all calls in arrival order
    pub fn calls(&self) -> Vec<StoreCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|c| **c == StoreCall::FetchAll)
            .count()
    }
}

#[async_trait]
impl CommentStore for MockCommentStore {
    async fn fetch_all(&self) -> Result<Vec<Comment>> {
        let (outcome, hold) = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(StoreCall::FetchAll);
            let outcome = match state.fetch_failures.pop_front() {
                Some(failure) => Err(failure),
                None => Ok(state.comments.clone()),
            };
            (outcome, state.held_fetches.pop_front())
        };

        if let Some(hold) = hold {
            let _ = hold.await;
        }

        outcome.map_err(Failure::into_error)
    }

    async fn approve(&self, id: &CommentId) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StoreCall::Approve(id.clone()));
        if let Some(failure) = state.approve_failures.pop_front() {
            return Err(failure.into_error());
        }

        match state.comments.iter_mut().find(|c| &c.id == id) {
            Some(comment) => {
                comment.approved = true;
                Ok(())
            }
            None => Err(Failure::Status(404).into_error()),
        }
    }

    async fn delete(&self, id: &CommentId) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StoreCall::Delete(id.clone()));
        if let Some(failure) = state.delete_failures.pop_front() {
            return Err(failure.into_error());
        }

        let before = state.comments.len();
        state.comments.retain(|c| &c.id != id);
        if state.comments.len() == before {
            return Err(Failure::Status(404).into_error());
        }
        Ok(())
    }
}
