//! Pure split of a fetched collection into pending and approved comments.

use comments_client::Comment;

/// Borrowed views over one collection snapshot.
///
/// Every comment of the snapshot appears in exactly one of the two lists, and
/// each list keeps the fetch order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    pub pending: Vec<&'a Comment>,
    pub approved: Vec<&'a Comment>,
}

pub fn partition(comments: &[Comment]) -> Partition<'_> {
    let (approved, pending): (Vec<&Comment>, Vec<&Comment>) =
        comments.iter().partition(|c| c.approved);
    Partition { pending, approved }
}
