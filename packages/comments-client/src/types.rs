use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Server-assigned comment identifier.
///
/// Opaque to the client. The server may send it as a JSON number or a string;
/// either way it is echoed back unchanged in request paths. Numbers keep
/// their JSON form, so ids beyond `i64` or with a fraction survive too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommentId {
    Number(Number),
    Text(String),
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentId::Number(n) => write!(f, "{}", n),
            CommentId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for CommentId {
    fn from(n: i64) -> Self {
        CommentId::Number(n.into())
    }
}

impl From<i32> for CommentId {
    fn from(n: i32) -> Self {
        CommentId::Number(n.into())
    }
}

impl From<u64> for CommentId {
    fn from(n: u64) -> Self {
        CommentId::Number(n.into())
    }
}

/// Anything that reads as a JSON number is a numeric id, the rest is text.
impl FromStr for CommentId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<Number>() {
            Ok(n) => CommentId::Number(n),
            Err(_) => CommentId::Text(s.to_string()),
        })
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> Self {
        CommentId::Text(s.to_string())
    }
}

impl From<String> for CommentId {
    fn from(s: String) -> Self {
        CommentId::Text(s)
    }
}

/// A single comment as returned by `GET /comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub text: String,
    pub approved: bool,
}

impl Comment {
    pub fn new(
        id: impl Into<CommentId>,
        author: impl Into<String>,
        text: impl Into<String>,
        approved: bool,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            text: text.into(),
            approved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_number_or_string() {
        let comments: Vec<Comment> = serde_json::from_str(
            r#"[
                {"id": 7, "author": "Ann", "text": "hi", "approved": false},
                {"id": "c-8", "author": "Bo", "text": "yo", "approved": true}
            ]"#,
        )
        .unwrap();

        assert_eq!(comments[0].id, CommentId::from(7));
        assert_eq!(comments[1].id, CommentId::Text("c-8".into()));
        assert_eq!(comments[0].id.to_string(), "7");
        assert_eq!(comments[1].id.to_string(), "c-8");
    }

    #[test]
    fn test_id_keeps_any_json_number() {
        let comments: Vec<Comment> = serde_json::from_str(
            r#"[
                {"id": 18446744073709551615, "author": "Ann", "text": "hi", "approved": false},
                {"id": 2.5, "author": "Bo", "text": "yo", "approved": true}
            ]"#,
        )
        .unwrap();

        assert_eq!(comments[0].id, CommentId::from(u64::MAX));
        assert_eq!(comments[0].id.to_string(), "18446744073709551615");
        assert_eq!(comments[1].id.to_string(), "2.5");

        let round_trip = serde_json::to_value(&comments[0]).unwrap();
        assert_eq!(round_trip["id"], serde_json::json!(u64::MAX));
    }

    #[test]
    fn test_parse_id_from_text() {
        assert_eq!("42".parse::<CommentId>().unwrap(), CommentId::from(42));
        assert_eq!(
            "c-42".parse::<CommentId>().unwrap(),
            CommentId::Text("c-42".into())
        );
    }

    #[test]
    fn test_missing_approved_is_rejected() {
        let result: Result<Comment, _> =
            serde_json::from_str(r#"{"id": 1, "author": "Ann", "text": "hi"}"#);
        assert!(result.is_err());
    }
}
