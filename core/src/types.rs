//! Domain DTOs for the posts API.
//!
//! # Design
//! The server owns the post schema, so the client keeps it loose: ids are
//! opaque scalars and any field beyond `userId`, `companyId` and `rating`
//! travels in a flattened JSON map.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::RatingError;

/// Opaque identifier for posts, users and companies.
///
/// Serializes as the matching JSON scalar and renders into URL paths as-is,
/// without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{n}"),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for Id {
    fn from(n: i32) -> Self {
        Id::Number(n.into())
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n)
    }
}

impl From<u32> for Id {
    fn from(n: u32) -> Self {
        Id::Number(n.into())
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Text(s)
    }
}

impl From<&Id> for Value {
    fn from(id: &Id) -> Self {
        match id {
            Id::Number(n) => Value::from(*n),
            Id::Text(s) => Value::String(s.clone()),
        }
    }
}

impl From<Id> for Value {
    fn from(id: Id) -> Self {
        Value::from(&id)
    }
}

/// A rating value, sent in the numeric form the caller gave it.
///
/// Integers stay integers on the wire (`4`, not `4.0`). Floats go through
/// `TryFrom<f64>`, which rejects NaN and infinities since JSON has no
/// encoding for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(Number);

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for Rating {
    fn from(n: i32) -> Self {
        Rating(n.into())
    }
}

impl From<i64> for Rating {
    fn from(n: i64) -> Self {
        Rating(n.into())
    }
}

impl From<u32> for Rating {
    fn from(n: u32) -> Self {
        Rating(n.into())
    }
}

impl TryFrom<f64> for Rating {
    type Error = RatingError;

    fn try_from(n: f64) -> Result<Self, RatingError> {
        Number::from_f64(n).map(Rating).ok_or(RatingError::NonFinite(n))
    }
}

impl From<Rating> for Value {
    fn from(rating: Rating) -> Self {
        Value::Number(rating.0)
    }
}

/// Fields of a post that has not been created yet.
///
/// Borrowed by `PostApiClient::create_post`, never modified by it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostDraft {
    fields: Map<String, Value>,
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for a single field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for PostDraft {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// A post as returned by the server. The client never decodes responses
/// itself; this is for callers via `HttpResponse::json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    pub user_id: Id,
    pub company_id: Id,
    #[serde(default)]
    pub rating: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
