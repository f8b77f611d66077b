use serde::{Deserialize, Serialize};

/// A server-owned bookmark record. The `id` is assigned by the server and is
/// stable for the record's lifetime; the client never mutates any field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub tags: String,
}

/// Payload for a create request. Exactly the three form fields, sent as-is
/// with no client-side validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub tags: String,
}
