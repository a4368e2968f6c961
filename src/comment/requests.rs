use serde::Deserialize;

/// Body of a create request. Fields are optional so that a body without them
/// can be told apart from one with blank values.
#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub author: Option<String>,
    pub content: Option<String>,
}
