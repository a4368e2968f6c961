use serde::Serialize;

use crate::models::comments::Comment;

#[derive(Serialize, Debug)]
pub struct CommentItem {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub timestamp: String,
}

impl From<Comment> for CommentItem {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            author: comment.author,
            content: comment.content,
            timestamp: crate::utils::format_time_str(&comment.timestamp),
        }
    }
}

#[derive(Serialize)]
pub struct ListCommentsResponse {
    pub comments: Vec<CommentItem>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct CreateCommentResponse {
    pub message: String,
    pub comment: CommentItem,
}

#[derive(Serialize)]
pub struct GetCommentResponse {
    pub comment: CommentItem,
}
