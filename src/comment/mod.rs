mod requests;
mod responses;

use crate::{
    database::{assert, Database},
    error::ApiError,
    models::comments::{Comment, NewComment},
    protocol::MessageResponse,
    utils::non_empty_trimmed,
};
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use diesel::prelude::*;

use self::{requests::*, responses::*};

no_arg_sql_function!(
    last_insert_rowid,
    diesel::sql_types::BigInt,
    "Represents the SQLite last_insert_rowid() function"
);

/// Largest accepted request body.
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().limit(MAX_BODY_SIZE)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_comments)
        .service(create_comment)
        .service(get_comment)
        .service(delete_comment);
}

crate::api_funcs! {
    (get, list_comments, "", Ok, ()),
    (post, create_comment, "", Created, (info: Option<web::Json<CreateCommentRequest>>)),
    (get, get_comment, "/{id:\\d+}", Ok, (id: web::Path<i64>)),
    (delete, delete_comment, "/{id:\\d+}", Ok, (id: web::Path<i64>)),
}

async fn list_comments_impl(db: web::Data<Database>) -> Result<ListCommentsResponse, ApiError> {
    use crate::schema::comments;

    let rows = db
        .with_connection(|conn| {
            let rows = comments::table
                .order((comments::timestamp.desc(), comments::id.desc()))
                .load::<Comment>(conn)?;
            Ok(rows)
        })
        .await?;

    let comments: Vec<CommentItem> = rows.into_iter().map(CommentItem::from).collect();
    Ok(ListCommentsResponse {
        total: comments.len(),
        comments,
    })
}

async fn create_comment_impl(
    db: web::Data<Database>,
    info: Option<web::Json<CreateCommentRequest>>,
) -> Result<CreateCommentResponse, ApiError> {
    use crate::schema::comments;

    let (author, content) = match info.map(web::Json::into_inner) {
        Some(CreateCommentRequest {
            author: Some(author),
            content: Some(content),
        }) => (author, content),
        _ => return Err(ApiError::MissingFields),
    };
    let data = match (non_empty_trimmed(&author), non_empty_trimmed(&content)) {
        (Some(author), Some(content)) => NewComment { author, content },
        _ => return Err(ApiError::EmptyFields),
    };

    let comment = db
        .with_connection(move |conn| {
            diesel::insert_into(comments::table)
                .values(&data)
                .execute(conn)?;
            let id = diesel::select(last_insert_rowid).get_result::<i64>(conn)?;
            let comment = comments::table
                .filter(comments::id.eq(id))
                .get_result::<Comment>(conn)?;
            Ok(comment)
        })
        .await?;
    log::info!("Created comment {}", comment.id);

    Ok(CreateCommentResponse {
        message: "Comment created successfully".to_string(),
        comment: comment.into(),
    })
}

async fn get_comment_impl(
    db: web::Data<Database>,
    id: web::Path<i64>,
) -> Result<GetCommentResponse, ApiError> {
    use crate::schema::comments;

    let id = id.into_inner();
    let comment = db
        .with_connection(move |conn| {
            let comment = comments::table
                .filter(comments::id.eq(id))
                .get_result::<Comment>(conn)
                .optional()?;
            Ok(comment)
        })
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(GetCommentResponse {
        comment: comment.into(),
    })
}

async fn delete_comment_impl(
    db: web::Data<Database>,
    id: web::Path<i64>,
) -> Result<MessageResponse, ApiError> {
    use crate::schema::comments;

    let id = id.into_inner();
    db.with_connection(move |conn| {
        assert::assert_comment(conn, id)?;
        diesel::delete(comments::table.filter(comments::id.eq(id))).execute(conn)?;
        Ok(())
    })
    .await?;
    log::info!("Deleted comment {}", id);

    Ok(MessageResponse::new("Comment deleted successfully"))
}
