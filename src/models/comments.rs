use crate::schema::comments;
use chrono::NaiveDateTime;

#[derive(Queryable, Debug)]
pub struct Comment {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "comments"]
pub struct NewComment {
    pub author: String,
    pub content: String,
}
