use diesel::prelude::*;

use crate::error::ApiError;

pub fn assert_comment(conn: &SqliteConnection, id: i64) -> Result<(), ApiError> {
    use crate::schema::comments;

    let res = comments::table
        .filter(comments::id.eq(id))
        .count()
        .get_result::<i64>(conn)?;

    if res == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(())
}
