/// Declares route functions that delegate to `<name>_impl` and turn its result
/// into either the given success status or the error's own status.
#[macro_export]
macro_rules! api_funcs {
    ( $( ( $method:ident, $func_name:ident, $url:literal, $status:ident, ( $( $arg:ident : $arg_ty:ty ),* $(,)? ) ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[$method($url)]
                async fn $func_name(
                    db: web::Data<Database>,
                    $( $arg: $arg_ty ),*
                ) -> impl Responder {
                    match [<$func_name _impl>](db, $( $arg ),*).await {
                        Ok(response) => HttpResponse::$status().json(response),
                        Err(err) => err.to_response(),
                    }
                }
            }
        )+
    };
}

use chrono::NaiveDateTime;

pub fn format_time_str(time: &NaiveDateTime) -> String {
    const TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    format!("{}+00:00", time.format(TIME_FMT))
}

/// Trims `s` and rejects what is left if it is empty.
pub fn non_empty_trimmed(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formats_store_timestamp_as_utc() {
        let time = NaiveDate::from_ymd(2024, 5, 17).and_hms(8, 30, 5);
        assert_eq!(format_time_str(&time), "2024-05-17T08:30:05+00:00");
    }

    #[test]
    fn trims_and_rejects_blank() {
        assert_eq!(non_empty_trimmed("  Ada \n"), Some("Ada".to_string()));
        assert_eq!(non_empty_trimmed(" \t "), None);
        assert_eq!(non_empty_trimmed(""), None);
    }
}
