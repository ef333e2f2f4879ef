use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::error::ErrorKind;
use sqlx::postgres::PgDatabaseError;

static PARENTHESIZED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((.*?)\)").expect("parenthesized group pattern is valid"));

/// Driver text of a constraint violation, in the `ERROR: <message>  Detail: <detail>`
/// shape Postgres uses in its own logs. `None` for any other failure.
pub fn constraint_message(error: &sqlx::Error) -> Option<String> {
    let sqlx::Error::Database(db_error) = error else {
        return None;
    };

    if !matches!(
        db_error.kind(),
        ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation
    ) {
        return None;
    }

    let detail = db_error
        .try_downcast_ref::<PgDatabaseError>()
        .and_then(|pg| pg.detail());

    Some(match detail {
        Some(detail) => format!("ERROR: {}  Detail: {}", db_error.message(), detail),
        None => format!("ERROR: {}", db_error.message()),
    })
}

/// Best-effort rewrite of a constraint violation into `key 'value' trailing`.
///
/// `Key (slug)=(bl8lo0d) already exists.` becomes `slug 'bl8lo0d' already exists.`
/// Returns `None` unless the message holds exactly two parenthesized groups.
pub fn constraint_detail(message: &str) -> Option<String> {
    let groups: Vec<&str> = PARENTHESIZED
        .captures_iter(message)
        .filter_map(|captures| captures.get(1).map(|m| m.as_str()))
        .collect();

    let [key, value] = groups.as_slice() else {
        return None;
    };

    let trailing = message
        .rfind(')')
        .map(|index| message[index + 1..].trim())
        .unwrap_or_default();

    Some(format!("{} '{}' {}", key, value, trailing).trim_end().to_string())
}
