//! Composable `FindParameters` query builders. Each entity that supports
//! listing gets one: a fixed, enumerated set of optional filters that the
//! composer translates into a single parameterized SQL statement.

use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::ColumnTrait;

pub mod artist;
pub mod cluster;
pub mod release;
pub mod track;

pub use artist::ArtistFindParameters;
pub use cluster::ClusterFindParameters;
pub use release::ReleaseFindParameters;
pub use track::TrackFindParameters;

/// Escapes `%`, `_`, and the escape character itself so they match literally
/// rather than as wildcards, then wraps the term for substring matching.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    for c in term.chars() {
        match c {
            '\\' | '%' | '_' => {
                escaped.push('\\');
                escaped.push(c);
            }
            other => escaped.push(other),
        }
    }
    format!("%{escaped}%")
}

/// `column LIKE '%escaped%' ESCAPE '\'`. SQLite has no default `LIKE` escape
/// character, so the escape clause must be spelled out explicitly or
/// `like_pattern`'s escaping of a keyword's own `%`/`_` is a no-op.
pub(crate) fn like_condition<C: ColumnTrait>(column: C, term: &str) -> SimpleExpr {
    Expr::col(column).like(like_pattern(term)).escape('\\').into()
}

/// `column COLLATE NOCASE`, for `ByName` sort methods. SQLite's default
/// `BINARY` collation sorts uppercase before lowercase; `ByName` ties need
/// case-insensitive ordering instead.
pub(crate) fn nocase(column_name: &str) -> SimpleExpr {
    Expr::cust(&format!("{column_name} COLLATE NOCASE"))
}
