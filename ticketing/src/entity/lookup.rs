use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::ColumnTrait;

// must not need quoting inside a SQL string literal
const LIKE_ESCAPE: char = '!';

/// Case-insensitive substring match: `LOWER(column) LIKE '%fragment%'`.
///
/// Wildcards in `fragment` match literally.
pub(crate) fn icontains<C: ColumnTrait>(column: C, fragment: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&fragment.to_lowercase()));
    Expr::expr(Func::lower(Expr::col((column.entity_name(), column))))
        .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

/// A condition no row satisfies, for lookups whose answer is known to be empty.
pub(crate) fn nothing() -> SimpleExpr {
    Expr::val(1).eq(0)
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
