use crate::core::store::LineStore;
use crate::errors::AppResult;
use tracing::debug;

/// Map (email, year, month) to a sheet id.
///
/// `None` means no report was filed for that month. There is no fallback to
/// a neighbouring month.
pub fn resolve_sheet<S>(store: &S, email: &str, year: i32, month: u32) -> AppResult<Option<i64>>
where
    S: LineStore + ?Sized,
{
    let id = store.sheet_id(email, year, month)?;
    match id {
        Some(id) => debug!(email, year, month, sheet_id = id, "sheet resolved"),
        None => debug!(email, year, month, "no sheet filed"),
    }
    Ok(id)
}
