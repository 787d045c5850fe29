use axum::Json;

use crate::{
    supabase::{QueryResult, SupabaseError},
    Error, Result,
};

/// Turns the outcome of a remote call into the route's response.
///
/// Remote errors keep the remote status and are logged in full, an empty result is a 404
/// carrying `not_found`, and anything else is returned as-is in remote order.
pub fn rows_or_not_found<T>(
    outcome: QueryResult<Vec<T>>,
    not_found: impl FnOnce() -> String,
) -> Result<Json<Vec<T>>> {
    let rows = outcome.inspect_err(log_supabase_error)?;

    if rows.is_empty() {
        return Err(Error::NotFound {
            message: not_found(),
        });
    }

    Ok(Json(rows))
}

pub fn log_supabase_error(err: &SupabaseError) {
    tracing::error!(
        error_message = %err.message,
        details = ?err.details,
        hint = ?err.hint,
        code = ?err.code,
        status = ?err.status,
        status_text = ?err.status_text,
        "Supabase error"
    );
}
