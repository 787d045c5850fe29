//! Access to the hosted Supabase (PostgREST) query service.
//!
//! Handlers never talk HTTP to the database themselves: they describe a [`Selection`]
//! or an [`RpcCall`] and hand it to the [`QueryService`] held in the application state.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod client;
pub mod error;
#[cfg(test)]
pub mod mock;
pub mod query;

pub use client::SupabaseClient;
pub use error::SupabaseError;
pub use query::{OrderColumn, Pattern, RpcCall, Selection};

pub type QueryResult<T> = core::result::Result<T, SupabaseError>;

#[async_trait]
pub trait QueryService: Send + Sync {
    async fn select(&self, selection: &Selection) -> QueryResult<Vec<Value>>;

    async fn rpc(&self, call: &RpcCall) -> QueryResult<Vec<Value>>;
}

/// Runs a selection and decodes every row into `T`.
pub async fn select_as<T: DeserializeOwned>(
    db: &dyn QueryService,
    selection: &Selection,
) -> QueryResult<Vec<T>> {
    let rows = db.select(selection).await?;
    decode_rows(rows)
}

pub fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>) -> QueryResult<Vec<T>> {
    rows.into_iter()
        .map(|row| {
            // The serde message stays in `details`, which only reaches the logs.
            serde_json::from_value(row).map_err(|e| SupabaseError {
                details: Some(e.to_string()),
                ..SupabaseError::transport("Unexpected row shape")
            })
        })
        .collect()
}
