use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::{QueryResult, QueryService, RpcCall, Selection, SupabaseError};

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Select(Selection),
    Rpc(RpcCall),
}

/// In-memory query service answering every call with the same canned outcome.
#[derive(Clone)]
pub struct MockQueryService {
    outcome: QueryResult<Vec<Value>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockQueryService {
    pub fn with_rows(rows: Vec<Value>) -> Self {
        Self {
            outcome: Ok(rows),
            calls: Arc::default(),
        }
    }

    pub fn with_error(err: SupabaseError) -> Self {
        Self {
            outcome: Err(err),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryService for MockQueryService {
    async fn select(&self, selection: &Selection) -> QueryResult<Vec<Value>> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Select(selection.clone()));
        self.outcome.clone()
    }

    async fn rpc(&self, call: &RpcCall) -> QueryResult<Vec<Value>> {
        self.calls.lock().unwrap().push(RecordedCall::Rpc(call.clone()));
        self.outcome.clone()
    }
}
