use std::time::Duration;

use indexmap::IndexMap;

// Per-call execution options, handed through to the transport client.
// The retry flag is a pass-through instruction consumed by the transport,
// no retry logic lives in the request layer itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionOptions {
    pub timeout: Option<Duration>,
    pub headers: IndexMap<String, String>,
    pub retry: Option<bool>,
}

impl ExecutionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    // Pure merge, neither input is mutated.
    // Headers are additive (union, incoming wins on key collision),
    // timeout and retry replace the existing value only when the
    // incoming side provides one.
    pub fn merge(&self, incoming: &ExecutionOptions) -> ExecutionOptions {
        let mut headers = self.headers.clone();
        for (key, value) in &incoming.headers {
            headers.insert(key.clone(), value.clone());
        }

        ExecutionOptions {
            timeout: incoming.timeout.or(self.timeout),
            headers,
            retry: incoming.retry.or(self.retry),
        }
    }
}
