use std::{sync::Arc, time::Duration};

use hypersim_common::{
    api::{AccessListRequest, TransactionCall},
    block::{BlockInput, BlockReference},
};
use indexmap::IndexMap;
use log::trace;
use serde_json::Value;

use crate::{client::NodeClient, error::SdkError, options::ExecutionOptions};

// Fluent builder for one access-list request.
// A builder moves Empty -> Configured -> Consumed: attaching a
// transaction call configures it, build()/execute() consume it by
// value so a consumed builder cannot be touched again.
pub struct AccessListRequestBuilder<C: NodeClient> {
    client: Arc<C>,
    call: Option<TransactionCall>,
    block: Option<BlockReference>,
    options: ExecutionOptions,
}

impl<C: NodeClient> AccessListRequestBuilder<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            call: None,
            block: None,
            options: ExecutionOptions::new(),
        }
    }

    // Attach the call parameters, replacing any previous call
    pub fn with_transaction(mut self, call: TransactionCall) -> Self {
        self.call = Some(call);
        self
    }

    // Pin the request to a block, stored in canonical form
    pub fn at_block<I: Into<BlockInput>>(mut self, block: I) -> Self {
        self.block = Some(BlockReference::normalize(block));
        self
    }

    // Merge options into the current snapshot, the incoming side wins
    // on collisions and headers accumulate
    pub fn with_execution_options(mut self, options: ExecutionOptions) -> Self {
        self.options = self.options.merge(&options);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_execution_options(ExecutionOptions {
            timeout: Some(timeout),
            ..Default::default()
        })
    }

    pub fn with_headers(self, headers: IndexMap<String, String>) -> Self {
        self.with_execution_options(ExecutionOptions {
            headers,
            ..Default::default()
        })
    }

    pub fn with_retry(self, retry: bool) -> Self {
        self.with_execution_options(ExecutionOptions {
            retry: Some(retry),
            ..Default::default()
        })
    }

    fn assemble(self) -> Result<(Arc<C>, AccessListRequest, ExecutionOptions), SdkError> {
        let call = self
            .call
            .ok_or(SdkError::MissingRequiredField("transaction call"))?;
        let request = AccessListRequest {
            params: call,
            block: self.block,
        };
        Ok((self.client, request, self.options))
    }

    // Snapshot the immutable request
    pub fn build(self) -> Result<AccessListRequest, SdkError> {
        let (_, request, _) = self.assemble()?;
        Ok(request)
    }

    // Validate, assemble and delegate to the injected client.
    // The transport result or failure is passed through unchanged.
    pub async fn execute(self) -> Result<Value, SdkError> {
        if log::log_enabled!(log::Level::Trace) {
            trace!("execute");
        }
        let (client, request, options) = self.assemble()?;
        let response = client.execute_access_list(&request, &options).await?;
        Ok(response)
    }
}
