use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use hypersim_common::api::{AccessListRequest, RpcTransaction, RpcTransactionReceipt};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    config::{
        DEFAULT_REQUEST_TIMEOUT, JSON_RPC_VERSION, METHOD_CREATE_ACCESS_LIST,
        METHOD_GET_TRANSACTION, METHOD_GET_TRANSACTION_RECEIPT,
    },
    error::ClientError,
    options::ExecutionOptions,
};

// Capability injected into builders and hydrators at construction time.
// The request layer treats it as opaque, it adds no interpretation of
// the responses beyond deserialization.
#[async_trait]
pub trait NodeClient: Send + Sync {
    // Execute an assembled access-list request with the merged
    // per-call options
    async fn execute_access_list(
        &self,
        request: &AccessListRequest,
        options: &ExecutionOptions,
    ) -> Result<Value, ClientError>;

    // Read a transaction by hash, None when the node does not know it
    async fn get_transaction(&self, hash: &str) -> Result<Option<RpcTransaction>, ClientError>;

    // Read a transaction receipt by hash, None when not yet available
    async fn get_transaction_receipt(
        &self,
        hash: &str,
    ) -> Result<Option<RpcTransactionReceipt>, ClientError>;
}

#[derive(Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<JsonRpcErrorObject>,
}

#[derive(Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    message: String,
}

// JSON-RPC over HTTP node client.
// The endpoint is an explicit constructor argument, there is no
// process-wide default to fall back on.
pub struct HttpNodeClient {
    http: reqwest::Client,
    endpoint: String,
    id: AtomicU64,
}

impl HttpNodeClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    // Reuse an existing HTTP client (connection pool, TLS config)
    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            id: AtomicU64::new(0),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn next_id(&self) -> u64 {
        self.id.fetch_add(1, Ordering::Relaxed) + 1
    }

    async fn send(
        &self,
        method: &str,
        params: Value,
        options: &ExecutionOptions,
    ) -> Result<Value, ClientError> {
        let request = JsonRpcRequest {
            jsonrpc: JSON_RPC_VERSION,
            id: self.next_id(),
            method,
            params,
        };

        let mut builder = self
            .http
            .post(&self.endpoint)
            .timeout(options.timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT))
            .json(&request);
        for (key, value) in &options.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let response: JsonRpcResponse = builder.send().await?.error_for_status()?.json().await?;
        if let Some(error) = response.error {
            return Err(ClientError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        Ok(response.result)
    }

    // One extra attempt when the per-call options ask for it and the
    // failure is transport-level. Upstream rpc errors are not retried,
    // the node already gave a definitive answer.
    async fn call(
        &self,
        method: &str,
        params: Value,
        options: &ExecutionOptions,
    ) -> Result<Value, ClientError> {
        if log::log_enabled!(log::Level::Trace) {
            trace!("call: {}", method);
        }
        match self.send(method, params.clone(), options).await {
            Err(ClientError::Http(error)) if options.retry == Some(true) => {
                debug!("retrying {} after transport error: {}", method, error);
                self.send(method, params, options).await
            }
            result => result,
        }
    }
}

// Positional params of eth_createAccessList: the call object, then the
// block reference when one was pinned
fn access_list_params(request: &AccessListRequest) -> Result<Value, ClientError> {
    let mut params = vec![serde_json::to_value(&request.params)?];
    if let Some(block) = &request.block {
        params.push(serde_json::to_value(block)?);
    }
    Ok(Value::Array(params))
}

#[async_trait]
impl NodeClient for HttpNodeClient {
    async fn execute_access_list(
        &self,
        request: &AccessListRequest,
        options: &ExecutionOptions,
    ) -> Result<Value, ClientError> {
        let params = access_list_params(request)?;
        self.call(METHOD_CREATE_ACCESS_LIST, params, options).await
    }

    async fn get_transaction(&self, hash: &str) -> Result<Option<RpcTransaction>, ClientError> {
        let result = self
            .call(METHOD_GET_TRANSACTION, json!([hash]), &ExecutionOptions::new())
            .await?;
        if result.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(result)?))
    }

    async fn get_transaction_receipt(
        &self,
        hash: &str,
    ) -> Result<Option<RpcTransactionReceipt>, ClientError> {
        let result = self
            .call(
                METHOD_GET_TRANSACTION_RECEIPT,
                json!([hash]),
                &ExecutionOptions::new(),
            )
            .await?;
        if result.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(result)?))
    }
}
