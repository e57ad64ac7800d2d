use std::sync::Mutex;

use async_trait::async_trait;
use hypersim_common::api::{AccessListRequest, RpcTransaction, RpcTransactionReceipt};
use serde_json::{json, Value};

use crate::{client::NodeClient, error::ClientError, options::ExecutionOptions};

// Scripted node client shared by the sdk tests
#[derive(Default)]
pub struct MockNodeClient {
    pub transaction: Option<RpcTransaction>,
    pub receipt: Option<RpcTransactionReceipt>,
    pub fail: bool,
    // Last executed request, recorded for assertions
    pub executed: Mutex<Option<(AccessListRequest, ExecutionOptions)>>,
}

impl MockNodeClient {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn simulated_failure() -> ClientError {
        ClientError::Rpc {
            code: -32000,
            message: "simulated transport failure".to_owned(),
        }
    }
}

#[async_trait]
impl NodeClient for MockNodeClient {
    async fn execute_access_list(
        &self,
        request: &AccessListRequest,
        options: &ExecutionOptions,
    ) -> Result<Value, ClientError> {
        if self.fail {
            return Err(Self::simulated_failure());
        }
        *self.executed.lock().unwrap() = Some((request.clone(), options.clone()));
        Ok(json!({ "accessList": [], "gasUsed": "0x5208" }))
    }

    async fn get_transaction(&self, _hash: &str) -> Result<Option<RpcTransaction>, ClientError> {
        if self.fail {
            return Err(Self::simulated_failure());
        }
        Ok(self.transaction.clone())
    }

    async fn get_transaction_receipt(
        &self,
        _hash: &str,
    ) -> Result<Option<RpcTransactionReceipt>, ClientError> {
        if self.fail {
            return Err(Self::simulated_failure());
        }
        Ok(self.receipt.clone())
    }
}
