use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::block::BlockReference;

// Render a big integer as a canonical lowercase 0x-prefixed hex string
// (no leading zeros, 0x0 for zero)
pub fn to_hex(value: U256) -> String {
    format!("0x{:x}", value)
}

// Unsent call parameters attached to an access-list request
// Copied into the request on attach, the caller keeps its own value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCall {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<String>,
}

// Assembled request, immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessListRequest {
    pub params: TransactionCall,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockReference>,
}

// Transaction object as returned by the upstream node
// Numeric fields are big-integer typed on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
    pub from: String,
    pub to: Option<String>,
    pub value: Option<U256>,
    pub input: Option<String>,
    pub gas: Option<U256>,
    pub gas_price: Option<U256>,
    pub max_fee_per_gas: Option<U256>,
    pub max_priority_fee_per_gas: Option<U256>,
    pub nonce: Option<U256>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
}

// Post-execution receipt as returned by the upstream node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransactionReceipt {
    pub status: Option<U256>,
    pub block_number: Option<U256>,
    pub gas_used: Option<U256>,
    pub contract_address: Option<String>,
}

impl RpcTransactionReceipt {
    // Status 1 indicates success, anything else (including reverted) does not
    pub fn is_success(&self) -> bool {
        self.status == Some(U256::one())
    }
}

// Hydrated merge of a transaction and its receipt
// Big-integer fields are canonical hex strings and stay absent when
// the source omits them, nonce is a plain integer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub from: String,
    // Recipient, falling back to the receipt contract-creation address,
    // empty when neither is known
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<String>,
    pub transaction_type: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<String>,
}
