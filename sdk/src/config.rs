use std::time::Duration;

pub const JSON_RPC_VERSION: &str = "2.0";

// Request timeout applied when the caller did not provide one
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Upstream method names
pub const METHOD_CREATE_ACCESS_LIST: &str = "eth_createAccessList";
pub const METHOD_GET_TRANSACTION: &str = "eth_getTransactionByHash";
pub const METHOD_GET_TRANSACTION_RECEIPT: &str = "eth_getTransactionReceipt";
