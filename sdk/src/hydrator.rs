use std::sync::Arc;

use futures::join;
use hypersim_common::api::{to_hex, RpcTransaction, RpcTransactionReceipt, TransactionRecord};
use log::{debug, trace};

use crate::client::NodeClient;

pub use hypersim_common::validation::{is_valid_transaction_hash, validate_transaction_hash};

// Type tag used when the source transaction carries none
const LEGACY_TRANSACTION_TYPE: &str = "legacy";

// Fetches a transaction and its receipt and merges them into one
// normalized record
pub struct TransactionHydrator<C: NodeClient> {
    client: Arc<C>,
}

impl<C: NodeClient> TransactionHydrator<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    // Issue both reads and merge the results. The reads have no
    // ordering dependency, they are joined concurrently.
    // Unknown hashes and transport failures both collapse to None,
    // callers must read absence as "could not determine", not
    // "does not exist".
    pub async fn hydrate(&self, hash: &str) -> Option<TransactionRecord> {
        if log::log_enabled!(log::Level::Trace) {
            trace!("hydrate: {}", hash);
        }
        let (receipt, transaction) = join!(
            self.client.get_transaction_receipt(hash),
            self.client.get_transaction(hash),
        );

        let receipt = match receipt {
            Ok(receipt) => receipt,
            Err(error) => {
                debug!("receipt fetch failed for {}: {}", hash, error);
                return None;
            }
        };
        let transaction = match transaction {
            Ok(Some(transaction)) => transaction,
            Ok(None) => return None,
            Err(error) => {
                debug!("transaction fetch failed for {}: {}", hash, error);
                return None;
            }
        };

        Some(merge_record(transaction, receipt))
    }
}

// Merge the two wire objects into one record, each field
// independently nullable-safe. Big-integer fields become canonical
// hex strings and stay absent when the source omits them.
fn merge_record(
    transaction: RpcTransaction,
    receipt: Option<RpcTransactionReceipt>,
) -> TransactionRecord {
    let to = transaction
        .to
        .or_else(|| {
            receipt
                .as_ref()
                .and_then(|receipt| receipt.contract_address.clone())
        })
        .unwrap_or_default();

    TransactionRecord {
        from: transaction.from,
        to,
        value: transaction.value.map(to_hex),
        data: transaction.input,
        gas: transaction.gas.map(to_hex),
        gas_price: transaction.gas_price.map(to_hex),
        max_fee_per_gas: transaction.max_fee_per_gas.map(to_hex),
        max_priority_fee_per_gas: transaction.max_priority_fee_per_gas.map(to_hex),
        nonce: transaction.nonce.map(|nonce| nonce.low_u64()),
        block_number: receipt
            .as_ref()
            .and_then(|receipt| receipt.block_number)
            .map(to_hex),
        transaction_type: transaction
            .transaction_type
            .unwrap_or_else(|| LEGACY_TRANSACTION_TYPE.to_owned()),
        success: receipt
            .as_ref()
            .map(RpcTransactionReceipt::is_success)
            .unwrap_or(false),
        gas_used: receipt
            .as_ref()
            .and_then(|receipt| receipt.gas_used)
            .map(to_hex),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockNodeClient;
    use primitive_types::U256;

    const HASH: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const SENDER: &str = "0x1111111111111111111111111111111111111111";
    const RECIPIENT: &str = "0x2222222222222222222222222222222222222222";
    const CONTRACT: &str = "0x3333333333333333333333333333333333333333";

    fn sample_transaction() -> RpcTransaction {
        RpcTransaction {
            from: SENDER.to_owned(),
            to: Some(RECIPIENT.to_owned()),
            value: Some(U256::from(999u64)),
            input: Some("0xdeadbeef".to_owned()),
            gas: Some(U256::from(21_000u64)),
            gas_price: Some(U256::from(1_000_000_000u64)),
            nonce: Some(U256::from(7u64)),
            ..Default::default()
        }
    }

    fn sample_receipt() -> RpcTransactionReceipt {
        RpcTransactionReceipt {
            status: Some(U256::one()),
            block_number: Some(U256::from(1000u64)),
            gas_used: Some(U256::from(20_000u64)),
            contract_address: None,
        }
    }

    #[tokio::test]
    async fn test_hydrate_found_transaction() {
        let client = Arc::new(MockNodeClient {
            transaction: Some(sample_transaction()),
            receipt: Some(sample_receipt()),
            ..Default::default()
        });

        let record = TransactionHydrator::new(client).hydrate(HASH).await.unwrap();
        assert_eq!(record.from, SENDER);
        assert_eq!(record.to, RECIPIENT);
        assert_eq!(record.value.as_deref(), Some("0x3e7"));
        assert_eq!(record.data.as_deref(), Some("0xdeadbeef"));
        assert_eq!(record.gas.as_deref(), Some("0x5208"));
        assert_eq!(record.gas_price.as_deref(), Some("0x3b9aca00"));
        assert_eq!(record.nonce, Some(7));
        assert_eq!(record.block_number.as_deref(), Some("0x3e8"));
        assert_eq!(record.gas_used.as_deref(), Some("0x4e20"));
        assert!(record.success);
        // Fee fields absent on the source stay absent
        assert!(record.max_fee_per_gas.is_none());
        assert!(record.max_priority_fee_per_gas.is_none());
        // No type tag on the source defaults to legacy
        assert_eq!(record.transaction_type, "legacy");
    }

    #[tokio::test]
    async fn test_hydrate_contract_creation_fallback() {
        let mut transaction = sample_transaction();
        transaction.to = None;
        let mut receipt = sample_receipt();
        receipt.contract_address = Some(CONTRACT.to_owned());

        let client = Arc::new(MockNodeClient {
            transaction: Some(transaction),
            receipt: Some(receipt),
            ..Default::default()
        });
        let record = TransactionHydrator::new(client).hydrate(HASH).await.unwrap();
        assert_eq!(record.to, CONTRACT);
    }

    #[tokio::test]
    async fn test_hydrate_no_recipient_at_all() {
        let mut transaction = sample_transaction();
        transaction.to = None;

        let client = Arc::new(MockNodeClient {
            transaction: Some(transaction),
            receipt: Some(sample_receipt()),
            ..Default::default()
        });
        let record = TransactionHydrator::new(client).hydrate(HASH).await.unwrap();
        assert_eq!(record.to, "");
    }

    #[tokio::test]
    async fn test_hydrate_unknown_transaction_is_absent() {
        let client = Arc::new(MockNodeClient::default());
        assert!(TransactionHydrator::new(client).hydrate(HASH).await.is_none());
    }

    #[tokio::test]
    async fn test_hydrate_transport_failure_is_absent_not_error() {
        let client = Arc::new(MockNodeClient::failing());
        assert!(TransactionHydrator::new(client).hydrate(HASH).await.is_none());
    }

    #[tokio::test]
    async fn test_hydrate_missing_receipt_degrades() {
        let client = Arc::new(MockNodeClient {
            transaction: Some(sample_transaction()),
            receipt: None,
            ..Default::default()
        });
        let record = TransactionHydrator::new(client).hydrate(HASH).await.unwrap();
        assert!(!record.success);
        assert!(record.gas_used.is_none());
        assert!(record.block_number.is_none());
    }

    #[tokio::test]
    async fn test_hydrate_reverted_transaction() {
        let mut receipt = sample_receipt();
        receipt.status = Some(U256::zero());

        let client = Arc::new(MockNodeClient {
            transaction: Some(sample_transaction()),
            receipt: Some(receipt),
            ..Default::default()
        });
        let record = TransactionHydrator::new(client).hydrate(HASH).await.unwrap();
        assert!(!record.success);
    }

    #[test]
    fn test_explicit_type_tag_is_kept() {
        let mut transaction = sample_transaction();
        transaction.transaction_type = Some("0x2".to_owned());
        let record = merge_record(transaction, Some(sample_receipt()));
        assert_eq!(record.transaction_type, "0x2");
    }

    #[test]
    fn test_reference_validator() {
        assert!(is_valid_transaction_hash(HASH));
        assert!(!is_valid_transaction_hash(&format!("0x{}", "a".repeat(63))));
        assert!(!is_valid_transaction_hash(&"a".repeat(64)));
    }
}
