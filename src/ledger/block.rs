use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::transaction::Transaction;

/// Represents a sealed batch of transactions, linked to its predecessor
/// by that block's canonical hash
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Block {
    /// Position of the block in the chain, starting at 1
    pub index: u64,

    /// Seconds since the Unix epoch at the moment the block was sealed
    pub timestamp: f64,

    /// Transactions included in this block, in submission order
    pub transactions: Vec<Transaction>,

    /// Proof value recorded when the block was sealed
    pub proof: u64,

    /// Canonical hash of the previous block ("1" for the genesis block)
    pub previous_hash: String,
}

impl Block {
    /// Creates a new block stamped with the current wall-clock time
    ///
    /// # Arguments
    ///
    /// * `index` - The index of the block in the chain
    /// * `transactions` - The transactions to include in the block
    /// * `proof` - The proof value to record
    /// * `previous_hash` - The canonical hash of the previous block
    ///
    /// # Returns
    ///
    /// A new Block instance
    pub fn new(index: u64, transactions: Vec<Transaction>, proof: u64, previous_hash: String) -> Self {
        Block {
            index,
            timestamp: unix_time(),
            transactions,
            proof,
            previous_hash,
        }
    }
}

/// Current wall-clock time as fractional seconds since the Unix epoch
fn unix_time() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_block() {
        let transactions = vec![
            Transaction::new("alice".to_string(), "bob".to_string(), 10.0).unwrap(),
            Transaction::new("bob".to_string(), "carol".to_string(), 20.0).unwrap(),
        ];

        let block = Block::new(2, transactions, 100, "previous_hash".to_string());

        assert_eq!(block.index, 2);
        assert_eq!(block.proof, 100);
        assert_eq!(block.previous_hash, "previous_hash");
        assert_eq!(block.transactions.len(), 2);
        assert!(block.timestamp > 0.0);
    }

    #[test]
    fn test_block_json_carries_exactly_the_contract_fields() {
        let block = Block::new(1, Vec::new(), 100, "1".to_string());

        let value = serde_json::to_value(&block).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        assert_eq!(
            keys,
            vec!["index", "previous_hash", "proof", "timestamp", "transactions"]
        );
    }
}
