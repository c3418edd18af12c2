use serde_json::json;
use sha2::{Digest, Sha256};

use super::block::Block;

/// Renders a block as its canonical JSON encoding
///
/// serde_json object maps are ordered by key, so the rendered string is
/// identical for structurally identical blocks regardless of field
/// declaration or insertion order. Transaction objects inside the block
/// are key-ordered the same way.
///
/// # Returns
///
/// The canonical JSON string the block digest is computed over
pub fn canonical_json(block: &Block) -> String {
    let canonical = json!({
        "index": block.index,
        "timestamp": block.timestamp,
        "transactions": block.transactions,
        "proof": block.proof,
        "previous_hash": block.previous_hash,
    });

    canonical.to_string()
}

/// Computes the canonical SHA-256 digest of a block
///
/// # Arguments
///
/// * `block` - The block to hash
///
/// # Returns
///
/// The digest of the block's canonical JSON encoding as a lowercase
/// hexadecimal string
pub fn block_digest(block: &Block) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_json(block).as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::transaction::Transaction;

    fn sample_block() -> Block {
        Block {
            index: 2,
            timestamp: 1.5,
            transactions: vec![
                Transaction::new("alice".to_string(), "bob".to_string(), 5.0).unwrap()
            ],
            proof: 100,
            previous_hash: "1".to_string(),
        }
    }

    #[test]
    fn test_canonical_json_sorts_keys() {
        let block = Block {
            index: 1,
            timestamp: 0.0,
            transactions: Vec::new(),
            proof: 100,
            previous_hash: "1".to_string(),
        };

        assert_eq!(
            canonical_json(&block),
            r#"{"index":1,"previous_hash":"1","proof":100,"timestamp":0.0,"transactions":[]}"#
        );

        assert_eq!(
            canonical_json(&sample_block()),
            r#"{"index":2,"previous_hash":"1","proof":100,"timestamp":1.5,"transactions":[{"amount":5.0,"recipient":"bob","sender":"alice"}]}"#
        );
    }

    #[test]
    fn test_known_digests() {
        let empty = Block {
            index: 1,
            timestamp: 0.0,
            transactions: Vec::new(),
            proof: 100,
            previous_hash: "1".to_string(),
        };

        assert_eq!(
            block_digest(&empty),
            "30a5e9bbfddba2909845c88c93004b73102b618fa492d3a68187a8e5e2d9b349"
        );
        assert_eq!(
            block_digest(&sample_block()),
            "44f71c7ce8eb282483ad71ba053aeacab2da58c10560f3f2e53c75a5417a54ee"
        );
    }

    #[test]
    fn test_digest_format() {
        let digest = block_digest(&sample_block());

        assert_eq!(digest.len(), 64); // SHA-256 digest is 64 characters in hex
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_identical_blocks_hash_identically() {
        assert_eq!(block_digest(&sample_block()), block_digest(&sample_block()));
    }

    #[test]
    fn test_digest_changes_with_content() {
        let base = sample_block();

        let mut changed = sample_block();
        changed.transactions[0].amount = 5.1;
        assert_ne!(block_digest(&base), block_digest(&changed));

        let mut changed = sample_block();
        changed.proof = 101;
        assert_ne!(block_digest(&base), block_digest(&changed));

        let mut changed = sample_block();
        changed.timestamp = 1.5000001;
        assert_ne!(block_digest(&base), block_digest(&changed));
    }

    #[test]
    fn test_digest_depends_on_transaction_order() {
        let first = Transaction::new("alice".to_string(), "bob".to_string(), 5.0).unwrap();
        let second = Transaction::new("carol".to_string(), "dave".to_string(), 7.0).unwrap();

        let mut block = sample_block();
        block.transactions = vec![first.clone(), second.clone()];
        let mut swapped = sample_block();
        swapped.transactions = vec![second, first];

        assert_ne!(block_digest(&block), block_digest(&swapped));
    }
}
