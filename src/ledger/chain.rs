use std::sync::Mutex;

use log::info;
use thiserror::Error;

use super::block::Block;
use super::hash::block_digest;
use super::pool::TransactionPool;
use super::transaction::{Transaction, TransactionError};

/// Sentinel previous hash of the genesis block, which has no predecessor
pub const GENESIS_PREVIOUS_HASH: &str = "1";

/// Fixed proof recorded in the genesis block
pub const GENESIS_PROOF: u64 = 100;

/// Errors that can occur during ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Transaction error: {0}")]
    TransactionError(#[from] TransactionError),
}

/// State guarded by the ledger lock: the sealed chain and the pool of
/// transactions waiting to be sealed
#[derive(Debug)]
struct LedgerState {
    chain: Vec<Block>,
    pool: TransactionPool,
}

/// An append-only, hash-linked sequence of blocks
///
/// The ledger owns the chain and the transaction pool behind a single
/// lock, so submissions, seals, and reads are serialized against each
/// other. Every accessor returns a cloned snapshot rather than a
/// reference into the guarded state, so callers can never mutate the
/// chain or the pool without going through the lock.
#[derive(Debug)]
pub struct Ledger {
    state: Mutex<LedgerState>,
}

impl Ledger {
    /// Creates a ledger holding only the genesis block
    ///
    /// # Returns
    ///
    /// A new Ledger instance with a one-block chain and an empty pool
    pub fn new() -> Self {
        let genesis = Block::new(1, Vec::new(), GENESIS_PROOF, GENESIS_PREVIOUS_HASH.to_string());
        info!("Created ledger with genesis block {}", block_digest(&genesis));

        Ledger {
            state: Mutex::new(LedgerState {
                chain: vec![genesis],
                pool: TransactionPool::new(),
            }),
        }
    }

    /// Gets the most recently sealed block
    ///
    /// # Returns
    ///
    /// A copy of the last block in the chain
    pub fn last_block(&self) -> Block {
        let state = self.state.lock().unwrap();
        // The chain always holds at least the genesis block
        state.chain.last().unwrap().clone()
    }

    /// Queues a transaction for inclusion in the next sealed block
    ///
    /// # Arguments
    ///
    /// * `sender` - The sending party
    /// * `recipient` - The receiving party
    /// * `amount` - The amount transferred
    ///
    /// # Returns
    ///
    /// The index of the block the transaction will appear in once
    /// sealed, or a validation error that leaves the ledger unchanged
    pub fn submit_transaction(
        &self,
        sender: String,
        recipient: String,
        amount: f64,
    ) -> Result<u64, LedgerError> {
        let mut state = self.state.lock().unwrap();

        state.pool.add(sender, recipient, amount)?;

        Ok(state.chain.last().unwrap().index + 1)
    }

    /// Seals every pending transaction into a new block and appends it
    ///
    /// The new block links to its predecessor through the canonical
    /// digest of the current last block. This is the only path that
    /// appends to the chain.
    ///
    /// # Arguments
    ///
    /// * `proof` - The proof value to record in the block
    ///
    /// # Returns
    ///
    /// A copy of the newly sealed block
    pub fn seal_block(&self, proof: u64) -> Block {
        let mut state = self.state.lock().unwrap();

        let last = state.chain.last().unwrap();
        let index = last.index + 1;
        let previous_hash = block_digest(last);

        let transactions = state.pool.drain_all();
        let block = Block::new(index, transactions, proof, previous_hash);
        state.chain.push(block.clone());

        info!(
            "Sealed block {} with {} transactions",
            block.index,
            block.transactions.len()
        );

        block
    }

    /// Gets the entire chain
    ///
    /// # Returns
    ///
    /// A copy of every sealed block in order
    pub fn full_chain(&self) -> Vec<Block> {
        self.state.lock().unwrap().chain.clone()
    }

    /// The number of sealed blocks
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().chain.len()
    }

    /// Gets the transactions waiting to be sealed, in submission order
    pub fn pending_transactions(&self) -> Vec<Transaction> {
        self.state.lock().unwrap().pool.transactions().to_vec()
    }

    /// Validates the chain
    ///
    /// # Returns
    ///
    /// true if the chain starts at index 1, every block links to the
    /// canonical digest of its predecessor, and block indexes increase
    /// by one; false otherwise
    pub fn is_valid(&self) -> bool {
        let state = self.state.lock().unwrap();

        // The genesis block anchors the index sequence
        if state.chain[0].index != 1 {
            return false;
        }

        for i in 1..state.chain.len() {
            let current_block = &state.chain[i];
            let previous_block = &state.chain[i - 1];

            // Check that the previous-hash linkage is intact
            if current_block.previous_hash != block_digest(previous_block) {
                return false;
            }

            // Check that the index sequence is unbroken
            if current_block.index != previous_block.index + 1 {
                return false;
            }
        }

        true
    }
}
