// Ledger module
//
// This module contains the core ledger implementation including:
// - Block structure
// - Ledger structure and its single-lock mutation protocol
// - Transaction structure
// - Canonical block hashing
// - Transaction pool

pub mod block;
pub mod chain;
pub mod hash;
pub mod pool;
pub mod transaction;

// Re-export main components for easier access
pub use block::Block;
pub use chain::Ledger;
pub use transaction::Transaction;
