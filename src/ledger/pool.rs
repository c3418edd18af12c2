use std::mem;

use super::transaction::{Transaction, TransactionError};

/// Holds transactions that have been accepted but not yet sealed into a block
#[derive(Debug)]
pub struct TransactionPool {
    pending: Vec<Transaction>,
}

impl TransactionPool {
    /// Creates an empty pool
    pub fn new() -> Self {
        TransactionPool {
            pending: Vec::new(),
        }
    }

    /// Validates a candidate transaction and appends it to the queue
    ///
    /// # Arguments
    ///
    /// * `sender` - The sending party
    /// * `recipient` - The receiving party
    /// * `amount` - The amount transferred, which must be finite
    ///
    /// # Returns
    ///
    /// An error if validation fails, in which case the queue is unchanged
    pub fn add(
        &mut self,
        sender: String,
        recipient: String,
        amount: f64,
    ) -> Result<(), TransactionError> {
        let transaction = Transaction::new(sender, recipient, amount)?;
        self.pending.push(transaction);
        Ok(())
    }

    /// Removes and returns every queued transaction in submission order,
    /// leaving the pool empty
    pub fn drain_all(&mut self) -> Vec<Transaction> {
        mem::take(&mut self.pending)
    }

    /// The queued transactions in submission order
    pub fn transactions(&self) -> &[Transaction] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_queues_in_submission_order() {
        let mut pool = TransactionPool::new();

        pool.add("alice".to_string(), "bob".to_string(), 5.0).unwrap();
        pool.add("carol".to_string(), "dave".to_string(), 7.0).unwrap();

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.transactions()[0].sender, "alice");
        assert_eq!(pool.transactions()[1].sender, "carol");
    }

    #[test]
    fn test_rejected_transaction_leaves_queue_unchanged() {
        let mut pool = TransactionPool::new();
        pool.add("alice".to_string(), "bob".to_string(), 5.0).unwrap();

        let result = pool.add("".to_string(), "bob".to_string(), 5.0);

        assert!(result.is_err());
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_drain_all_empties_the_pool() {
        let mut pool = TransactionPool::new();
        pool.add("alice".to_string(), "bob".to_string(), 5.0).unwrap();
        pool.add("carol".to_string(), "dave".to_string(), 7.0).unwrap();

        let drained = pool.drain_all();

        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].sender, "alice");
        assert_eq!(drained[1].sender, "carol");
        assert!(pool.is_empty());
    }

    #[test]
    fn test_drain_all_on_empty_pool() {
        let mut pool = TransactionPool::new();

        assert!(pool.drain_all().is_empty());
        assert!(pool.is_empty());
    }
}
