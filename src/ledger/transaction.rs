use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Errors that can occur while validating a submitted transaction
#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Missing or empty sender")]
    MissingSender,

    #[error("Missing or empty recipient")]
    MissingRecipient,

    #[error("Amount must be a finite number, got {0}")]
    NonFiniteAmount(f64),
}

/// Represents a transfer of value between two parties
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    /// Name or address of the sending party
    pub sender: String,

    /// Name or address of the receiving party
    pub recipient: String,

    /// Amount being transferred
    pub amount: f64,
}

impl Transaction {
    /// Creates a new transaction, validating its fields
    ///
    /// # Arguments
    ///
    /// * `sender` - The sender's name or address
    /// * `recipient` - The recipient's name or address
    /// * `amount` - The amount to transfer
    ///
    /// # Returns
    ///
    /// A new Transaction, or a `TransactionError` if the sender or
    /// recipient is empty or the amount is not a finite number
    pub fn new(sender: String, recipient: String, amount: f64) -> Result<Self, TransactionError> {
        if sender.is_empty() {
            return Err(TransactionError::MissingSender);
        }

        if recipient.is_empty() {
            return Err(TransactionError::MissingRecipient);
        }

        // Non-finite amounts serialize to JSON null, which would corrupt
        // the canonical block encoding the chain hashes are built on.
        if !amount.is_finite() {
            return Err(TransactionError::NonFiniteAmount(amount));
        }

        Ok(Transaction {
            sender,
            recipient,
            amount,
        })
    }
}
