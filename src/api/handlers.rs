use actix_web::error::InternalError;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse, Responder};
use log::{error, warn};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ledger::{Block, Ledger, Transaction};

/// Data structure for the shared ledger
pub type LedgerData = web::Data<Ledger>;

/// Fixed proof recorded in every mined block
pub const MINING_PROOF: u64 = 100;

/// Sender recorded on mining reward transactions
pub const REWARD_SENDER: &str = "0";

/// Amount credited to the node identity for each mined block
pub const MINING_REWARD: f64 = 1.0;

/// Identity of this node, credited by mining reward transactions
pub struct NodeIdentity(pub String);

/// Request for the transaction endpoint
///
/// Every field is required; requests missing any of them are rejected.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TransactionRequest {
    /// The sending party
    pub sender: Option<String>,

    /// The receiving party
    pub recipient: Option<String>,

    /// The amount to transfer
    pub amount: Option<f64>,
}

/// Response for the transaction endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TransactionResponse {
    /// Which block the transaction will appear in
    pub message: String,
}

/// Response for the chain endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ChainResponse {
    /// The blocks in the chain
    pub chain: Vec<Block>,

    /// The length of the chain
    pub length: usize,
}

/// The response returned for any incomplete or malformed submission
fn missing_values() -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": "Missing values"
    }))
}

/// JSON extractor configuration that reports undeserializable request
/// bodies the same way as missing fields
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| InternalError::from_response(err, missing_values()).into())
}

/// Serve the interactive ledger page
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(include_str!("../../static/index.html"))
}

/// Create a new transaction
///
/// Queues a transaction for inclusion in the next sealed block
#[utoipa::path(
    post,
    path = "/transactions/new",
    request_body = TransactionRequest,
    responses(
        (status = 200, description = "Transaction queued successfully", body = TransactionResponse),
        (status = 400, description = "Missing or invalid transaction fields")
    )
)]
pub async fn new_transaction(
    ledger: LedgerData,
    request: web::Json<TransactionRequest>,
) -> impl Responder {
    let request = request.into_inner();

    // All three fields are required
    let (sender, recipient, amount) = match (request.sender, request.recipient, request.amount) {
        (Some(sender), Some(recipient), Some(amount)) => (sender, recipient, amount),
        _ => return missing_values(),
    };

    match ledger.submit_transaction(sender, recipient, amount) {
        Ok(index) => HttpResponse::Ok().json(TransactionResponse {
            message: format!("Transaction will be added to Block {}", index),
        }),
        Err(err) => {
            warn!("Rejected transaction: {}", err);
            missing_values()
        }
    }
}

/// Mine a new block
///
/// Seals every pending transaction, plus a reward transaction crediting
/// this node, into a new block
#[utoipa::path(
    get,
    path = "/mine",
    responses(
        (status = 200, description = "Block sealed successfully", body = Block),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn mine(ledger: LedgerData, node: web::Data<NodeIdentity>) -> impl Responder {
    // Credit this node for sealing the block
    let reward =
        ledger.submit_transaction(REWARD_SENDER.to_string(), node.0.clone(), MINING_REWARD);
    if let Err(err) = reward {
        error!("Failed to queue mining reward: {}", err);
        return HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Failed to queue mining reward"
        }));
    }

    let block = ledger.seal_block(MINING_PROOF);

    HttpResponse::Ok().json(block)
}

/// Get the full chain
///
/// Returns every sealed block along with the chain length
#[utoipa::path(
    get,
    path = "/chain",
    responses(
        (status = 200, description = "Chain retrieved successfully", body = ChainResponse)
    )
)]
pub async fn full_chain(ledger: LedgerData) -> impl Responder {
    let chain = ledger.full_chain();

    let response = ChainResponse {
        length: chain.len(),
        chain,
    };

    HttpResponse::Ok().json(response)
}

/// Get all pending transactions
///
/// Returns the transactions waiting to be sealed into a block
#[utoipa::path(
    get,
    path = "/transactions/pending",
    responses(
        (status = 200, description = "Pending transactions retrieved successfully", body = Vec<Transaction>)
    )
)]
pub async fn pending_transactions(ledger: LedgerData) -> impl Responder {
    HttpResponse::Ok().json(ledger.pending_transactions())
}

/// Check if the chain is valid
///
/// Validates the previous-hash linkage across the entire chain
#[utoipa::path(
    get,
    path = "/validate",
    responses(
        (status = 200, description = "Chain validation status", body = bool)
    )
)]
pub async fn validate_chain(ledger: LedgerData) -> impl Responder {
    HttpResponse::Ok().json(ledger.is_valid())
}
