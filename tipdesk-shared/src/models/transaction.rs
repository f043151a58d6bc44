use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;

/// One row of the employer transaction listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Platform-wide transaction identifier.
    pub id: i64,
    /// Numeric transaction type code (tip, withdrawal, refund, ...).
    #[serde(rename = "type")]
    pub kind: i32,
    /// Human-readable name of the transaction type.
    pub display_name: String,
    /// Amount in the platform currency's minor unit.
    pub amount: i64,
    /// When the transaction settled.
    pub created_at: Timestamp,
}

/// Full transaction record shown on the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetail {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: i32,
    pub display_name: String,
    pub amount: i64,
    pub created_at: Timestamp,
    /// Free-text message the tipper attached, if any.
    #[serde(default)]
    pub message: Option<String>,
    /// Whether the tipper chose to stay anonymous.
    #[serde(default)]
    pub anonymous: bool,
    /// Reference to the donating account, absent for anonymous tips.
    #[serde(default)]
    pub donor: Option<String>,
    /// Reference to the receiving employee or pool.
    #[serde(default)]
    pub recipient: Option<String>,
}
