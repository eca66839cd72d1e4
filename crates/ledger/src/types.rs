//! Canonical record types shared by every layer of the ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cashbook_core::AccountId;

/// Account variant (closed set; determines which settings field is live).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
}

/// Per-account configuration. Immutable once the account is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccountSettings {
    pub account_type: AccountType,
    /// APR as a fractional value (e.g. 0.05 for 5%).
    pub apr: f64,
    /// Flat periodic fee in cents (checking accounts).
    pub fee_flat_cents: i64,
}

impl AccountSettings {
    pub fn checking(fee_flat_cents: i64) -> Self {
        Self {
            account_type: AccountType::Checking,
            apr: 0.0,
            fee_flat_cents,
        }
    }

    pub fn savings(apr: f64) -> Self {
        Self {
            account_type: AccountType::Savings,
            apr,
            fee_flat_cents: 0,
        }
    }
}

impl Default for AccountSettings {
    /// Plain zero-fee checking; what auto-created accounts get.
    fn default() -> Self {
        Self::checking(0)
    }
}

/// Transaction kind.
///
/// One canonical enum for all layers; the flat-ledger interop surface speaks
/// the legacy integer codes via [`TxKind::code`] / [`TxKind::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxKind {
    Deposit,
    Withdrawal,
    Fee,
    Interest,
    TransferIn,
    TransferOut,
}

impl TxKind {
    /// Legacy flat-ledger code (0..=5).
    pub fn code(self) -> u8 {
        match self {
            TxKind::Deposit => 0,
            TxKind::Withdrawal => 1,
            TxKind::Fee => 2,
            TxKind::Interest => 3,
            TxKind::TransferIn => 4,
            TxKind::TransferOut => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TxKind::Deposit),
            1 => Some(TxKind::Withdrawal),
            2 => Some(TxKind::Fee),
            3 => Some(TxKind::Interest),
            4 => Some(TxKind::TransferIn),
            5 => Some(TxKind::TransferOut),
            _ => None,
        }
    }

    /// Whether this kind adds to the balance when applied.
    pub fn is_credit(self) -> bool {
        matches!(self, TxKind::Deposit | TxKind::Interest | TxKind::TransferIn)
    }
}

/// One applied (or to-be-applied) transaction.
///
/// Records are immutable facts: they are appended to audit logs and never
/// mutated afterwards. `timestamp` is business time in unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxRecord {
    pub kind: TxKind,
    pub amount_cents: i64,
    pub timestamp: i64,
    pub note: String,
    /// Which account the transaction targets (routing key).
    pub account_id: AccountId,
}

impl TxRecord {
    pub fn new(
        kind: TxKind,
        account_id: impl Into<AccountId>,
        amount_cents: i64,
        timestamp: i64,
        note: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount_cents,
            timestamp,
            note: note.into(),
            account_id: account_id.into(),
        }
    }

    /// Business time as a `chrono` timestamp (unix epoch on out-of-range input).
    pub fn occurred_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.timestamp, 0).unwrap_or_default()
    }
}

/// Two-leg exchange between existing accounts.
///
/// Consumed atomically by [`crate::Portfolio::transfer`], which decomposes it
/// into a `TransferOut` on the source and a `TransferIn` on the destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub from_id: AccountId,
    pub to_id: AccountId,
    pub amount_cents: i64,
    pub timestamp: i64,
    pub note: String,
}
