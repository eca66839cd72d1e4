//! Banking ledger domain: accounts, portfolios, bounded audit trails.
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns. All
//! amounts are fixed-point integer cents (`i64`).

pub mod account;
pub mod calculator;
pub mod portfolio;
pub mod summary;
pub mod types;

pub use account::{Account, MAX_AUDIT};
pub use portfolio::Portfolio;
pub use summary::{LedgerSummary, summarize};
pub use types::{AccountSettings, AccountType, TransferRecord, TxKind, TxRecord};
