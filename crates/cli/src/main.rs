//! Demo walkthrough: build a small portfolio, run transactions through every
//! application path, print balances and a JSON summary.

use anyhow::Result;
use chrono::Utc;

use cashbook_core::AccountId;
use cashbook_ledger::{AccountSettings, Portfolio, TransferRecord, TxKind, TxRecord};

fn main() -> Result<()> {
    cashbook_observability::init();

    let mut portfolio = Portfolio::new();
    portfolio.add_account("CHK-001", AccountSettings::checking(150), 0)?;
    portfolio.add_account("SAV-010", AccountSettings::savings(0.05), 500_000)?;
    tracing::info!(accounts = portfolio.count(), "portfolio ready");

    let now = Utc::now().timestamp();

    // Batch path.
    portfolio.apply_all(
        &[
            TxRecord::new(TxKind::Deposit, "CHK-001", 100_000, now, "paycheck"),
            TxRecord::new(TxKind::Withdrawal, "CHK-001", 25_000, now, "rent"),
            TxRecord::new(TxKind::Fee, "CHK-001", 1_500, now, "maintenance fee"),
        ],
        true,
    );
    tracing::info!(
        balance_cents = portfolio.balance_of("CHK-001"),
        "CHK-001 after batch (expected 73500)"
    );

    // Savings interest: 31 days at 5% APR.
    if let Some(savings) = portfolio.get_account_mut("SAV-010") {
        savings.accrue_interest(31, 365, now);
    }
    tracing::info!(
        balance_cents = portfolio.balance_of("SAV-010"),
        "SAV-010 after interest"
    );

    // Two-leg transfer.
    portfolio.transfer(&TransferRecord {
        from_id: AccountId::from("SAV-010"),
        to_id: AccountId::from("CHK-001"),
        amount_cents: 30_000,
        timestamp: now,
        note: "monthly sweep".to_string(),
    })?;

    // Flat-ledger interop path.
    portfolio.apply_from_ledger(
        &["CHK-001", "CHK-001", "SAV-010"],
        &[TxKind::Deposit, TxKind::Withdrawal, TxKind::TransferIn],
        &[100_000, 25_000, 30_000],
    );

    for id in portfolio.list_ids() {
        tracing::info!(
            account = %id,
            balance_cents = portfolio.balance_of(id.as_str()),
            "final balance"
        );
    }
    tracing::info!(
        total_exposure_cents = portfolio.total_exposure(),
        "portfolio total"
    );

    println!("{}", serde_json::to_string_pretty(&portfolio.summary())?);
    Ok(())
}
