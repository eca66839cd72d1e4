//! Portfolio: a collection of accounts plus a portfolio-wide audit trail.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use cashbook_core::{AccountId, DomainError, DomainResult};

use crate::account::Account;
use crate::summary::{self, LedgerSummary};
use crate::types::{AccountSettings, AccountType, TransferRecord, TxKind, TxRecord};

/// Exclusive owner of a set of accounts keyed by id.
///
/// Routes transaction records to the right account and keeps a flat,
/// insertion-ordered audit of everything it applied. Single-caller,
/// single-threaded by construction; `&mut self` is the whole concurrency
/// story.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    accounts: HashMap<AccountId, Account>,
    audit: Vec<TxRecord>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new account. Fails without mutation when the id is taken.
    pub fn add_account(
        &mut self,
        id: impl Into<AccountId>,
        settings: AccountSettings,
        opening_balance_cents: i64,
    ) -> DomainResult<()> {
        let id = id.into();
        if self.accounts.contains_key(&id) {
            return Err(DomainError::conflict(format!("account {id} already exists")));
        }

        tracing::debug!(account = %id, ?settings, opening_balance_cents, "account added");
        self.accounts
            .insert(id.clone(), Account::new(id, settings, opening_balance_cents));
        Ok(())
    }

    pub fn get_account(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    pub fn get_account_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    pub fn count(&self) -> usize {
        self.accounts.len()
    }

    /// Apply a batch of records in input order.
    ///
    /// Unknown target accounts are auto-created as default checking accounts
    /// when `auto_create` is set, otherwise the record is skipped with no
    /// audit entry. Individual applies cannot fail, so there is no rollback;
    /// every routed record lands in the portfolio audit.
    pub fn apply_all(&mut self, txs: &[TxRecord], auto_create: bool) {
        for tx in txs {
            if auto_create && !self.accounts.contains_key(tx.account_id.as_str()) {
                let _ = self.add_account(tx.account_id.clone(), AccountSettings::default(), 0);
            }
            let Some(account) = self.accounts.get_mut(tx.account_id.as_str()) else {
                tracing::trace!(account = %tx.account_id, "skipped record for unknown account");
                continue;
            };

            account.apply(tx);
            self.audit.push(tx.clone());
        }
    }

    /// Flat-ledger interop: zip parallel slices (ids, kinds, amounts) into
    /// records with timestamp 0 and an empty note, then apply with
    /// auto-create. Extra elements past the shortest slice are ignored.
    pub fn apply_from_ledger(
        &mut self,
        account_ids: &[&str],
        kinds: &[TxKind],
        amounts_cents: &[i64],
    ) {
        let txs: Vec<TxRecord> = account_ids
            .iter()
            .zip(kinds)
            .zip(amounts_cents)
            .map(|((id, kind), amount)| TxRecord::new(*kind, *id, *amount, 0, ""))
            .collect();
        self.apply_all(&txs, true);
    }

    /// Move money between two existing accounts, all-or-nothing.
    ///
    /// Fails iff either endpoint is missing, in which case nothing is
    /// mutated and nothing is audited. On success both legs are applied and
    /// recorded at the account and portfolio level.
    pub fn transfer(&mut self, tr: &TransferRecord) -> DomainResult<()> {
        if !self.accounts.contains_key(tr.from_id.as_str()) {
            return Err(DomainError::not_found(format!("account {}", tr.from_id)));
        }
        if !self.accounts.contains_key(tr.to_id.as_str()) {
            return Err(DomainError::not_found(format!("account {}", tr.to_id)));
        }

        let out_tx = TxRecord::new(
            TxKind::TransferOut,
            tr.from_id.clone(),
            tr.amount_cents,
            tr.timestamp,
            tr.note.clone(),
        );
        let in_tx = TxRecord::new(
            TxKind::TransferIn,
            tr.to_id.clone(),
            tr.amount_cents,
            tr.timestamp,
            tr.note.clone(),
        );

        // Both endpoints were checked above.
        if let Some(from) = self.accounts.get_mut(tr.from_id.as_str()) {
            from.apply(&out_tx);
        }
        if let Some(to) = self.accounts.get_mut(tr.to_id.as_str()) {
            to.apply(&in_tx);
        }
        self.audit.push(out_tx);
        self.audit.push(in_tx);

        tracing::debug!(
            from = %tr.from_id,
            to = %tr.to_id,
            amount_cents = tr.amount_cents,
            "transfer applied"
        );
        Ok(())
    }

    /// Balance for an id; 0 for unknown accounts (silent default).
    pub fn balance_of(&self, id: &str) -> i64 {
        self.accounts.get(id).map_or(0, Account::balance_cents)
    }

    /// Sum of all account balances at call time.
    pub fn total_exposure(&self) -> i64 {
        self.accounts.values().map(Account::balance_cents).sum()
    }

    /// Balances grouped by account type.
    pub fn totals_by_type(&self) -> HashMap<AccountType, i64> {
        let mut totals = HashMap::new();
        for account in self.accounts.values() {
            *totals.entry(account.account_type()).or_insert(0) += account.balance_cents();
        }
        totals
    }

    /// Account ids in unspecified order.
    pub fn list_ids(&self) -> Vec<AccountId> {
        self.accounts.keys().cloned().collect()
    }

    /// Portfolio-wide audit, insertion order.
    pub fn audit(&self) -> &[TxRecord] {
        &self.audit
    }

    /// Aggregate totals over the portfolio audit and current balances.
    pub fn summary(&self) -> LedgerSummary {
        let kinds: Vec<TxKind> = self.audit.iter().map(|t| t.kind).collect();
        let amounts: Vec<i64> = self.audit.iter().map(|t| t.amount_cents).collect();
        let balances: Vec<i64> = self.accounts.values().map(Account::balance_cents).collect();
        summary::summarize(&kinds, &amounts, &balances)
    }
}
