//! Strongly-typed identifiers used across the domain.

use core::borrow::Borrow;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an account within a portfolio.
///
/// Account ids are caller-supplied opaque strings (e.g. `"CHK-001"`); the
/// newtype keeps them from being mixed up with notes or other free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<AccountId> for String {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

// Lets a `HashMap<AccountId, _>` be probed with a plain `&str`.
impl Borrow<str> for AccountId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DomainError::validation("AccountId: must not be empty"));
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_empty_id() {
        assert!("".parse::<AccountId>().is_err());
        assert!("  ".parse::<AccountId>().is_err());
        assert_eq!("CHK-001".parse::<AccountId>().unwrap().as_str(), "CHK-001");
    }

    #[test]
    fn borrows_as_str_for_map_lookups() {
        use std::collections::HashMap;

        let mut map: HashMap<AccountId, i64> = HashMap::new();
        map.insert(AccountId::from("SAV-010"), 42);
        assert_eq!(map.get("SAV-010"), Some(&42));
    }
}
