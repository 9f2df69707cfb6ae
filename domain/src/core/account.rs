//! Account identifier value object

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Identity of the purchasing customer (Value Object)
///
/// Always strictly positive. The only way to obtain one from caller input is
/// [`AccountId::validate`], which maps absent, zero and negative ids to
/// [`ValidationError::InvalidAccount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(i64);

impl AccountId {
    /// Try to create an account id, returning None unless `raw > 0`
    pub fn try_new(raw: i64) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    /// Validate a possibly-absent raw account id.
    pub fn validate(raw: Option<i64>) -> Result<Self, ValidationError> {
        raw.and_then(Self::try_new)
            .ok_or(ValidationError::InvalidAccount { account_id: raw })
    }

    /// Get the raw id
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for AccountId {
    type Error = ValidationError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::validate(Some(raw))
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_id_is_accepted() {
        let id = AccountId::validate(Some(1)).unwrap();
        assert_eq!(id.get(), 1);
    }

    #[test]
    fn test_missing_zero_and_negative_are_rejected() {
        for raw in [None, Some(0), Some(-1), Some(i64::MIN)] {
            assert_eq!(
                AccountId::validate(raw),
                Err(ValidationError::InvalidAccount { account_id: raw })
            );
        }
    }

    #[test]
    fn test_deserialize_rejects_non_positive() {
        assert!(serde_json::from_str::<AccountId>("42").is_ok());
        assert!(serde_json::from_str::<AccountId>("0").is_err());
    }
}
