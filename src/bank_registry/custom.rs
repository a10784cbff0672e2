use crate::bank_registry::{BankDefinition, BankRegistry, StandardBankRegistry};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

const MAX_BANK_ID: u8 = 99;
const MAX_BRANCH_ID: u16 = 9999;

#[derive(Debug, Error)]
pub enum RegistryConfigError {
    #[error("Invalid bank registry config: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Bank id {0} does not fit in 2 digits")]
    BankIdOutOfRange(u8),

    #[error("Bank {bank_id} has an inverted branch range {start}-{end}")]
    InvertedRange { bank_id: u8, start: u16, end: u16 },

    #[error("Bank {bank_id} has a branch range ending at {end}, branch codes have at most 4 digits")]
    BranchOutOfRange { bank_id: u8, end: u16 },
}

/// Serialized form of a bank table, e.g.
/// `{"banks": {"8": {"ranges": [[6500, 6599]], "algorithm": "D"}}}`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BankRegistryConfig {
    pub banks: BTreeMap<u8, BankDefinition>,
}

/// A bank table supplied at runtime instead of the built-in one.
#[derive(Clone, Debug, Default)]
pub struct CustomBankRegistry {
    banks: AHashMap<u8, BankDefinition>,
}

impl CustomBankRegistry {
    pub fn new(config: BankRegistryConfig) -> Result<Self, RegistryConfigError> {
        for (bank_id, bank) in &config.banks {
            check_bank(*bank_id, bank)?;
        }
        Ok(Self {
            banks: config.banks.into_iter().collect(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, RegistryConfigError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// A copy of the built-in table that can be extended.
    pub fn standard() -> Self {
        Self {
            banks: StandardBankRegistry::definitions().clone(),
        }
    }

    /// Adds or replaces a bank.
    pub fn with_bank(
        mut self,
        bank_id: u8,
        bank: BankDefinition,
    ) -> Result<Self, RegistryConfigError> {
        check_bank(bank_id, &bank)?;
        self.banks.insert(bank_id, bank);
        Ok(self)
    }

    pub fn to_config(&self) -> BankRegistryConfig {
        BankRegistryConfig {
            banks: self
                .banks
                .iter()
                .map(|(bank_id, bank)| (*bank_id, bank.clone()))
                .collect(),
        }
    }
}

impl BankRegistry for CustomBankRegistry {
    fn lookup(&self, bank_id: u8) -> Option<&BankDefinition> {
        self.banks.get(&bank_id)
    }
}

fn check_bank(bank_id: u8, bank: &BankDefinition) -> Result<(), RegistryConfigError> {
    if bank_id > MAX_BANK_ID {
        return Err(RegistryConfigError::BankIdOutOfRange(bank_id));
    }
    for range in &bank.ranges {
        if range.start() > range.end() {
            return Err(RegistryConfigError::InvertedRange {
                bank_id,
                start: range.start(),
                end: range.end(),
            });
        }
        if range.end() > MAX_BRANCH_ID {
            return Err(RegistryConfigError::BranchOutOfRange {
                bank_id,
                end: range.end(),
            });
        }
    }
    Ok(())
}
