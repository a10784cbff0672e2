mod custom;
mod standard;

pub use custom::{BankRegistryConfig, CustomBankRegistry, RegistryConfigError};
pub use standard::StandardBankRegistry;

use crate::algorithm::AlgorithmTag;
use serde::{Deserialize, Serialize};

/// Inclusive range of branch codes, serialized as `[start, end]`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BranchRange(pub u16, pub u16);

impl BranchRange {
    pub fn start(&self) -> u16 {
        self.0
    }

    pub fn end(&self) -> u16 {
        self.1
    }

    pub fn contains(&self, branch_id: u16) -> bool {
        self.0 <= branch_id && branch_id <= self.1
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BankDefinition {
    /// Ranges may overlap or leave gaps. An empty list accepts every branch code.
    #[serde(default)]
    pub ranges: Vec<BranchRange>,
    /// When absent the algorithm is derived from the base number.
    #[serde(default)]
    pub algorithm: Option<AlgorithmTag>,
}

impl BankDefinition {
    pub fn new(ranges: Vec<BranchRange>, algorithm: Option<AlgorithmTag>) -> Self {
        Self { ranges, algorithm }
    }

    pub fn accepts_branch(&self, branch_id: u16) -> bool {
        // Wildcard for banks with no published branch ranges.
        self.ranges.is_empty() || self.ranges.iter().any(|range| range.contains(branch_id))
    }
}

/// Source of bank definitions. Validation logic only ever goes through this trait,
/// so the standard table can be replaced (e.g. to add a bank) without touching it.
pub trait BankRegistry: Send + Sync {
    fn lookup(&self, bank_id: u8) -> Option<&BankDefinition>;

    fn is_known(&self, bank_id: u8) -> bool {
        self.lookup(bank_id).is_some()
    }

    fn branch_valid(&self, bank_id: u8, branch_id: u16) -> bool {
        self.lookup(bank_id)
            .is_some_and(|bank| bank.accepts_branch(branch_id))
    }
}

impl<R: BankRegistry + ?Sized> BankRegistry for &R {
    fn lookup(&self, bank_id: u8) -> Option<&BankDefinition> {
        (**self).lookup(bank_id)
    }
}
