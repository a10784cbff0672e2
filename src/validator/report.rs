use crate::account::AccountNumber;
use crate::algorithm::AlgorithmTag;
use serde::Serialize;
use strum::{AsRefStr, IntoStaticStr};
use thiserror::Error;

/// The validation step an account number failed at.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ValidationStage {
    Parse,
    Bank,
    Branch,
    Checksum,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq, Error)]
#[serde(tag = "type")]
pub enum ValidationFailure {
    #[error("The input is not shaped like an account number")]
    Unparseable,

    #[error("Unknown bank id {bank_id}")]
    UnknownBank { bank_id: u8 },

    #[error("Branch {branch_id} is not a valid branch of bank {bank_id}")]
    InvalidBranch { bank_id: u8, branch_id: u16 },

    #[error("Checksum {checksum} with algorithm {tag} is not a multiple of {divisor}")]
    ChecksumMismatch {
        tag: AlgorithmTag,
        checksum: u32,
        divisor: u32,
    },
}

impl ValidationFailure {
    pub fn stage(&self) -> ValidationStage {
        match self {
            ValidationFailure::Unparseable => ValidationStage::Parse,
            ValidationFailure::UnknownBank { .. } => ValidationStage::Bank,
            ValidationFailure::InvalidBranch { .. } => ValidationStage::Branch,
            ValidationFailure::ChecksumMismatch { .. } => ValidationStage::Checksum,
        }
    }
}

/// Everything that was computed while validating one input.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    pub input: String,
    /// `None` when the input could not be parsed.
    pub account: Option<AccountNumber>,
    /// Only resolved for known banks.
    pub algorithm: Option<AlgorithmTag>,
    pub canonical_digits: Option<String>,
    pub checksum: Option<u32>,
    pub divisor: Option<u32>,
    pub outcome: Result<(), ValidationFailure>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn failed_stage(&self) -> Option<ValidationStage> {
        self.outcome.as_ref().err().map(ValidationFailure::stage)
    }
}
