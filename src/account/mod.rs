mod error;
mod parser;

pub use error::{AccountField, ParseAccountNumberError};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const BANK_ID_DIGITS: usize = 2;
const BRANCH_ID_DIGITS: usize = 4;
const BASE_NUMBER_DIGITS: usize = 8;
const SUFFIX_DIGITS: usize = 4;

/// A bank account number split into its four numeric fields. Every field is guaranteed
/// to fit its digit width, so the canonical form is always 18 digits.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AccountNumber {
    bank_id: u8,
    branch_id: u16,
    base_number: u32,
    suffix: u16,
}

impl AccountNumber {
    pub fn new(
        bank_id: u8,
        branch_id: u16,
        base_number: u32,
        suffix: u16,
    ) -> Result<Self, ParseAccountNumberError> {
        check_width(AccountField::BankId, bank_id.into(), BANK_ID_DIGITS)?;
        check_width(AccountField::BranchId, branch_id.into(), BRANCH_ID_DIGITS)?;
        check_width(AccountField::BaseNumber, base_number, BASE_NUMBER_DIGITS)?;
        check_width(AccountField::Suffix, suffix.into(), SUFFIX_DIGITS)?;
        Ok(Self {
            bank_id,
            branch_id,
            base_number,
            suffix,
        })
    }

    /// Parses free-form text. Malformed input gives `None`, never a panic.
    pub fn parse(input: &str) -> Option<Self> {
        parser::parse_account_number(input)
    }

    pub fn bank_id(&self) -> u8 {
        self.bank_id
    }

    pub fn branch_id(&self) -> u16 {
        self.branch_id
    }

    pub fn base_number(&self) -> u32 {
        self.base_number
    }

    pub fn suffix(&self) -> u16 {
        self.suffix
    }

    /// Zero padded concatenation of all four fields (2 + 4 + 8 + 4 digits).
    pub fn canonical_digits(&self) -> String {
        format!(
            "{:02}{:04}{:08}{:04}",
            self.bank_id, self.branch_id, self.base_number, self.suffix
        )
    }
}

fn check_width(
    field: AccountField,
    value: u32,
    max_digits: usize,
) -> Result<(), ParseAccountNumberError> {
    if value >= 10u32.pow(max_digits as u32) {
        return Err(ParseAccountNumberError::FieldTooLong { field, max_digits });
    }
    Ok(())
}

impl FromStr for AccountNumber {
    type Err = ParseAccountNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(ParseAccountNumberError::InvalidFormat)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:04}-{:08}-{:04}",
            self.bank_id, self.branch_id, self.base_number, self.suffix
        )
    }
}
