// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod account;
mod algorithm;
mod bank_registry;
mod checksum;
mod observability;
mod validator;

// This is the public API of the library
pub use account::{AccountField, AccountNumber, ParseAccountNumberError};
pub use algorithm::{
    weights_for, AlgorithmDefinition, AlgorithmTag, UnknownAlgorithmTag, CHECKSUM_DIGITS,
};
pub use bank_registry::{
    BankDefinition, BankRegistry, BankRegistryConfig, BranchRange, CustomBankRegistry,
    RegistryConfigError, StandardBankRegistry,
};
pub use checksum::{
    algorithm_tag, canonical_digits, checksum, fold_digits, is_valid_checksum,
    BASE_NUMBER_CUTOFF,
};
pub use observability::labels::Labels;
pub use validator::{
    is_valid, AccountCheck, AccountValidator, NzBankAccountChecksum, ValidationFailure,
    ValidationReport, ValidationStage, Validator,
};
