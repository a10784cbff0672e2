use strum::Display;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum AccountField {
    BankId,
    BranchId,
    BaseNumber,
    Suffix,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseAccountNumberError {
    #[error("Expected an account number shaped like BB-BBBB-AAAAAAAA-SSSS")]
    InvalidFormat,

    #[error("The {field} has more than {max_digits} digits")]
    FieldTooLong {
        field: AccountField,
        max_digits: usize,
    },
}
