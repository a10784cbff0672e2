use crate::account::AccountNumber;
use crate::algorithm::{weights_for, AlgorithmTag, CHECKSUM_DIGITS};
use crate::bank_registry::BankRegistry;

/// Base numbers below this use algorithm A, the rest algorithm B, unless the bank
/// has its own algorithm.
pub const BASE_NUMBER_CUTOFF: u32 = 990_000;

/// Resolves the checksum algorithm of an account. Banks missing from the registry fall
/// back to the base number rule, so callers should check the bank first.
pub fn algorithm_tag<R: BankRegistry + ?Sized>(
    registry: &R,
    bank_id: u8,
    base_number: u32,
) -> AlgorithmTag {
    match registry.lookup(bank_id).and_then(|bank| bank.algorithm) {
        Some(tag) => tag,
        None if base_number < BASE_NUMBER_CUTOFF => AlgorithmTag::A,
        None => AlgorithmTag::B,
    }
}

pub fn canonical_digits(account: &AccountNumber) -> String {
    account.canonical_digits()
}

/// Sum all the digits from a number
#[inline]
fn sum_all_digits(digits: u32) -> u32 {
    let mut sum = 0;
    let mut num = digits;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}

/// Two rounds of digit summing, e.g. 87 -> 15 -> 6. Always a single digit for inputs up
/// to 99, which covers every weighted product.
pub fn fold_digits(value: u32) -> u32 {
    sum_all_digits(sum_all_digits(value))
}

fn is_canonical(digits: &str) -> bool {
    digits.len() == CHECKSUM_DIGITS && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Weighted sum of the 18 canonical digits, or `None` for anything else.
pub fn checksum(tag: AlgorithmTag, digits: &str) -> Option<u32> {
    is_canonical(digits).then(|| weighted_sum(tag, digits))
}

/// Callers must pass canonical digits, e.g. from `AccountNumber::canonical_digits`.
pub(crate) fn weighted_sum(tag: AlgorithmTag, digits: &str) -> u32 {
    let folds_digits = tag.folds_digits();
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .zip(weights_for(tag).weights())
        .map(|(digit, weight)| {
            let product = digit * weight;
            if folds_digits {
                fold_digits(product)
            } else {
                product
            }
        })
        .sum()
}

pub fn is_valid_checksum(tag: AlgorithmTag, digits: &str) -> bool {
    checksum(tag, digits).is_some_and(|sum| sum % weights_for(tag).divisor() == 0)
}
