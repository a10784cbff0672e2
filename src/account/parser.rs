use crate::account::AccountNumber;
use lazy_static::lazy_static;
use regex::Regex;

// Each separator is optional on its own, so "01-0902 0068389-00" and "010902006838900" both
// parse. `[0-9]` rather than `\d`, which would also accept non-ASCII digits.
const ACCOUNT_PATTERN: &str = r"\A(?P<bank_id>[0-9]{1,2})[- ]?(?P<branch_id>[0-9]{1,4})[- ]?(?P<base_number>[0-9]{1,8})[- ]?(?P<suffix>[0-9]{1,4})\z";

lazy_static! {
    static ref ACCOUNT_REGEX: Regex = Regex::new(ACCOUNT_PATTERN).unwrap();
}

pub fn parse_account_number(input: &str) -> Option<AccountNumber> {
    let captures = ACCOUNT_REGEX.captures(input)?;
    Some(AccountNumber {
        bank_id: captures.name("bank_id")?.as_str().parse().ok()?,
        branch_id: captures.name("branch_id")?.as_str().parse().ok()?,
        base_number: captures.name("base_number")?.as_str().parse().ok()?,
        suffix: captures.name("suffix")?.as_str().parse().ok()?,
    })
}
