use afl::fuzz;
use nz_bank_account::{is_valid, AccountNumber, AccountValidator};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn gen_separator(rng: &mut StdRng) -> &'static str {
    match rng.gen_range::<u8, _>(0..3) {
        0 => "-",
        1 => " ",
        _ => "",
    }
}

/// Zero padded fields joined with random separators. Padding to the full width keeps the
/// field boundaries unambiguous when a separator is left out.
fn gen_spelling(account: &AccountNumber, rng: &mut StdRng) -> String {
    format!(
        "{:02}{}{:04}{}{:08}{}{:04}",
        account.bank_id(),
        gen_separator(rng),
        account.branch_id(),
        gen_separator(rng),
        account.base_number(),
        gen_separator(rng),
        account.suffix()
    )
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
    }

    let validator = AccountValidator::new();
    let report = validator.diagnose(input);
    let valid = validator.validate(input);

    // every entry point agrees
    assert_eq!(report.is_valid(), valid);
    assert_eq!(is_valid(input), valid);
    assert_eq!(report.account, AccountNumber::parse(input));

    if let Some(account) = report.account {
        assert_eq!(account.canonical_digits().len(), 18);

        let respelled = gen_spelling(&account, &mut rng);
        #[cfg(feature = "manual_test")]
        {
            println!("Respelled: {:?}", respelled);
        }
        assert_eq!(AccountNumber::parse(&respelled), Some(account));
        assert_eq!(validator.validate(&respelled), valid);
    }
}
