mod counters;
mod report;

pub use report::{ValidationFailure, ValidationReport, ValidationStage};

use crate::account::AccountNumber;
use crate::algorithm::{weights_for, AlgorithmTag};
use crate::bank_registry::{BankRegistry, StandardBankRegistry};
use crate::checksum;
use crate::observability::labels::Labels;
use crate::validator::counters::Metrics;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, input: &str) -> bool;
}

/// Checks NZ bank account numbers against the standard bank table.
pub struct NzBankAccountChecksum;

impl Validator for NzBankAccountChecksum {
    fn is_valid_match(&self, input: &str) -> bool {
        is_valid(input)
    }
}

/// Shortcut for validating against the standard bank table. No metrics are emitted.
pub fn is_valid(input: &str) -> bool {
    AccountNumber::parse(input)
        .is_some_and(|account| AccountCheck::new(&StandardBankRegistry, account).is_valid())
}

/// One parsed account looked up in a registry. Every validation step can be queried on
/// its own, which is what diagnostics are built from.
pub struct AccountCheck<'a, R: ?Sized> {
    registry: &'a R,
    account: AccountNumber,
}

impl<'a, R: BankRegistry + ?Sized> AccountCheck<'a, R> {
    pub fn new(registry: &'a R, account: AccountNumber) -> Self {
        Self { registry, account }
    }

    pub fn account(&self) -> &AccountNumber {
        &self.account
    }

    pub fn bank_valid(&self) -> bool {
        self.registry.is_known(self.account.bank_id())
    }

    pub fn branch_valid(&self) -> bool {
        self.registry
            .branch_valid(self.account.bank_id(), self.account.branch_id())
    }

    pub fn algorithm_tag(&self) -> AlgorithmTag {
        checksum::algorithm_tag(
            self.registry,
            self.account.bank_id(),
            self.account.base_number(),
        )
    }

    pub fn canonical_digits(&self) -> String {
        self.account.canonical_digits()
    }

    pub fn checksum(&self) -> u32 {
        checksum::weighted_sum(self.algorithm_tag(), &self.canonical_digits())
    }

    pub fn checksum_valid(&self) -> bool {
        checksum::is_valid_checksum(self.algorithm_tag(), &self.canonical_digits())
    }

    /// Runs the steps in order and stops at the first failure.
    pub fn outcome(&self) -> Result<(), ValidationFailure> {
        let bank_id = self.account.bank_id();
        if !self.bank_valid() {
            return Err(ValidationFailure::UnknownBank { bank_id });
        }
        if !self.branch_valid() {
            return Err(ValidationFailure::InvalidBranch {
                bank_id,
                branch_id: self.account.branch_id(),
            });
        }
        // The base number and suffix are always present on a parsed AccountNumber.
        let tag = self.algorithm_tag();
        let checksum = self.checksum();
        let divisor = weights_for(tag).divisor();
        if checksum % divisor != 0 {
            return Err(ValidationFailure::ChecksumMismatch {
                tag,
                checksum,
                divisor,
            });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.outcome().is_ok()
    }
}

/// Validates account numbers against a bank registry and counts the outcomes.
pub struct AccountValidator<R = StandardBankRegistry> {
    registry: R,
    metrics: Metrics,
}

impl AccountValidator<StandardBankRegistry> {
    pub fn new() -> Self {
        Self::with_registry(StandardBankRegistry)
    }
}

impl Default for AccountValidator<StandardBankRegistry> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BankRegistry> AccountValidator<R> {
    pub fn with_registry(registry: R) -> Self {
        Self {
            registry,
            metrics: Metrics::default(),
        }
    }

    pub fn with_labels(mut self, labels: &Labels) -> Self {
        self.metrics = Metrics::new(labels);
        self
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn check(&self, account: AccountNumber) -> AccountCheck<'_, R> {
        AccountCheck::new(&self.registry, account)
    }

    /// Parses the input and returns the per-step view, or `None` if it does not parse.
    pub fn inspect(&self, input: &str) -> Option<AccountCheck<'_, R>> {
        AccountNumber::parse(input).map(|account| self.check(account))
    }

    pub fn validate(&self, input: &str) -> bool {
        let outcome = match self.inspect(input) {
            Some(check) => check.outcome(),
            None => Err(ValidationFailure::Unparseable),
        };
        self.record(&outcome);
        outcome.is_ok()
    }

    pub fn diagnose(&self, input: &str) -> ValidationReport {
        let mut report = ValidationReport {
            input: input.to_string(),
            account: None,
            algorithm: None,
            canonical_digits: None,
            checksum: None,
            divisor: None,
            outcome: Err(ValidationFailure::Unparseable),
        };

        if let Some(check) = self.inspect(input) {
            report.account = Some(*check.account());
            report.canonical_digits = Some(check.canonical_digits());
            if check.bank_valid() {
                let tag = check.algorithm_tag();
                report.algorithm = Some(tag);
                report.checksum = Some(check.checksum());
                report.divisor = Some(weights_for(tag).divisor());
            }
            report.outcome = check.outcome();
        }

        self.record(&report.outcome);
        report
    }

    fn record(&self, outcome: &Result<(), ValidationFailure>) {
        self.metrics.validations.increment(1);
        match outcome {
            Ok(()) => self.metrics.valid.increment(1),
            Err(failure) => self.metrics.invalid(failure.stage()).increment(1),
        }
    }
}

impl<R: BankRegistry> Validator for AccountValidator<R> {
    fn is_valid_match(&self, input: &str) -> bool {
        self.validate(input)
    }
}

#[cfg(test)]
mod test {
    use crate::account::AccountNumber;
    use crate::algorithm::AlgorithmTag;
    use crate::bank_registry::{BankDefinition, BranchRange, CustomBankRegistry};
    use crate::observability::labels::Labels;
    use crate::validator::*;
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    #[test]
    fn test_published_examples() {
        let validator = AccountValidator::new();
        let examples = vec![
            ("01-902-0068389-00", AlgorithmTag::A, 176),
            ("08-6523-1954512-001", AlgorithmTag::D, 121),
            ("26-2600-0320871-032", AlgorithmTag::G, 30),
        ];
        for (input, tag, checksum) in examples {
            let check = validator.inspect(input).unwrap();
            assert!(check.bank_valid(), "{input}");
            assert!(check.branch_valid(), "{input}");
            assert_eq!(check.algorithm_tag(), tag, "{input}");
            assert_eq!(check.checksum(), checksum, "{input}");
            assert!(check.checksum_valid(), "{input}");
            assert!(validator.validate(input), "{input}");
        }
    }

    #[test]
    fn test_valid_accounts() {
        let valid = vec![
            "08-6523-1954512-001",
            "08 6523 1954512 001",
            "01-0902-00068389-0000",
        ];
        for input in valid {
            assert!(is_valid(input), "{input}");
            assert!(NzBankAccountChecksum.is_valid_match(input), "{input}");
        }
    }

    #[test]
    fn test_invalid_accounts() {
        let validator = AccountValidator::new();
        let invalid = vec![
            ("", ValidationFailure::Unparseable),
            ("08-6523-1954512", ValidationFailure::ChecksumMismatch {
                tag: AlgorithmTag::D,
                checksum: 94,
                divisor: 11,
            }),
            ("08/6523/1954512/001", ValidationFailure::Unparseable),
            ("05-0123-0034141-03", ValidationFailure::UnknownBank { bank_id: 5 }),
            ("11-1111-0034141-0003", ValidationFailure::InvalidBranch {
                bank_id: 11,
                branch_id: 1111,
            }),
            ("08-6523-1954513-001", ValidationFailure::ChecksumMismatch {
                tag: AlgorithmTag::D,
                checksum: 122,
                divisor: 11,
            }),
        ];
        for (input, failure) in invalid {
            assert!(!validator.validate(input), "{input}");
            assert!(!is_valid(input), "{input}");
            assert_eq!(validator.diagnose(input).outcome, Err(failure), "{input}");
        }
    }

    #[test]
    fn test_stage_queries() {
        let validator = AccountValidator::new();

        let check = validator.inspect("08-0123-0034141-03").unwrap();
        assert_eq!(check.canonical_digits(), "080123000341410003");
        assert_eq!(check.algorithm_tag(), AlgorithmTag::D);
        assert!(check.bank_valid());
        assert!(!check.branch_valid());

        let check = validator.inspect("05-0123-0034141-03").unwrap();
        assert!(!check.bank_valid());
        assert!(!check.branch_valid());

        for input in ["03-0123-0034141-03", "01-1113-0034141-03", "20-0123-1111111-11"] {
            assert!(validator.inspect(input).unwrap().bank_valid(), "{input}");
        }
        for input in [
            "03-0123-0034141-03",
            "26-2600-0034141-03",
            "26-2699-0034141-0003",
            "11-6666-0034141-0003",
        ] {
            assert!(validator.inspect(input).unwrap().branch_valid(), "{input}");
        }
        for input in ["11-1111-0034141-0003", "01-2012-0034141-0003"] {
            assert!(!validator.inspect(input).unwrap().branch_valid(), "{input}");
        }

        let algorithms = vec![
            ("08-0123-0034141-03", AlgorithmTag::D),
            ("31-0123-0034141-03", AlgorithmTag::X),
            ("30-0123-0034141-03", AlgorithmTag::A),
            ("30-0123-1034141-03", AlgorithmTag::B),
            ("30-0123-0990000-03", AlgorithmTag::B),
            ("30-0123-0989999-03", AlgorithmTag::A),
        ];
        for (input, tag) in algorithms {
            assert_eq!(validator.inspect(input).unwrap().algorithm_tag(), tag, "{input}");
        }

        assert!(validator.inspect("not an account").is_none());
    }

    fn change_base_digit(account: &AccountNumber, place: u32) -> AccountNumber {
        let unit = 10u32.pow(place);
        let digit = account.base_number() / unit % 10;
        let base_number = account.base_number() - digit * unit + (digit + 1) % 10 * unit;
        AccountNumber::new(
            account.bank_id(),
            account.branch_id(),
            base_number,
            account.suffix(),
        )
        .unwrap()
    }

    #[test]
    fn changing_a_weighted_digit_breaks_the_checksum() {
        let validator = AccountValidator::new();
        // (input, base number places carrying a non-zero weight)
        let examples = vec![("01-902-0068389-00", 0..6), ("08-6523-1954512-001", 0..7)];
        for (input, places) in examples {
            let account = AccountNumber::parse(input).unwrap();
            assert!(validator.check(account).is_valid());
            for place in places {
                let changed = change_base_digit(&account, place);
                assert!(!validator.check(changed).is_valid(), "{changed}");
            }
        }

        let account = AccountNumber::parse("26-2600-0320871-032").unwrap();
        for suffix in [33, 42] {
            let changed = AccountNumber::new(26, 2600, 320871, suffix).unwrap();
            assert!(!validator.check(changed).checksum_valid(), "{changed}");
        }
        assert!(validator.check(account).checksum_valid());
    }

    #[test]
    fn bank_9_accepts_any_branch() {
        let validator = AccountValidator::new();
        let check = validator.inspect("09-1234-0000000-0000").unwrap();
        assert!(check.branch_valid());
        assert_eq!(check.algorithm_tag(), AlgorithmTag::E);
        assert!(check.is_valid());
    }

    #[test]
    fn bank_9_folds_weighted_products() {
        let validator = AccountValidator::new();
        let check = validator.inspect("09-0000-00009800-0008").unwrap();
        assert_eq!(check.algorithm_tag(), AlgorithmTag::E);
        assert_eq!(check.checksum(), 22);
        assert!(validator.validate("09-0000-00009800-0008"));

        let report = validator.diagnose("09-0000-00009800-0007");
        assert_eq!(
            report.outcome,
            Err(ValidationFailure::ChecksumMismatch {
                tag: AlgorithmTag::E,
                checksum: 21,
                divisor: 11,
            })
        );
    }

    #[test]
    fn diagnose_fills_what_was_computed() {
        let validator = AccountValidator::new();

        let report = validator.diagnose("26-2600-0320871-032");
        assert!(report.is_valid());
        assert_eq!(report.algorithm, Some(AlgorithmTag::G));
        assert_eq!(report.canonical_digits.as_deref(), Some("262600003208710032"));
        assert_eq!(report.checksum, Some(30));
        assert_eq!(report.divisor, Some(10));
        assert_eq!(report.failed_stage(), None);

        let report = validator.diagnose("05-0123-0034141-03");
        assert_eq!(report.failed_stage(), Some(ValidationStage::Bank));
        assert!(report.account.is_some());
        assert_eq!(report.algorithm, None);
        assert_eq!(report.checksum, None);

        let report = validator.diagnose("01-902-0068389-00 ");
        assert_eq!(report.failed_stage(), Some(ValidationStage::Parse));
        assert_eq!(report.account, None);
        assert_eq!(report.canonical_digits, None);
    }

    #[test]
    fn custom_registry_adds_a_bank() {
        let registry = CustomBankRegistry::standard()
            .with_bank(
                5,
                BankDefinition::new(vec![BranchRange(100, 199)], Some(AlgorithmTag::X)),
            )
            .unwrap();
        let validator = AccountValidator::with_registry(registry);
        assert!(validator.validate("05-0123-0034141-03"));
        assert!(!validator.validate("05-0200-0034141-03"));
        assert!(validator.validate("08-6523-1954512-001"));
        assert!(!AccountValidator::new().validate("05-0123-0034141-03"));
    }

    #[test]
    fn should_submit_validation_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let validator = AccountValidator::new();
            validator.validate("01-902-0068389-00");
            validator.validate("08-6523-1954512-001");
            validator.validate("garbage");
            validator.diagnose("11-1111-0034141-0003");
            // NzBankAccountChecksum does not count anything
            NzBankAccountChecksum.is_valid_match("01-902-0068389-00");
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let counter_value = |name: &'static str, labels: Vec<Label>| {
            snapshot
                .get(&CompositeKey::new(Counter, Key::from_parts(name, labels)))
                .map(|(_, _, value)| value)
        };

        assert_eq!(
            counter_value("nz_bank_account.validations", vec![]),
            Some(&DebugValue::Counter(4))
        );
        assert_eq!(
            counter_value("nz_bank_account.valid", vec![]),
            Some(&DebugValue::Counter(2))
        );
        assert_eq!(
            counter_value(
                "nz_bank_account.invalid",
                vec![Label::new("stage", "parse")]
            ),
            Some(&DebugValue::Counter(1))
        );
        assert_eq!(
            counter_value(
                "nz_bank_account.invalid",
                vec![Label::new("stage", "branch")]
            ),
            Some(&DebugValue::Counter(1))
        );
    }

    #[test]
    fn should_attach_custom_labels() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let validator =
                AccountValidator::new().with_labels(&Labels::new(&[("source", "import")]));
            validator.validate("05-0123-0034141-03");
        });

        let snapshot = snapshotter.snapshot().into_hashmap();
        let key = Key::from_parts(
            "nz_bank_account.invalid",
            vec![Label::new("source", "import"), Label::new("stage", "bank")],
        );
        let (_, _, value) = snapshot
            .get(&CompositeKey::new(Counter, key))
            .expect("metric not found");
        assert_eq!(value, &DebugValue::Counter(1));
    }
}
