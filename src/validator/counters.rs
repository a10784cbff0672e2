use crate::observability::labels::{Labels, NO_LABEL};
use crate::validator::ValidationStage;
use metrics::{counter, Counter};

pub struct Metrics {
    pub validations: Counter,
    pub valid: Counter,
    pub invalid_parse: Counter,
    pub invalid_bank: Counter,
    pub invalid_branch: Counter,
    pub invalid_checksum: Counter,
}

impl Metrics {
    pub fn new(labels: &Labels) -> Self {
        let invalid =
            |stage: ValidationStage| counter!("nz_bank_account.invalid", labels.with_stage(stage));
        Metrics {
            validations: counter!("nz_bank_account.validations", labels.clone()),
            valid: counter!("nz_bank_account.valid", labels.clone()),
            invalid_parse: invalid(ValidationStage::Parse),
            invalid_bank: invalid(ValidationStage::Bank),
            invalid_branch: invalid(ValidationStage::Branch),
            invalid_checksum: invalid(ValidationStage::Checksum),
        }
    }

    pub fn invalid(&self, stage: ValidationStage) -> &Counter {
        match stage {
            ValidationStage::Parse => &self.invalid_parse,
            ValidationStage::Bank => &self.invalid_bank,
            ValidationStage::Branch => &self.invalid_branch,
            ValidationStage::Checksum => &self.invalid_checksum,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics::new(&NO_LABEL)
    }
}
