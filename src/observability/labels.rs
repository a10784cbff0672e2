use crate::validator::ValidationStage;
use metrics::{IntoLabels, Label, SharedString};

const STAGE: &str = "stage";

/// Key-value pairs attached to every counter an [crate::AccountValidator] emits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

pub const NO_LABEL: Labels = Labels(vec![]);

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    /// Copy of these labels with more key-value pairs appended
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Labels {
        let mut labels = self.0.clone();
        labels.extend(additional_labels.iter().map(Label::from));
        Labels(labels)
    }

    pub fn with_stage(&self, stage: ValidationStage) -> Labels {
        let stage: &'static str = stage.into();
        self.clone_with_labels(&[(STAGE, stage)])
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
