#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    Passed,
    Failed(String),
}

impl ValidationOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        ValidationOutcome::Failed(reason.into())
    }
}
