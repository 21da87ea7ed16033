use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created,
    AlreadyExists,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CopySummary {
    pub copied: Vec<String>,
    pub skipped: Vec<String>,
}
