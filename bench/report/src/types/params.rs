use derive_new::new;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, new)]
pub struct LoadTestParams {
    /// Label of the run, has no effect on its behavior
    pub name: String,

    /// Number of logical requests fired at the operation
    pub total_requests: u64,

    /// Upper bound of requests in flight at the same time
    pub max_concurrency: usize,

    /// Human readable description of the operation under test
    #[new(default)]
    pub target: Option<String>,

    /// Identifier of the machine that ran the test
    #[new(default)]
    pub identifier: Option<String>,
}

impl LoadTestParams {
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }
}
