use serde::{
    Deserialize,
    Serialize,
};

/// Project living in one of the platform's own git repositories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalGitSource {
    pub ou: String,
    pub repository: String,
    pub branch: String,
    pub project: String,
}

impl InternalGitSource {
    pub fn new(
        ou: impl Into<String>, repository: impl Into<String>, branch: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            ou: ou.into(),
            repository: repository.into(),
            branch: branch.into(),
            project: project.into(),
        }
    }
}

/// Where the code deployed by a runtime comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Source {
    InternalGit(InternalGitSource),
    /// Adds nothing to the pipeline inputs
    Empty,
}
