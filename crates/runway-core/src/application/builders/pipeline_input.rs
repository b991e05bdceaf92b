use runway_backend_api::Input;

use crate::domain::{
    ProviderKey,
    Source,
};

pub const PROVIDER_NAME: &str = "provider-name";
pub const PROVIDER_TYPE_NAME: &str = "provider-type-name";
pub const PROVIDER_VERSION: &str = "provider-version";
pub const RUNTIME_NAME: &str = "runtime-name";
pub const OU: &str = "ou";
pub const REPO_NAME: &str = "repo-name";
pub const BRANCH: &str = "branch";
pub const PROJECT_DIR: &str = "project-dir";

/// Assembles the inputs of a runtime-creating pipeline execution
#[derive(Debug, Default)]
pub struct PipelineInputBuilder<'a> {
    provider_key: Option<&'a ProviderKey>,
    runtime_name: Option<&'a str>,
    source: Option<&'a Source>,
}

impl<'a> PipelineInputBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, provider_key: &'a ProviderKey) -> Self {
        self.provider_key = Some(provider_key);
        self
    }

    pub fn with_runtime_name(mut self, runtime_name: &'a str) -> Self {
        self.runtime_name = Some(runtime_name);
        self
    }

    pub fn with_source(mut self, source: &'a Source) -> Self {
        self.source = Some(source);
        self
    }

    pub fn build(self) -> Input {
        let mut input = Input::new();

        if let Some(key) = self.provider_key {
            input.insert(PROVIDER_NAME, key.id.as_str());
            input.insert(PROVIDER_TYPE_NAME, key.provider_type_key.id.as_str());
            input.insert(PROVIDER_VERSION, key.provider_type_key.version.as_str());
        }

        if let Some(runtime_name) = self.runtime_name {
            input.insert(RUNTIME_NAME, runtime_name);
        }

        match self.source {
            Some(Source::InternalGit(git)) => {
                input.insert(OU, git.ou.as_str());
                input.insert(REPO_NAME, git.repository.as_str());
                input.insert(BRANCH, git.branch.as_str());
                input.insert(PROJECT_DIR, git.project.as_str());
            }
            Some(Source::Empty) | None => {}
        }

        input
    }
}
