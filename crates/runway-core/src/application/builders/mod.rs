mod pipeline_input;
mod runtime_list_item;

#[cfg(test)]
pub(crate) mod fixtures;

pub use pipeline_input::{
    PipelineInputBuilder,
    BRANCH,
    OU,
    PROJECT_DIR,
    PROVIDER_NAME,
    PROVIDER_TYPE_NAME,
    PROVIDER_VERSION,
    REPO_NAME,
    RUNTIME_NAME,
};
pub use runtime_list_item::RuntimeListItemBuilder;
