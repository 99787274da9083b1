pub mod config;
pub mod media;
pub mod utils;

pub use config::endpoint::{resolved_endpoint, DeploymentTarget, ResolvedEndpoint};
pub use config::proxy::ProxyRule;
pub use media::{
    AssetRecord, AssetUploadRequest, DeletionOutcome, MediaClient, MediaHostConfig,
    OverwritePolicy,
};
pub use utils::error::{HubError, Result};
