pub mod endpoint;
pub mod proxy;

pub use endpoint::{resolved_endpoint, DeploymentTarget, ResolvedEndpoint};
pub use proxy::ProxyRule;
