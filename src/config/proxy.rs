use url::Url;

use crate::config::endpoint::ResolvedEndpoint;
use crate::utils::error::{HubError, Result};

/// Development proxy rule: forwards same-origin relative requests from the
/// served client to the resolved backend.
///
/// Built from the same `ResolvedEndpoint` the HTTP layer uses, so the proxy
/// target and the runtime base URL cannot disagree.
#[derive(Debug, Clone)]
pub struct ProxyRule {
    target: Url,
}

impl ProxyRule {
    pub fn for_endpoint(endpoint: &ResolvedEndpoint) -> Result<Self> {
        let target = Url::parse(endpoint.client_base())?;
        Ok(Self { target })
    }

    pub fn target(&self) -> &Url {
        &self.target
    }

    /// Rewrites a relative request path into an absolute URL at the proxy
    /// target.
    pub fn forward(&self, path: &str) -> Result<Url> {
        self.target.join(path).map_err(HubError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_joins_relative_paths_onto_target() {
        let endpoint = ResolvedEndpoint::resolve(None);
        let proxy = ProxyRule::for_endpoint(&endpoint).unwrap();

        let forwarded = proxy.forward("/api/movies").unwrap();
        assert_eq!(forwarded.as_str(), "http://localhost:8000/api/movies");
    }

    #[test]
    fn proxy_target_mirrors_resolution() {
        let endpoint = ResolvedEndpoint::resolve(Some("staging"));
        let proxy = ProxyRule::for_endpoint(&endpoint).unwrap();

        assert_eq!(
            proxy.target().as_str().trim_end_matches('/'),
            endpoint.client_base()
        );
    }
}
