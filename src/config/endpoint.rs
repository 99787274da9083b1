use std::sync::OnceLock;

/// Environment flag consulted once at process start.
pub const ENDPOINT_FLAG: &str = "USE_STAGING_CONFIG";

/// A named backend environment the client can run against.
///
/// The table is fixed at build time; `Local` is the designated default and
/// the fallback for any flag value we do not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentTarget {
    Local,
    Staging,
    PreProduction,
    Production,
}

impl DeploymentTarget {
    pub fn base_url(self) -> &'static str {
        match self {
            DeploymentTarget::Local => "http://localhost:8000",
            DeploymentTarget::Staging => "https://filmhub-backend-staging.azurewebsites.net",
            DeploymentTarget::PreProduction => "https://filmhub-backend-preprod.azurewebsites.net",
            DeploymentTarget::Production => "https://filmhub-backend.azurewebsites.net",
        }
    }

    /// Maps the raw flag value to a target. Truthy values keep the historical
    /// meaning of the flag (point at staging); explicit target names select
    /// that target. Anything else fails open to `Local`, never to a remote.
    pub fn from_flag(flag: Option<&str>) -> Self {
        let value = match flag {
            Some(v) if !v.trim().is_empty() => v.trim().to_ascii_lowercase(),
            _ => return DeploymentTarget::Local,
        };

        match value.as_str() {
            "1" | "true" | "yes" | "staging" => DeploymentTarget::Staging,
            "preprod" | "pre-production" => DeploymentTarget::PreProduction,
            "prod" | "production" => DeploymentTarget::Production,
            "0" | "false" | "no" | "local" => DeploymentTarget::Local,
            other => {
                tracing::warn!(
                    "Unrecognized {} value '{}', falling back to local backend",
                    ENDPOINT_FLAG,
                    other
                );
                DeploymentTarget::Local
            }
        }
    }
}

/// The single base URL selected for this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    target: DeploymentTarget,
    url: &'static str,
}

impl ResolvedEndpoint {
    /// Pure resolution from an explicit flag value. Never fails and never
    /// returns an empty URL.
    pub fn resolve(flag: Option<&str>) -> Self {
        let target = DeploymentTarget::from_flag(flag);
        Self {
            target,
            url: target.base_url(),
        }
    }

    pub fn target(&self) -> DeploymentTarget {
        self.target
    }

    /// Base URL for every outgoing request made by the HTTP layer.
    pub fn client_base(&self) -> &'static str {
        self.url
    }
}

static RESOLVED: OnceLock<ResolvedEndpoint> = OnceLock::new();

/// Process-wide endpoint, resolved from the environment exactly once.
///
/// The flag is not re-read after the first call, so requests cannot silently
/// switch backends mid-session.
pub fn resolved_endpoint() -> &'static ResolvedEndpoint {
    RESOLVED.get_or_init(|| {
        let flag = std::env::var(ENDPOINT_FLAG).ok();
        let endpoint = ResolvedEndpoint::resolve(flag.as_deref());
        tracing::info!(
            "Resolved backend endpoint: {} ({:?})",
            endpoint.client_base(),
            endpoint.target()
        );
        endpoint
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_flag_selects_local() {
        assert_eq!(DeploymentTarget::from_flag(None), DeploymentTarget::Local);
    }

    #[test]
    fn empty_or_blank_flag_selects_local() {
        assert_eq!(DeploymentTarget::from_flag(Some("")), DeploymentTarget::Local);
        assert_eq!(DeploymentTarget::from_flag(Some("   ")), DeploymentTarget::Local);
    }

    #[test]
    fn truthy_flag_selects_staging() {
        for value in ["1", "true", "yes", "staging", "TRUE", " Yes "] {
            assert_eq!(
                DeploymentTarget::from_flag(Some(value)),
                DeploymentTarget::Staging,
                "value: {value:?}"
            );
        }
    }

    #[test]
    fn named_targets_select_their_entry() {
        assert_eq!(
            DeploymentTarget::from_flag(Some("production")),
            DeploymentTarget::Production
        );
        assert_eq!(
            DeploymentTarget::from_flag(Some("preprod")),
            DeploymentTarget::PreProduction
        );
        assert_eq!(DeploymentTarget::from_flag(Some("local")), DeploymentTarget::Local);
    }

    #[test]
    fn unrecognized_flag_fails_open_to_local() {
        for value in ["maybe", "2", "azure", "localhost"] {
            assert_eq!(
                DeploymentTarget::from_flag(Some(value)),
                DeploymentTarget::Local,
                "value: {value:?}"
            );
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let first = ResolvedEndpoint::resolve(Some("staging"));
        let second = ResolvedEndpoint::resolve(Some("staging"));
        assert_eq!(first, second);
        assert_eq!(first.client_base(), second.client_base());
    }

    #[test]
    fn resolved_url_is_never_empty() {
        for flag in [None, Some("garbage"), Some("production")] {
            assert!(!ResolvedEndpoint::resolve(flag).client_base().is_empty());
        }
    }
}
