//! Gateway configuration.

/// Configuration for a gateway implementation.
///
/// The base URL is an explicit value injected into the collaborator; there
/// is deliberately no process-wide host state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL of the gateway node, without a trailing slash.
    pub base_url: String,
}

impl GatewayConfig {
    /// Configuration pointing at a specific gateway node.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// The absolute URL for a route path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new("https://arweave.net")
    }
}
