use serde::Deserialize;

/// Configuration options of the inventory service.
///
/// Loaded from `config/default.yaml`, `config/{APP_ENV}.yaml` and `APP_*`
/// environment variables, in that order.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Key shared with the auth service; signs cookies and identity tokens.
    /// Must be at least 64 bytes long.
    pub secret: String,
    /// Cookie domain.
    pub domain: String,
    pub templates_dir: String,
    pub auth_service_url: String,
}
