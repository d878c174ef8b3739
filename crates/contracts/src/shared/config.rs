use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct UploaderConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Куда отправлять разобранные строки CSV
    pub pairs_endpoint: String,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
pairs_endpoint = "http://localhost:8000/api/v1/pairs"
"#;

static DEFAULT: Lazy<UploaderConfig> = Lazy::new(|| {
    UploaderConfig::from_toml(DEFAULT_CONFIG).unwrap_or_else(|err| {
        log::error!("Embedded configuration is invalid: {}", err);
        UploaderConfig {
            api: ApiConfig {
                pairs_endpoint: "http://localhost:8000/api/v1/pairs".to_string(),
            },
        }
    })
});

impl UploaderConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: UploaderConfig = toml::from_str(contents)?;
        if config.api.pairs_endpoint.trim().is_empty() {
            anyhow::bail!("api.pairs_endpoint must not be empty");
        }
        Ok(config)
    }

    /// Configuration built from [`DEFAULT_CONFIG`]
    pub fn embedded() -> &'static UploaderConfig {
        &DEFAULT
    }

    /// Endpoint with an optional override; blank overrides are ignored
    pub fn pairs_endpoint_or(&self, override_endpoint: Option<&str>) -> String {
        match override_endpoint.map(str::trim) {
            Some(endpoint) if !endpoint.is_empty() => endpoint.to_string(),
            _ => self.api.pairs_endpoint.clone(),
        }
    }
}
