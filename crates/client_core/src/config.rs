use std::{collections::HashMap, fs, io, path::Path};

use anyhow::{bail, Context};
use url::Url;

pub const DEFAULT_ORDER_URL: &str = "http://localhost:9009/api/order";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const SETTINGS_FILE: &str = "pizza_order.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub order_url: String,
    pub request_timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            order_url: DEFAULT_ORDER_URL.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientSettings {
    pub fn with_order_url(mut self, order_url: Option<String>) -> Self {
        if let Some(url) = order_url {
            self.order_url = url;
        }
        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let url = Url::parse(&self.order_url)
            .with_context(|| format!("invalid order url '{}'", self.order_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("order url must use http or https, got '{}'", url.scheme());
        }
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than zero");
        }
        Ok(())
    }
}

/// Defaults, then `pizza_order.toml` in the working directory, then env.
pub fn load_settings() -> anyhow::Result<ClientSettings> {
    let mut settings = ClientSettings::default();
    apply_file_overrides(&mut settings, Path::new(SETTINGS_FILE))?;
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok())?;
    settings.validate()?;
    Ok(settings)
}

pub(crate) fn apply_file_overrides(
    settings: &mut ClientSettings,
    path: &Path,
) -> anyhow::Result<()> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    let file_cfg = toml::from_str::<HashMap<String, toml::Value>>(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    if let Some(v) = file_cfg.get("order_url") {
        let url = v
            .as_str()
            .with_context(|| format!("order_url in {} must be a string", path.display()))?;
        settings.order_url = url.to_string();
    }
    if let Some(v) = file_cfg.get("request_timeout_secs") {
        let secs = v
            .as_integer()
            .filter(|secs| *secs >= 0)
            .with_context(|| {
                format!(
                    "request_timeout_secs in {} must be a non-negative integer",
                    path.display()
                )
            })?;
        settings.request_timeout_secs = secs as u64;
    }
    Ok(())
}

pub(crate) fn apply_env_overrides(
    settings: &mut ClientSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(v) = lookup("ORDER_API_URL") {
        settings.order_url = v;
    }
    if let Some(v) = lookup("APP__ORDER_URL") {
        settings.order_url = v;
    }
    if let Some(v) = lookup("ORDER_REQUEST_TIMEOUT_SECS") {
        settings.request_timeout_secs = v
            .trim()
            .parse()
            .with_context(|| format!("ORDER_REQUEST_TIMEOUT_SECS must be an integer, got '{v}'"))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
