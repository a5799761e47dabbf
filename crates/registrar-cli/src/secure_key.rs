use eyre::{Context, Result};
use std::env;

#[derive(Debug, PartialEq, Eq)]
pub enum KeySource {
    Environment(String),
    File(String),
    Interactive,
}

impl KeySource {
    pub fn from_arg(key_arg: &str) -> Self {
        if let Some(var_name) = key_arg.strip_prefix("env:") {
            return Self::Environment(var_name.to_string());
        }
        if let Some(path) = key_arg.strip_prefix("file:") {
            return Self::File(path.to_string());
        }
        if key_arg != "prompt" {
            log::warn!("Direct private key arguments are refused for security reasons.");
            log::warn!("Use 'env:VAR_NAME', 'file:/path/to/key' or 'prompt' instead.");
        }
        Self::Interactive
    }

    pub fn resolve(&self) -> Result<String> {
        match self {
            Self::Environment(var_name) => env::var(var_name)
                .with_context(|| format!("Environment variable {var_name} not found")),
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read private key from file: {path}"))
                .map(|s| s.trim().to_string()),
            Self::Interactive => rpassword::prompt_password("Enter private key (hidden): ")
                .context("Failed to read private key"),
        }
    }
}

/// Resolves a key source argument. `None` means no local key: the node signs.
pub fn get_private_key(key_arg: Option<&str>) -> Result<Option<String>> {
    key_arg
        .map(|arg| KeySource::from_arg(arg).resolve())
        .transpose()
}
