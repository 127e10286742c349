use secrecy::Secret;
use serde::Deserialize;
use std::env;
use tutor_core::config as core_config;
use tutor_core::error::AppError;

/// Default model served through OpenRouter.
const DEFAULT_MODEL: &str = "deepseek/deepseek-chat";

#[derive(Debug, Clone, Deserialize)]
pub struct TutorConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub openrouter: OpenRouterSettings,
    pub rate_limit: RateLimitSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterSettings {
    pub api_key: Secret<String>,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSettings {
    /// Requests admitted per window, shared across all callers.
    pub max_requests: u32,
    pub window_seconds: u64,
}

impl TutorConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(TutorConfig {
            common: common_config,
            openrouter: OpenRouterSettings {
                // The API key has no default: the service cannot answer a
                // single request without it.
                api_key: Secret::new(get_env("OPENROUTER_API_KEY", None, is_prod)?),
                model: get_env("OPENROUTER_MODEL", Some(DEFAULT_MODEL), is_prod)?,
            },
            rate_limit: RateLimitSettings {
                max_requests: get_env("RATE_LIMIT_MAX_REQUESTS", Some("10"), is_prod)?
                    .parse()
                    .unwrap_or(10),
                window_seconds: get_env("RATE_LIMIT_WINDOW_SECONDS", Some("60"), is_prod)?
                    .parse()
                    .unwrap_or(60),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::Config(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::Config(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
