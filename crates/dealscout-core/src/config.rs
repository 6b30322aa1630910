use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_f32 = |var: &str, default: &str| -> Result<f32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let serpapi_key = require("SERPAPI_KEY")?;
    let groq_api_key = require("GROQ_API_KEY")?;
    let password_hash_salt = require("DEALSCOUT_PASSWORD_HASH_SALT")?;

    let env = parse_environment(&or_default("DEALSCOUT_ENV", "development"));

    let bind_addr = parse_addr("DEALSCOUT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("DEALSCOUT_LOG_LEVEL", "info");

    let search_base_url = or_default("DEALSCOUT_SEARCH_BASE_URL", "https://serpapi.com");
    let search_currency = or_default("DEALSCOUT_SEARCH_CURRENCY", "USD");
    let search_num_results = parse_u32("DEALSCOUT_SEARCH_NUM_RESULTS", "5")?;
    let search_max_position = parse_u32("DEALSCOUT_SEARCH_MAX_POSITION", "10")?;
    let search_timeout_secs = parse_u64("DEALSCOUT_SEARCH_TIMEOUT_SECS", "30")?;

    let llm_base_url = or_default("DEALSCOUT_LLM_BASE_URL", "https://api.groq.com");
    let llm_model = or_default("DEALSCOUT_LLM_MODEL", "mixtral-8x7b-32768");
    let llm_max_tokens = parse_u32("DEALSCOUT_LLM_MAX_TOKENS", "1000")?;
    let llm_temperature = parse_f32("DEALSCOUT_LLM_TEMPERATURE", "0.7")?;
    let llm_timeout_secs = parse_u64("DEALSCOUT_LLM_TIMEOUT_SECS", "60")?;

    let max_retries = parse_u32("DEALSCOUT_MAX_RETRIES", "1")?;
    let retry_backoff_base_ms = parse_u64("DEALSCOUT_RETRY_BACKOFF_BASE_MS", "500")?;

    let default_page_size = parse_usize("DEALSCOUT_DEFAULT_PAGE_SIZE", "5")?;
    let max_page_size = parse_usize("DEALSCOUT_MAX_PAGE_SIZE", "12")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        serpapi_key,
        search_base_url,
        search_currency,
        search_num_results,
        search_max_position,
        search_timeout_secs,
        groq_api_key,
        llm_base_url,
        llm_model,
        llm_max_tokens,
        llm_temperature,
        llm_timeout_secs,
        max_retries,
        retry_backoff_base_ms,
        default_page_size,
        max_page_size,
        password_hash_salt,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
