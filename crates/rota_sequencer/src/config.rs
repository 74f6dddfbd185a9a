use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

use rota_providers::{
    ProviderError, RankingProvider,
    geocoding::{GeocodingClient, GeocodingClientParams},
    rapidapi_route::{RapidApiRouteClient, RapidApiRouteClientParams},
    serpapi::{SerpApiClient, SerpApiClientParams},
};
use thiserror::Error;
use tracing::{debug, info};

use crate::sequencer::{Sequencer, SequencerConfig};

pub const SERPAPI_KEY_VAR: &str = "SERPAPI_KEY";
pub const RAPIDAPI_KEY_VAR: &str = "RAPIDAPI_KEY";
pub const GOOGLE_MAPS_API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";
pub const EXTERNAL_RANKING_VAR: &str = "ROTA_EXTERNAL_RANKING";
pub const PROVIDER_TIMEOUT_VAR: &str = "ROTA_PROVIDER_TIMEOUT_SECS";
pub const SNAPSHOT_DIR_VAR: &str = "ROTA_SNAPSHOT_DIR";
pub const BIND_ADDR_VAR: &str = "ROTA_BIND_ADDR";

const DEFAULT_PROVIDER_TIMEOUT_SECS: &str = "10";
const DEFAULT_SNAPSHOT_DIR: &str = "./data";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RotaConfig {
    pub serpapi_key: Option<String>,
    pub rapidapi_key: Option<String>,
    pub google_maps_api_key: Option<String>,
    /// Requested by the operator, only effective with a SerpApi key.
    pub external_ranking: bool,
    pub provider_timeout: Duration,
    pub snapshot_dir: PathBuf,
    pub bind_addr: SocketAddr,
}

/// Loads `.env.local` and `.env` when present, then reads the process
/// environment.
pub fn load_config() -> Result<RotaConfig, ConfigError> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();

    load_config_from_env()
}

pub fn load_config_from_env() -> Result<RotaConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Parses the configuration from an env-var lookup, which keeps tests away
/// from the process environment.
pub fn build_config<F>(lookup: F) -> Result<RotaConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let secret = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
    };

    let or_default =
        |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_owned()) };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_owned(),
        reason,
    };

    let external_ranking = parse_bool(&or_default(EXTERNAL_RANKING_VAR, "true"))
        .ok_or_else(|| invalid(EXTERNAL_RANKING_VAR, "expected true or false".to_owned()))?;

    let timeout_secs = or_default(PROVIDER_TIMEOUT_VAR, DEFAULT_PROVIDER_TIMEOUT_SECS)
        .trim()
        .parse::<u64>()
        .map_err(|err| invalid(PROVIDER_TIMEOUT_VAR, err.to_string()))?;

    if timeout_secs == 0 {
        return Err(invalid(PROVIDER_TIMEOUT_VAR, "must be at least 1".to_owned()));
    }

    let bind_addr = or_default(BIND_ADDR_VAR, DEFAULT_BIND_ADDR)
        .trim()
        .parse::<SocketAddr>()
        .map_err(|err| invalid(BIND_ADDR_VAR, err.to_string()))?;

    Ok(RotaConfig {
        serpapi_key: secret(SERPAPI_KEY_VAR),
        rapidapi_key: secret(RAPIDAPI_KEY_VAR),
        google_maps_api_key: secret(GOOGLE_MAPS_API_KEY_VAR),
        external_ranking,
        provider_timeout: Duration::from_secs(timeout_secs),
        snapshot_dir: PathBuf::from(or_default(SNAPSHOT_DIR_VAR, DEFAULT_SNAPSHOT_DIR)),
        bind_addr,
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl RotaConfig {
    pub fn sequencer_config(&self) -> SequencerConfig {
        SequencerConfig {
            external_ranking_enabled: self.external_ranking && self.serpapi_key.is_some(),
        }
    }

    pub fn ranking_provider(&self) -> Result<Option<Arc<dyn RankingProvider>>, ProviderError> {
        let Some(api_key) = &self.serpapi_key else {
            debug!("{} not set, external ranking unavailable", SERPAPI_KEY_VAR);
            return Ok(None);
        };

        let mut params = SerpApiClientParams::new(api_key.clone());
        params.timeout = self.provider_timeout;

        Ok(Some(Arc::new(SerpApiClient::new(params)?)))
    }

    pub fn build_sequencer(&self) -> Result<Sequencer, ProviderError> {
        let config = self.sequencer_config();
        let provider = if config.external_ranking_enabled {
            self.ranking_provider()?
        } else {
            None
        };

        info!(
            "External ranking {}",
            if provider.is_some() { "enabled" } else { "disabled" }
        );

        Ok(Sequencer::new(config, provider))
    }

    pub fn geocoding_client(&self) -> Result<Option<GeocodingClient>, ProviderError> {
        let Some(api_key) = &self.google_maps_api_key else {
            return Ok(None);
        };

        let mut params = GeocodingClientParams::new(api_key.clone());
        params.timeout = self.provider_timeout;

        GeocodingClient::new(params).map(Some)
    }

    pub fn route_client(&self) -> Result<Option<RapidApiRouteClient>, ProviderError> {
        let Some(api_key) = &self.rapidapi_key else {
            return Ok(None);
        };

        let mut params = RapidApiRouteClientParams::new(api_key.clone());
        params.timeout = self.provider_timeout;

        RapidApiRouteClient::new(params).map(Some)
    }
}
