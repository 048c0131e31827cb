/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_INSTRUMENT, DEFAULT_TIMEOUT_SECS, DEFAULT_UNITS, LIVE_REST_URL, PRACTICE_REST_URL,
};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, error};

/// Trading environment an account lives in
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// fxTrade Practice (demo) account
    #[default]
    Practice,
    /// fxTrade live account
    Live,
}

impl Environment {
    /// REST base URL for this environment
    #[must_use]
    pub fn rest_url(&self) -> &'static str {
        match self {
            Environment::Practice => PRACTICE_REST_URL,
            Environment::Live => LIVE_REST_URL,
        }
    }
}

impl FromStr for Environment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "practice" => Ok(Environment::Practice),
            "live" => Ok(Environment::Live),
            other => Err(AppError::Config(format!("unknown environment: {other}"))),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the OANDA v20 API
pub struct Credentials {
    /// Account ID, e.g. `101-009-12345678-001`
    pub account_id: String,
    /// Personal access token sent as a bearer token
    pub access_token: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the REST API, without the `/v3` prefix
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the OANDA client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Practice or live
    pub environment: Environment,
    /// Instrument every call is bound to, e.g. `USD_JPY`
    pub instrument: String,
    /// Unit size of each market order
    pub units: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from environment variables and `.env`
    ///
    /// Reads `OANDA_ACCOUNT_ID`, `OANDA_ACCESS_TOKEN`, `OANDA_ENVIRONMENT`,
    /// `OANDA_INSTRUMENT`, `OANDA_UNITS`, `OANDA_REST_BASE_URL` and
    /// `OANDA_REST_TIMEOUT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let account_id = get_env_or_default("OANDA_ACCOUNT_ID", String::new());
        let access_token = get_env_or_default("OANDA_ACCESS_TOKEN", String::new());
        let environment = get_env_or_default("OANDA_ENVIRONMENT", String::from("practice"))
            .parse::<Environment>()
            .unwrap_or_else(|e| {
                error!("{e}, falling back to practice");
                Environment::Practice
            });

        if account_id.is_empty() {
            error!("OANDA_ACCOUNT_ID not found in environment variables or .env file");
        }
        if access_token.is_empty() {
            error!("OANDA_ACCESS_TOKEN not found in environment variables or .env file");
        }

        let base_url: String = get_env_or_none("OANDA_REST_BASE_URL")
            .unwrap_or_else(|| environment.rest_url().to_string());

        Config {
            credentials: Credentials {
                account_id,
                access_token,
            },
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_default("OANDA_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            environment,
            instrument: get_env_or_default("OANDA_INSTRUMENT", String::from(DEFAULT_INSTRUMENT)),
            units: get_env_or_default("OANDA_UNITS", DEFAULT_UNITS),
        }
    }

    /// Same as [`Config::new`] but bound to an explicit instrument and environment
    ///
    /// The base URL follows the given environment unless `OANDA_REST_BASE_URL`
    /// overrides it.
    pub fn for_instrument(instrument: &str, environment: Environment) -> Self {
        let mut config = Self::new();
        if get_env_or_none::<String>("OANDA_REST_BASE_URL").is_none() {
            config.rest_api.base_url = environment.rest_url().to_string();
        }
        config.instrument = instrument.to_string();
        config.environment = environment;
        config
    }

    /// Checks that every field needed to talk to the broker is present
    pub fn validate(&self) -> Result<(), AppError> {
        if self.credentials.account_id.trim().is_empty() {
            return Err(AppError::Config("account id is empty".to_string()));
        }
        if self.credentials.access_token.trim().is_empty() {
            return Err(AppError::Config("access token is empty".to_string()));
        }
        if self.instrument.trim().is_empty() {
            return Err(AppError::Config("instrument is empty".to_string()));
        }
        if self.units == 0 {
            return Err(AppError::Config("units must be positive".to_string()));
        }
        if self.rest_api.base_url.trim().is_empty() {
            return Err(AppError::Config("rest base url is empty".to_string()));
        }
        Ok(())
    }
}
