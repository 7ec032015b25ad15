use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::api::{BoardApi, HttpBoardApi};
use crate::app::error::Result;
use crate::config::Config;

pub struct AppContext {
    pub api: Arc<dyn BoardApi + Send + Sync>,
    pub config: Config,
}

impl AppContext {
    /// Build the context from the user's config file. `api_url` is the
    /// `--api-url` override; when absent the configured base URL is used.
    pub fn new(api_url: Option<&str>) -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config, api_url)
    }

    pub fn with_config(config: Config, api_url: Option<&str>) -> Result<Self> {
        let base_url = match api_url {
            Some(url) => Url::parse(url)?,
            None => Url::parse(&config.api.base_url)?,
        };

        let api: Arc<dyn BoardApi + Send + Sync> = Arc::new(HttpBoardApi::new(
            base_url,
            Duration::from_secs(config.api.timeout_secs),
        ));

        Ok(Self { api, config })
    }
}
