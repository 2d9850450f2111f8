use addrnorm_core::usecases::DEFAULT_BATCH_DELAY;
use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "addrnorm.toml";

const ENV_NAME_HERE_API_KEY: &str = "HERE_API_KEY";
const ENV_NAME_HERE_API_URL: &str = "HERE_API_URL";

pub use addrnorm_gateways::here::DEFAULT_API_URL as DEFAULT_HERE_API_URL;

#[derive(Debug)]
pub struct Config {
    pub geocoding: Geocoding,
    pub batch: Batch,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let explicit = file_path.is_some();
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound if !explicit => {
                    log::debug!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(anyhow!(
                    "Unable to read configuration file {}: {err}",
                    file_path.display()
                )),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(GeocodingGateway::Here {
            api_key, api_url, ..
        }) = &mut self.geocoding.gateway
        {
            if let Ok(key) = env::var(ENV_NAME_HERE_API_KEY) {
                *api_key = Some(key);
            }
            if let Ok(url) = env::var(ENV_NAME_HERE_API_URL) {
                *api_url = url;
            }
        }
    }
}

#[derive(Debug)]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

pub enum GeocodingGateway {
    Here {
        api_key: Option<String>,
        api_url: String,
        timeout: Option<Duration>,
    },
}

// Never print the API key
impl std::fmt::Debug for GeocodingGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Here {
                api_key,
                api_url,
                timeout,
            } => f
                .debug_struct("Here")
                .field("api_key", &api_key.as_ref().map(|_| "***"))
                .field("api_url", api_url)
                .field("timeout", timeout)
                .finish(),
        }
    }
}

#[derive(Debug)]
pub struct Batch {
    pub delay: Duration,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geocoding,
            gateway,
            batch,
        } = from;

        let geo_gateway = match geocoding.and_then(|g| g.gateway) {
            Some(gw_name) => {
                let toml_name = toml::Value::try_from(gw_name)?;
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::GeocodingGateway::Here => {
                        let raw::Here {
                            api_key,
                            api_url,
                            timeout,
                        } = gateway.here.ok_or_else(|| {
                            anyhow!("Missing {toml_name} gateway configuration")
                        })?;
                        let api_url = api_url.unwrap_or_else(|| DEFAULT_HERE_API_URL.to_string());
                        log::debug!("Use HERE geocoding gateway ({api_url})");
                        GeocodingGateway::Here {
                            api_key,
                            api_url,
                            timeout,
                        }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        let raw::Batch { delay } = batch.unwrap_or_default();
        let batch = Batch {
            delay: delay.unwrap_or(DEFAULT_BATCH_DELAY),
        };

        Ok(Self { geocoding, batch })
    }
}
