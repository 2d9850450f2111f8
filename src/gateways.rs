use crate::config::{self, GeocodingGateway};
use addrnorm_gateways::here::HereGeocoder;
use anyhow::{anyhow, Result};

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Result<HereGeocoder> {
    match &cfg.gateway {
        Some(GeocodingGateway::Here {
            api_key,
            api_url,
            timeout,
        }) => {
            let api_key = api_key.as_ref().ok_or_else(|| {
                anyhow!("No HERE API key found: set 'api-key' in the configuration file or HERE_API_KEY")
            })?;
            log::info!("Use HERE geocoding gateway");
            Ok(HereGeocoder::try_new(api_key.as_str(), api_url.as_str(), *timeout)?)
        }
        None => Err(anyhow!("No geocoding gateway was configured")),
    }
}
