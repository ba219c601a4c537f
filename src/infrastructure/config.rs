use serde::Deserialize;

/// Base URL of the original deployment, used when no override is given.
pub const DEFAULT_BASE_URL: &str = "http://linux2.dvrpc.org";

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub endpoint: EndpointSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EndpointSettings {
    pub base_url: String,
}

pub fn load_client_config() -> anyhow::Result<ClientConfig> {
    let settings = config::Config::builder()
        .set_default("endpoint.base_url", DEFAULT_BASE_URL)?
        .add_source(config::File::with_name("config/client").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
