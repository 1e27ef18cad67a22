use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("contacts.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u32,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    #[serde(default)]
    pub enabled: bool,
    pub gateway: Option<GeocodingGateway>,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default()
            .geocoding
            .expect("Geocoding configuration")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    #[default]
    LocationIq,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub location_iq: Option<LocationIq>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LocationIq {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.db.is_some());
        let geocoding = cfg.geocoding.unwrap();
        assert!(!geocoding.enabled);
        assert_eq!(Some(GeocodingGateway::LocationIq), geocoding.gateway);
        let location_iq = cfg.gateway.unwrap().location_iq.unwrap();
        assert!(location_iq.api_key.is_none());
        assert!(location_iq.base_url.is_some());
    }

    #[test]
    fn parse_full_config_example_from_file() {
        let cfg_string = fs::read_to_string("src/config/contacts.full-example.toml").unwrap();
        let cfg: Config = toml::from_str(&cfg_string).unwrap();
        assert!(cfg.geocoding.unwrap().enabled);
        assert!(cfg.gateway.unwrap().location_iq.unwrap().api_key.is_some());
    }
}
