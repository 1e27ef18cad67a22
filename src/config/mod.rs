use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "contacts.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_ENABLE_GEOLOCATION: &str = "ENABLE_GEOLOCATION";
const ENV_NAME_LOCATION_IQ_API_KEY: &str = "LOCATION_IQ_API_KEY";

pub struct Config {
    pub db: Db,
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        override_from_env(&mut raw_config, |name| env::var(name).ok());
        Self::try_from(raw_config)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct Geocoding {
    /// `None` if geolocation is disabled or not configured.
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingGateway {
    LocationIq {
        api_key: String,
        base_url: Option<String>,
    },
}

fn parse_bool(s: &str) -> bool {
    let s = s.trim().to_lowercase();
    s == "true" || s == "1" || s == "yes"
}

fn override_from_env<F>(cfg: &mut raw::Config, var: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(db_url) = var(ENV_NAME_DB_URL) {
        cfg.db.get_or_insert_with(Default::default).connection_sqlite = db_url;
    }
    if let Some(enabled) = var(ENV_NAME_ENABLE_GEOLOCATION) {
        cfg.geocoding.get_or_insert_with(Default::default).enabled = parse_bool(&enabled);
    }
    if let Some(api_key) = var(ENV_NAME_LOCATION_IQ_API_KEY) {
        cfg.gateway
            .get_or_insert_with(Default::default)
            .location_iq
            .get_or_insert_with(Default::default)
            .api_key = Some(api_key);
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            geocoding,
            gateway,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must not be 0"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::Geocoding { enabled, gateway: gw_name } = geocoding.unwrap_or_default();
        let geo_gateway = if enabled {
            let gw_name = gw_name.unwrap_or_default();
            let gateway = gateway.unwrap_or_default();
            match gw_name {
                raw::GeocodingGateway::LocationIq => {
                    let raw::LocationIq { api_key, base_url } =
                        gateway.location_iq.unwrap_or_default();
                    match api_key.filter(|key| !key.trim().is_empty()) {
                        Some(api_key) => Some(GeocodingGateway::LocationIq { api_key, base_url }),
                        None => {
                            log::warn!("No LocationIQ API key found");
                            None
                        }
                    }
                }
            }
        } else {
            log::info!("Geolocation is disabled");
            None
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        Ok(Self { db, geocoding })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(toml: &str, env: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<_, _> = env.iter().copied().collect();
        let mut raw: raw::Config = toml::from_str(toml)?;
        override_from_env(&mut raw, |name| env.get(name).map(|v| v.to_string()));
        Config::try_from(raw)
    }

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn geolocation_is_disabled_by_default() {
        let cfg = load("", &[]).unwrap();
        assert!(cfg.geocoding.gateway.is_none());
        assert_eq!(10, cfg.db.conn_pool_size);
    }

    #[test]
    fn geolocation_disabled_despite_api_key() {
        let cfg = load("", &[(ENV_NAME_LOCATION_IQ_API_KEY, "secret")]).unwrap();
        assert!(cfg.geocoding.gateway.is_none());
    }

    #[test]
    fn geolocation_enabled_without_api_key() {
        let cfg = load("", &[(ENV_NAME_ENABLE_GEOLOCATION, "true")]).unwrap();
        assert!(cfg.geocoding.gateway.is_none());
        let cfg = load(
            "",
            &[
                (ENV_NAME_ENABLE_GEOLOCATION, "yes"),
                (ENV_NAME_LOCATION_IQ_API_KEY, " "),
            ],
        )
        .unwrap();
        assert!(cfg.geocoding.gateway.is_none());
    }

    #[test]
    fn geolocation_enabled_by_env() {
        let cfg = load(
            "",
            &[
                (ENV_NAME_ENABLE_GEOLOCATION, "1"),
                (ENV_NAME_LOCATION_IQ_API_KEY, "secret"),
            ],
        )
        .unwrap();
        assert_eq!(
            Some(GeocodingGateway::LocationIq {
                api_key: "secret".into(),
                base_url: Some("https://us1.locationiq.com/v1/search.php".into()),
            }),
            cfg.geocoding.gateway
        );
    }

    #[test]
    fn geolocation_enabled_by_file() {
        let toml = r#"
            [geocoding]
            enabled = true
            gateway = "location-iq"

            [gateway.location-iq]
            api-key = "secret"
        "#;
        let cfg = load(toml, &[]).unwrap();
        assert_eq!(
            Some(GeocodingGateway::LocationIq {
                api_key: "secret".into(),
                base_url: None,
            }),
            cfg.geocoding.gateway
        );
        let cfg = load(toml, &[(ENV_NAME_ENABLE_GEOLOCATION, "false")]).unwrap();
        assert!(cfg.geocoding.gateway.is_none());
    }

    #[test]
    fn location_iq_is_the_default_gateway() {
        let toml = r#"
            [geocoding]
            enabled = true

            [gateway.location-iq]
            api-key = "secret"
        "#;
        assert_eq!(
            Some(GeocodingGateway::LocationIq {
                api_key: "secret".into(),
                base_url: None,
            }),
            load(toml, &[]).unwrap().geocoding.gateway
        );
    }

    #[test]
    fn override_database_url() {
        let cfg = load("", &[(ENV_NAME_DB_URL, ":memory:")]).unwrap();
        assert_eq!(":memory:", cfg.db.conn_sqlite);
    }
}
