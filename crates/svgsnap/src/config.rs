//! Types for the configuration file usable by SVGSnap
use std::{collections::BTreeMap, env::current_dir, fs::read_to_string, path::PathBuf};

use anyhow::Context as _;
use etcetera::{choose_base_strategy, BaseStrategy};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// The configuration for snapping paths
pub struct Snap {
    /// The grid size used when none is given as an argument
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<f64>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// The configuration for generating code
pub struct Emit {
    /// The scale used when none is given as an argument
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Color constants to use before the built-in colors, keyed by fill
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub colors: BTreeMap<String, String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// The config for the CLI usage of SVGSnap
pub struct Config {
    /// The options for `snap-to-grid`
    pub snap: Option<Snap>,
    /// The options for `svg-to-c`
    pub emit: Option<Emit>,
}

impl Config {
    fn load_local() -> std::io::Result<(String, PathBuf)> {
        let mut path = current_dir()?;
        path.push("svgsnaprc.json");
        Ok((read_to_string(&path)?, path))
    }

    fn load_base() -> std::io::Result<(String, PathBuf)> {
        let mut path = choose_base_strategy()
            .map_err(std::io::Error::other)?
            .config_dir();
        path.push("svgsnap");
        path.push("config.json");
        Ok((read_to_string(&path)?, path))
    }

    /// Tries loading the configuration from well-known paths, falling back to the default
    /// configuration when there's none.
    ///
    /// # Errors
    /// When the config exists but cannot be parsed
    pub fn load() -> anyhow::Result<Self> {
        let Ok((file, path)) = Self::load_local().or_else(|_| Self::load_base()) else {
            log::debug!("config: no configuration found");
            return Ok(Self::default());
        };
        log::debug!("config: loading {}", path.display());
        Self::parse(&file)
            .with_context(|| format!("Configuration at {} cannot be parsed", path.display()))
    }

    /// Parses configuration from JSON
    ///
    /// # Errors
    /// When the JSON doesn't match the configuration
    pub fn parse(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[test]
fn serde() -> anyhow::Result<()> {
    use pretty_assertions::assert_eq;

    let config = Config::parse(
        r##"{
        "snap": { "grid": 0.5 },
        "emit": { "scale": 8.0, "colors": { "#123456": "V4P_CUSTOM" } }
    }"##,
    )?;
    assert_eq!(
        config,
        Config {
            snap: Some(Snap { grid: Some(0.5) }),
            emit: Some(Emit {
                scale: Some(8.0),
                colors: BTreeMap::from([("#123456".to_string(), "V4P_CUSTOM".to_string())]),
            }),
        }
    );

    assert_eq!(Config::parse("{}")?, Config::default());
    assert_eq!(
        serde_json::to_string(&Config::parse(r#"{ "emit": {} }"#)?)?,
        String::from(r#"{"snap":null,"emit":{}}"#),
    );
    assert!(Config::parse(r#"{ "snap": { "grid": "big" } }"#).is_err());
    Ok(())
}
