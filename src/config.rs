use crate::error::ConfigError;
use crate::skin::Skin;
use log::debug;
use serde::Deserialize;
use std::{fs, path::Path};

pub const CONFIG_ENV: &str = "SKINCHESS_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PieceStyle {
    /// FEN letters, uppercase for white
    #[default]
    Letters,
    /// Unicode chess glyphs
    Glyphs,
}

/// Either the name of a built-in skin or a full sprite table
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkinChoice {
    Named(String),
    Custom(Skin),
}

impl Default for SkinChoice {
    fn default() -> Self {
        SkinChoice::Named(String::from("pokemon"))
    }
}

impl SkinChoice {
    pub fn resolve(&self) -> Result<Skin, ConfigError> {
        match self {
            SkinChoice::Named(name) => Skin::builtin(name).ok_or_else(|| ConfigError::UnknownSkin(name.clone())),
            SkinChoice::Custom(skin) => Ok(skin.clone()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub skin: SkinChoice,
    pub piece_style: PieceStyle,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skin: SkinChoice::default(),
            piece_style: PieceStyle::default(),
            prompt: String::from("chess> "),
        }
    }
}

impl Config {
    /// Reads the YAML file at `path`. No path, or a path that does not exist,
    /// gives the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let p = match path {
            Some(p) if p.exists() => p,
            _ => return Ok(Self::default()),
        };
        let content = fs::read_to_string(p).map_err(|source| ConfigError::Io { path: p.to_path_buf(), source })?;
        let cfg = Self::from_yaml(&content).map_err(|source| ConfigError::Yaml { path: p.to_path_buf(), source })?;
        debug!("loaded config from {}", p.display());
        Ok(cfg)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}
