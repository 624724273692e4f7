use std::fmt;
use std::path::Path;
use std::str::FromStr;

use color_match::{ColorSpace, KmeansOptions, MatchRequest, Palette, Summarizer, DEFAULT_RESIZE};
use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};

use crate::error::ConfigError;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Reference palette: a built-in table name or an ordered name -> hex map
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Space used when a request does not name one
    #[serde(default, deserialize_with = "parse_from_str")]
    pub default_space: ColorSpace,

    /// Summarizer used when a request does not name one
    #[serde(default, deserialize_with = "parse_from_str")]
    pub default_summarizer: Summarizer,

    /// Cluster count for the k-means summarizer
    #[serde(default = "default_clusters")]
    pub clusters: usize,

    /// Working resolution; `null` keeps images at their decoded size
    #[serde(default = "default_resize_to")]
    pub resize_to: Option<u32>,

    /// Per-space distance limits
    #[serde(default)]
    pub max_distances: MaxDistances,

    /// Fixed k-means seed (entropy-seeded per call when unset)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_clusters() -> usize {
    5
}

fn default_resize_to() -> Option<u32> {
    Some(DEFAULT_RESIZE)
}

/// Palette source
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum PaletteConfig {
    /// Name of a built-in table (css3, css21, html4)
    Builtin(String),
    /// Explicit entries, in file order
    Entries(Mapping),
}

impl Default for PaletteConfig {
    fn default() -> Self {
        PaletteConfig::Builtin("css3".to_string())
    }
}

impl fmt::Display for PaletteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteConfig::Builtin(name) => write!(f, "builtin '{name}'"),
            PaletteConfig::Entries(map) => write!(f, "custom ({} entries)", map.len()),
        }
    }
}

impl PaletteConfig {
    /// Build the palette this configuration describes.
    pub fn build(&self) -> Result<Palette, ConfigError> {
        match self {
            PaletteConfig::Builtin(name) => Ok(Palette::builtin_named(name)?),
            PaletteConfig::Entries(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, value) in map {
                    let name = scalar_text(key).ok_or_else(|| ConfigError::Invalid {
                        field: "palette",
                        message: format!("entry name {key:?} is not a string"),
                    })?;
                    // Unquoted `#rrggbb` is a YAML comment and arrives as null,
                    // digit-only hex arrives as a number. Both surface as a
                    // parse error naming the entry.
                    let hex = scalar_text(value).ok_or_else(|| ConfigError::Invalid {
                        field: "palette",
                        message: format!("colour of '{name}' is not a string"),
                    })?;
                    entries.push((name, hex));
                }
                Ok(Palette::from_hex(entries)?)
            }
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}

/// Distance limits applied when a request does not set one
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct MaxDistances {
    #[serde(default = "default_srgb_distance")]
    pub srgb: f64,

    #[serde(default = "default_lab_distance")]
    pub lab: f64,
}

fn default_srgb_distance() -> f64 {
    ColorSpace::Srgb.default_max_distance()
}

fn default_lab_distance() -> f64 {
    ColorSpace::Lab.default_max_distance()
}

impl Default for MaxDistances {
    fn default() -> Self {
        Self {
            srgb: default_srgb_distance(),
            lab: default_lab_distance(),
        }
    }
}

impl MaxDistances {
    pub fn get(&self, space: ColorSpace) -> f64 {
        match space {
            ColorSpace::Srgb => self.srgb,
            ColorSpace::Lab => self.lab,
        }
    }
}

fn parse_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}

impl AppConfig {
    /// Load configuration from `path`.
    ///
    /// With no path, or a path that does not exist, the defaults are used.
    /// A file that exists but cannot be read, parsed or validated is an
    /// error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            tracing::info!("No config file given, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            palette = %config.palette,
            space = %config.default_space,
            summarizer = config.default_summarizer.name(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate YAML configuration text.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // An empty document means "all defaults"
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clusters == 0 {
            return Err(ConfigError::Invalid {
                field: "clusters",
                message: "must be at least 1".to_string(),
            });
        }
        if self.resize_to == Some(0) {
            return Err(ConfigError::Invalid {
                field: "resize_to",
                message: "must be at least 1 (or null for no resize)".to_string(),
            });
        }
        for space in ColorSpace::ALL {
            let limit = self.max_distances.get(space);
            if limit.is_nan() || limit < 0.0 {
                return Err(ConfigError::Invalid {
                    field: "max_distances",
                    message: format!("{space} limit must be a non-negative number, got {limit}"),
                });
            }
        }
        Ok(())
    }

    /// Summarizer with the configured cluster count and seed applied.
    pub fn summarizer(&self) -> Summarizer {
        self.apply_kmeans_settings(self.default_summarizer)
    }

    /// Give a k-means summarizer the configured cluster count and seed.
    pub fn apply_kmeans_settings(&self, summarizer: Summarizer) -> Summarizer {
        match summarizer {
            Summarizer::Mean => Summarizer::Mean,
            Summarizer::Dominant(_) => Summarizer::Dominant(KmeansOptions {
                clusters: self.clusters,
                seed: self.seed,
                ..KmeansOptions::default()
            }),
        }
    }

    /// Request carrying every configured default.
    pub fn default_request(&self) -> MatchRequest {
        MatchRequest::new()
            .space(self.default_space)
            .summarizer(self.summarizer())
            .resize_to(self.resize_to)
            .max_distance(self.max_distances.get(self.default_space))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: PaletteConfig::default(),
            default_space: ColorSpace::default(),
            default_summarizer: Summarizer::default(),
            clusters: default_clusters(),
            resize_to: default_resize_to(),
            max_distances: MaxDistances::default(),
            seed: None,
        }
    }
}
