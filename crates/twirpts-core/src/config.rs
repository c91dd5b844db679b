//! Generator configuration

use crate::error::{GenerateError, GenerateResult};
use serde::{Deserialize, Serialize};

/// Options controlling a generation run
///
/// Populated from the protoc plugin parameter (`out_dir=gen,runtime_module=../twirp`)
/// or from a TOML file when generating offline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Directory prefix joined in front of every generated file name
    #[serde(default)]
    pub out_dir: String,

    /// Import path of the runtime module providing `createTwirpRequest`,
    /// `throwTwirpError` and `Fetch`
    #[serde(default = "default_runtime_module")]
    pub runtime_module: String,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_runtime_module() -> String {
    "./twirp".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            out_dir: String::new(),
            runtime_module: default_runtime_module(),
            log_level: default_log_level(),
        }
    }
}

impl GeneratorOptions {
    /// Create the default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a protoc plugin parameter of the form `key=value,key=value`
    ///
    /// An empty or missing parameter yields the defaults. Unknown keys and
    /// entries without `=` are rejected.
    pub fn from_parameter(parameter: Option<&str>) -> GenerateResult<Self> {
        let Some(parameter) = parameter else {
            return Ok(Self::default());
        };

        let mut entries = serde_json::Map::new();
        for part in parameter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = part.split_once('=').ok_or_else(|| {
                GenerateError::InvalidParameter(format!("expected key=value, got `{part}`"))
            })?;
            entries.insert(
                key.trim().to_string(),
                serde_json::Value::String(value.trim().to_string()),
            );
        }

        Ok(serde_json::from_value(serde_json::Value::Object(entries))?)
    }

    /// Parse options from TOML text
    pub fn from_toml(content: &str) -> GenerateResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Join the configured output directory with a module file name
    pub fn output_path(&self, filename: &str) -> String {
        let dir = self.out_dir.trim_end_matches('/');
        if dir.is_empty() {
            filename.to_string()
        } else {
            format!("{dir}/{filename}")
        }
    }
}
