use crate::render::code::DEFAULT_COMPONENT_NAME;
use crate::utils::error::{PromptUiError, Result};
use crate::utils::validation::{validate_component_name, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub output: OutputConfig,
    pub code: CodeConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON descriptor output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeConfig {
    pub component_name: String,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

static ENV_VAR_PATTERN: OnceLock<Regex> = OnceLock::new();

fn env_var_pattern() -> &'static Regex {
    ENV_VAR_PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([^}]+)\}").expect("environment placeholder pattern is valid")
    })
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PromptUiError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` placeholders; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Loads `path` when given, otherwise the built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!("loading configuration from {}", path.as_ref().display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn component_name(&self) -> &str {
        &self.code.component_name
    }

    pub fn pretty_output(&self) -> bool {
        self.output.pretty
    }

    pub fn log_level(&self) -> &str {
        &self.logging.level
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_component_name("code.component_name", &self.code.component_name)?;
        validate_one_of("logging.level", &self.logging.level, LOG_LEVELS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[output]
pretty = false

[code]
component_name = "LandingPage"

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert!(!config.pretty_output());
        assert_eq!(config.component_name(), "LandingPage");
        assert_eq!(config.log_level(), "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = TomlConfig::from_toml_str("[code]\n").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.component_name(), "GeneratedComponent");
        assert!(config.pretty_output());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PROMPT_UI_TEST_COMPONENT", "PricingPage");

        let config =
            TomlConfig::from_toml_str("[code]\ncomponent_name = \"${PROMPT_UI_TEST_COMPONENT}\"\n")
                .unwrap();
        assert_eq!(config.component_name(), "PricingPage");

        std::env::remove_var("PROMPT_UI_TEST_COMPONENT");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let config =
            TomlConfig::from_toml_str("[code]\ncomponent_name = \"${PROMPT_UI_SURELY_UNSET}\"\n")
                .unwrap();
        assert_eq!(config.component_name(), "${PROMPT_UI_SURELY_UNSET}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"chatty\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[code\ncomponent_name = 1").unwrap_err();
        assert!(matches!(err, PromptUiError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[code]\ncomponent_name = \"FromFile\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.component_name(), "FromFile");

        let loaded = TomlConfig::load_or_default(Some(temp_file.path())).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(TomlConfig::load_or_default(None::<&Path>).unwrap(), TomlConfig::default());
    }
}
