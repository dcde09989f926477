//! Generator configuration (`pommel.toml`)

use crate::LogLevel;
use crate::error::{PommelError, PommelResult};
use pommel_model::ClassName;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "pommel.toml";

/// Top-level generator configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PommelConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings that shape the generated source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// `value` of the `@Generated` annotation
    #[serde(default = "default_processor")]
    pub processor: String,

    /// `comments` of the `@Generated` annotation
    #[serde(default = "default_comments")]
    pub comments: String,

    /// Emit `@Generated` on every module
    #[serde(default = "default_generated_annotation")]
    pub generated_annotation: bool,

    /// Install target for unscoped and `@Singleton` bindings
    #[serde(default = "default_application_component")]
    pub application_component: ClassName,
}

fn default_processor() -> String {
    "pommel.SoloModuleProcessor".to_string()
}

fn default_comments() -> String {
    "https://github.com/JuulLabs/pommel".to_string()
}

fn default_generated_annotation() -> bool {
    true
}

fn default_application_component() -> ClassName {
    ClassName::new("dagger.hilt.components", "SingletonComponent")
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            processor: default_processor(),
            comments: default_comments(),
            generated_annotation: default_generated_annotation(),
            application_component: default_application_component(),
        }
    }
}

/// Where generated files go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("build/generated/source/pommel")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: LogLevel,
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl PommelConfig {
    /// Create a configuration with every field defaulted
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> PommelResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Parse and validate TOML text
    pub fn from_toml(content: &str) -> PommelResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else `pommel.toml` in `dir` if present, else defaults
    pub fn discover(path: Option<&Path>, dir: &Path) -> PommelResult<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::from_file(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> PommelResult<()> {
        if self.generator.processor.trim().is_empty() {
            return Err(PommelError::ConfigError(
                "generator.processor cannot be empty".to_string(),
            ));
        }

        if self.generator.application_component.package().is_empty() {
            return Err(PommelError::ConfigError(format!(
                "generator.application_component must be fully qualified, got '{}'",
                self.generator.application_component
            )));
        }

        if self.output.directory.as_os_str().is_empty() {
            return Err(PommelError::ConfigError(
                "output.directory cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
