//! Configuration module for clangview.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `CV_` and use double underscores
//! to separate nested levels:
//! - `CV_LOG_LEVEL=debug` sets `log_level`
//! - `CV_PARSING__DIAGNOSTICS=false` sets `parsing.diagnostics`
//! - `CV_OUTPUT__FORMAT=json` sets `output.format`

use crate::io::OutputFormat;
use crate::source::{
    DeclarationFromPchMode, DiagnosticsMode, TUOptionsBuilder, TranslationUnitOption,
};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".clangview";
const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Maximum tracing level: error, warn, info, debug or trace
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub parsing: ParsingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ParsingConfig {
    /// Skip declarations that come from precompiled headers
    #[serde(default = "default_true")]
    pub exclude_pch_declarations: bool,

    /// Let libclang print diagnostics to stderr
    #[serde(default = "default_true")]
    pub diagnostics: bool,

    /// Compiler arguments used when none are given on the command line
    #[serde(default = "default_args")]
    pub default_args: Vec<String>,

    /// Translation-unit options, e.g. "skip_function_bodies"
    #[serde(default)]
    pub options: Vec<TranslationUnitOption>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Deepest AST level to print
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

fn default_version() -> u32 {
    1
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_args() -> Vec<String> {
    vec!["-x".to_string(), "c++".to_string()]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            debug: false,
            log_level: default_log_level(),
            parsing: ParsingConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            exclude_pch_declarations: true,
            diagnostics: true,
            default_args: default_args(),
            options: vec![],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Tree,
            max_depth: None,
        }
    }
}

impl ParsingConfig {
    pub fn pch_mode(&self) -> DeclarationFromPchMode {
        DeclarationFromPchMode::from_exclude_flag(self.exclude_pch_declarations)
    }

    pub fn diagnostics_mode(&self) -> DiagnosticsMode {
        DiagnosticsMode::from_flag(self.diagnostics)
    }

    pub fn tu_options(&self) -> TUOptionsBuilder {
        self.options.iter().copied().collect()
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));
        Self::figment(&config_path).extract().map_err(Box::new)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref()).extract().map_err(Box::new)
    }

    fn figment(config_path: &Path) -> Figment {
        // Double underscore separates nesting levels; single underscores
        // stay part of the field name
        let env = Env::prefixed("CV_")
            .map(|key| key.as_str().to_lowercase().replace("__", ".").into());
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_path))
            .merge(env)
    }

    /// Find `.clangview/settings.toml` searching from the current directory up to root
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        for ancestor in current.ancestors() {
            let config_dir = ancestor.join(CONFIG_DIR);
            if config_dir.is_dir() {
                return Some(config_dir.join(CONFIG_FILE));
            }
        }

        None
    }

    /// Check if a configuration file exists and parses
    pub fn check_init() -> Result<(), String> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));

        if !config_path.exists() {
            return Err("No configuration file found".to_string());
        }

        match std::fs::read_to_string(&config_path) {
            Ok(content) => {
                if let Err(e) = toml::from_str::<Settings>(&content) {
                    return Err(format!(
                        "Configuration file is corrupted: {e}\nRun 'clangview init --force' to regenerate."
                    ));
                }
            }
            Err(e) => {
                return Err(format!("Cannot read configuration file: {e}"));
            }
        }

        Ok(())
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Create a default settings file with helpful comments
    pub fn init_config_file(force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        Self::init_config_file_in(Path::new("."), force)
    }

    pub fn init_config_file_in(
        root: &Path,
        force: bool,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = root.join(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = r#"# clangview configuration

# Version of the configuration schema
version = 1

# Global debug mode
debug = false

# Maximum log level: error, warn, info, debug, trace
log_level = "warn"

[parsing]
# Skip declarations coming from precompiled headers
exclude_pch_declarations = true

# Let libclang print diagnostics while parsing
diagnostics = true

# Compiler arguments used when none are given after `--`
default_args = ["-x", "c++"]

# Translation-unit options. Available:
#   detailed_preprocessor_record, incomplete, precompiled_preamble,
#   cache_completion_results, for_serialization, chained_pch,
#   skip_function_bodies, include_brief_comments_in_code_completion
options = []

[output]
# tree, json or jsonl
format = "tree"

# Deepest AST level to print (unlimited when unset)
# max_depth = 4
"#;

        std::fs::write(&config_path, template)?;
        Ok(config_path)
    }
}
