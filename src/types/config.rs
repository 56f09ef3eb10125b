//! Configuration structures for the facility registry
//!
//! This module contains the registry configuration structure, CLI arguments and
//! validation logic used to control how the registry binary runs sessions.

use super::{OutputFormat, Principal};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Principal used for mutating commands that do not name a caller
pub const DEFAULT_CALLER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "facility-registry",
    version = "0.1.0",
    about = "Facility Registry - Replays parking facility registration commands",
    long_about = "Runs a script of facility registration commands (register, update, deactivate, reactivate, reads) against an in-memory registry and prints one contract-style response per command.

EXAMPLES:
    # Replay a JSON Lines script
    facility-registry --script commands.jsonl

    # Use a configuration file
    facility-registry --config config.json

    # Run mutating commands as a different caller by default
    facility-registry --script commands.jsonl --caller ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG

    # Generate configuration template
    facility-registry --print-config > my-config.json

    # Validate configuration without running
    facility-registry --config my-config.json --dry-run

    # Keep JSON log files alongside console output
    facility-registry --script commands.jsonl --verbose --log-dir logs

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Script of registry commands to replay
    #[arg(
        short,
        long,
        help = "Script of registry commands (.json array or .jsonl)",
        long_help = "Path to a script of registry commands. A .json file holds an array of commands; a .jsonl file holds one command per line."
    )]
    pub script: Option<String>,

    /// Default caller principal for mutating commands
    #[arg(
        long,
        help = "Default caller principal",
        long_help = "Principal used for mutating commands that do not name their own caller. Default: ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"
    )]
    pub caller: Option<String>,

    /// Output format for responses
    #[arg(
        long,
        help = "Output format (json or pretty)",
        long_help = "Output format for command responses. Supported formats: json, pretty. Default: json"
    )]
    pub output_format: Option<String>,

    /// Output path for the session report
    #[arg(long, help = "Output path for the session report JSON file")]
    pub report_output: Option<String>,

    /// Stop the session after the first error response
    #[arg(long, help = "Stop after the first command that returns an error code")]
    pub halt_on_error: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Directory for rolling JSON log files
    #[arg(
        long,
        help = "Also write daily rolling JSON logs to this directory",
        long_help = "Directory for daily rolling JSON log files (prefix: facility-registry). Console logging is unchanged."
    )]
    pub log_dir: Option<String>,

    /// Dry run mode - validate configuration and script without running
    #[arg(long, help = "Validate configuration and script without running")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Default caller principal for mutating commands
    pub default_caller: Option<String>,

    /// Script of registry commands to replay
    pub script: Option<String>,

    /// Output format for responses
    pub output_format: Option<String>,

    /// Output path for the session report
    pub report_output: Option<String>,

    /// Stop the session after the first error response
    pub halt_on_error: Option<bool>,
}

/// Configuration for a registry session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Default caller principal for mutating commands
    pub default_caller: String,

    /// Script of registry commands to replay
    pub script: Option<String>,

    /// Output format for responses
    pub output_format: String,

    /// Output path for the session report
    pub report_output: Option<String>,

    /// Stop the session after the first error response
    pub halt_on_error: bool,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for registry configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Default caller is not a valid principal
    #[error("Invalid default caller {value:?}: {reason}")]
    InvalidCaller {
        /// The rejected caller string
        value: String,
        /// Why the caller was rejected
        reason: String,
    },

    /// Output format is not recognised
    #[error("Unknown output format: {0} (supported: json, pretty)")]
    UnknownOutputFormat(String),
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_caller: DEFAULT_CALLER.to_string(),
            script: None,
            output_format: "json".to_string(),
            report_output: None,
            halt_on_error: false,
        }
    }
}

impl RegistryConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            default_caller: config_file.default_caller.unwrap_or(defaults.default_caller),
            script: config_file.script.or(defaults.script),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            report_output: config_file.report_output.or(defaults.report_output),
            halt_on_error: config_file.halt_on_error.unwrap_or(defaults.halt_on_error),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.caller {
            config.default_caller = value;
        }
        if let Some(value) = args.script {
            config.script = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.report_output {
            config.report_output = Some(value);
        }
        // A bare flag can only switch halting on
        if args.halt_on_error {
            config.halt_on_error = true;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.default_caller()?;
        self.get_output_format()?;
        Ok(())
    }

    /// Get the default caller as a principal
    pub fn default_caller(&self) -> Result<Principal, ConfigValidationError> {
        Principal::new(self.default_caller.as_str()).map_err(|e| {
            ConfigValidationError::InvalidCaller {
                value: self.default_caller.clone(),
                reason: e.to_string(),
            }
        })
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, ConfigValidationError> {
        self.output_format
            .parse()
            .map_err(|_| ConfigValidationError::UnknownOutputFormat(self.output_format.clone()))
    }
}
