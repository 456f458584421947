use crate::utils::error::{PromptUiError, Result};
use crate::utils::validation::{validate_path, Validate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "prompt-ui")]
#[command(about = "Turn a UI description into component descriptors, a preview, or React code")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the extracted component descriptors as JSON
    Extract(PromptSource),
    /// Print generated React source for the prompt
    Code(PromptSource),
    /// Print a plain-text preview of the generated components
    Preview(PromptSource),
    /// Generate React source from a JSON descriptor list
    Emit {
        /// JSON file holding an array of {kind, properties} objects
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// Where the prompt text comes from: argument, file, or stdin.
#[derive(Debug, Clone, Default, Args)]
pub struct PromptSource {
    /// Prompt text; read from stdin when neither this nor --file is given
    pub prompt: Option<String>,

    /// Read the prompt from a file
    #[arg(short, long, conflicts_with = "prompt")]
    pub file: Option<PathBuf>,
}

impl PromptSource {
    pub fn read_prompt(&self) -> Result<String> {
        if let Some(prompt) = &self.prompt {
            return Ok(prompt.clone());
        }

        if let Some(path) = &self.file {
            tracing::debug!("reading prompt from {}", path.display());
            return Ok(std::fs::read_to_string(path)?);
        }

        tracing::debug!("reading prompt from stdin");
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

impl Validate for PromptSource {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.file {
            validate_path("file", &path.to_string_lossy())?;
        }
        Ok(())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", &path.to_string_lossy())?;
        }

        match &self.command {
            Command::Extract(source) | Command::Code(source) | Command::Preview(source) => {
                source.validate()
            }
            Command::Emit { input } => validate_path("input", &input.to_string_lossy()),
        }
    }
}

impl CliConfig {
    pub fn prompt_source(&self) -> Option<&PromptSource> {
        match &self.command {
            Command::Extract(source) | Command::Code(source) | Command::Preview(source) => {
                Some(source)
            }
            Command::Emit { .. } => None,
        }
    }

    /// Prompt text for the prompt-driven subcommands. Blank text is returned
    /// as-is; it renders as the empty output.
    pub fn prompt_text(&self) -> Result<String> {
        let source = self.prompt_source().ok_or(PromptUiError::MissingInputError)?;
        source.read_prompt()
    }
}
