use crate::config::{CliConfig, Command, TomlConfig};
use crate::core::engine::ExtractionEngine;
use crate::domain::model::RawComponent;
use crate::domain::ports::Renderer;
use crate::render::{CodeEmitter, PreviewRenderer};
use crate::utils::error::Result;

/// Runs one subcommand and returns what should go to stdout.
///
/// A blank prompt is not an error: it yields `[]`, the empty code marker, or
/// the empty preview message.
pub fn run(cli: &CliConfig, config: &TomlConfig) -> Result<String> {
    let engine = ExtractionEngine::new();
    let emitter = CodeEmitter::new(config.component_name());

    match &cli.command {
        Command::Extract(_) => {
            let components = engine.extract(&cli.prompt_text()?);
            tracing::info!("extracted {} component(s)", components.len());
            let json = if config.pretty_output() {
                serde_json::to_string_pretty(&components)?
            } else {
                serde_json::to_string(&components)?
            };
            Ok(json)
        }
        Command::Code(_) => {
            let components = engine.extract(&cli.prompt_text()?);
            tracing::info!("generating code for {} component(s)", components.len());
            Ok(emitter.render(&components))
        }
        Command::Preview(_) => {
            let components = engine.extract(&cli.prompt_text()?);
            Ok(PreviewRenderer.render(&components).to_string())
        }
        Command::Emit { input } => {
            tracing::info!("loading descriptors from {}", input.display());
            let content = std::fs::read_to_string(input)?;
            let components: Vec<RawComponent> = serde_json::from_str(&content)?;
            Ok(emitter.emit_raw(&components))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::code::EMPTY_OUTPUT;
    use crate::render::defaults::EMPTY_PREVIEW;
    use crate::PromptUiError;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = CliConfig::try_parse_from(args).unwrap();
        run(&cli, &TomlConfig::default())
    }

    #[test]
    fn test_blank_prompt_prints_empty_renderings() {
        assert_eq!(run_args(&["prompt-ui", "code", "  "]).unwrap(), EMPTY_OUTPUT);
        assert_eq!(run_args(&["prompt-ui", "preview", "\n"]).unwrap(), EMPTY_PREVIEW);
        assert_eq!(run_args(&["prompt-ui", "extract", " "]).unwrap(), "[]");
    }

    #[test]
    fn test_extract_prints_descriptor_json() {
        let output = run_args(&["prompt-ui", "extract", "button with label 'Go'"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "kind": "button", "properties": { "label": "Go" } }])
        );
    }

    #[test]
    fn test_code_uses_configured_component_name() {
        let cli = CliConfig::try_parse_from(["prompt-ui", "code", "a hero"]).unwrap();
        let config = TomlConfig::from_toml_str("[code]\ncomponent_name = \"Landing\"\n").unwrap();
        assert!(run(&cli, &config).unwrap().ends_with("export default Landing;"));
    }

    #[test]
    fn test_emit_reads_descriptor_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"[{ "kind": "carousel" }]"#).unwrap();
        let path = file.path().to_string_lossy().to_string();

        let output = run_args(&["prompt-ui", "emit", "--input", &path]).unwrap();
        assert!(output.contains("    <!-- Unknown component type: carousel -->\n"));
    }

    #[test]
    fn test_emit_rejects_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        let path = file.path().to_string_lossy().to_string();

        assert!(matches!(
            run_args(&["prompt-ui", "emit", "--input", &path]),
            Err(PromptUiError::SerializationError(_))
        ));
    }
}
