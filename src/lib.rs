#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::core::engine::{parse_prompt, ExtractionEngine};
pub use crate::domain::model::{ComponentDescriptor, ComponentKind, PropertyBag, RawComponent};
pub use crate::domain::ports::Renderer;
pub use crate::render::{CodeEmitter, Preview, PreviewRenderer, Widget};
pub use crate::utils::error::{PromptUiError, Result};
