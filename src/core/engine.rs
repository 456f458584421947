use crate::core::detector::detect;
use crate::core::extractor::{patterns, PropertyPatterns};
use crate::core::fallback::select_fallback;
use crate::domain::model::ComponentDescriptor;

/// Turns prompt text into an ordered component list.
///
/// Holds only a reference to the shared, read-only pattern set, so it is
/// `Copy` and can be used from any number of threads at once.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionEngine {
    patterns: &'static PropertyPatterns,
}

impl Default for ExtractionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionEngine {
    pub fn new() -> Self {
        Self {
            patterns: patterns(),
        }
    }

    /// One descriptor per detected kind in priority order, or the single
    /// fallback descriptor. Empty only for whitespace-only text.
    pub fn extract(&self, text: &str) -> Vec<ComponentDescriptor> {
        let detected = detect(text);
        tracing::debug!(
            "detected {} component kind(s): {:?}",
            detected.count(),
            detected.iter().map(|k| k.as_str()).collect::<Vec<_>>()
        );

        let components: Vec<ComponentDescriptor> = detected
            .iter()
            .map(|kind| ComponentDescriptor::new(kind, self.patterns.extract_all(text, kind)))
            .collect();

        if !components.is_empty() {
            return components;
        }

        select_fallback(text).into_iter().collect()
    }
}

/// Convenience wrapper around [`ExtractionEngine::extract`].
pub fn parse_prompt(text: &str) -> Vec<ComponentDescriptor> {
    ExtractionEngine::new().extract(text)
}
