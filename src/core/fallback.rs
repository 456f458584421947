use crate::core::catalog::{CARD_FALLBACK_TITLE, HERO_FALLBACK_TITLE, HERO_FALLBACK_WORDS};
use crate::domain::model::{ComponentDescriptor, ComponentKind, PropertyBag};

/// Default component for a prompt that named no known kind.
///
/// Returns `None` for whitespace-only text. The untrimmed prompt is echoed
/// into the subtitle or content.
pub fn select_fallback(text: &str) -> Option<ComponentDescriptor> {
    if text.trim().is_empty() {
        return None;
    }

    let lowered = text.to_lowercase();
    let descriptor = if HERO_FALLBACK_WORDS.iter().any(|w| lowered.contains(w)) {
        ComponentDescriptor::new(
            ComponentKind::Hero,
            PropertyBag::new()
                .with("title", HERO_FALLBACK_TITLE)
                .with("subtitle", text),
        )
    } else {
        ComponentDescriptor::new(
            ComponentKind::Card,
            PropertyBag::new()
                .with("title", CARD_FALLBACK_TITLE)
                .with("content", text),
        )
    };

    tracing::debug!("no component keyword found, falling back to {}", descriptor.kind());
    Some(descriptor)
}
