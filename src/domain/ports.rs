use crate::domain::model::ComponentDescriptor;

/// Consumer of an extracted descriptor list.
///
/// Renderers never see the prompt text; the descriptor list is the whole
/// contract between the engine and its outputs.
pub trait Renderer {
    type Output;

    fn render(&self, components: &[ComponentDescriptor]) -> Self::Output;
}
