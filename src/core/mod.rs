pub mod catalog;
pub mod detector;
pub mod engine;
pub mod extractor;
pub mod fallback;

pub use crate::domain::model::{ComponentDescriptor, ComponentKind, PropertyBag, RawComponent};
pub use crate::domain::ports::Renderer;
