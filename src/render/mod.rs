pub mod code;
pub mod defaults;
pub mod preview;

pub use code::CodeEmitter;
pub use preview::{Preview, PreviewRenderer, Widget};
