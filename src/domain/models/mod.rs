//! 领域实体

pub mod inputs;
pub mod platform;
pub mod target;

pub use inputs::ProjectInputs;
pub use platform::Platform;
pub use target::{Replacement, TemplateTarget};
