/// Scaffolding domain layer: template rendering, root guard, target resolution, file writing.
pub mod errors;
pub mod guard;
pub mod render;
pub mod target;
pub mod writer;

pub use errors::ScaffoldError;
pub use guard::{Guard, GuardMode};
pub use render::{RenderedComponent, TemplateKind, render};
pub use target::{component_dir, display_relative, resolve_root};
pub use writer::{WrittenFile, planned_files, write_component};
