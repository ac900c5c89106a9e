//! CLI command handlers. Each command is in its own file.

mod completions;
mod encode;
mod merge;
mod presets;
mod sources;

pub use completions::run_completions;
pub use encode::run_encode;
pub use merge::run_merge;
pub use presets::run_presets;
