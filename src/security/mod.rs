pub mod allowlist;
mod defaults;

pub use allowlist::{AllowList, base_verb};
pub use defaults::default_allowed_commands;
