mod env_overrides;
mod gateway;
mod loader;
mod observability;
mod runner;
mod types;

pub use gateway::GatewayConfig;
pub use observability::ObservabilityConfig;
pub use runner::RunnerConfig;
pub use types::Config;
