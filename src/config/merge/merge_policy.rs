//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("generator.max_retries", 50)?
        .set_default("generator.max_equipment", 3)?
        .set_default("generator.default_equipment", "reformer")?
        .set_default("generator.transition_policy", "sub_configuration")?
        .set_default("system.storage.store_path", ".cadence/store")
}
