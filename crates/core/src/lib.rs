pub mod config;

pub use config::{
    env_or_default, env_var, AppConfigTrait, ConfigError, ConfigSource,
};
