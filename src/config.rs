mod channel_config;
mod config_value;

pub use channel_config::*;
pub use config_value::*;
