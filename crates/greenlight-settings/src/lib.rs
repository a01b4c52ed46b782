//! Configuration: `greenlight.toml` parsing, presets, and policy resolution.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{GreenlightConfigV1, WeightsConfig};
pub use presets::preset;
pub use resolve::{parse_config_toml, resolve_config, Overrides, ResolvedConfig};
