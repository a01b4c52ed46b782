use crate::{model::GreenlightConfigV1, presets};
use anyhow::Context;

/// CLI-level overrides applied on top of file config.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
}

/// The effective policy after preset + config + overrides.
#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub profile: String,
    pub effective: greenlight_domain::policy::ScorePolicy,
}

pub fn parse_config_toml(text: &str) -> anyhow::Result<GreenlightConfigV1> {
    toml::from_str(text).context("invalid greenlight.toml")
}

pub fn resolve_config(
    cfg: GreenlightConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .or(cfg.profile)
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile);

    if let Some(scale) = cfg.penalty_scale {
        effective.penalty_scale = scale;
    }

    if let Some(weights) = cfg.weights {
        if let Some(w) = weights.critical {
            effective.weights.critical = w;
        }
        if let Some(w) = weights.high {
            effective.weights.high = w;
        }
        if let Some(w) = weights.medium {
            effective.weights.medium = w;
        }
        if let Some(w) = weights.low {
            effective.weights.low = w;
        }
        if let Some(w) = weights.info {
            effective.weights.info = w;
        }
    }

    effective
        .validate()
        .map_err(|reason| anyhow::anyhow!("invalid scoring policy: {reason}"))?;

    Ok(ResolvedConfig { profile, effective })
}
