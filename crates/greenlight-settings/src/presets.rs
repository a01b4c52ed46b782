use greenlight_domain::policy::{ScorePolicy, SeverityWeights};

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything finer-grained belongs in repo
/// config overrides.
pub fn preset(profile: &str) -> ScorePolicy {
    match profile {
        "lenient" => lenient_profile(),
        // default
        _ => strict_profile(),
    }
}

fn strict_profile() -> ScorePolicy {
    ScorePolicy::default()
}

fn lenient_profile() -> ScorePolicy {
    // Half-weight penalties: the same findings cost half the points.
    ScorePolicy {
        weights: SeverityWeights {
            critical: 0.5,
            high: 0.3,
            medium: 0.15,
            low: 0.05,
            info: 0.0,
        },
        penalty_scale: 10.0,
    }
}
