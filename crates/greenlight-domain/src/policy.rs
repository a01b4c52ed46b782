use greenlight_types::Severity;

/// Per-severity penalty weights for the health scorer.
///
/// Weights are a tunable policy, not a fixed constant: any assignment is
/// valid as long as weights are non-negative and non-increasing as severity
/// decreases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeverityWeights {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
    pub low: f64,
    pub info: f64,
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self {
            critical: 1.0,
            high: 0.6,
            medium: 0.3,
            low: 0.1,
            info: 0.0,
        }
    }
}

impl SeverityWeights {
    /// Weight for one severity. Total: accepts every enumerated value.
    pub fn weight(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
            Severity::Info => self.info,
        }
    }

    fn in_rank_order(&self) -> [f64; 5] {
        [self.critical, self.high, self.medium, self.low, self.info]
    }
}

/// Effective scoring policy for one evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct ScorePolicy {
    pub weights: SeverityWeights,
    /// Points subtracted per unit of weight. One critical finding at the
    /// default scale costs 10 points.
    pub penalty_scale: f64,
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self {
            weights: SeverityWeights::default(),
            penalty_scale: 10.0,
        }
    }
}

impl ScorePolicy {
    /// Reject weights that would break the scorer's monotonicity contract.
    pub fn validate(&self) -> Result<(), String> {
        if self.penalty_scale < 0.0 {
            return Err(format!("penalty_scale must be non-negative, got {}", self.penalty_scale));
        }
        let ordered = self.weights.in_rank_order();
        for w in ordered {
            if w < 0.0 || !w.is_finite() {
                return Err(format!("severity weights must be finite and non-negative, got {w}"));
            }
        }
        for pair in ordered.windows(2) {
            if pair[1] > pair[0] {
                return Err(format!(
                    "severity weights must be non-increasing by rank: {} > {}",
                    pair[1], pair[0]
                ));
            }
        }
        Ok(())
    }
}
