//! Shield configuration, validation, and error types.
//!
//! [`ShieldConfig`] holds every tunable of one shield. Strict hosts call
//! [`validate()`](ShieldConfig::validate) and reject bad settings; the
//! engine itself always runs on [`sanitized()`](ShieldConfig::sanitized)
//! output, so a bad setting is clamped and logged rather than fatal.

use std::error::Error;
use std::fmt;

use aegis_geometry::{BatchBudget, GeometryConfig};
use serde::{Deserialize, Serialize};

// ── PowerMode ──────────────────────────────────────────────────────

/// How much power an active shield draws per tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PowerMode {
    /// A constant draw regardless of shield size.
    Flat {
        /// Watts drawn while active. Default: 600.
        watts: f64,
    },
    /// Draw proportional to the number of border cells.
    PerCell {
        /// Watts per border cell.
        watts_per_cell: f64,
    },
}

impl Default for PowerMode {
    fn default() -> Self {
        Self::Flat { watts: 600.0 }
    }
}

impl PowerMode {
    /// Power drawn by an active shield with `border_cells` wall cells.
    pub fn draw(&self, border_cells: usize) -> f64 {
        match *self {
            Self::Flat { watts } => watts,
            Self::PerCell { watts_per_cell } => border_cells as f64 * watts_per_cell,
        }
    }

    fn rate(&self) -> f64 {
        match *self {
            Self::Flat { watts } => watts,
            Self::PerCell { watts_per_cell } => watts_per_cell,
        }
    }

    fn with_rate(self, rate: f64) -> Self {
        match self {
            Self::Flat { .. } => Self::Flat { watts: rate },
            Self::PerCell { .. } => Self::PerCell {
                watts_per_cell: rate,
            },
        }
    }
}

// ── InterceptConfig ────────────────────────────────────────────────

/// Energy pricing of a single interception.
///
/// `cost = base_cost + damage * drain_fraction`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterceptConfig {
    /// Flat energy per intercept. Default: 6.
    pub base_cost: f64,
    /// Fraction of projectile damage added to the cost, in `[0, 1]`.
    /// Default: 0.5.
    pub drain_fraction: f64,
}

impl Default for InterceptConfig {
    fn default() -> Self {
        Self {
            base_cost: 6.0,
            drain_fraction: 0.5,
        }
    }
}

impl InterceptConfig {
    /// Energy needed to stop a projectile dealing `damage`.
    ///
    /// Non-finite or negative damage counts as zero; the result is never
    /// negative.
    pub fn cost(&self, damage: f64) -> f64 {
        let damage = if damage.is_finite() { damage.max(0.0) } else { 0.0 };
        (self.base_cost + damage * self.drain_fraction).max(0.0)
    }
}

// ── FailureConfig ──────────────────────────────────────────────────

/// Behaviour when an interception cannot be paid for.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FailureConfig {
    /// Ticks the shield stays down. `0` disables the failure path.
    /// Default: 5000.
    pub cooldown_ticks: u64,
    /// Floor of the overload effect radius. Default: 79.
    pub min_radius: f64,
    /// Share of each source's content lost on overload. Default: 0.05.
    pub feedback_fraction: f64,
}

impl Default for FailureConfig {
    fn default() -> Self {
        Self {
            cooldown_ticks: 5000,
            min_radius: 79.0,
            feedback_fraction: 0.05,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// A non-physical configuration value.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// An energy cost is negative.
    NegativeCost {
        /// Which field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// `drain_fraction` lies outside `[0, 1]`.
    DrainFractionOutOfRange {
        /// The rejected value.
        value: f64,
    },
    /// A power rate is negative.
    NegativePower {
        /// The rejected value.
        value: f64,
    },
    /// The overload radius floor is negative.
    NegativeRadius {
        /// The rejected value.
        value: f64,
    },
    /// A float field is NaN or infinite.
    NonFiniteValue {
        /// Which field.
        field: &'static str,
    },
    /// `feedback_fraction` lies outside `[0, 1]`.
    InvalidFeedbackFraction {
        /// The rejected value.
        value: f64,
    },
    /// `ticks_per_second` is not finite and positive.
    InvalidTickRate {
        /// The rejected value.
        value: f64,
    },
    /// `refresh_interval_ticks` is zero.
    ZeroRefreshInterval,
    /// The render batch budget cannot hold a cell.
    InvalidBatchBudget {
        /// Which limit is wrong.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeCost { field, value } => {
                write!(f, "{field} must be non-negative, got {value}")
            }
            Self::DrainFractionOutOfRange { value } => {
                write!(f, "drain_fraction must be in [0.0, 1.0], got {value}")
            }
            Self::NegativePower { value } => {
                write!(f, "power rate must be non-negative, got {value}")
            }
            Self::NegativeRadius { value } => {
                write!(f, "min_radius must be non-negative, got {value}")
            }
            Self::NonFiniteValue { field } => write!(f, "{field} must be finite"),
            Self::InvalidFeedbackFraction { value } => {
                write!(f, "feedback_fraction must be in [0.0, 1.0], got {value}")
            }
            Self::InvalidTickRate { value } => {
                write!(f, "ticks_per_second must be finite and positive, got {value}")
            }
            Self::ZeroRefreshInterval => write!(f, "refresh_interval_ticks must be at least 1"),
            Self::InvalidBatchBudget { reason } => write!(f, "invalid batch budget: {reason}"),
        }
    }
}

impl Error for ConfigError {}

// ── ShieldConfig ───────────────────────────────────────────────────

/// Complete configuration of one shield.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShieldConfig {
    /// Active power draw.
    pub power: PowerMode,
    /// Interception pricing.
    pub intercept: InterceptConfig,
    /// Overload behaviour.
    pub failure: FailureConfig,
    /// Ticks without a threat before an active shield drops. Default: 2000.
    pub activation_delay_ticks: u64,
    /// Geometry cadence in ticks. Default: 1200.
    pub refresh_interval_ticks: u64,
    /// Simulation rate, for human-readable durations. Default: 60.
    pub ticks_per_second: f64,
    /// Geometry pipeline options.
    pub geometry: GeometryConfig,
}

impl Default for ShieldConfig {
    fn default() -> Self {
        Self {
            power: PowerMode::default(),
            intercept: InterceptConfig::default(),
            failure: FailureConfig::default(),
            activation_delay_ticks: 2000,
            refresh_interval_ticks: 1200,
            ticks_per_second: 60.0,
            geometry: GeometryConfig::default(),
        }
    }
}

impl ShieldConfig {
    /// Check every value and report the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.check(false).1.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// A copy with every violation clamped into range, plus the list of
    /// corrections made (empty when the config was already valid).
    ///
    /// Negative values become zero, fractions are clamped into `[0, 1]`,
    /// a zero refresh interval becomes one, and non-finite values fall
    /// back to their defaults.
    pub fn sanitized(&self) -> (ShieldConfig, Vec<ConfigError>) {
        self.check(true)
    }

    fn check(&self, fix: bool) -> (ShieldConfig, Vec<ConfigError>) {
        let defaults = ShieldConfig::default();
        let mut out = *self;
        let mut errors = Vec::new();

        // 1. Power rate: finite and non-negative.
        let rate = self.power.rate();
        if !rate.is_finite() {
            errors.push(ConfigError::NonFiniteValue { field: "power" });
            if fix {
                out.power = defaults.power;
            }
        } else if rate < 0.0 {
            errors.push(ConfigError::NegativePower { value: rate });
            if fix {
                out.power = self.power.with_rate(0.0);
            }
        }

        // 2. Base cost: finite and non-negative.
        let base = self.intercept.base_cost;
        if !base.is_finite() {
            errors.push(ConfigError::NonFiniteValue {
                field: "intercept.base_cost",
            });
            if fix {
                out.intercept.base_cost = defaults.intercept.base_cost;
            }
        } else if base < 0.0 {
            errors.push(ConfigError::NegativeCost {
                field: "intercept.base_cost",
                value: base,
            });
            if fix {
                out.intercept.base_cost = 0.0;
            }
        }

        // 3. Drain fraction in [0, 1].
        let drain = self.intercept.drain_fraction;
        if !drain.is_finite() {
            errors.push(ConfigError::NonFiniteValue {
                field: "intercept.drain_fraction",
            });
            if fix {
                out.intercept.drain_fraction = defaults.intercept.drain_fraction;
            }
        } else if !(0.0..=1.0).contains(&drain) {
            errors.push(ConfigError::DrainFractionOutOfRange { value: drain });
            if fix {
                out.intercept.drain_fraction = drain.clamp(0.0, 1.0);
            }
        }

        // 4. Radius floor: finite and non-negative.
        let radius = self.failure.min_radius;
        if !radius.is_finite() {
            errors.push(ConfigError::NonFiniteValue {
                field: "failure.min_radius",
            });
            if fix {
                out.failure.min_radius = defaults.failure.min_radius;
            }
        } else if radius < 0.0 {
            errors.push(ConfigError::NegativeRadius { value: radius });
            if fix {
                out.failure.min_radius = 0.0;
            }
        }

        // 5. Feedback fraction in [0, 1].
        let feedback = self.failure.feedback_fraction;
        if !feedback.is_finite() || !(0.0..=1.0).contains(&feedback) {
            errors.push(ConfigError::InvalidFeedbackFraction { value: feedback });
            if fix {
                out.failure.feedback_fraction = if feedback.is_finite() {
                    feedback.clamp(0.0, 1.0)
                } else {
                    defaults.failure.feedback_fraction
                };
            }
        }

        // 6. Tick rate finite and positive.
        let tps = self.ticks_per_second;
        if !tps.is_finite() || tps <= 0.0 {
            errors.push(ConfigError::InvalidTickRate { value: tps });
            if fix {
                out.ticks_per_second = defaults.ticks_per_second;
            }
        }

        // 7. Refresh cadence at least one tick.
        if self.refresh_interval_ticks == 0 {
            errors.push(ConfigError::ZeroRefreshInterval);
            if fix {
                out.refresh_interval_ticks = 1;
            }
        }

        // 8. Batch budget must describe a real mesh.
        let budget = self.geometry.batch;
        if budget.vertices_per_cell == 0 {
            errors.push(ConfigError::InvalidBatchBudget {
                reason: "vertices_per_cell must be at least 1".to_string(),
            });
            if fix {
                out.geometry.batch.vertices_per_cell = BatchBudget::default().vertices_per_cell;
            }
        }
        if budget.vertex_ceiling < out.geometry.batch.vertices_per_cell {
            errors.push(ConfigError::InvalidBatchBudget {
                reason: format!(
                    "vertex_ceiling ({}) cannot hold one cell",
                    budget.vertex_ceiling
                ),
            });
            if fix {
                out.geometry.batch.vertex_ceiling = BatchBudget::default().vertex_ceiling;
            }
        }

        (out, errors)
    }
}
