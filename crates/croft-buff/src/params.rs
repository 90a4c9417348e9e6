//! Validated activation parameters.

use croft_core::{BuffRecord, Tier};

/// The knobs of one buff activation, validated at construction.
///
/// Built via [`BuffParams::builder`]; an invalid combination never
/// reaches the registry.
#[derive(Clone, Debug, PartialEq)]
pub struct BuffParams {
    /// Ordinal rank of the buff.
    pub tier: Tier,
    /// Display name of the tier.
    pub label: String,
    /// Advertised growth-rate factor, finite and `>= 1.0`.
    pub multiplier: f64,
    /// Buff lifetime in seconds, `> 0`.
    pub duration_secs: u32,
    /// Minimum seconds between processing passes, `> 0`.
    pub interval_secs: u32,
    /// Per-position growth probability per pass, finite in `[0, 1]`.
    pub growth_chance: f64,
    /// Stages gained per successful growth step, `>= 1`.
    pub growth_amount: u8,
}

/// Builder for [`BuffParams`].
///
/// Required fields: `tier`, `label`.
pub struct BuffParamsBuilder {
    tier: Option<Tier>,
    label: Option<String>,
    multiplier: f64,
    duration_secs: u32,
    interval_secs: u32,
    growth_chance: f64,
    growth_amount: u8,
}

impl BuffParams {
    /// Create a new builder for configuring an activation.
    pub fn builder() -> BuffParamsBuilder {
        BuffParamsBuilder {
            tier: None,
            label: None,
            multiplier: 1.0,
            duration_secs: 600,
            interval_secs: 30,
            growth_chance: 0.25,
            growth_amount: 1,
        }
    }

    /// Materialize a [`BuffRecord`] with an expiry computed from `now_ms`.
    pub fn to_record(&self, now_ms: u64) -> BuffRecord {
        BuffRecord {
            tier: self.tier,
            label: self.label.clone(),
            multiplier: self.multiplier,
            expire_at_ms: now_ms + u64::from(self.duration_secs) * 1000,
            interval_secs: self.interval_secs,
            growth_chance: self.growth_chance,
            growth_amount: self.growth_amount,
        }
    }
}

impl BuffParamsBuilder {
    /// Set the buff tier (required).
    pub fn tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Set the tier's display label (required).
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the advertised multiplier (default: 1.0). Must be finite and `>= 1.0`.
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Set the buff lifetime in seconds (default: 600). Must be `> 0`.
    pub fn duration_secs(mut self, duration_secs: u32) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    /// Set the per-claim processing interval in seconds (default: 30).
    /// Must be `> 0`.
    pub fn interval_secs(mut self, interval_secs: u32) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    /// Set the per-position growth probability (default: 0.25). Must be
    /// finite and within `[0, 1]`.
    pub fn growth_chance(mut self, growth_chance: f64) -> Self {
        self.growth_chance = growth_chance;
        self
    }

    /// Set the stages gained per growth step (default: 1). Must be `>= 1`.
    pub fn growth_amount(mut self, growth_amount: u8) -> Self {
        self.growth_amount = growth_amount;
        self
    }

    /// Build the params, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `tier` or `label` is not set
    /// - `multiplier` is non-finite or `< 1.0`
    /// - `duration_secs` or `interval_secs` is zero
    /// - `growth_chance` is non-finite or outside `[0, 1]`
    /// - `growth_amount` is zero
    pub fn build(self) -> Result<BuffParams, String> {
        let tier = self.tier.ok_or_else(|| "tier is required".to_string())?;
        let label = self.label.ok_or_else(|| "label is required".to_string())?;

        if !self.multiplier.is_finite() || self.multiplier < 1.0 {
            return Err(format!(
                "multiplier must be finite and >= 1.0, got {}",
                self.multiplier
            ));
        }
        if self.duration_secs == 0 {
            return Err("duration_secs must be > 0".to_string());
        }
        if self.interval_secs == 0 {
            return Err("interval_secs must be > 0".to_string());
        }
        if !self.growth_chance.is_finite() || !(0.0..=1.0).contains(&self.growth_chance) {
            return Err(format!(
                "growth_chance must be within [0, 1], got {}",
                self.growth_chance
            ));
        }
        if self.growth_amount == 0 {
            return Err("growth_amount must be >= 1".to_string());
        }

        Ok(BuffParams {
            tier,
            label,
            multiplier: self.multiplier,
            duration_secs: self.duration_secs,
            interval_secs: self.interval_secs,
            growth_chance: self.growth_chance,
            growth_amount: self.growth_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_minimal() {
        let params = BuffParams::builder()
            .tier(Tier(1))
            .label("Basic")
            .build()
            .unwrap();
        assert_eq!(params.tier, Tier(1));
        assert_eq!(params.label, "Basic");
        assert_eq!(params.multiplier, 1.0);
        assert_eq!(params.growth_amount, 1);
    }

    #[test]
    fn builder_rejects_missing_tier() {
        let result = BuffParams::builder().label("Basic").build();
        assert!(result.unwrap_err().contains("tier"));
    }

    #[test]
    fn builder_rejects_sub_unit_multiplier() {
        let result = BuffParams::builder()
            .tier(Tier(1))
            .label("Basic")
            .multiplier(0.5)
            .build();
        assert!(result.unwrap_err().contains("multiplier"));
    }

    #[test]
    fn builder_rejects_nan_chance() {
        let result = BuffParams::builder()
            .tier(Tier(1))
            .label("Basic")
            .growth_chance(f64::NAN)
            .build();
        assert!(result.unwrap_err().contains("growth_chance"));
    }

    #[test]
    fn builder_rejects_chance_over_one() {
        let result = BuffParams::builder()
            .tier(Tier(1))
            .label("Basic")
            .growth_chance(1.5)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_rejects_zero_amount() {
        let result = BuffParams::builder()
            .tier(Tier(1))
            .label("Basic")
            .growth_amount(0)
            .build();
        assert!(result.unwrap_err().contains("growth_amount"));
    }

    #[test]
    fn record_expiry_from_duration() {
        let params = BuffParams::builder()
            .tier(Tier(2))
            .label("Greater")
            .duration_secs(600)
            .build()
            .unwrap();
        let record = params.to_record(1_000_000);
        assert_eq!(record.expire_at_ms, 1_600_000);
        assert_eq!(record.tier, Tier(2));
    }
}
