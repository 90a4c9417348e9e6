//! Scheduler configuration and validation.

use std::error::Error;
use std::fmt;

/// Configuration for [`GrowthScheduler`](crate::GrowthScheduler).
///
/// Validated once at construction; an invalid configuration never
/// produces a scheduler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Host ticks between cadence invocations. At 20 ticks/second the
    /// default of 20 runs the cadence once per second.
    pub tick_interval_ticks: u32,
    /// Hard ceiling on positions mutated per cadence invocation, across
    /// all claims. This is the amortization knob: a world with more
    /// tracked positions takes more cadences to cover, never more work
    /// per tick.
    pub max_per_tick: usize,
    /// Whether to fire the cosmetic
    /// [`growth_effect`](croft_core::GrowableWorld::growth_effect) hook
    /// on successful growth.
    pub growth_effects: bool,
    /// Seed for the growth-chance RNG. Each cadence reseeds from
    /// `seed XOR host_tick`, so a run is reproducible from the
    /// configuration and tick numbers alone.
    pub seed: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ticks: 20,
            max_per_tick: 64,
            growth_effects: true,
            seed: 0,
        }
    }
}

impl SchedulerConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ticks == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.max_per_tick == 0 {
            return Err(ConfigError::ZeroDrainCap);
        }
        Ok(())
    }
}

/// Errors detected during [`SchedulerConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `tick_interval_ticks` is zero; the cadence would never fire.
    ZeroTickInterval,
    /// `max_per_tick` is zero; the drain phase could never make progress.
    ZeroDrainCap,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTickInterval => write!(f, "tick_interval_ticks must be at least 1"),
            Self::ZeroDrainCap => write!(f, "max_per_tick must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SchedulerConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_interval_rejected() {
        let config = SchedulerConfig {
            tick_interval_ticks: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));
    }

    #[test]
    fn zero_cap_rejected() {
        let config = SchedulerConfig {
            max_per_tick: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDrainCap));
    }
}
