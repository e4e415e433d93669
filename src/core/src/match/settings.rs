use crate::SettingsError;
use serde::{Deserialize, Serialize};

/// Tunable constants of a match. `Default` gives the standard 90 minute rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub minutes: u32,
    pub lineup_size: usize,
    pub substitution_limit: u32,
    /// Share of maximum endurance below which a starter gets replaced.
    pub fatigue_threshold: f64,
    pub goal_scale: f64,
    pub defense_offset: f64,
    /// How far one total must exceed the other to leave a balanced setup.
    pub tactic_margin: f64,
    pub fatigue_min: f64,
    pub fatigue_max: f64,
    pub offensive_fatigue_factor: f64,
    pub default_fatigue_factor: f64,
    pub summary_interval: u32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        MatchSettings {
            minutes: 90,
            lineup_size: 11,
            substitution_limit: 5,
            fatigue_threshold: 0.3,
            goal_scale: 0.015,
            defense_offset: 0.1,
            tactic_margin: 1.0,
            fatigue_min: 0.5,
            fatigue_max: 1.5,
            offensive_fatigue_factor: 1.2,
            default_fatigue_factor: 0.8,
            summary_interval: 15,
        }
    }
}

impl MatchSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: MatchSettings = serde_json::from_str(json)?;
        settings.validate()?;

        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let reals = [
            ("fatigue_threshold", self.fatigue_threshold),
            ("goal_scale", self.goal_scale),
            ("defense_offset", self.defense_offset),
            ("tactic_margin", self.tactic_margin),
            ("fatigue_min", self.fatigue_min),
            ("fatigue_max", self.fatigue_max),
            ("offensive_fatigue_factor", self.offensive_fatigue_factor),
            ("default_fatigue_factor", self.default_fatigue_factor),
        ];

        if let Some((field, value)) = reals.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SettingsError::Invalid(format!(
                "{} must be finite, got {}",
                field, value
            )));
        }

        if self.minutes == 0 {
            return Err(SettingsError::Invalid("minutes must be positive".to_string()));
        }

        if self.lineup_size == 0 {
            return Err(SettingsError::Invalid("lineup_size must be positive".to_string()));
        }

        if self.summary_interval == 0 {
            return Err(SettingsError::Invalid(
                "summary_interval must be positive".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.fatigue_threshold) {
            return Err(SettingsError::Invalid(format!(
                "fatigue_threshold {} is outside [0, 1]",
                self.fatigue_threshold
            )));
        }

        if !(self.fatigue_min < self.fatigue_max) || self.fatigue_min < 0.0 {
            return Err(SettingsError::Invalid(format!(
                "fatigue range [{}, {}) is empty or negative",
                self.fatigue_min, self.fatigue_max
            )));
        }

        if self.offensive_fatigue_factor < 0.0 || self.default_fatigue_factor < 0.0 {
            return Err(SettingsError::Invalid(
                "fatigue factors must not be negative".to_string(),
            ));
        }

        if !(self.defense_offset > 0.0) {
            return Err(SettingsError::Invalid(
                "defense_offset must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
