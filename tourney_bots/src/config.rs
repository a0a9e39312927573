//! Bot configuration management.
//!
//! Consolidates the optional JSON settings file and environment overrides into
//! one validated [`BotSettings`].

use crate::bot::{
    decision::PolicyConfig,
    knobs::{AdaptiveKnobs, KnobsConfig},
};
use serde::{Deserialize, Serialize};
use std::{fs, io, path::PathBuf};

/// Environment variable naming a JSON settings file.
pub const CONFIG_FILE_VAR: &str = "BOT_CONFIG_FILE";

/// Complete bot configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotSettings {
    /// Decision policy constants
    pub policy: PolicyConfig,
    /// How knobs react to results and table size
    pub knobs: KnobsConfig,
    /// Knobs a freshly created bot starts with
    pub initial_knobs: AdaptiveKnobs,
}

impl BotSettings {
    /// Load settings from `BOT_CONFIG_FILE` (or `file_override`) and then
    /// apply individual `BOT_*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns error if the settings file cannot be read or parsed
    pub fn from_env(file_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        let file = file_override
            .or_else(|| std::env::var(CONFIG_FILE_VAR).ok().map(PathBuf::from));

        let mut settings = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let policy = &mut settings.policy;
        policy.preflop_raise_min_bb =
            parse_env_or("BOT_PREFLOP_RAISE_MIN_BB", policy.preflop_raise_min_bb);
        policy.preflop_raise_max_bb =
            parse_env_or("BOT_PREFLOP_RAISE_MAX_BB", policy.preflop_raise_max_bb);
        policy.loose_call_probability =
            parse_env_or("BOT_LOOSE_CALL_PROBABILITY", policy.loose_call_probability);
        policy.semi_bluff_probability =
            parse_env_or("BOT_SEMI_BLUFF_PROBABILITY", policy.semi_bluff_probability);
        policy.bluff_probability = parse_env_or("BOT_BLUFF_PROBABILITY", policy.bluff_probability);
        policy.value_bet_pot_fraction =
            parse_env_or("BOT_VALUE_BET_POT_FRACTION", policy.value_bet_pot_fraction);
        policy.gate_before_classification = parse_env_or(
            "BOT_GATE_BEFORE_CLASSIFICATION",
            policy.gate_before_classification,
        );

        let knobs = &mut settings.initial_knobs;
        knobs.raise_frequency = parse_env_or("BOT_RAISE_FREQUENCY", knobs.raise_frequency);
        knobs.play_frequency = parse_env_or("BOT_PLAY_FREQUENCY", knobs.play_frequency);

        Ok(settings)
    }

    pub fn from_file(path: PathBuf) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::ReadFile {
            path: path.clone(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        let policy = &self.policy;

        for (var, p) in [
            ("BOT_LOOSE_CALL_PROBABILITY", policy.loose_call_probability),
            ("BOT_SEMI_BLUFF_PROBABILITY", policy.semi_bluff_probability),
            ("BOT_BLUFF_PROBABILITY", policy.bluff_probability),
            ("BOT_RAISE_FREQUENCY", self.initial_knobs.raise_frequency),
            ("BOT_PLAY_FREQUENCY", self.initial_knobs.play_frequency),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::Invalid {
                    var: var.to_string(),
                    reason: format!("Must be a probability in [0, 1], got {p}"),
                });
            }
        }

        for (var, multiple) in [
            ("BOT_PREFLOP_RAISE_MIN_BB", policy.preflop_raise_min_bb),
            ("BOT_PREFLOP_RAISE_MAX_BB", policy.preflop_raise_max_bb),
        ] {
            if !(multiple.is_finite() && multiple > 0.0) {
                return Err(ConfigError::Invalid {
                    var: var.to_string(),
                    reason: format!("Must be a finite number greater than 0, got {multiple}"),
                });
            }
        }

        if policy.preflop_raise_max_bb < policy.preflop_raise_min_bb {
            return Err(ConfigError::Invalid {
                var: "BOT_PREFLOP_RAISE_MAX_BB".to_string(),
                reason: format!(
                    "Must be at least the minimum raise ({} BB)",
                    policy.preflop_raise_min_bb
                ),
            });
        }

        for (var, fraction) in [
            ("BOT_VALUE_BET_POT_FRACTION", policy.value_bet_pot_fraction),
            ("semi_bluff_pot_fraction", policy.semi_bluff_pot_fraction),
            ("bluff_pot_fraction", policy.bluff_pot_fraction),
        ] {
            if !(fraction.is_finite() && fraction > 0.0) {
                return Err(ConfigError::Invalid {
                    var: var.to_string(),
                    reason: format!("Must be a finite number greater than 0, got {fraction}"),
                });
            }
        }

        if policy.pair_call_pot_divisor == 0 {
            return Err(ConfigError::Invalid {
                var: "pair_call_pot_divisor".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let knobs = &self.knobs;
        for (var, (lo, hi)) in [
            ("knobs.raise_bounds", knobs.raise_bounds),
            ("knobs.play_bounds", knobs.play_bounds),
        ] {
            if !(0.0 <= lo && lo <= hi && hi <= 1.0) {
                return Err(ConfigError::Invalid {
                    var: var.to_string(),
                    reason: format!("Must satisfy 0 <= low <= high <= 1, got ({lo}, {hi})"),
                });
            }
        }

        for (var, step) in [
            ("knobs.win_raise_step", knobs.win_raise_step),
            ("knobs.win_play_step", knobs.win_play_step),
            ("knobs.loss_raise_step", knobs.loss_raise_step),
            ("knobs.loss_play_step", knobs.loss_play_step),
        ] {
            if !(step.is_finite() && step >= 0.0) {
                return Err(ConfigError::Invalid {
                    var: var.to_string(),
                    reason: format!("Must be a finite non-negative step, got {step}"),
                });
            }
        }

        for (var, (raise, play)) in [
            ("knobs.short_table_preset", knobs.short_table_preset),
            ("knobs.full_table_preset", knobs.full_table_preset),
        ] {
            if !((0.0..=1.0).contains(&raise) && (0.0..=1.0).contains(&play)) {
                return Err(ConfigError::Invalid {
                    var: var.to_string(),
                    reason: format!("Must be probabilities in [0, 1], got ({raise}, {play})"),
                });
            }
        }

        if knobs.short_table_max_players >= knobs.full_table_min_players {
            return Err(ConfigError::Invalid {
                var: "knobs.short_table_max_players".to_string(),
                reason: format!(
                    "Must be below the full-table threshold ({})",
                    knobs.full_table_min_players
                ),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },

    #[error("Cannot read settings file {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("Malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::HandCategory;
    use serial_test::serial;

    const OVERRIDE_VARS: [&str; 10] = [
        CONFIG_FILE_VAR,
        "BOT_PREFLOP_RAISE_MIN_BB",
        "BOT_PREFLOP_RAISE_MAX_BB",
        "BOT_LOOSE_CALL_PROBABILITY",
        "BOT_SEMI_BLUFF_PROBABILITY",
        "BOT_BLUFF_PROBABILITY",
        "BOT_VALUE_BET_POT_FRACTION",
        "BOT_GATE_BEFORE_CLASSIFICATION",
        "BOT_RAISE_FREQUENCY",
        "BOT_PLAY_FREQUENCY",
    ];

    fn clear_env() {
        for var in OVERRIDE_VARS {
            // SAFETY: env tests are serialized
            unsafe { std::env::remove_var(var) };
        }
    }

    fn set_env(key: &str, value: &str) {
        // SAFETY: env tests are serialized
        unsafe { std::env::set_var(key, value) };
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid {
            var: "BOT_BLUFF_PROBABILITY".to_string(),
            reason: "Must be a probability".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("BOT_BLUFF_PROBABILITY"));
        assert!(msg.contains("Must be a probability"));
    }

    #[test]
    fn test_defaults_validate() {
        assert!(BotSettings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = BotSettings::from_json_str(
            r#"{"policy": {"strong_hand_floor": "pair", "value_bet_pot_fraction": 0.75}}"#,
        )
        .unwrap();
        assert_eq!(settings.policy.strong_hand_floor, HandCategory::Pair);
        assert_eq!(settings.policy.value_bet_pot_fraction, 0.75);
        assert_eq!(settings.policy.preflop_raise_min_bb, 2.5);
        assert_eq!(settings.knobs, KnobsConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = BotSettings::from_json_str("{policy:").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_validation_probability_out_of_range() {
        let mut settings = BotSettings::default();
        settings.policy.bluff_probability = 1.5;
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { ref var, .. } if var == "BOT_BLUFF_PROBABILITY"
        ));
    }

    #[test]
    fn test_config_validation_raise_range_inverted() {
        let mut settings = BotSettings::default();
        settings.policy.preflop_raise_min_bb = 4.0;
        settings.policy.preflop_raise_max_bb = 3.0;
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { ref var, .. } if var == "BOT_PREFLOP_RAISE_MAX_BB"
        ));
    }

    #[test]
    fn test_config_validation_nan_multiplier() {
        let mut settings = BotSettings::default();
        settings.policy.preflop_raise_min_bb = f64::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_divisor_and_bounds() {
        let mut settings = BotSettings::default();
        settings.policy.pair_call_pot_divisor = 0;
        assert!(settings.validate().is_err());

        let mut settings = BotSettings::default();
        settings.knobs.play_bounds = (0.9, 0.6);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_bad_knob_steps_and_presets() {
        let mut settings = BotSettings::default();
        settings.knobs.win_raise_step = -0.02;
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { ref var, .. } if var == "knobs.win_raise_step"
        ));

        let mut settings = BotSettings::default();
        settings.knobs.loss_play_step = f64::NAN;
        assert!(settings.validate().is_err());

        let mut settings = BotSettings::default();
        settings.knobs.full_table_preset = (0.45, 1.2);
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { ref var, .. } if var == "knobs.full_table_preset"
        ));
    }

    #[test]
    fn test_config_validation_rejects_infinite_sizes() {
        let mut settings = BotSettings::default();
        settings.policy.bluff_pot_fraction = f64::INFINITY;
        assert!(settings.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_infinite_raise_is_rejected() {
        clear_env();
        set_env("BOT_PREFLOP_RAISE_MAX_BB", "inf");
        let settings = BotSettings::from_env(None).unwrap();
        clear_env();

        assert_eq!(settings.policy.preflop_raise_max_bb, f64::INFINITY);
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { ref var, .. } if var == "BOT_PREFLOP_RAISE_MAX_BB"
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let settings = BotSettings::from_env(None).unwrap();
        assert_eq!(settings, BotSettings::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_env("BOT_PREFLOP_RAISE_MIN_BB", "3");
        set_env("BOT_PREFLOP_RAISE_MAX_BB", "3");
        set_env("BOT_GATE_BEFORE_CLASSIFICATION", "false");
        set_env("BOT_PLAY_FREQUENCY", "1.0");
        set_env("BOT_BLUFF_PROBABILITY", "not-a-number");

        let settings = BotSettings::from_env(None).unwrap();
        clear_env();

        assert_eq!(settings.policy.preflop_raise_min_bb, 3.0);
        assert_eq!(settings.policy.preflop_raise_max_bb, 3.0);
        assert!(!settings.policy.gate_before_classification);
        assert_eq!(settings.initial_knobs.play_frequency, 1.0);
        // Unparseable values fall back
        assert_eq!(settings.policy.bluff_probability, 0.25);
        assert!(settings.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_file_then_overrides() {
        clear_env();
        let path = std::env::temp_dir().join(format!("tourney_bots_{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"policy": {"bluff_probability": 0.1, "loose_call_probability": 0.0}}"#,
        )
        .unwrap();
        set_env(CONFIG_FILE_VAR, path.to_str().unwrap());
        set_env("BOT_BLUFF_PROBABILITY", "0.3");

        let settings = BotSettings::from_env(None).unwrap();
        clear_env();
        fs::remove_file(&path).unwrap();

        assert_eq!(settings.policy.loose_call_probability, 0.0);
        assert_eq!(settings.policy.bluff_probability, 0.3);
    }

    #[test]
    #[serial]
    fn test_from_env_missing_file() {
        clear_env();
        let err = BotSettings::from_env(Some(PathBuf::from("/nonexistent/bot.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }
}
