//! Global settings loaded from TOML, following the same OnceLock pattern as romaji config.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;

use crate::romaji::Limits;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub field: FieldSettings,
    pub enemies: EnemySettings,
    pub scoring: ScoringSettings,
    pub input: InputSettings,
    pub deck: DeckSettings,
}

impl Settings {
    /// Conversion ceilings derived from `[input]`.
    pub fn limits(&self) -> Limits {
        Limits {
            pending: self.input.pending_capacity,
            output_bytes: self.input.output_capacity,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldSettings {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnemySettings {
    pub max: usize,
    pub speed: f32,
    pub spawn_delay_ms: u64,
    pub meaning_duration_ms: u64,
}

impl EnemySettings {
    pub fn spawn_delay(&self) -> Duration {
        Duration::from_millis(self.spawn_delay_ms)
    }

    pub fn meaning_duration(&self) -> Duration {
        Duration::from_millis(self.meaning_duration_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    pub points_per_kill: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    pub max_romaji: usize,
    pub output_capacity: usize,
    pub pending_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeckSettings {
    pub max_cards: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }
    macro_rules! check_min {
        ($section:ident . $field:ident, $min:expr) => {
            if s.$section.$field <= $min {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: format!("must be greater than {}", $min),
                });
            }
        };
    }

    // Enemies spawn in [50, width - 50) and die past height - 50.
    check_min!(field.width, 100);
    check_min!(field.height, 50);

    check_positive!(enemies.max);
    check_positive!(enemies.spawn_delay_ms);
    check_positive!(enemies.meaning_duration_ms);
    if !s.enemies.speed.is_finite() || s.enemies.speed <= 0.0 {
        return Err(SettingsError::InvalidValue {
            field: "enemies.speed".to_string(),
            reason: "must be a positive number".to_string(),
        });
    }

    check_positive!(scoring.points_per_kill);

    check_positive!(input.max_romaji);
    check_positive!(input.output_capacity);
    check_positive!(input.pending_capacity);

    check_positive!(deck.max_cards);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_field(width: u32, height: u32) -> String {
        DEFAULT_SETTINGS_TOML
            .replace("width = 800", &format!("width = {width}"))
            .replace("height = 600", &format!("height = {height}"))
    }

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.field.width, 800);
        assert_eq!(s.field.height, 600);
        assert_eq!(s.enemies.max, 10);
        assert!((s.enemies.speed - 30.0).abs() < f32::EPSILON);
        assert_eq!(s.enemies.spawn_delay(), Duration::from_secs(6));
        assert_eq!(s.enemies.meaning_duration(), Duration::from_secs(2));
        assert_eq!(s.scoring.points_per_kill, 100);
        assert_eq!(s.input.max_romaji, 254);
        assert_eq!(s.deck.max_cards, 50);
        assert_eq!(s.limits(), Limits::default());
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[field]
width = 320
height = 240

[enemies]
max = 3
speed = 12.5
spawn_delay_ms = 1000
meaning_duration_ms = 500

[scoring]
points_per_kill = 10

[input]
max_romaji = 32
output_capacity = 64
pending_capacity = 4

[deck]
max_cards = 5
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.field.width, 320);
        assert_eq!(s.enemies.max, 3);
        assert_eq!(
            s.limits(),
            Limits {
                pending: 4,
                output_bytes: 64
            }
        );
    }

    #[test]
    fn error_narrow_field() {
        let err = parse_settings_toml(&with_field(100, 600)).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("field.width"));
    }

    #[test]
    fn error_short_field() {
        let err = parse_settings_toml(&with_field(800, 50)).unwrap_err();
        assert!(err.to_string().contains("field.height"));
    }

    #[test]
    fn error_zero_speed() {
        let toml = DEFAULT_SETTINGS_TOML.replace("speed = 30.0", "speed = 0.0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("enemies.speed"));
    }

    #[test]
    fn error_zero_max_enemies() {
        let toml = DEFAULT_SETTINGS_TOML.replace("max = 10", "max = 0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("enemies.max"));
    }

    #[test]
    fn error_zero_pending_capacity() {
        let toml = DEFAULT_SETTINGS_TOML.replace("pending_capacity = 9", "pending_capacity = 0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("input.pending_capacity"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[field]
width = 800
height = 600
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
