use serde::Deserialize;
use serde_json::Value;

/// One state message from the harness.
///
/// Any valid JSON value is accepted. The game only ever attaches meaning to
/// the `config` object of the first message; everything else is opaque.
#[derive(Clone, Debug, Deserialize)]
pub struct Tick(pub Value);

impl Tick {
    /// Extracts the board dimensions, if this tick carries them.
    ///
    /// Returns `None` unless the tick is an object with an object-valued
    /// `config` key. Within `config`, missing or non-numeric dimension
    /// fields are read as zero.
    pub fn config(&self) -> Option<GameConfig> {
        let config = self.0.as_object()?.get("config")?.as_object()?;
        Some(GameConfig {
            width: dimension(config.get("width")),
            height: dimension(config.get("height")),
        })
    }
}

/// The board dimensions announced by the harness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i64,
    pub height: i64,
}

// Truncates toward zero.
fn dimension(value: Option<&Value>) -> i64 {
    value.and_then(Value::as_f64).map_or(0, |num| num as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(s: &str) -> Tick {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn config_with_numeric_dimensions() {
        assert_eq!(
            tick(r#"{"config":{"width":10,"height":8}}"#).config(),
            Some(GameConfig {
                width: 10,
                height: 8
            })
        );
    }

    #[test]
    fn non_numeric_dimension_reads_as_zero() {
        assert_eq!(
            tick(r#"{"config":{"width":"abc","height":3}}"#).config(),
            Some(GameConfig {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn missing_dimensions_read_as_zero() {
        assert_eq!(
            tick(r#"{"config":{}}"#).config(),
            Some(GameConfig {
                width: 0,
                height: 0
            })
        );
    }

    #[test]
    fn fractional_dimensions_truncate_toward_zero() {
        assert_eq!(
            tick(r#"{"config":{"width":7.9,"height":-2.5}}"#).config(),
            Some(GameConfig {
                width: 7,
                height: -2
            })
        );
    }

    #[test]
    fn no_config_for_unexpected_shapes() {
        assert_eq!(tick(r#"{"foo":"bar"}"#).config(), None);
        assert_eq!(tick(r#"{"config":[1,2]}"#).config(), None);
        assert_eq!(tick(r#"[{"config":{}}]"#).config(), None);
        assert_eq!(tick("42").config(), None);
    }

    #[test]
    fn any_json_value_is_a_valid_tick() {
        for line in ["{}", "[]", "42", r#""state""#, "null", "true"] {
            assert!(serde_json::from_str::<Tick>(line).is_ok());
        }
    }
}
