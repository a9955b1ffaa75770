use serde::Deserialize;

use super::error::ScenarioError;

/// A span of time in minutes.
///
/// Deserializes from a bare number (minutes) or a humantime string such as
/// `"1h 36m"` or `"30s"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(try_from = "DurationValue")]
pub struct Minutes(pub f64);

#[derive(Deserialize)]
#[serde(untagged)]
enum DurationValue {
    Number(f64),
    Text(String),
}

impl TryFrom<DurationValue> for Minutes {
    type Error = ScenarioError;

    fn try_from(value: DurationValue) -> Result<Self, Self::Error> {
        match value {
            DurationValue::Number(n) => Ok(Minutes(n)),
            DurationValue::Text(s) => parse_minutes(&s),
        }
    }
}

pub fn parse_minutes(s: &str) -> Result<Minutes, ScenarioError> {
    let s = s.trim();
    if let Ok(n) = s.parse::<f64>() {
        return Ok(Minutes(n));
    }
    humantime::parse_duration(s)
        .map(|d| Minutes(d.as_secs_f64() / 60.0))
        .map_err(|e| ScenarioError::Duration(format!("{s:?}: {e}")))
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("96m", 96.0)]
    #[case("1h 36m", 96.0)]
    #[case("30s", 0.5)]
    #[case("1day", 1440.0)]
    #[case(" 12.5 ", 12.5)]
    fn parses(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_minutes(input).unwrap(), Minutes(expected));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_minutes("soon"),
            Err(ScenarioError::Duration(_))
        ));
    }

    #[test]
    fn from_yaml_number_or_text() {
        let values: Vec<Minutes> = serde_yaml::from_str("[96, 2.5, \"90m\", 1h]").unwrap();
        assert_eq!(
            values,
            vec![Minutes(96.0), Minutes(2.5), Minutes(90.0), Minutes(60.0)]
        );
    }
}
