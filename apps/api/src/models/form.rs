use serde::Deserialize;
use serde_json::Value;

/// A numeric form field as the browser sends it: a JSON number, or the raw
/// string from an `<input>`, or anything else a client might post.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormNumber {
    Number(f64),
    Text(String),
    Other(Value),
}

impl FormNumber {
    /// The field's value if it is (or parses to) a finite number.
    pub fn as_finite(&self) -> Option<f64> {
        let value = match self {
            FormNumber::Number(n) => *n,
            FormNumber::Text(s) => s.trim().parse::<f64>().ok()?,
            FormNumber::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for FormNumber {
    fn from(n: f64) -> Self {
        FormNumber::Number(n)
    }
}

#[cfg(test)]
impl From<&str> for FormNumber {
    fn from(s: &str) -> Self {
        FormNumber::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> FormNumber {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_json_integer_is_number() {
        assert_eq!(parse("150000").as_finite(), Some(150000.0));
    }

    #[test]
    fn test_numeric_string_parses() {
        assert_eq!(parse(r#"" 6.5 ""#).as_finite(), Some(6.5));
    }

    #[test]
    fn test_empty_string_is_not_numeric() {
        assert_eq!(parse(r#""""#).as_finite(), None);
    }

    #[test]
    fn test_text_is_not_numeric() {
        assert_eq!(parse(r#""six""#).as_finite(), None);
    }

    #[test]
    fn test_non_finite_strings_are_rejected() {
        assert_eq!(FormNumber::from("NaN").as_finite(), None);
        assert_eq!(FormNumber::from("inf").as_finite(), None);
        assert_eq!(FormNumber::from("-infinity").as_finite(), None);
    }

    #[test]
    fn test_other_json_values_are_not_numeric() {
        assert_eq!(parse("true").as_finite(), None);
        assert_eq!(parse("null").as_finite(), None);
        assert_eq!(parse("[1]").as_finite(), None);
    }
}
