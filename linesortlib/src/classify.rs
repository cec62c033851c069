//! Line classification.
//!
//! Every non-blank, trimmed line falls into exactly one of three categories:
//!
//! - **integer**: `^[+-]?\d+$`, parsed as an `i64`
//! - **float**: `^[+-]?\d*\.\d+([Ee][+-]?\d+)?$`, parsed as an `f64`
//! - **string**: everything else, kept verbatim
//!
//! Rules are tried in that order and the first match wins. A line that has the
//! shape of a number but fails to parse (an integer outside the `i64` range,
//! or a float too large to be finite) is reported as [`Outcome::Invalid`]
//! instead of falling through to the next rule.
//!
//! Digits are ASCII only; `\d` in these docs means `[0-9]`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static INTEGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer pattern is valid"));

static FLOAT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?[0-9]*\.[0-9]+([Ee][+-]?[0-9]+)?$").expect("float pattern is valid")
});

/// The three line categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Integer,
    Float,
    String,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Integer => "integer",
            Category::Float => "float",
            Category::String => "string",
        };
        f.write_str(name)
    }
}

/// A classified line with its parsed payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn category(&self) -> Category {
        match self {
            Value::Integer(_) => Category::Integer,
            Value::Float(_) => Category::Float,
            Value::Text(_) => Category::String,
        }
    }
}

/// Result of running a rule against a line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The line was matched and parsed
    Classified(Value),
    /// The line matched a numeric shape but could not be parsed
    Invalid(Category),
}

impl Outcome {
    /// Label used in the per-line trace, e.g. `integer` or `invalid float`.
    pub fn label(&self) -> String {
        match self {
            Outcome::Classified(value) => value.category().to_string(),
            Outcome::Invalid(category) => format!("invalid {category}"),
        }
    }
}

/// A single classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Optionally signed run of decimal digits
    Integer,
    /// Optionally signed decimal with a mandatory point and optional exponent
    Float,
    /// Catch-all
    Text,
}

impl Rule {
    /// The category this rule produces.
    pub fn category(self) -> Category {
        match self {
            Rule::Integer => Category::Integer,
            Rule::Float => Category::Float,
            Rule::Text => Category::String,
        }
    }

    /// Whether the line has the shape this rule accepts.
    pub fn matches(self, line: &str) -> bool {
        match self {
            Rule::Integer => INTEGER_PATTERN.is_match(line),
            Rule::Float => FLOAT_PATTERN.is_match(line),
            Rule::Text => true,
        }
    }

    /// Apply the rule: `None` if the line does not match, otherwise the
    /// parsed value or an invalid outcome.
    pub fn apply(self, line: &str) -> Option<Outcome> {
        if !self.matches(line) {
            return None;
        }
        let outcome = match self {
            Rule::Integer => match line.parse::<i64>() {
                Ok(n) => Outcome::Classified(Value::Integer(n)),
                Err(_) => Outcome::Invalid(Category::Integer),
            },
            Rule::Float => match line.parse::<f64>() {
                Ok(x) if x.is_finite() => Outcome::Classified(Value::Float(x)),
                _ => Outcome::Invalid(Category::Float),
            },
            Rule::Text => Outcome::Classified(Value::Text(line.to_string())),
        };
        Some(outcome)
    }
}

/// An ordered list of rules; the first rule that matches decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::standard()
    }
}

impl Classifier {
    /// Integer, then float, then string.
    pub fn standard() -> Self {
        Self {
            rules: vec![Rule::Integer, Rule::Float, Rule::Text],
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classify a trimmed, non-blank line.
    pub fn classify(&self, line: &str) -> Outcome {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(line))
            .unwrap_or_else(|| Outcome::Classified(Value::Text(line.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> Outcome {
        Classifier::standard().classify(line)
    }

    #[test]
    fn test_integers() {
        assert_eq!(classify("42"), Outcome::Classified(Value::Integer(42)));
        assert_eq!(classify("-7"), Outcome::Classified(Value::Integer(-7)));
        assert_eq!(classify("+15"), Outcome::Classified(Value::Integer(15)));
        assert_eq!(classify("007"), Outcome::Classified(Value::Integer(7)));
        assert_eq!(
            classify("-9223372036854775808"),
            Outcome::Classified(Value::Integer(i64::MIN))
        );
    }

    #[test]
    fn test_integer_overflow_is_invalid() {
        assert_eq!(
            classify("9223372036854775808"),
            Outcome::Invalid(Category::Integer)
        );
        assert_eq!(
            classify("99999999999999999999999"),
            Outcome::Invalid(Category::Integer)
        );
    }

    #[test]
    fn test_floats() {
        assert_eq!(classify("2.75"), Outcome::Classified(Value::Float(2.75)));
        assert_eq!(classify(".5"), Outcome::Classified(Value::Float(0.5)));
        assert_eq!(classify("-.5"), Outcome::Classified(Value::Float(-0.5)));
        assert_eq!(classify("+2.5"), Outcome::Classified(Value::Float(2.5)));
        assert_eq!(classify("1.5e3"), Outcome::Classified(Value::Float(1500.0)));
        assert_eq!(classify("1.5E-2"), Outcome::Classified(Value::Float(0.015)));
        assert_eq!(classify("5.0"), Outcome::Classified(Value::Float(5.0)));
    }

    #[test]
    fn test_float_overflow_is_invalid() {
        assert_eq!(classify("1.0e999"), Outcome::Invalid(Category::Float));
        assert_eq!(classify("-.5E400"), Outcome::Invalid(Category::Float));
        assert_eq!(classify("1.0e999").label(), "invalid float");
        // underflow rounds to zero and stays a float
        assert_eq!(classify("1.0e-999"), Outcome::Classified(Value::Float(0.0)));
    }

    #[test]
    fn test_non_ascii_digits_are_strings() {
        assert_eq!(
            classify("\u{0663}\u{0664}"),
            Outcome::Classified(Value::Text("\u{0663}\u{0664}".to_string()))
        );
    }

    #[test]
    fn test_strings() {
        for line in ["hello", "12a", "-", "+", "5.", "1e5", "1.2.3", "3.14 apples", "nan", "inf"]
        {
            assert_eq!(
                classify(line),
                Outcome::Classified(Value::Text(line.to_string())),
                "{line:?} should be a string"
            );
        }
    }

    #[test]
    fn test_integer_rule_never_matches_decimal_point() {
        assert!(!Rule::Integer.matches("5.0"));
        assert!(Rule::Float.matches("5.0"));
        assert!(Rule::Integer.apply("5.0").is_none());
        assert_eq!(Rule::Float.category(), Category::Float);
    }

    #[test]
    fn test_rule_order() {
        let classifier = Classifier::standard();
        assert_eq!(
            classifier.rules(),
            &[Rule::Integer, Rule::Float, Rule::Text]
        );
        // "42" is also accepted by the catch-all; the integer rule must win
        assert!(Rule::Text.matches("42"));
        assert_eq!(classifier.classify("42").label(), "integer");
    }

    #[test]
    fn test_labels() {
        assert_eq!(classify("1").label(), "integer");
        assert_eq!(classify("1.0").label(), "float");
        assert_eq!(classify("x").label(), "string");
        assert_eq!(
            Outcome::Invalid(Category::Float).label(),
            "invalid float"
        );
    }
}
