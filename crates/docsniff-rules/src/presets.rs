//! Rule presets for common configurations.

use crate::{MissingClassComment, MissingFunctionComment};
use docsniff_core::RuleBox;
use thiserror::Error;

/// Error returned for an unrecognised preset name.
#[derive(Debug, Error)]
#[error("Unknown preset `{name}`. Valid presets: all, classes, functions")]
pub struct UnknownPreset {
    /// The rejected name.
    pub name: String,
}

/// Preset configurations for docsniff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    /// Every built-in rule.
    #[default]
    All,
    /// Type declarations only.
    Classes,
    /// Function declarations only.
    Functions,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::All => all_rules(),
            Self::Classes => vec![Box::new(MissingClassComment::new())],
            Self::Functions => vec![Box::new(MissingFunctionComment::new())],
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "classes" => Ok(Self::Classes),
            "functions" => Ok(Self::Functions),
            other => Err(UnknownPreset {
                name: other.to_string(),
            }),
        }
    }
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(MissingClassComment::new()),
        Box::new(MissingFunctionComment::new()),
    ]
}

/// Looks up a built-in rule by name or code.
#[must_use]
pub fn rule_by_name(name: &str) -> Option<RuleBox> {
    all_rules()
        .into_iter()
        .find(|rule| rule.name() == name || rule.code() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_rules() {
        assert_eq!(Preset::All.rules().len(), 2);
        assert_eq!(Preset::Classes.rules()[0].name(), "missing-class-comment");
        assert_eq!(
            Preset::Functions.rules()[0].name(),
            "missing-function-comment"
        );
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("classes".parse::<Preset>().ok(), Some(Preset::Classes));
        let err = "strict".parse::<Preset>().unwrap_err();
        assert_eq!(err.name, "strict");
    }

    #[test]
    fn test_rule_by_name() {
        assert!(rule_by_name("missing-function-comment").is_some());
        assert!(rule_by_name("MissingClassComment").is_some());
        assert!(rule_by_name("no-such-rule").is_none());
    }
}
