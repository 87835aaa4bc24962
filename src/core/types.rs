use serde::{Deserialize, Serialize};

/// Matching strategy the simulator ran with, classified from the raw
/// `Automaton Mode:` label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutomatonMode {
    Nfa,
    Dfa,
    Efa,
    /// Pushdown automaton (RNA secondary structure)
    Pda,
    /// No mode reported; the engine picked one itself
    Auto,
    Other(String),
}

impl AutomatonMode {
    /// Classify a mode label case-insensitively. An empty label is `Auto`.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        match label.to_ascii_lowercase().as_str() {
            "" | "auto" => Self::Auto,
            "nfa" => Self::Nfa,
            "dfa" => Self::Dfa,
            "efa" => Self::Efa,
            "pda" => Self::Pda,
            _ => Self::Other(label.to_string()),
        }
    }

    #[must_use]
    pub fn is_pushdown(&self) -> bool {
        matches!(self, Self::Pda)
    }
}

impl std::fmt::Display for AutomatonMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nfa => write!(f, "NFA"),
            Self::Dfa => write!(f, "DFA"),
            Self::Efa => write!(f, "EFA"),
            Self::Pda => write!(f, "PDA"),
            Self::Auto => write!(f, "auto"),
            Self::Other(label) => write!(f, "{label}"),
        }
    }
}

/// Outcome reported on a validation block's `-> Result:` line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    Valid,
    Invalid,
}

impl ValidationResult {
    /// Exact, case-sensitive match on `Valid` / `Invalid`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Valid" => Some(Self::Valid),
            "Invalid" => Some(Self::Invalid),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid => write!(f, "Valid"),
            Self::Invalid => write!(f, "Invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse_is_case_insensitive() {
        assert_eq!(AutomatonMode::parse("PDA"), AutomatonMode::Pda);
        assert_eq!(AutomatonMode::parse("pda"), AutomatonMode::Pda);
        assert_eq!(AutomatonMode::parse(" Dfa "), AutomatonMode::Dfa);
        assert_eq!(AutomatonMode::parse(""), AutomatonMode::Auto);
        assert_eq!(
            AutomatonMode::parse("Hybrid"),
            AutomatonMode::Other("Hybrid".to_string())
        );
    }

    #[test]
    fn test_only_pda_is_pushdown() {
        assert!(AutomatonMode::parse("PdA").is_pushdown());
        assert!(!AutomatonMode::parse("NFA").is_pushdown());
        assert!(!AutomatonMode::parse("PDA2").is_pushdown());
    }

    #[test]
    fn test_validation_result_exact_match() {
        assert_eq!(ValidationResult::parse("Valid"), Some(ValidationResult::Valid));
        assert_eq!(
            ValidationResult::parse("Invalid"),
            Some(ValidationResult::Invalid)
        );
        assert_eq!(ValidationResult::parse("valid"), None);
        assert_eq!(ValidationResult::parse("Valid!"), None);
    }
}
