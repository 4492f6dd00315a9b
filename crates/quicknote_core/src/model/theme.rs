//! Visual theme preference.
//!
//! # Responsibility
//! - Represent the persisted light/dark choice.
//! - Convert to and from the plain-string storage encoding.
//!
//! # Invariants
//! - An absent stored value means "follow the system preference" and is
//!   modeled as `None` by callers, never as a third variant.

/// Persisted visual theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    /// Storage encoding used by the theme key-value slot.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses the storage encoding. Unknown values return `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite choice, used by a toggle affordance.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ThemePreference;

    #[test]
    fn parse_roundtrips_both_encodings() {
        for theme in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(ThemePreference::parse(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(ThemePreference::parse("solarized"), None);
        assert_eq!(ThemePreference::parse(""), None);
    }

    #[test]
    fn toggled_flips_between_variants() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
    }
}
