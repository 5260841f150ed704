//! Row classification for raw export lines

use serde::{Deserialize, Serialize};

/// What a single raw line is, decided from its leading separators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    /// Empty line, or a separator-only placeholder; dropped
    Blank,
    /// Primary record line: first field empty, second field holds the name
    Unit,
    /// Structural line (tier/section header); passed through verbatim
    Marker,
    /// Three or more leading separators with content further out; dropped
    Filler,
}

/// Classify a raw line.
///
/// The decision only looks at the run of separators at the start of the
/// trimmed line:
/// - empty or separator-only -> `Blank`
/// - exactly one leading separator -> `Unit` (",OrcGrunt,...")
/// - none or two -> `Marker` ("Tier 1,,," or ",,note")
/// - three or more -> `Filler`
pub fn classify(line: &str, separator: char) -> RowKind {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.chars().all(|c| c == separator) {
        return RowKind::Blank;
    }

    let leading = trimmed.chars().take_while(|&c| c == separator).count();
    match leading {
        1 => RowKind::Unit,
        0 | 2 => RowKind::Marker,
        _ => RowKind::Filler,
    }
}

/// The text before the first separator, or the whole line if there is none.
///
/// This is the value a property continuation line contributes to its
/// combined record.
pub fn first_field(line: &str, separator: char) -> &str {
    let trimmed = line.trim();
    trimmed.split(separator).next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_blank() {
        assert_eq!(classify("", ','), RowKind::Blank);
        assert_eq!(classify("   ", ','), RowKind::Blank);
        assert_eq!(classify(",,,,,,,,,,,", ','), RowKind::Blank);
        assert_eq!(classify(",", ','), RowKind::Blank);
    }

    #[test]
    fn test_classify_unit() {
        assert_eq!(classify(",OrcGrunt", ','), RowKind::Unit);
        assert_eq!(classify(",OrcGrunt,100,2", ','), RowKind::Unit);
        // Surrounding whitespace does not change the decision
        assert_eq!(classify("  ,OrcGrunt  ", ','), RowKind::Unit);
    }

    #[test]
    fn test_classify_marker() {
        assert_eq!(classify("Tier 1,,,,,,,,,,,", ','), RowKind::Marker);
        assert_eq!(classify("Melee,,,", ','), RowKind::Marker);
        // Two empty leading fields still count as a marker
        assert_eq!(classify(",,note", ','), RowKind::Marker);
    }

    #[test]
    fn test_classify_filler() {
        assert_eq!(classify(",,,orphaned", ','), RowKind::Filler);
        assert_eq!(classify(",,,,x", ','), RowKind::Filler);
    }

    #[test]
    fn test_classify_other_separator() {
        assert_eq!(classify(";OrcGrunt", ';'), RowKind::Unit);
        assert_eq!(classify(";;;;;", ';'), RowKind::Blank);
        assert_eq!(classify("Tier 1;;;", ';'), RowKind::Marker);
    }

    #[test]
    fn test_first_field() {
        assert_eq!(first_field("Melee,,,", ','), "Melee");
        assert_eq!(first_field("Light", ','), "Light");
        assert_eq!(first_field(",second", ','), "");
        assert_eq!(first_field("  Heavy,,  ", ','), "Heavy");
        assert_eq!(first_field("", ','), "");
    }
}
