use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Grouping axis for the category views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// One category per vulnerability type.
    BugType,
    /// One category per bug bounty program.
    Program,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BugType => write!(f, "bug_type"),
            Self::Program => write!(f, "program"),
        }
    }
}

impl FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bug_type" => Ok(Self::BugType),
            "program" => Ok(Self::Program),
            other => Err(format!("unknown category type '{}' (expected bug_type or program)", other)),
        }
    }
}

/// A browsable category derived from one dictionary table entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Stable synthetic key, `vuln_<index>` or `program_<index>`.
    #[serde(rename = "filename")]
    pub identifier: String,
    /// Short description for display, already truncated.
    pub preview: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parses_wire_names() {
        assert_eq!("bug_type".parse::<CategoryKind>().unwrap(), CategoryKind::BugType);
        assert_eq!("program".parse::<CategoryKind>().unwrap(), CategoryKind::Program);
        assert!("vendor".parse::<CategoryKind>().is_err());
    }

    #[test]
    fn test_kind_display_round_trips() {
        for kind in [CategoryKind::BugType, CategoryKind::Program] {
            assert_eq!(kind.to_string().parse::<CategoryKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_identifier_serializes_as_filename() {
        let category = Category {
            name: "XSS".to_string(),
            identifier: "vuln_0".to_string(),
            preview: "Vulnerability type: XSS...".to_string(),
        };
        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(value["filename"], "vuln_0");
        assert!(value.get("identifier").is_none());
    }
}
