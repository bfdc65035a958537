use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target case convention for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CaseStyle {
    #[default]
    #[serde(rename = "camel", alias = "camelCase")]
    Camel,
    #[serde(rename = "kebab", alias = "kebab-case")]
    Kebab,
    #[serde(rename = "dot", alias = "dot.case")]
    Dot,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 3] = [CaseStyle::Camel, CaseStyle::Kebab, CaseStyle::Dot];
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "camel" | "camelcase" | "camel-case" | "camel_case" => Ok(CaseStyle::Camel),
            "kebab" | "kebabcase" | "kebab-case" | "kebab_case" => Ok(CaseStyle::Kebab),
            "dot" | "dotcase" | "dot.case" | "dot-case" | "dot_case" => Ok(CaseStyle::Dot),
            _ => Err(format!("Unknown case style: {}", s)),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStyle::Camel => write!(f, "camelCase"),
            CaseStyle::Kebab => write!(f, "kebab-case"),
            CaseStyle::Dot => write!(f, "dot.case"),
        }
    }
}
