use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A facet catalog entries can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Domain,
    Subdomain,
    /// Dashboard or Explore; named `type` on the wire
    #[serde(rename = "type")]
    Kind,
    Status,
    Environment,
    Access,
    Owner,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::Domain,
        Dimension::Subdomain,
        Dimension::Kind,
        Dimension::Status,
        Dimension::Environment,
        Dimension::Access,
        Dimension::Owner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Domain => "domain",
            Dimension::Subdomain => "subdomain",
            Dimension::Kind => "type",
            Dimension::Status => "status",
            Dimension::Environment => "environment",
            Dimension::Access => "access",
            Dimension::Owner => "owner",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        if needle == "kind" {
            return Ok(Dimension::Kind);
        }
        Dimension::ALL
            .into_iter()
            .find(|d| d.as_str() == needle)
            .ok_or_else(|| crate::Error::unknown("dimension", s))
    }
}

/// Selection for one dimension: the `all` sentinel or one concrete label.
///
/// Concrete values are compared against entry labels by exact equality. A
/// value that no entry carries is legal and simply selects nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterValue {
    #[default]
    All,
    Is(String),
}

impl FilterValue {
    /// Matched exactly, so a facet value spelled `All` stays selectable.
    pub const ALL_SENTINEL: &'static str = "all";

    pub fn is(value: impl Into<String>) -> Self {
        FilterValue::Is(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            FilterValue::All => None,
            FilterValue::Is(v) => Some(v),
        }
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        if s == Self::ALL_SENTINEL {
            FilterValue::All
        } else {
            FilterValue::Is(s)
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::from(s.to_string())
    }
}

impl From<FilterValue> for String {
    fn from(v: FilterValue) -> Self {
        match v {
            FilterValue::All => FilterValue::ALL_SENTINEL.to_string(),
            FilterValue::Is(s) => s,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::All => f.write_str(Self::ALL_SENTINEL),
            FilterValue::Is(v) => f.write_str(v),
        }
    }
}
