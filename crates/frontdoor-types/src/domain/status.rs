use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

label_enum! {
    /// Health family used by the cross-domain asset listings
    HealthStatus, "health status" {
        Operational => "Operational",
        Warning => "Warning",
        Critical => "Critical",
    }
}

label_enum! {
    /// Lifecycle family used by the domain directories and KPI cards
    LifecycleStatus, "lifecycle status" {
        Live => "Live",
        Updating => "Updating",
        Deprecated => "Deprecated",
    }
}

/// Status of a listing.
///
/// Catalogs use one of two unrelated families. They are kept apart: a filter on
/// `Live` never matches an `Operational` entry. Members compare by equality
/// only; there is no ordering between them.
///
/// Serialized as the bare label (`"Live"`, `"Critical"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Status {
    Health(HealthStatus),
    Lifecycle(LifecycleStatus),
}

/// Presentation tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Good,
    Attention,
    Bad,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Health(s) => s.label(),
            Status::Lifecycle(s) => s.label(),
        }
    }

    /// Badge tone for this status.
    ///
    /// | Health      | Lifecycle  | Tone      |
    /// |-------------|------------|-----------|
    /// | Operational | Live       | Good      |
    /// | Warning     | Updating   | Attention |
    /// | Critical    | Deprecated | Bad       |
    pub fn tone(&self) -> StatusTone {
        match self {
            Status::Health(HealthStatus::Operational) | Status::Lifecycle(LifecycleStatus::Live) => {
                StatusTone::Good
            }
            Status::Health(HealthStatus::Warning)
            | Status::Lifecycle(LifecycleStatus::Updating) => StatusTone::Attention,
            Status::Health(HealthStatus::Critical)
            | Status::Lifecycle(LifecycleStatus::Deprecated) => StatusTone::Bad,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        if let Ok(health) = s.parse::<HealthStatus>() {
            return Ok(Status::Health(health));
        }
        s.parse::<LifecycleStatus>()
            .map(Status::Lifecycle)
            .map_err(|_| crate::Error::unknown("status", s))
    }
}

impl From<HealthStatus> for Status {
    fn from(s: HealthStatus) -> Self {
        Status::Health(s)
    }
}

impl From<LifecycleStatus> for Status {
    fn from(s: LifecycleStatus) -> Self {
        Status::Lifecycle(s)
    }
}
