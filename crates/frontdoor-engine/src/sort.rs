//! Secondary ordering of the filtered collection.
//!
//! Every ordering is a stable sort: entries with equal keys keep the relative
//! order they had after filtering. Entries missing the key sort last.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::CatalogItem;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Source order
    #[default]
    None,
    /// Name, case-insensitive ascending
    Name,
    /// View count, descending
    Views,
    /// Favorite count, descending
    Favorites,
    /// Most recently updated first
    Updated,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::None,
        SortKey::Name,
        SortKey::Views,
        SortKey::Favorites,
        SortKey::Updated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Name => "name",
            SortKey::Views => "views",
            SortKey::Favorites => "favorites",
            SortKey::Updated => "updated",
        }
    }

    /// Next key in cycle order (used by the interactive browser)
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub(crate) fn compare<T: CatalogItem + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        match self {
            SortKey::None => Ordering::Equal,
            SortKey::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
            SortKey::Views => descending_present_first(a.views(), b.views()),
            SortKey::Favorites => descending_present_first(a.favorite_count(), b.favorite_count()),
            SortKey::Updated => ascending_present_first(
                a.last_updated().and_then(relative_age),
                b.last_updated().and_then(relative_age),
            ),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == needle)
            .ok_or_else(|| format!("unknown sort key '{}'", s))
    }
}

fn descending_present_first<K: Ord>(a: Option<K>, b: Option<K>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn ascending_present_first<K: Ord>(a: Option<K>, b: Option<K>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Parse a relative-time label ("2 days ago", "an hour ago", "yesterday",
/// "just now") into the age it describes.
///
/// Months count as 30 days and years as 365. Returns `None` for anything else,
/// including negative amounts.
pub fn relative_age(label: &str) -> Option<TimeDelta> {
    let label = label.trim().to_ascii_lowercase();
    match label.as_str() {
        "just now" | "now" => return Some(TimeDelta::zero()),
        "yesterday" => return Some(TimeDelta::days(1)),
        _ => {}
    }

    let mut parts = label.split_whitespace();
    let amount = match parts.next()? {
        "a" | "an" | "one" => 1,
        n => n.parse::<i64>().ok().filter(|n| *n >= 0)?,
    };
    let unit = parts.next()?;
    if parts.next()? != "ago" || parts.next().is_some() {
        return None;
    }

    let unit = unit.strip_suffix('s').unwrap_or(unit);
    let age = match unit {
        "second" | "sec" => TimeDelta::try_seconds(amount)?,
        "minute" | "min" => TimeDelta::try_minutes(amount)?,
        "hour" | "hr" => TimeDelta::try_hours(amount)?,
        "day" => TimeDelta::try_days(amount)?,
        "week" => TimeDelta::try_weeks(amount)?,
        "month" => TimeDelta::try_days(amount.checked_mul(30)?)?,
        "year" => TimeDelta::try_days(amount.checked_mul(365)?)?,
        _ => return None,
    };
    Some(age)
}
