//! Read-only content registries: events, fundraisers, sports fixtures, and
//! the site profile.
//!
//! All registries are bundled into the binary as JSON and parsed once at
//! startup. Nothing here is ever mutated after loading.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::Dated;
use crate::catalog::Catalog;
use crate::types::{EventId, FixtureId, FundraiserId, Price};

const SAMPLE_EVENTS: &str = include_str!("../content/events.json");
const SAMPLE_FUNDRAISERS: &str = include_str!("../content/fundraisers.json");
const SAMPLE_SPORTS: &str = include_str!("../content/sports.json");
const SAMPLE_PROFILE: &str = include_str!("../content/profile.json");

/// Errors loading bundled content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid {0} content: {1}")]
    Parse(&'static str, #[source] serde_json::Error),
    #[error("duplicate id: {0}")]
    DuplicateId(String),
    #[error("negative price for product {0}")]
    NegativePrice(String),
}

/// Badge tone used when rendering categories and statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Default,
    Good,
    Warn,
    Cool,
}

impl Tone {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Good => "good",
            Self::Warn => "warn",
            Self::Cool => "cool",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of event a calendar entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    #[serde(rename = "School Event")]
    SchoolEvent,
    Fundraiser,
    Sports,
}

impl EventCategory {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SchoolEvent => "School Event",
            Self::Fundraiser => "Fundraiser",
            Self::Sports => "Sports",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Sports => Tone::Warn,
            Self::Fundraiser => Tone::Good,
            Self::SchoolEvent => Tone::Cool,
        }
    }
}

/// Where a fundraiser is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundraiserStatus {
    Scheduled,
    Planning,
    #[serde(rename = "Design Phase")]
    DesignPhase,
}

impl FundraiserStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Planning => "Planning",
            Self::DesignPhase => "Design Phase",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Scheduled => Tone::Good,
            Self::Planning => Tone::Cool,
            Self::DesignPhase => Tone::Warn,
        }
    }
}

/// Team level for a sports fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamLevel {
    Varsity,
    #[serde(rename = "JV")]
    JuniorVarsity,
}

impl TeamLevel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Varsity => "Varsity",
            Self::JuniorVarsity => "JV",
        }
    }
}

/// A school calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    /// Free-form local time, e.g. "2:15 PM" or "4:00 PM - 8:00 PM".
    pub time: String,
    pub location: String,
    pub category: EventCategory,
    pub description: String,
}

/// A class fundraiser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fundraiser {
    pub id: FundraiserId,
    pub title: String,
    pub date: NaiveDate,
    pub goal: Price,
    pub status: FundraiserStatus,
    pub details: String,
}

/// A scheduled game or meet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportsFixture {
    pub id: FixtureId,
    pub sport: String,
    pub matchup: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub level: TeamLevel,
}

impl Dated for Event {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// School branding and contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    pub school_name: String,
    pub short_name: String,
    pub tagline: String,
    pub locale_line: String,
    pub phone: String,
    pub email: String,
}

/// Everything the site reads: the catalog plus every content registry.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub profile: SiteProfile,
    pub catalog: Catalog,
    pub events: Vec<Event>,
    pub fundraisers: Vec<Fundraiser>,
    pub sports: Vec<SportsFixture>,
}

impl SiteContent {
    /// Load the sample content bundled with the site.
    ///
    /// # Errors
    ///
    /// Returns an error if any bundled registry fails to parse or violates
    /// its invariants.
    pub fn sample() -> Result<Self, ContentError> {
        let profile = serde_json::from_str(SAMPLE_PROFILE)
            .map_err(|e| ContentError::Parse("profile", e))?;
        let events: Vec<Event> =
            serde_json::from_str(SAMPLE_EVENTS).map_err(|e| ContentError::Parse("events", e))?;
        let fundraisers: Vec<Fundraiser> = serde_json::from_str(SAMPLE_FUNDRAISERS)
            .map_err(|e| ContentError::Parse("fundraisers", e))?;
        let sports: Vec<SportsFixture> =
            serde_json::from_str(SAMPLE_SPORTS).map_err(|e| ContentError::Parse("sports", e))?;

        ensure_unique(events.iter().map(|e| e.id.as_str()))?;
        ensure_unique(fundraisers.iter().map(|f| f.id.as_str()))?;
        ensure_unique(sports.iter().map(|s| s.id.as_str()))?;

        Ok(Self {
            profile,
            catalog: Catalog::sample()?,
            events,
            fundraisers,
            sports,
        })
    }
}

fn ensure_unique<'a>(ids: impl Iterator<Item = &'a str>) -> Result<(), ContentError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId(id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_sample_content_loads() {
        let content = SiteContent::sample().unwrap();
        assert_eq!(content.profile.school_name, "Auburn Rockets");
        assert_eq!(content.catalog.len(), 4);
        assert_eq!(content.events.len(), 4);
        assert_eq!(content.fundraisers.len(), 3);
        assert_eq!(content.sports.len(), 3);
    }

    #[test]
    fn test_labels_survive_parsing() {
        let content = SiteContent::sample().unwrap();
        assert_eq!(content.events[0].category, EventCategory::SchoolEvent);
        assert_eq!(content.fundraisers[2].status, FundraiserStatus::DesignPhase);
        assert_eq!(content.sports[2].level, TeamLevel::JuniorVarsity);
        assert_eq!(content.sports[2].level.label(), "JV");
        assert_eq!(content.fundraisers[0].goal.amount, Decimal::new(1000, 0));
    }

    #[test]
    fn test_category_tones() {
        assert_eq!(EventCategory::Sports.tone(), Tone::Warn);
        assert_eq!(EventCategory::Fundraiser.tone(), Tone::Good);
        assert_eq!(EventCategory::SchoolEvent.tone(), Tone::Cool);
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(FundraiserStatus::Scheduled.tone(), Tone::Good);
        assert_eq!(FundraiserStatus::Planning.tone(), Tone::Cool);
        assert_eq!(FundraiserStatus::DesignPhase.tone(), Tone::Warn);
    }

    #[test]
    fn test_ensure_unique() {
        assert!(ensure_unique(["a", "b"].into_iter()).is_ok());
        assert!(matches!(
            ensure_unique(["a", "b", "a"].into_iter()),
            Err(ContentError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_invalid_date_is_a_parse_error() {
        let json = r#"[{"id":"x","sport":"Golf","matchup":"vs. Nobody","date":"2026-13-40",
            "time":"1 PM","location":"Course","level":"Varsity"}]"#;
        let parsed: Result<Vec<SportsFixture>, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }
}
