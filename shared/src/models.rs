//! Readings data model and response payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Liturgical variant used to pick which set of readings applies to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MassType {
    Default,
    Day,
    Vigil,
    Night,
    Dawn,
    YearA,
    YearB,
    YearC,
}

impl MassType {
    /// Variants tried for every request, most specific first.
    pub const PREFERENCE: [MassType; 5] = [
        MassType::Default,
        MassType::Day,
        MassType::YearA,
        MassType::YearB,
        MassType::YearC,
    ];

    /// Suffix appended to the readings page name upstream.
    pub fn url_suffix(self) -> &'static str {
        match self {
            MassType::Default => "",
            MassType::Day => "-Day",
            MassType::Vigil => "-Vigil",
            MassType::Night => "-Night",
            MassType::Dawn => "-Dawn",
            MassType::YearA => "-YearA",
            MassType::YearB => "-YearB",
            MassType::YearC => "-YearC",
        }
    }
}

/// Kind of a section within a mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionType {
    Reading,
    Psalm,
    Alleluia,
    Sequence,
    Gospel,
}

impl SectionType {
    /// Classify a section from its display heading.
    pub fn from_heading(heading: &str) -> Self {
        let heading = heading.to_lowercase();
        if heading.contains("alleluia") || heading.contains("verse before the gospel") {
            SectionType::Alleluia
        } else if heading.contains("sequence") {
            SectionType::Sequence
        } else if heading.contains("psalm") {
            SectionType::Psalm
        } else if heading.contains("gospel") {
            SectionType::Gospel
        } else {
            SectionType::Reading
        }
    }

    /// Sections that are not shown as a reading row.
    pub fn is_excluded(self) -> bool {
        matches!(self, SectionType::Alleluia | SectionType::Sequence)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub verses: Vec<Verse>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub type_: SectionType,
    pub display_header: String,
    pub readings: Vec<Reading>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mass {
    pub date: NaiveDate,
    pub title: String,
    pub url: String,
    pub sections: Vec<Section>,
}

/// One row of the readings response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub heading: String,
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Readings response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingsPayload {
    pub date: String,
    pub title: String,
    pub url: String,
    pub sections: Vec<SectionSummary>,
}

/// Body of every non-200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
