//! Turns a looked-up mass into the compact readings payload.

use chrono::NaiveDate;

use crate::models::{Mass, Reading, ReadingsPayload, Section, SectionSummary};
use crate::{Error, Result};

/// Parse a `YYYYMMDD` date string.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let invalid = || Error::Validation(format!("invalid date format: {}, expected YYYYMMDD", raw));

    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(raw, "%Y%m%d").map_err(|_| invalid())
}

/// Scripture reference for a reading, e.g. `"Gn 1:1-5"`.
pub fn reading_ref(reading: &Reading) -> String {
    reading
        .verses
        .iter()
        .map(|verse| verse.text.as_str())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summarise a section from its first reading.
pub fn summarize_section(section: &Section, include_text: bool) -> SectionSummary {
    let first = section.readings.first();

    SectionSummary {
        heading: section.display_header.clone(),
        reference: first.map(reading_ref).unwrap_or_default(),
        text: first
            .filter(|_| include_text)
            .map(|reading| reading.text.trim().to_string()),
    }
}

/// Build the response payload, skipping Alleluia and Sequence sections.
pub fn build_payload(mass: &Mass, include_text: bool) -> ReadingsPayload {
    ReadingsPayload {
        date: mass.date.format("%Y-%m-%d").to_string(),
        title: mass.title.clone(),
        url: mass.url.clone(),
        sections: mass
            .sections
            .iter()
            .filter(|section| !section.type_.is_excluded())
            .map(|section| summarize_section(section, include_text))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SectionType, Verse};

    fn section(type_: SectionType, heading: &str, readings: Vec<Reading>) -> Section {
        Section {
            type_,
            display_header: heading.to_string(),
            readings,
        }
    }

    fn reading(verses: &[&str], text: &str) -> Reading {
        Reading {
            verses: verses.iter().map(|v| Verse { text: v.to_string() }).collect(),
            text: text.to_string(),
        }
    }

    fn mass(sections: Vec<Section>) -> Mass {
        Mass {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            title: "Solemnity of Mary, the Holy Mother of God".to_string(),
            url: "https://bible.usccb.org/bible/readings/010124.cfm".to_string(),
            sections,
        }
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("20240101").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(
            parse_date("20241225").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_malformed_input() {
        for raw in ["2024-01-01", "abcd1234", "2024011", "202401011", "20241301", "20230229", "+2024010"] {
            let err = parse_date(raw).unwrap_err();
            assert!(matches!(err, Error::Validation(_)), "{} should be rejected", raw);
            assert!(err.to_string().contains(raw));
        }
    }

    #[test]
    fn test_reading_ref_skips_empty_verses() {
        assert_eq!(reading_ref(&reading(&["Gn 1:1-5", "", "Gn 2:1"], "")), "Gn 1:1-5, Gn 2:1");
        assert_eq!(reading_ref(&reading(&[], "text")), "");
    }

    #[test]
    fn test_build_payload_excludes_alleluia_and_sequence() {
        let mass = mass(vec![
            section(SectionType::Alleluia, "Alleluia", vec![reading(&["Heb 1:1-2"], "Alleluia")]),
            section(
                SectionType::Reading,
                "First Reading",
                vec![reading(&["Gen 1:1"], "In the beginning...")],
            ),
            section(SectionType::Sequence, "Sequence", vec![reading(&[], "Victimae paschali")]),
        ]);
        let payload = build_payload(&mass, true);

        assert_eq!(payload.date, "2024-01-01");
        assert_eq!(payload.title, mass.title);
        assert_eq!(payload.url, mass.url);
        assert_eq!(
            payload.sections,
            vec![SectionSummary {
                heading: "First Reading".to_string(),
                reference: "Gen 1:1".to_string(),
                text: Some("In the beginning...".to_string()),
            }]
        );
    }

    #[test]
    fn test_payload_date_is_iso() {
        let mut christmas = mass(vec![]);
        christmas.date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();

        let payload = build_payload(&christmas, false);

        assert_eq!(payload.date, "2024-12-25");
        assert!(payload.sections.is_empty());
    }

    #[test]
    fn test_text_only_when_requested() {
        let gospel = section(SectionType::Gospel, "Gospel", vec![reading(&["Lk 2:16-21"], "  The shepherds\n")]);

        assert_eq!(summarize_section(&gospel, false).text, None);
        assert_eq!(summarize_section(&gospel, true).text.as_deref(), Some("The shepherds"));
    }

    #[test]
    fn test_section_without_readings_or_verses() {
        let empty = section(SectionType::Psalm, "Responsorial Psalm", vec![]);
        let summary = summarize_section(&empty, true);
        assert_eq!(summary.reference, "");
        assert_eq!(summary.text, None);

        let no_verses = section(SectionType::Reading, "Reading II", vec![reading(&[], "Brothers and sisters")]);
        assert_eq!(summarize_section(&no_verses, false).reference, "");
    }
}
