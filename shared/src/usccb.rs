//! Readings source backed by the USCCB daily readings pages.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

use crate::lookup::MassSource;
use crate::models::{Mass, MassType, Reading, Section, SectionType, Verse};
use crate::{Error, Result};

/// HTTP client for `bible.usccb.org` style readings pages.
#[derive(Debug, Clone)]
pub struct UsccbClient {
    base_url: String,
    http: reqwest::Client,
}

impl UsccbClient {
    pub fn new(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Page URL for one date and mass type, e.g. `/bible/readings/122524-Day.cfm`.
    pub fn readings_url(&self, date: NaiveDate, mass_type: MassType) -> String {
        format!(
            "{}/bible/readings/{}{}.cfm",
            self.base_url,
            date.format("%m%d%y"),
            mass_type.url_suffix()
        )
    }

    async fn fetch(&self, date: NaiveDate, mass_type: MassType) -> Result<Option<Mass>> {
        let url = self.readings_url(date, mass_type);
        debug!(%url, ?mass_type, "Fetching readings page");

        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let html = response.error_for_status()?.text().await?;

        parse_mass_page(date, &url, &html)
    }
}

#[async_trait]
impl MassSource for UsccbClient {
    async fn get_mass_from_date(&self, date: NaiveDate, types: &[MassType]) -> Result<Option<Mass>> {
        for &mass_type in types {
            if let Some(mass) = self.fetch(date, mass_type).await? {
                return Ok(Some(mass));
            }
        }
        Ok(None)
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Internal(format!("bad selector {}: {}", css, e)))
}

/// Append the element's text, breaking lines at `<br>` and around blocks.
fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name() == "br" => out.push('\n'),
            Node::Element(el) => {
                let block = matches!(el.name(), "p" | "div");
                if block {
                    out.push('\n');
                }
                if let Some(inner) = ElementRef::wrap(child) {
                    collect_text(inner, out);
                }
                if block {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

/// Collapse runs of whitespace within each line and drop blank lines.
fn normalize_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(element, &mut raw);

    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a readings page into a [`Mass`].
///
/// Returns `Ok(None)` when the page has no reading blocks, which is how the
/// source answers for a variant that does not apply to the date.
pub fn parse_mass_page(date: NaiveDate, url: &str, html: &str) -> Result<Option<Mass>> {
    let document = Html::parse_document(html);

    let block = selector(".b-verse")?;
    let heading = selector("h3.name")?;
    let address_link = selector(".address a")?;
    let address = selector(".address")?;
    let body = selector(".content-body")?;

    let mut sections = Vec::new();
    for element in document.select(&block) {
        let Some(display_header) = element.select(&heading).next().map(normalize_text) else {
            continue;
        };

        let mut verses: Vec<Verse> = element
            .select(&address_link)
            .map(|a| Verse { text: normalize_text(a) })
            .collect();
        if verses.is_empty() {
            verses = element
                .select(&address)
                .map(|a| Verse { text: normalize_text(a) })
                .collect();
        }

        let text = element
            .select(&body)
            .next()
            .map(normalize_text)
            .unwrap_or_default();

        sections.push(Section {
            type_: SectionType::from_heading(&display_header),
            display_header,
            readings: vec![Reading { verses, text }],
        });
    }

    if sections.is_empty() {
        return Ok(None);
    }

    let lectionary_title = selector(".b-lectionary h2")?;
    let page_title = selector("title")?;
    let title = document
        .select(&lectionary_title)
        .next()
        .or_else(|| document.select(&page_title).next())
        .map(normalize_text)
        .filter(|title| !title.is_empty())
        .ok_or_else(|| Error::Parse(format!("no title on {}", url)))?;

    Ok(Some(Mass {
        date,
        title,
        url: url.to_string(),
        sections,
    }))
}
