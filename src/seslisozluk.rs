use log::{debug, info};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::alfred::AlfredItem;
use crate::error::{Result, SesliError};

pub const SEARCH_URL: &str = "http://m.seslisozluk.net/index6.php";

/// The mobile site only renders its compact result markup for this device.
const DEVICE: &str = "iPhone";
const WORD_SEPARATOR: &str = "%20";

/// Everything but RFC 3986 unreserved characters.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub const PRIMARY_SELECTOR: &str = "body .resultset .dict_result ol li";
pub const DID_YOU_MEAN_SELECTOR: &str = "body #didumean .resultset .dict_result ul li";

pub fn build_query_url<S: AsRef<str>>(endpoint: &str, words: &[S]) -> Result<String> {
    let mut parsed = Url::parse(endpoint)?;
    let word = words
        .iter()
        .map(|w| utf8_percent_encode(w.as_ref(), QUERY_COMPONENT).to_string())
        .collect::<Vec<String>>()
        .join(WORD_SEPARATOR);
    parsed.set_query(Some(&format!("word={}&dN={}", word, DEVICE)));
    Ok(parsed.to_string())
}

pub fn fetch_document(client: &Client, url: &str) -> Result<String> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        // Error pages still carry the suggestion list, so parse them anyway.
        info!("{} answered {}", url, status);
    }
    let body = resp.text()?;
    debug!("fetched {} bytes ({}) from {}", body.len(), status, url);
    Ok(body)
}

/// How the double-space gaps between headword, part of speech and meaning are
/// rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separators {
    /// Gaps collapse to a single space: `kitap noun book`.
    #[default]
    Preserve,
    /// Gaps become colons: `kitap : noun : book`.
    Colon,
}

pub fn clean_text(raw: &str, separators: Separators) -> String {
    let mut text = match separators {
        Separators::Preserve => raw.to_string(),
        Separators::Colon => raw.replace("  ", " : "),
    };
    while text.contains("  ") {
        text = text.replace("  ", " ");
    }
    text.trim_matches(' ').to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    Primary,
    DidYouMean,
    /// Neither list matched. Either the word is unknown or the page layout
    /// changed under us.
    Nothing,
}

#[derive(Debug)]
pub struct Extraction {
    pub source: ResultSource,
    pub items: Vec<AlfredItem>,
}

pub fn extract_results(html: &str, url: &str, separators: Separators) -> Result<Extraction> {
    let document = Html::parse_document(html);

    let entries = select_texts(&document, PRIMARY_SELECTOR, separators)?;
    if !entries.is_empty() {
        return Ok(Extraction {
            source: ResultSource::Primary,
            items: entries
                .into_iter()
                .map(|title| AlfredItem::entry(title, url))
                .collect(),
        });
    }

    let suggestions = select_texts(&document, DID_YOU_MEAN_SELECTOR, separators)?;
    let source = if suggestions.is_empty() {
        ResultSource::Nothing
    } else {
        ResultSource::DidYouMean
    };
    Ok(Extraction {
        source,
        items: suggestions
            .into_iter()
            .map(|title| AlfredItem::suggestion(title, url))
            .collect(),
    })
}

fn select_texts(document: &Html, selector: &str, separators: Separators) -> Result<Vec<String>> {
    let parsed = Selector::parse(selector).map_err(|e| SesliError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })?;
    Ok(document
        .select(&parsed)
        .map(|li| clean_text(&li.text().collect::<String>(), separators))
        .collect())
}
