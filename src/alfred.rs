use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One selectable row in an Alfred script filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlfredItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(
        rename = "autocomplete",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_complete: Option<String>,
    #[serde(rename = "quicklookurl")]
    pub quick_look_url: String,
    pub text: AlfredItemText,
}

/// Text used by Alfred's copy (⌘C) and large type (⌘L) actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlfredItemText {
    pub copy: String,
    #[serde(rename = "largetype")]
    pub large_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlfredResponse {
    pub items: Vec<AlfredItem>,
}

impl AlfredItem {
    /// A plain dictionary hit.
    pub fn entry(title: String, quick_look_url: &str) -> Self {
        AlfredItem {
            text: AlfredItemText {
                copy: title.clone(),
                large_type: title.clone(),
            },
            title,
            subtitle: None,
            auto_complete: None,
            quick_look_url: quick_look_url.to_string(),
        }
    }

    /// A spelling suggestion; tabbing in Alfred completes the query to it.
    pub fn suggestion(title: String, quick_look_url: &str) -> Self {
        AlfredItem {
            subtitle: Some(format!("Did you mean {}?", title)),
            auto_complete: Some(title.clone()),
            ..AlfredItem::entry(title, quick_look_url)
        }
    }
}

impl From<Vec<AlfredItem>> for AlfredResponse {
    fn from(items: Vec<AlfredItem>) -> Self {
        AlfredResponse { items }
    }
}

pub fn to_json(response: &AlfredResponse) -> Result<String> {
    Ok(serde_json::to_string(response)?)
}
