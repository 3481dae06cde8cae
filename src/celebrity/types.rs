use serde::{Deserialize, Serialize};

/// Outcome of a celebrity lookup. Either the status fields or `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelebrityResult {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deceased: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CelebrityResult {
    pub fn failed(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            error: Some(format!("Failed to fetch data for {}", name)),
            name,
            deceased: None,
            disambiguation: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Reshapes a page summary into a lookup result for `name`.
    pub fn from_summary(name: impl Into<String>, summary: PageSummary) -> Self {
        let name = name.into();

        if summary.is_disambiguation() {
            return Self {
                name,
                deceased: None,
                disambiguation: Some(summary.titles.map(Titles::into_list).unwrap_or_default()),
                error: None,
            };
        }

        Self {
            name,
            deceased: summary.deceased_hint(),
            disambiguation: None,
            error: None,
        }
    }
}

/// Subset of the REST page summary payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageSummary {
    #[serde(rename = "type", default)]
    pub page_type: Option<String>,
    #[serde(default)]
    pub titles: Option<Titles>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub extract: Option<String>,
}

impl PageSummary {
    pub fn is_disambiguation(&self) -> bool {
        self.page_type.as_deref() == Some("disambiguation")
    }

    /// Past-tense wording in the description or extract marks the subject as deceased.
    ///
    /// A description containing "was" decides alone. Otherwise the extract
    /// decides, and without a non-empty extract the flag is `None`.
    pub fn deceased_hint(&self) -> Option<bool> {
        if self
            .description
            .as_deref()
            .is_some_and(|description| description.contains("was"))
        {
            return Some(true);
        }

        self.extract
            .as_deref()
            .filter(|extract| !extract.is_empty())
            .map(|extract| extract.contains("was"))
    }
}

/// `titles` arrives either as a plain list or as the REST title object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Titles {
    List(Vec<String>),
    Named {
        #[serde(default)]
        canonical: Option<String>,
        #[serde(default)]
        normalized: Option<String>,
        #[serde(default)]
        display: Option<String>,
    },
}

impl Titles {
    pub fn into_list(self) -> Vec<String> {
        match self {
            Self::List(titles) => titles,
            Self::Named {
                canonical,
                normalized,
                display,
            } => {
                let mut titles: Vec<String> = Vec::new();
                for title in [canonical, normalized, display].into_iter().flatten() {
                    if !title.is_empty() && !titles.contains(&title) {
                        titles.push(title);
                    }
                }
                titles
            }
        }
    }
}
