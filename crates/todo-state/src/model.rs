//! Todo Models
//!
//! Items, the display filter, and aggregate statistics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier assigned once at creation and never reused.
pub type TodoId = u32;

/// A single todo entry. Identity is `id`; `text` and `is_complete` change by
/// replacing the whole item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub is_complete: bool,
}

impl TodoItem {
    /// Create a new, not yet completed item
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_complete: false,
        }
    }

    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    pub fn toggled(&self) -> Self {
        Self {
            is_complete: !self.is_complete,
            ..self.clone()
        }
    }
}

/// Which items the list view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterMode {
    #[default]
    #[serde(rename = "Show All")]
    ShowAll,
    #[serde(rename = "Show Completed")]
    ShowCompleted,
    #[serde(rename = "Show Uncompleted")]
    ShowUncompleted,
}

impl FilterMode {
    /// All modes in selector order
    pub const ALL: [FilterMode; 3] = [
        FilterMode::ShowAll,
        FilterMode::ShowCompleted,
        FilterMode::ShowUncompleted,
    ];

    /// Stable value used by the filter `<select>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::ShowAll => "Show All",
            FilterMode::ShowCompleted => "Show Completed",
            FilterMode::ShowUncompleted => "Show Uncompleted",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::ShowAll => "All",
            FilterMode::ShowCompleted => "Completed",
            FilterMode::ShowUncompleted => "Uncompleted",
        }
    }

    /// Whether `item` is visible under this mode.
    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            FilterMode::ShowAll => true,
            FilterMode::ShowCompleted => item.is_complete,
            FilterMode::ShowUncompleted => !item.is_complete,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("unknown filter mode: {:?}", s))
    }
}

/// Aggregate counts over the full todo list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub uncompleted: usize,
    /// Exact percentage; 0 for an empty list.
    pub percent_completed: f64,
}

impl TodoStats {
    /// Percentage rounded for display
    pub fn percent_rounded(&self) -> u32 {
        self.percent_completed.round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = TodoItem::new(3, "Buy milk");
        assert_eq!(item.id, 3);
        assert_eq!(item.text, "Buy milk");
        assert!(!item.is_complete);
    }

    #[test]
    fn test_with_text_keeps_identity_and_status() {
        let item = TodoItem::new(1, "old").toggled();
        let edited = item.with_text("new");
        assert_eq!(edited.id, 1);
        assert!(edited.is_complete);
        assert_eq!(edited.text, "new");
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let json = serde_json::to_string(&TodoItem::new(0, "a")).unwrap();
        assert_eq!(json, r#"{"id":0,"text":"a","isComplete":false}"#);
    }

    #[test]
    fn test_filter_mode_parse() {
        assert_eq!("Show Completed".parse::<FilterMode>(), Ok(FilterMode::ShowCompleted));
        assert_eq!("Show All".parse::<FilterMode>(), Ok(FilterMode::ShowAll));
        assert!("Completed".parse::<FilterMode>().is_err());
        assert!("".parse::<FilterMode>().is_err());
    }

    #[test]
    fn test_filter_mode_serde_matches_select_values() {
        for mode in FilterMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
            assert_eq!(serde_json::from_str::<FilterMode>(&json).unwrap(), mode);
        }
    }

    #[test]
    fn test_filter_mode_default_shows_all() {
        assert_eq!(FilterMode::default(), FilterMode::ShowAll);
    }

    #[test]
    fn test_percent_rounded() {
        let stats = TodoStats {
            total: 3,
            completed: 2,
            uncompleted: 1,
            percent_completed: 200.0 / 3.0,
        };
        assert_eq!(stats.percent_rounded(), 67);
    }
}
