use serde::{Deserialize, Serialize};

/// How the free-text search is compared against outlet names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMatchMode {
    /// Every character of the search text occurs somewhere in the name, in any order.
    #[default]
    Characters,
    /// The search text occurs as a contiguous substring of the name.
    Substring,
}

/// User-editable filter state: free-text name search plus an optional market segment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_text: String,
    pub category: Option<String>,
}

impl FilterCriteria {
    pub fn new(search_text: impl Into<String>, category: Option<String>) -> Self {
        let mut criteria = Self::default();
        criteria.set_search_text(search_text);
        criteria.set_category(category);
        criteria
    }

    pub fn set_search_text(&mut self, search_text: impl Into<String>) {
        self.search_text = search_text.into();
    }

    /// An empty category is the "none" option and is stored as `None`.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category.filter(|c| !c.is_empty());
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    pub fn is_active(&self) -> bool {
        !self.search_text.is_empty() || self.category().is_some()
    }

    pub fn clear(&mut self) {
        self.search_text.clear();
        self.category = None;
    }
}
