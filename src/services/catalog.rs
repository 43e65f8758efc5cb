use std::collections::BTreeSet;

use crate::models::course::present;
use crate::models::{CourseRecord, CourseViewModel};
use crate::services::mapper::{DEFAULT_CATEGORY, DEFAULT_LEVEL, NO_DESCRIPTION, UNTITLED_COURSE};

/// Sentinel selector value meaning "no constraint".
pub const ALL: &str = "all";

/// The fields the catalog filters on. Raw records resolve them with the
/// same fallbacks as the display mapper.
pub trait Catalogued {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn category(&self) -> &str;
    fn level(&self) -> &str;
}

impl Catalogued for CourseRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        present(&self.course_name).unwrap_or(UNTITLED_COURSE)
    }

    fn description(&self) -> &str {
        present(&self.course_description).unwrap_or(NO_DESCRIPTION)
    }

    fn category(&self) -> &str {
        present(&self.language).unwrap_or(DEFAULT_CATEGORY)
    }

    fn level(&self) -> &str {
        present(&self.status).unwrap_or(DEFAULT_LEVEL)
    }
}

impl Catalogued for CourseViewModel {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn level(&self) -> &str {
        &self.level
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selector {
    #[default]
    All,
    Only(String),
}

impl Selector {
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => expected == value,
        }
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        if value == ALL {
            Selector::All
        } else {
            Selector::Only(value.to_string())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search: String,
    pub category: Selector,
    pub level: Selector,
}

impl CatalogFilter {
    pub fn new(search: &str, category: &str, level: &str) -> Self {
        Self {
            search: search.to_string(),
            category: category.into(),
            level: level.into(),
        }
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_level(mut self, level: &str) -> Self {
        self.level = level.into();
        self
    }

    pub fn matches<T: Catalogued>(&self, item: &T) -> bool {
        self.matches_search(item)
            && self.category.accepts(item.category())
            && self.level.accepts(item.level())
    }

    fn matches_search<T: Catalogued>(&self, item: &T) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        item.title().to_lowercase().contains(&term)
            || item.description().to_lowercase().contains(&term)
    }

    /// Matching items in their original order.
    pub fn apply<'a, T: Catalogued>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

fn distinct_sorted<T, F>(items: &[T], field: F) -> Vec<String>
where
    F: Fn(&T) -> &str,
{
    items
        .iter()
        .map(field)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn category_options<T: Catalogued>(items: &[T]) -> Vec<String> {
    distinct_sorted(items, |item| item.category())
}

pub fn level_options<T: Catalogued>(items: &[T]) -> Vec<String> {
    distinct_sorted(items, |item| item.level())
}

/// Select-box contents for the catalog page, without the "all" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogOptions {
    pub categories: Vec<String>,
    pub levels: Vec<String>,
}

impl CatalogOptions {
    pub fn from_items<T: Catalogued>(items: &[T]) -> Self {
        Self {
            categories: category_options(items),
            levels: level_options(items),
        }
    }
}

pub fn featured<T>(items: &[T], count: usize) -> &[T] {
    &items[..count.min(items.len())]
}

pub fn find_by_id<'a, T: Catalogued>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}
