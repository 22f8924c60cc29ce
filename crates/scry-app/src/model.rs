// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

use crate::hover::HoverDescriptor;

/// A single filter entry. The backend distinguishes numeric year filters
/// from textual ones, so values keep their JSON type on the wire while
/// membership and removal compare the string form only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Number(Number),
    Text(String),
}

impl FilterValue {
    /// Coerces a raw cell or chip string into a filter value. Only the
    /// `years` category produces numbers; everything else stays text.
    pub fn coerce(category: &str, raw: &str) -> Self {
        if category == "years" {
            let trimmed = raw.trim();
            if let Ok(int) = trimmed.parse::<i64>() {
                return Self::Number(Number::from(int));
            }
            if let Ok(float) = trimmed.parse::<f64>()
                && let Some(number) = Number::from_f64(float)
            {
                return Self::Number(number);
            }
        }
        Self::Text(raw.to_owned())
    }

    /// The string form used for uniqueness and chip display.
    pub fn as_key(&self) -> String {
        match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Active filters: lowercase category name to ordered values. An absent
/// category means "no constraint"; an empty vec is never stored.
pub type Filters = BTreeMap<String, Vec<FilterValue>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sorting {
    pub order_by: Option<String>,
    pub order: SortOrder,
    pub limit: u32,
    pub offset: u32,
}

impl Default for Sorting {
    fn default() -> Self {
        Self {
            order_by: None,
            order: SortOrder::Asc,
            limit: 10,
            offset: 0,
        }
    }
}

impl Sorting {
    /// `order_by` keeps the column name as it was clicked; comparisons
    /// are case-insensitive.
    pub fn is_ordered_by(&self, column: &str) -> bool {
        self.order_by
            .as_deref()
            .is_some_and(|active| active.eq_ignore_ascii_case(column))
    }
}

/// One result row. Field names conventionally capitalize the category
/// name (`years` appears as `Years`), but nothing enforces that, so
/// lookups go through [`row_value`].
pub type Row = Map<String, Value>;

/// Resolves a lowercase category against a row's fields: capitalized
/// guess first, then a case-insensitive scan. JSON nulls count as absent.
pub fn row_value<'a>(row: &'a Row, category: &str) -> Option<&'a Value> {
    row.get(&capitalize(category))
        .filter(|value| !value.is_null())
        .or_else(|| {
            row.iter()
                .find(|(key, value)| key.eq_ignore_ascii_case(category) && !value.is_null())
                .map(|(_, value)| value)
        })
}

pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Display text for a cell value: strings verbatim, null empty,
/// everything else via its JSON form.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// The canonical query state, server-authoritative after every sync.
/// Every field defaults so a partial server body still decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QueryState {
    pub question: String,
    pub filters: Filters,
    pub group_by: Option<String>,
    pub sorting: Sorting,
    pub comments: Vec<String>,
    pub suggestions: Vec<String>,
    pub result: Vec<Row>,
}

impl QueryState {
    /// Re-establishes the filter invariants on a server-provided state:
    /// lowercase categories, no empty vecs, unique string forms.
    pub fn normalize(mut self) -> Self {
        let mut filters = Filters::new();
        for (category, values) in std::mem::take(&mut self.filters) {
            if values.is_empty() {
                continue;
            }
            let entry = filters.entry(category.to_lowercase()).or_default();
            for value in values {
                if !entry.iter().any(|existing| existing.as_key() == value.as_key()) {
                    entry.push(value);
                }
            }
        }
        self.filters = filters;
        self.group_by = self.group_by.map(|group_by| group_by.to_lowercase());
        self
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.values().any(|values| !values.is_empty())
    }
}

/// Body of a successful hover-event response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HoverReply {
    pub message: String,
}

/// The uniform outcome of a backend call. A parse failure on a 2xx
/// response yields neither data nor error ("nothing to apply").
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Exchange<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(error.into()),
        }
    }

    pub const fn empty() -> Self {
        Self {
            data: None,
            error: None,
        }
    }
}

/// Port to the query backend. The session controller never talks to the
/// network itself; drivers execute effects through an implementation of
/// this trait.
pub trait QueryBackend {
    fn post_state(&self, state: &QueryState) -> Exchange<QueryState>;
    fn post_hover_event(&self, hover: &HoverDescriptor) -> Exchange<HoverReply>;
}
