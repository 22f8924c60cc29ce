// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Pure filter-set deltas. Every function returns a new map; callers
//! decide whether the result becomes a sync candidate.

use crate::model::{FilterValue, Filters, Row, cell_text, row_value};
use std::collections::BTreeSet;

/// Adds `raw` (years-coerced) under `category` unless an entry with the
/// same string form already exists.
pub fn add_value(filters: &Filters, category: &str, raw: &str) -> Filters {
    let mut next = filters.clone();
    push_unique(&mut next, category, FilterValue::coerce(category, raw));
    next
}

/// Removes entries string-equal to `raw`. A category that empties is
/// deleted outright; absence, not an empty vec, means "no filter".
pub fn remove_value(filters: &Filters, category: &str, raw: &str) -> Filters {
    let mut next = filters.clone();
    if let Some(values) = next.get_mut(category) {
        values.retain(|value| value.as_key() != raw);
        if values.is_empty() {
            next.remove(category);
        }
    }
    next
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrillDown {
    pub filters: Filters,
    pub group_by: String,
}

/// The "click a data cell" rule. Empty and literal-`"0"` cells are inert.
/// When a different grouping is active, the row's grouped value is added
/// first so the drilled-into view keeps its context; the clicked value is
/// then added under its own column, and the grouping pivots to that
/// column.
pub fn compose_drill_down(
    filters: &Filters,
    group_by: Option<&str>,
    column: &str,
    value: &str,
    row: &Row,
) -> Option<DrillDown> {
    if value.is_empty() || value == "0" {
        return None;
    }

    let clicked_category = column.to_lowercase();
    let mut next = filters.clone();

    if let Some(grouped) = group_by {
        let grouped_category = grouped.to_lowercase();
        if grouped_category != clicked_category
            && let Some(grouped_value) = row_value(row, &grouped_category)
        {
            let text = cell_text(grouped_value);
            push_unique(
                &mut next,
                &grouped_category,
                FilterValue::coerce(&grouped_category, &text),
            );
        }
    }

    push_unique(
        &mut next,
        &clicked_category,
        FilterValue::coerce(&clicked_category, value),
    );

    Some(DrillDown {
        filters: next,
        group_by: clicked_category,
    })
}

/// Adds every checkbox-selected value under the grouped category. `None`
/// when no grouping is active or the selection is empty; the caller
/// clears the selection on success.
pub fn compose_batch_add(
    filters: &Filters,
    group_by: Option<&str>,
    selection: &BTreeSet<String>,
) -> Option<Filters> {
    let grouped = group_by?;
    if selection.is_empty() {
        return None;
    }

    let category = grouped.to_lowercase();
    let mut next = filters.clone();
    for value in selection {
        push_unique(&mut next, &category, FilterValue::coerce(&category, value));
    }
    Some(next)
}

fn push_unique(filters: &mut Filters, category: &str, value: FilterValue) {
    let values = filters.entry(category.to_owned()).or_default();
    let key = value.as_key();
    if !values.iter().any(|existing| existing.as_key() == key) {
        values.push(value);
    }
}
