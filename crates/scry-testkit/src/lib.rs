// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Deterministic in-process stand-in for the query backend, used by
//! `--demo` mode and by UI tests. It answers `post_state` by filtering,
//! grouping, and sorting a canned publications dataset, and `post_hover_event`
//! by templating a contextual question from the descriptor.

use scry_app::{
    ArrowState, Exchange, FilterValue, HoverDescriptor, HoverReply, QueryBackend, QueryState, Row,
    SortOrder, capitalize, cell_text, row_value,
};
use serde_json::{Map, Value, json};

const GROUP_COUNT_COLUMN: &str = "Publications";

#[derive(Debug, Clone, Default)]
pub struct DemoBackend {
    rows: Vec<Row>,
}

impl DemoBackend {
    pub fn new() -> Self {
        Self {
            rows: publication_rows(),
        }
    }

    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    fn matching_rows(&self, state: &QueryState) -> Vec<Row> {
        self.rows
            .iter()
            .filter(|row| {
                state.filters.iter().all(|(category, values)| {
                    let Some(value) = row_value(row, category) else {
                        return false;
                    };
                    let text = cell_text(value);
                    values.iter().any(|wanted| wanted.as_key() == text)
                })
            })
            .cloned()
            .collect()
    }

    fn grouped_rows(rows: &[Row], group_by: &str) -> Vec<Row> {
        let column = capitalize(group_by);
        let mut counts: Vec<(String, Value, u64)> = Vec::new();
        for row in rows {
            let Some(value) = row_value(row, group_by) else {
                continue;
            };
            let key = cell_text(value);
            match counts.iter_mut().find(|(existing, _, _)| *existing == key) {
                Some((_, _, count)) => *count += 1,
                None => counts.push((key, value.clone(), 1)),
            }
        }

        counts
            .into_iter()
            .map(|(_, value, count)| {
                let mut row = Map::new();
                row.insert(column.clone(), value);
                row.insert(GROUP_COUNT_COLUMN.to_owned(), json!(count));
                row
            })
            .collect()
    }

    fn sorted_page(mut rows: Vec<Row>, state: &QueryState) -> Vec<Row> {
        if let Some(order_by) = state.sorting.order_by.as_deref() {
            rows.sort_by(|left, right| {
                let left = row_value(left, &order_by.to_lowercase());
                let right = row_value(right, &order_by.to_lowercase());
                compare_values(left, right)
            });
            if state.sorting.order == SortOrder::Desc {
                rows.reverse();
            }
        }

        rows.into_iter()
            .skip(state.sorting.offset as usize)
            .take(state.sorting.limit as usize)
            .collect()
    }

    fn comments(state: &QueryState, matched: usize, shown: usize) -> Vec<String> {
        let mut comments = vec![format!(
            "**{matched}** publications match the current filters; showing **{shown}**."
        )];
        if let Some(group_by) = state.group_by.as_deref() {
            comments.push(format!("Results are grouped by **{group_by}**."));
        }
        comments
    }

    fn suggestions(rows: &[Row]) -> Vec<String> {
        let mut suggestions = Vec::new();
        if let Some(author) = rows
            .first()
            .and_then(|row| row_value(row, "authors"))
            .map(cell_text)
        {
            suggestions.push(format!("What does **{author}** publish about?"));
        }
        suggestions.push("Which venue has the most **citations**?".to_owned());
        suggestions
    }
}

impl QueryBackend for DemoBackend {
    fn post_state(&self, state: &QueryState) -> Exchange<QueryState> {
        let matched = self.matching_rows(state);
        let matched_count = matched.len();

        let rows = match state.group_by.as_deref() {
            Some(group_by) => Self::grouped_rows(&matched, group_by),
            None => matched,
        };
        let page = Self::sorted_page(rows, state);

        let mut next = state.clone();
        next.comments = Self::comments(state, matched_count, page.len());
        next.suggestions = Self::suggestions(&page);
        next.result = page;
        Exchange::success(next)
    }

    fn post_hover_event(&self, hover: &HoverDescriptor) -> Exchange<HoverReply> {
        let message = match hover {
            HoverDescriptor::None => String::new(),
            HoverDescriptor::Cell {
                column,
                value,
                group_by_value,
                ..
            } => {
                if group_by_value.is_empty() {
                    format!("Which publications have {column} **{value}**?")
                } else {
                    format!(
                        "Which of **{group_by_value}**'s publications have {column} **{value}**?"
                    )
                }
            }
            HoverDescriptor::Filter { category, value } => {
                format!("What changes without the **{value}** {category} filter?")
            }
            HoverDescriptor::Sort { column, arrow } => match arrow {
                ArrowState::Neutral => format!("What leads once {column} is sorted?"),
                ordered => format!(
                    "What leads with {column} sorted **{}**?",
                    ordered.as_str()
                ),
            },
            HoverDescriptor::Group { column } => {
                format!("What stands out when grouping by **{column}**?")
            }
        };
        Exchange::success(HoverReply { message })
    }
}

/// A ready-made canonical state for UI tests: grouped, filtered, with
/// insights present.
pub fn sample_state() -> QueryState {
    let mut filters = scry_app::Filters::new();
    filters.insert(
        "years".to_owned(),
        vec![FilterValue::Number(2020.into())],
    );

    QueryState {
        question: "Who published most in 2020?".to_owned(),
        filters,
        group_by: Some("authors".to_owned()),
        comments: vec!["**Smith** leads with **3** papers.".to_owned()],
        suggestions: vec!["What does **Smith** publish about?".to_owned()],
        result: vec![
            object(json!({"Authors": "Smith", "Publications": 3})),
            object(json!({"Authors": "Jones", "Publications": 2})),
        ],
        ..QueryState::default()
    }
}

pub fn publication_rows() -> Vec<Row> {
    [
        json!({"Authors": "Smith", "Years": 2020, "Venues": "NeurIPS", "Citations": 310, "Title": "Sparse Retrieval at Scale"}),
        json!({"Authors": "Smith", "Years": 2020, "Venues": "ICML", "Citations": 190, "Title": "Curriculum Distillation"}),
        json!({"Authors": "Smith", "Years": 2021, "Venues": "ICML", "Citations": 122, "Title": "Latent Routing"}),
        json!({"Authors": "Jones", "Years": 2020, "Venues": "ACL", "Citations": 95, "Title": "Discourse Graphs"}),
        json!({"Authors": "Jones", "Years": 2019, "Venues": "ACL", "Citations": 210, "Title": "Span Attention"}),
        json!({"Authors": "Chen", "Years": 2021, "Venues": "NeurIPS", "Citations": 402, "Title": "Contrastive Planners"}),
        json!({"Authors": "Chen", "Years": 2022, "Venues": "ICLR", "Citations": 264, "Title": "World-Model Critics"}),
        json!({"Authors": "Okafor", "Years": 2022, "Venues": "ICLR", "Citations": 77, "Title": "Token Pruning Revisited"}),
        json!({"Authors": "Okafor", "Years": 2020, "Venues": "EMNLP", "Citations": 54, "Title": "Low-Resource Parsing"}),
        json!({"Authors": "Varga", "Years": 2019, "Venues": "EMNLP", "Citations": 148, "Title": "Morphology-Aware Decoding"}),
        json!({"Authors": "Varga", "Years": 2023, "Venues": "NeurIPS", "Citations": 33, "Title": "Structured Sparsity Priors"}),
        json!({"Authors": "Lindqvist", "Years": 2023, "Venues": "ICML", "Citations": 61, "Title": "Gradient Surgery for RL"}),
    ]
    .into_iter()
    .map(object)
    .collect()
}

fn object(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn compare_values(left: Option<&Value>, right: Option<&Value>) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match (left, right) {
        (Some(Value::Number(left)), Some(Value::Number(right))) => left
            .as_f64()
            .partial_cmp(&right.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(left), Some(right)) => cell_text(left).cmp(&cell_text(right)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
