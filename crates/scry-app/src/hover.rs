// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::model::{Row, SortOrder, Sorting, cell_text, row_value};

/// Sort-control state as seen by the user when hovering a sort toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowState {
    Asc,
    Desc,
    Neutral,
}

impl ArrowState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
            Self::Neutral => "neutral",
        }
    }
}

/// What the user is currently hovering. Ephemeral and client-only: the
/// descriptor is replaced on every hover-enter and cleared on leave, and
/// exactly one kind is ever active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HoverDescriptor {
    #[default]
    None,
    Cell {
        column: String,
        value: String,
        group_by_column: String,
        group_by_value: String,
    },
    Filter {
        category: String,
        value: String,
    },
    Sort {
        column: String,
        arrow: ArrowState,
    },
    Group {
        column: String,
    },
}

impl HoverDescriptor {
    /// A cell hover captures the active grouping and, when grouped, the
    /// row's value for the grouped category.
    pub fn cell(column: &str, value: &str, group_by: Option<&str>, row: &Row) -> Self {
        let group_by_column = group_by.unwrap_or_default().to_owned();
        let group_by_value = if group_by_column.is_empty() {
            String::new()
        } else {
            row_value(row, &group_by_column)
                .map(cell_text)
                .unwrap_or_default()
        };
        Self::Cell {
            column: column.to_owned(),
            value: value.to_owned(),
            group_by_column,
            group_by_value,
        }
    }

    pub fn filter(category: &str, value: &str) -> Self {
        Self::Filter {
            category: category.to_owned(),
            value: value.to_owned(),
        }
    }

    /// A sort hover reports the arrow the user sees: the active order for
    /// the sorted column, neutral for everything else.
    pub fn sort(column: &str, sorting: &Sorting) -> Self {
        let arrow = if sorting.is_ordered_by(column) {
            match sorting.order {
                SortOrder::Asc => ArrowState::Asc,
                SortOrder::Desc => ArrowState::Desc,
            }
        } else {
            ArrowState::Neutral
        };
        Self::Sort {
            column: column.to_owned(),
            arrow,
        }
    }

    pub fn group(column: &str) -> Self {
        Self::Group {
            column: column.to_owned(),
        }
    }

    /// Wire form: the backend expects all four hover groups on every
    /// event, with only the active one carrying values.
    pub fn wire(&self) -> HoverEvent {
        let mut event = HoverEvent::default();
        match self {
            Self::None => {}
            Self::Cell {
                column,
                value,
                group_by_column,
                group_by_value,
            } => {
                event.cell_hover = CellHover {
                    column_name: column.clone(),
                    cell_value: value.clone(),
                    group_by_column: group_by_column.clone(),
                    group_by_value: group_by_value.clone(),
                };
            }
            Self::Filter { category, value } => {
                event.filter_hover = FilterHover {
                    filter_name: category.clone(),
                    filter_value: value.clone(),
                };
            }
            Self::Sort { column, arrow } => {
                event.sorting_hover = SortingHover {
                    column_name: column.clone(),
                    arrow_position: arrow.as_str().to_owned(),
                };
            }
            Self::Group { column } => {
                event.groupby_hover = GroupbyHover {
                    column_name: column.clone(),
                };
            }
        }
        event
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HoverEvent {
    pub cell_hover: CellHover,
    pub filter_hover: FilterHover,
    pub sorting_hover: SortingHover,
    pub groupby_hover: GroupbyHover,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CellHover {
    pub column_name: String,
    pub cell_value: String,
    pub group_by_column: String,
    pub group_by_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterHover {
    pub filter_name: String,
    pub filter_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SortingHover {
    pub column_name: String,
    pub arrow_position: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupbyHover {
    pub column_name: String,
}

#[cfg(test)]
mod tests {
    use super::{ArrowState, HoverDescriptor};
    use crate::model::{Row, SortOrder, Sorting};
    use serde_json::json;

    fn sample_row() -> Row {
        match json!({"Authors": "Smith", "Years": 2020}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn cell_descriptor_captures_grouped_context() {
        let descriptor = HoverDescriptor::cell("Years", "2020", Some("authors"), &sample_row());
        assert_eq!(
            descriptor,
            HoverDescriptor::Cell {
                column: "Years".to_owned(),
                value: "2020".to_owned(),
                group_by_column: "authors".to_owned(),
                group_by_value: "Smith".to_owned(),
            }
        );
    }

    #[test]
    fn cell_descriptor_without_grouping_leaves_context_empty() {
        let descriptor = HoverDescriptor::cell("Years", "2020", None, &sample_row());
        let HoverDescriptor::Cell {
            group_by_column,
            group_by_value,
            ..
        } = descriptor
        else {
            panic!("expected cell descriptor");
        };
        assert!(group_by_column.is_empty());
        assert!(group_by_value.is_empty());
    }

    #[test]
    fn sort_descriptor_reports_active_order_or_neutral() {
        let sorting = Sorting {
            order_by: Some("Years".to_owned()),
            order: SortOrder::Desc,
            ..Sorting::default()
        };

        assert_eq!(
            HoverDescriptor::sort("years", &sorting),
            HoverDescriptor::Sort {
                column: "years".to_owned(),
                arrow: ArrowState::Desc,
            }
        );
        assert_eq!(
            HoverDescriptor::sort("authors", &sorting),
            HoverDescriptor::Sort {
                column: "authors".to_owned(),
                arrow: ArrowState::Neutral,
            }
        );
    }

    #[test]
    fn wire_body_always_carries_all_four_groups() {
        let encoded =
            serde_json::to_value(HoverDescriptor::filter("authors", "Smith").wire())
                .expect("wire body encodes");

        assert_eq!(encoded["filterHover"]["filterName"], "authors");
        assert_eq!(encoded["filterHover"]["filterValue"], "Smith");
        assert_eq!(encoded["cellHover"]["columnName"], "");
        assert_eq!(encoded["sortingHover"]["arrowPosition"], "");
        assert_eq!(encoded["groupbyHover"]["columnName"], "");
    }

    #[test]
    fn wire_body_populates_the_cell_group() {
        let descriptor = HoverDescriptor::cell("Years", "2020", Some("authors"), &sample_row());
        let encoded = serde_json::to_value(descriptor.wire()).expect("wire body encodes");

        assert_eq!(encoded["cellHover"]["columnName"], "Years");
        assert_eq!(encoded["cellHover"]["cellValue"], "2020");
        assert_eq!(encoded["cellHover"]["groupByColumn"], "authors");
        assert_eq!(encoded["cellHover"]["groupByValue"], "Smith");
        assert_eq!(encoded["filterHover"]["filterName"], "");
    }

    #[test]
    fn wire_body_encodes_sort_arrow_state() {
        let descriptor = HoverDescriptor::Sort {
            column: "Citations".to_owned(),
            arrow: ArrowState::Neutral,
        };
        let encoded = serde_json::to_value(descriptor.wire()).expect("wire body encodes");
        assert_eq!(encoded["sortingHover"]["columnName"], "Citations");
        assert_eq!(encoded["sortingHover"]["arrowPosition"], "neutral");
    }
}
