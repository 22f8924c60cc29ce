// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeSet;

use crate::filters;
use crate::hover::HoverDescriptor;
use crate::markup;
use crate::model::{Exchange, HoverReply, QueryState, Row, SortOrder};

/// Transient draft text shown while a hover question is being fetched.
pub const LOADING_PLACEHOLDER: &str = "loading user question...";
/// Draft text shown when a hover question request fails.
pub const HOVER_ERROR_TEXT: &str = "Error loading question";

/// A UI intent or a resolved backend exchange, applied atomically.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    EditDraft(String),
    SubmitDraft,
    RemoveFilterChip { category: String, value: String },
    CellClick { column: String, value: String, row: Row },
    SortClick { column: String },
    GroupByClick { column: String },
    ToggleGroupedValue { value: String, checked: bool },
    AddSelectedToFilters,
    SuggestionClick { text: String },
    ToggleHoverEffects,
    HoverCell { column: String, value: String, row: Row },
    HoverFilter { category: String, value: String },
    HoverSort { column: String },
    HoverGroup { column: String },
    HoverLeave,
    SyncFinished(Exchange<QueryState>),
    HoverResolved(Exchange<HoverReply>),
}

/// Work the driver must carry out on behalf of the session. Each effect
/// eventually comes back as a `SyncFinished` or `HoverResolved` command.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubmitState(QueryState),
    SubmitHover(HoverDescriptor),
}

/// The query session: canonical state, the editable question draft, the
/// grouped-row selection, the hover channel, and the sync guard. All
/// mutation goes through [`Session::dispatch`] on a single thread; the
/// single-flight flag is therefore race-free as long as it is checked
/// before any effect is handed to a worker.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    state: QueryState,
    draft: String,
    selection: BTreeSet<String>,
    hover_enabled: bool,
    hover: HoverDescriptor,
    syncing: bool,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    pub fn hover_enabled(&self) -> bool {
        self.hover_enabled
    }

    pub fn hover(&self) -> &HoverDescriptor {
        &self.hover
    }

    pub fn is_syncing(&self) -> bool {
        self.syncing
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_active_filters(&self) -> bool {
        self.state.has_active_filters()
    }

    pub fn should_show_data(&self) -> bool {
        self.has_active_filters() || !self.state.result.is_empty()
    }

    pub fn should_show_insights(&self) -> bool {
        !self.state.comments.is_empty() || !self.state.suggestions.is_empty()
    }

    /// First sync after startup: submits the current (default) state so
    /// the backend can seed the initial view.
    pub fn initial_sync(&mut self) -> Vec<Effect> {
        self.attempt_sync(self.state.clone())
    }

    pub fn dispatch(&mut self, command: SessionCommand) -> Vec<Effect> {
        match command {
            SessionCommand::EditDraft(text) => {
                self.draft = text;
                Vec::new()
            }
            SessionCommand::SubmitDraft => self.submit_draft(),
            SessionCommand::RemoveFilterChip { category, value } => {
                self.remove_filter_chip(&category, &value)
            }
            SessionCommand::CellClick { column, value, row } => {
                self.cell_click(&column, &value, &row)
            }
            SessionCommand::SortClick { column } => self.sort_click(&column),
            SessionCommand::GroupByClick { column } => self.group_by_click(&column),
            SessionCommand::ToggleGroupedValue { value, checked } => {
                self.toggle_grouped_value(value, checked)
            }
            SessionCommand::AddSelectedToFilters => self.add_selected_to_filters(),
            SessionCommand::SuggestionClick { text } => self.suggestion_click(&text),
            SessionCommand::ToggleHoverEffects => self.toggle_hover_effects(),
            SessionCommand::HoverCell { column, value, row } => {
                let descriptor =
                    HoverDescriptor::cell(&column, &value, self.state.group_by.as_deref(), &row);
                self.hover_enter(descriptor)
            }
            SessionCommand::HoverFilter { category, value } => {
                self.hover_enter(HoverDescriptor::filter(&category, &value))
            }
            SessionCommand::HoverSort { column } => {
                let descriptor = HoverDescriptor::sort(&column, &self.state.sorting);
                self.hover_enter(descriptor)
            }
            SessionCommand::HoverGroup { column } => {
                self.hover_enter(HoverDescriptor::group(&column))
            }
            SessionCommand::HoverLeave => self.hover_leave(),
            SessionCommand::SyncFinished(exchange) => self.sync_finished(exchange),
            SessionCommand::HoverResolved(exchange) => self.hover_resolved(exchange),
        }
    }

    fn submit_draft(&mut self) -> Vec<Effect> {
        let trimmed = self.draft.trim().to_owned();
        if trimmed.is_empty() {
            return Vec::new();
        }
        let mut candidate = self.state.clone();
        candidate.question = trimmed.clone();
        self.draft = trimmed;
        self.push_candidate(candidate)
    }

    fn remove_filter_chip(&mut self, category: &str, value: &str) -> Vec<Effect> {
        let mut candidate = self.state.clone();
        candidate.filters = filters::remove_value(&candidate.filters, category, value);
        self.push_candidate(candidate)
    }

    fn cell_click(&mut self, column: &str, value: &str, row: &Row) -> Vec<Effect> {
        let Some(drill) = filters::compose_drill_down(
            &self.state.filters,
            self.state.group_by.as_deref(),
            column,
            value,
            row,
        ) else {
            return Vec::new();
        };
        let mut candidate = self.state.clone();
        candidate.filters = drill.filters;
        candidate.group_by = Some(drill.group_by);
        self.push_candidate(candidate)
    }

    fn sort_click(&mut self, column: &str) -> Vec<Effect> {
        let mut candidate = self.state.clone();
        let order = if candidate.sorting.is_ordered_by(column)
            && candidate.sorting.order == SortOrder::Asc
        {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        candidate.sorting.order_by = Some(column.to_owned());
        candidate.sorting.order = order;
        self.push_candidate(candidate)
    }

    fn group_by_click(&mut self, column: &str) -> Vec<Effect> {
        let mut candidate = self.state.clone();
        candidate.group_by = Some(column.to_lowercase());
        self.push_candidate(candidate)
    }

    fn toggle_grouped_value(&mut self, value: String, checked: bool) -> Vec<Effect> {
        if checked {
            self.selection.insert(value);
        } else {
            self.selection.remove(&value);
        }
        Vec::new()
    }

    fn add_selected_to_filters(&mut self) -> Vec<Effect> {
        let Some(next_filters) = filters::compose_batch_add(
            &self.state.filters,
            self.state.group_by.as_deref(),
            &self.selection,
        ) else {
            return Vec::new();
        };
        self.selection.clear();
        let mut candidate = self.state.clone();
        candidate.filters = next_filters;
        self.push_candidate(candidate)
    }

    fn suggestion_click(&mut self, text: &str) -> Vec<Effect> {
        let plain = markup::strip(text);
        let mut candidate = self.state.clone();
        candidate.question = plain.clone();
        self.draft = plain;
        self.push_candidate(candidate)
    }

    fn toggle_hover_effects(&mut self) -> Vec<Effect> {
        self.hover_enabled = !self.hover_enabled;
        if !self.hover_enabled {
            self.hover = HoverDescriptor::None;
            self.draft = self.state.question.clone();
        }
        Vec::new()
    }

    fn hover_enter(&mut self, descriptor: HoverDescriptor) -> Vec<Effect> {
        if !self.hover_enabled {
            return Vec::new();
        }
        self.draft = LOADING_PLACEHOLDER.to_owned();
        self.hover = descriptor.clone();
        vec![Effect::SubmitHover(descriptor)]
    }

    fn hover_leave(&mut self) -> Vec<Effect> {
        if !self.hover_enabled {
            return Vec::new();
        }
        self.hover = HoverDescriptor::None;
        self.draft = self.state.question.clone();
        Vec::new()
    }

    fn hover_resolved(&mut self, exchange: Exchange<HoverReply>) -> Vec<Effect> {
        // Relevance is checked on resolution, not issuance: responses
        // landing after the feature was switched off are dropped.
        if !self.hover_enabled {
            return Vec::new();
        }
        if let Some(reply) = exchange.data
            && !reply.message.is_empty()
        {
            self.draft = reply.message;
        }
        if let Some(error) = exchange.error {
            self.draft = HOVER_ERROR_TEXT.to_owned();
            self.error = Some(error);
        }
        Vec::new()
    }

    fn sync_finished(&mut self, exchange: Exchange<QueryState>) -> Vec<Effect> {
        if let Some(server_state) = exchange.data {
            self.apply_remote(server_state);
        }
        if let Some(error) = exchange.error {
            self.error = Some(error);
        }
        self.syncing = false;
        Vec::new()
    }

    /// Optimistic write: the candidate becomes visible immediately and is
    /// never rolled back, even if the matching sync fails or is dropped.
    fn apply_local(&mut self, candidate: QueryState) {
        self.state = candidate;
    }

    /// Server state wins unconditionally; the draft resyncs to the
    /// confirmed question.
    fn apply_remote(&mut self, server_state: QueryState) {
        self.state = server_state.normalize();
        self.draft = self.state.question.clone();
    }

    fn push_candidate(&mut self, candidate: QueryState) -> Vec<Effect> {
        self.apply_local(candidate.clone());
        self.attempt_sync(candidate)
    }

    /// Single-flight: while a sync is outstanding, further payloads are
    /// dropped, not queued. The flag flips before the effect is emitted
    /// and only [`SessionCommand::SyncFinished`] clears it.
    fn attempt_sync(&mut self, payload: QueryState) -> Vec<Effect> {
        if self.syncing {
            return Vec::new();
        }
        self.syncing = true;
        self.error = None;
        vec![Effect::SubmitState(payload)]
    }
}
