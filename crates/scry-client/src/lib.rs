// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, bail};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use scry_app::{Exchange, HoverDescriptor, HoverReply, QueryBackend, QueryState};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Blocking JSON client for the query backend. Cheap to clone; workers
/// get their own handle per request.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("backend.base_url must not be empty");
        }
        Url::parse(&base_url)
            .with_context(|| format!("invalid backend.base_url {base_url:?}"))?;

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn exchange<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl serde::Serialize,
        fallback: &str,
    ) -> Exchange<T> {
        let request = self.http.post(format!("{}{path}", self.base_url)).json(body);
        let response = match request.send() {
            Ok(response) => response,
            Err(error) => {
                return Exchange::failure(connection_error(&self.base_url, &error, fallback));
            }
        };

        let status = response.status();
        if status.is_success() {
            return match response.json::<T>() {
                Ok(data) => Exchange::success(data),
                // An unreadable success body is "nothing to apply", not
                // an error.
                Err(_) => Exchange::empty(),
            };
        }

        let body = response.text().unwrap_or_default();
        Exchange::failure(error_detail(status, &body))
    }
}

impl QueryBackend for Client {
    fn post_state(&self, state: &QueryState) -> Exchange<QueryState> {
        self.exchange("/state", state, "failed to sync state")
    }

    fn post_hover_event(&self, hover: &HoverDescriptor) -> Exchange<HoverReply> {
        self.exchange("/hover_event", &hover.wire(), "failed to send hover event")
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    detail: Option<String>,
}

fn connection_error(base_url: &str, error: &reqwest::Error, fallback: &str) -> String {
    format!("{fallback} -- cannot reach {base_url} ({error})")
}

fn error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(detail) = parsed.detail
        && !detail.is_empty()
    {
        return detail;
    }

    status
        .canonical_reason()
        .map(str::to_owned)
        .unwrap_or_else(|| format!("server returned {}", status.as_u16()))
}
