// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow};
use scry_app::{HoverDescriptor, QueryBackend, QueryState};
use scry_client::Client;
use std::io::Read;
use std::thread;
use std::time::Duration;
use tiny_http::{Header, Response, Server};

fn json_response(body: &str, status: u16) -> Response<std::io::Cursor<Vec<u8>>> {
    Response::from_string(body)
        .with_status_code(status)
        .with_header(
            Header::from_bytes("Content-Type", "application/json")
                .expect("valid content type header"),
        )
}

#[test]
fn unreachable_backend_reports_a_connection_error() -> Result<()> {
    let client = Client::new("http://127.0.0.1:1", Duration::from_millis(50))?;

    let outcome = client.post_state(&QueryState::default());
    assert!(outcome.data.is_none());
    let error = outcome.error.expect("transport failure surfaces an error");
    assert!(error.contains("failed to sync state"), "got {error}");
    assert!(error.contains("cannot reach"), "got {error}");
    Ok(())
}

#[test]
fn post_state_round_trips_the_full_state() -> Result<()> {
    let server = Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let mut request = server.recv().expect("request expected");
        assert_eq!(request.url(), "/state");

        let mut body = String::new();
        request
            .as_reader()
            .read_to_string(&mut body)
            .expect("request body reads");
        let sent: QueryState = serde_json::from_str(&body).expect("request body is a state");
        assert_eq!(sent.question, "top authors");

        let reply = r#"{
            "question": "top authors",
            "filters": {"years": [2020]},
            "group_by": "authors",
            "sorting": {"order_by": "Citations", "order": "desc", "limit": 10, "offset": 0},
            "comments": ["**Smith** leads"],
            "suggestions": [],
            "result": [{"Authors": "Smith", "Years": 2020, "Citations": 42}]
        }"#;
        request
            .respond(json_response(reply, 200))
            .expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let sent = QueryState {
        question: "top authors".to_owned(),
        ..QueryState::default()
    };
    let outcome = client.post_state(&sent);

    assert_eq!(outcome.error, None);
    let state = outcome.data.expect("success carries the new state");
    assert_eq!(state.group_by.as_deref(), Some("authors"));
    assert_eq!(state.result.len(), 1);
    assert_eq!(state.comments, vec!["**Smith** leads".to_owned()]);

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn non_2xx_with_detail_surfaces_the_detail() -> Result<()> {
    let server = Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        request
            .respond(json_response(r#"{"detail": "query engine offline"}"#, 503))
            .expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let outcome = client.post_state(&QueryState::default());

    assert!(outcome.data.is_none());
    assert_eq!(outcome.error.as_deref(), Some("query engine offline"));

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn non_2xx_without_detail_falls_back_to_status_text() -> Result<()> {
    let server = Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        request
            .respond(json_response("nope", 500))
            .expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let outcome = client.post_state(&QueryState::default());

    assert_eq!(outcome.error.as_deref(), Some("Internal Server Error"));

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn unparseable_success_body_is_nothing_to_apply() -> Result<()> {
    let server = Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        request
            .respond(json_response("{{not json", 200))
            .expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let outcome = client.post_state(&QueryState::default());

    assert!(outcome.data.is_none());
    assert!(outcome.error.is_none(), "parse failure is not an error");

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn hover_event_sends_all_four_groups_and_decodes_the_message() -> Result<()> {
    let server = Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let mut request = server.recv().expect("request expected");
        assert_eq!(request.url(), "/hover_event");

        let mut body = String::new();
        request
            .as_reader()
            .read_to_string(&mut body)
            .expect("request body reads");
        let sent: serde_json::Value = serde_json::from_str(&body).expect("request body is JSON");
        assert_eq!(sent["filterHover"]["filterName"], "authors");
        assert_eq!(sent["filterHover"]["filterValue"], "Smith");
        assert_eq!(sent["cellHover"]["columnName"], "");
        assert_eq!(sent["sortingHover"]["columnName"], "");
        assert_eq!(sent["groupbyHover"]["columnName"], "");

        request
            .respond(json_response(
                r#"{"message": "Which venues does Smith publish in?"}"#,
                200,
            ))
            .expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let outcome = client.post_hover_event(&HoverDescriptor::filter("authors", "Smith"));

    assert_eq!(outcome.error, None);
    assert_eq!(
        outcome.data.expect("success carries a reply").message,
        "Which venues does Smith publish in?"
    );

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn hover_event_failure_uses_its_own_fallback_wording() -> Result<()> {
    let client = Client::new("http://127.0.0.1:1", Duration::from_millis(50))?;

    let outcome = client.post_hover_event(&HoverDescriptor::group("Authors"));
    let error = outcome.error.expect("transport failure surfaces an error");
    assert!(error.contains("failed to send hover event"), "got {error}");
    Ok(())
}
