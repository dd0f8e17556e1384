use super::*;

#[test]
fn next_url_redirects() {
    assert_eq!(
        parse_submit_response(r#"{"next_url": "/loader?sid=abc"}"#),
        SubmitOutcome::Redirect("/loader?sid=abc".to_owned())
    );
}

#[test]
fn next_redirects_when_next_url_absent() {
    assert_eq!(parse_submit_response(r#"{"next": "/picker/"}"#), SubmitOutcome::Redirect("/picker/".to_owned()));
}

#[test]
fn next_url_wins_over_next_and_started() {
    let body = r#"{"next_url": "/a", "next": "/b", "started": true}"#;
    assert_eq!(parse_submit_response(body), SubmitOutcome::Redirect("/a".to_owned()));
}

#[test]
fn blank_next_url_falls_back_to_next() {
    let body = r#"{"next_url": "  ", "next": "/b"}"#;
    assert_eq!(parse_submit_response(body), SubmitOutcome::Redirect("/b".to_owned()));
}

#[test]
fn started_true_means_job_accepted() {
    assert_eq!(parse_submit_response(r#"{"started": true}"#), SubmitOutcome::Started);
}

#[test]
fn started_false_is_malformed() {
    assert_eq!(parse_submit_response(r#"{"started": false}"#), SubmitOutcome::Malformed);
}

#[test]
fn empty_object_is_malformed() {
    assert_eq!(parse_submit_response("{}"), SubmitOutcome::Malformed);
}

#[test]
fn non_json_body_is_malformed() {
    assert_eq!(parse_submit_response("<html>500</html>"), SubmitOutcome::Malformed);
}

#[test]
fn unknown_fields_are_ignored() {
    assert_eq!(
        parse_submit_response(r#"{"ok": true, "next": "/done"}"#),
        SubmitOutcome::Redirect("/done".to_owned())
    );
}

#[test]
fn busy_message_uses_data_msg_or_default() {
    assert_eq!(busy_message(Some("Fetching images…")), "Fetching images…");
    assert_eq!(busy_message(Some("   ")), "Working…");
    assert_eq!(busy_message(None), "Working…");
}

// =============================================================
// action_url
// =============================================================

#[test]
fn action_url_without_socket_id_is_unchanged() {
    assert_eq!(action_url("/picker/", None), "/picker/");
    assert_eq!(action_url("/picker/", Some("  ")), "/picker/");
}

#[test]
fn action_url_appends_socket_id() {
    assert_eq!(action_url("/picker/", Some("Xk3_pQ")), "/picker/?sid=Xk3_pQ");
}

#[test]
fn action_url_keeps_existing_query_and_fragment() {
    assert_eq!(
        action_url("https://app.test/deck?lang=de#top", Some("abc")),
        "https://app.test/deck?lang=de&sid=abc#top"
    );
}

#[test]
fn action_url_replaces_stale_socket_id() {
    assert_eq!(action_url("/loader?sid=old&x=1", Some("new")), "/loader?x=1&sid=new");
}

#[test]
fn action_url_encodes_socket_id() {
    assert_eq!(action_url("/a", Some("a b&c")), "/a?sid=a%20b%26c");
}
