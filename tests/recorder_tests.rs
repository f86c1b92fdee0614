use std::sync::Arc;

use healthguard::monitor::JournalObserver;
use healthguard::telemetry::{
    count_sensitive_terms, Component, FixedClock, FlowDetails, FlowKind, FlowRecord, FlowRecorder, FlowStep,
    RecordStatus, Subsystem, SystemClock,
};

const FIXED_INSTANT: &str = "2024-03-01T09:30:00.000000";

fn recorder_with_journal() -> (FlowRecorder, Arc<JournalObserver>) {
    let journal = Arc::new(JournalObserver::new());
    let recorder = FlowRecorder::new(journal.clone()).with_clock(Arc::new(FixedClock::new(FIXED_INSTANT)));
    (recorder, journal)
}

#[test]
fn test_fixed_durations_per_action() {
    let (recorder, _) = recorder_with_journal();

    assert_eq!(recorder.user_authentication("u1", "login", None).duration_ms, 150);
    assert_eq!(recorder.document_upload("u1", "a.pdf", 10, "application/pdf").duration_ms, 2500);
    assert_eq!(recorder.compliance_scan("u1", "doc", "HIPAA", "patient").duration_ms, 3000);
    assert_eq!(recorder.database_operation("u1", "INSERT", "t", 1).duration_ms, 50);
    assert_eq!(recorder.training_progress("u1", "HIPAA Compliance", 75).duration_ms, 100);
    assert_eq!(recorder.notification("u1", "scan_complete", "done", "email").duration_ms, 200);
}

#[test]
fn test_authentication_record_shape() {
    let (recorder, _) = recorder_with_journal();
    let record = recorder.user_authentication("demo_user_123", "login", None);

    assert_eq!(record.timestamp, FIXED_INSTANT);
    assert_eq!(record.user_id, "demo_user_123");
    assert_eq!(record.action, "login", "Auth action is whatever the caller names");
    assert_eq!(record.component, Component::Authentication);
    assert_eq!(record.subsystem, Subsystem::SupabaseAuth);
    assert_eq!(record.status, RecordStatus::Success);
    assert_eq!(record.flow_step, FlowStep::UserAuthentication);
    assert_eq!(
        record.data_flow,
        vec!["user_input", "supabase_auth", "session_creation", "dashboard_access"]
    );
    assert_eq!(record.details, FlowDetails::Authentication {});
}

#[test]
fn test_authentication_echoes_supplied_timestamp() {
    let (recorder, _) = recorder_with_journal();

    // Not even ISO-8601: it is echoed, not parsed
    let record = recorder.user_authentication("u1", "logout", Some("yesterday at noon"));
    assert_eq!(record.timestamp, "yesterday at noon");
    assert_eq!(record.action, "logout");
}

#[test]
fn test_authentication_empty_timestamp_uses_clock() {
    let (recorder, _) = recorder_with_journal();

    let record = recorder.user_authentication("u1", "login", Some(""));
    assert_eq!(record.timestamp, FIXED_INSTANT, "Empty timestamp counts as not supplied");
}

#[test]
fn test_fixed_action_tags() {
    let (recorder, _) = recorder_with_journal();

    assert_eq!(recorder.document_upload("u", "d", 1, "t").action, "document_upload");
    assert_eq!(recorder.compliance_scan("u", "d", "s", "").action, "compliance_scan");
    assert_eq!(recorder.database_operation("u", "o", "t", 1).action, "database_operation");
    assert_eq!(recorder.training_progress("u", "m", 1).action, "training_progress");
    assert_eq!(recorder.notification("u", "n", "m", "c").action, "notification_sent");
}

#[test]
fn test_data_flow_lengths_match_kind() {
    let kinds = [
        (FlowKind::Authentication, 4),
        (FlowKind::DocumentUpload, 5),
        (FlowKind::ComplianceScan, 5),
        (FlowKind::DatabaseOperation, 4),
        (FlowKind::TrainingProgress, 4),
        (FlowKind::Notification, 4),
    ];

    for (kind, expected) in kinds {
        let stages = kind.data_flow();
        assert_eq!(stages.len(), expected, "{:?} stage count", kind);
        assert!((3..=5).contains(&stages.len()));
    }
}

#[test]
fn test_scan_counts_sensitive_terms() {
    assert_eq!(count_sensitive_terms("Patient medical record"), 2);
    assert_eq!(count_sensitive_terms("The weather is nice"), 0);
    assert_eq!(count_sensitive_terms("HEALTH health Health"), 3, "Matching is case-insensitive");
    assert_eq!(count_sensitive_terms(""), 0);

    // Punctuation stays attached to the token, so "patient," is not a match
    assert_eq!(count_sensitive_terms("patient, medical."), 0);

    let sample = "This document contains patient medical information and must comply with HIPAA regulations.";
    assert_eq!(count_sensitive_terms(sample), 2);
}

#[test]
fn test_scan_record_carries_issue_count() {
    let (recorder, _) = recorder_with_journal();
    let record = recorder.compliance_scan("u1", "doc_123", "HIPAA", "patient\thealth\nrecords");

    assert_eq!(record.issues_found(), Some(2));
    match &record.details {
        FlowDetails::ComplianceScan { document_id, scan_type, issues_found } => {
            assert_eq!(document_id, "doc_123");
            assert_eq!(scan_type, "HIPAA");
            assert_eq!(*issues_found, 2);
        }
        other => panic!("Wrong details for scan: {:?}", other),
    }
}

#[test]
fn test_non_scan_records_have_no_issue_count() {
    let (recorder, _) = recorder_with_journal();
    assert_eq!(recorder.user_authentication("u", "login", None).issues_found(), None);
    assert_eq!(recorder.database_operation("u", "INSERT", "t", 1).issues_found(), None);
}

#[test]
fn test_inputs_are_not_validated() {
    let (recorder, _) = recorder_with_journal();

    let upload = recorder.document_upload("", "", -5, "");
    assert_eq!(upload.user_id, "");
    assert_eq!(
        upload.details,
        FlowDetails::DocumentUpload {
            document_name: String::new(),
            file_size: -5,
            file_type: String::new(),
        }
    );

    let training = recorder.training_progress("u", "Unknown Module", -20);
    assert_eq!(training.duration_ms, 100);

    let db = recorder.database_operation("u", "TRUNCATE", "nowhere", 0);
    assert_eq!(db.duration_ms, 50);
}

#[test]
fn test_identical_inputs_differ_only_in_timestamp() {
    let journal = Arc::new(JournalObserver::new());
    let recorder = FlowRecorder::new(journal).with_clock(Arc::new(SystemClock));

    let mut first = recorder.compliance_scan("u1", "doc_1", "GDPR", "medical data");
    let second = recorder.compliance_scan("u1", "doc_1", "GDPR", "medical data");

    first.timestamp = second.timestamp.clone();
    assert_eq!(first, second);
}

#[test]
fn test_record_json_field_names() {
    let (recorder, _) = recorder_with_journal();
    let record = recorder.database_operation("u1", "INSERT", "compliance_reports", 1);

    let json = serde_json::to_value(&record).unwrap();
    let object = json.as_object().unwrap();

    // Variant fields sit next to the common ones, not under a nested key
    for key in [
        "timestamp", "user_id", "action", "component", "subsystem", "status", "flow_step", "duration_ms",
        "data_flow", "operation", "table", "record_count",
    ] {
        assert!(object.contains_key(key), "missing key {}", key);
    }
    assert_eq!(object.len(), 12);
    assert_eq!(json["component"], "database");
    assert_eq!(json["subsystem"], "supabase_postgres");
    assert_eq!(json["status"], "success");
    assert_eq!(json["flow_step"], "data_persistence");
}

#[test]
fn test_logged_record_parses_back() {
    let (recorder, _) = recorder_with_journal();

    let scan = recorder.compliance_scan("u1", "doc_9", "GDPR", "health");
    let parsed: FlowRecord = serde_json::from_str(&serde_json::to_string_pretty(&scan).unwrap()).unwrap();
    assert_eq!(parsed, scan);

    let auth = recorder.user_authentication("u1", "login", None);
    let parsed: FlowRecord = serde_json::from_str(&serde_json::to_string(&auth).unwrap()).unwrap();
    assert_eq!(parsed.details, FlowDetails::Authentication {});
}

#[test]
fn test_each_record_is_reported_once() {
    let (recorder, journal) = recorder_with_journal();

    recorder.user_authentication("demo_user_123", "login", None);
    recorder.notification("demo_user_123", "scan_complete", "hi", "sms");

    let records = journal.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].component, Component::Notifications);

    let messages = journal.messages();
    assert_eq!(
        messages,
        vec![
            "Authentication: User demo_user_123 performed login".to_string(),
            "Notification: scan_complete sent to user demo_user_123 via sms".to_string(),
        ]
    );
}
