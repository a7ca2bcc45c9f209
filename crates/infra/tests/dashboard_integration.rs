//! Integration tests for the wired dashboard context
//!
//! Runs page searches, exports and roster edits against the seed fixtures
//! with a real filesystem sink.

use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::TempDir;
use veggieworld_core::export::{parse_csv, ExportRequest};
use veggieworld_core::search::ChatbotLogFilter;
use veggieworld_core::FixedClock;
use veggieworld_domain::{
    ChatbotLogKind, Config, DashboardError, ExportFormat, NoticeVariant, Role, TeamMemberDraft,
};
use veggieworld_infra::{DashboardContext, FileSystemDownloadSink};

fn context(dir: &TempDir) -> DashboardContext {
    context_with(dir, |_| {})
}

fn context_with(dir: &TempDir, adjust: impl FnOnce(&mut Config)) -> DashboardContext {
    let mut config = Config::default();
    config.export.output_dir = dir.path().display().to_string();
    config.export.sample_rows = 15;
    adjust(&mut config);

    let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 11, 5).unwrap());
    DashboardContext::with_ports(
        config.clone(),
        Arc::new(FileSystemDownloadSink::from_config(&config.export)),
        Arc::new(clock),
    )
    .unwrap()
}

// ============================================================================
// Page search
// ============================================================================

#[test]
fn test_orders_page_search() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);

    let ids: Vec<_> = ctx.orders.search("chioma").iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["ORD-7829"]);
    assert_eq!(ctx.orders.search("").len(), ctx.orders.len());
}

#[test]
fn test_system_logs_search_details_and_user() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);

    let ids: Vec<_> = ctx.system_logs.search("ORD-7820").iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["LOG-8999"]);
    assert_eq!(ctx.system_logs.search("SYSTEM").len(), 3);
}

#[test]
fn test_chatbot_fraud_facet() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);

    let fraud = ChatbotLogFilter { kind: Some(ChatbotLogKind::Fraud), status: None };
    let ids: Vec<_> =
        ctx.chatbot_logs.query("unknown", &fraud).iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["LOG-9821", "LOG-9818"]);
}

// ============================================================================
// Export to disk
// ============================================================================

#[test]
fn test_orders_export_lands_on_disk() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);

    let receipt = ctx.exports.export_orders(&ExportRequest::new(ExportFormat::Csv)).unwrap();

    let path = dir.path().join("orders-export-2024-11-05.csv");
    assert_eq!(receipt.location.as_deref(), Some(path.as_path()));
    let table = parse_csv(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(table.rows.len(), 15);

    let notices = ctx.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Export Successful");
    assert!(ctx.take_notices().is_empty());
}

#[test]
fn test_default_request_uses_configured_format() {
    let dir = TempDir::new().unwrap();
    let ctx = context_with(&dir, |config| config.export.default_format = ExportFormat::Json);

    let request = ctx.default_export_request();
    assert_eq!(request.format, ExportFormat::Json);
    ctx.exports.export_orders(&request).unwrap();

    let files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(files, vec!["orders-export-2024-11-05.json"]);
    assert_eq!(ctx.take_notices()[0].description, "Orders exported in JSON format.");
}

#[test]
fn test_filtered_customers_export_as_json() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);

    let visible: Vec<_> = ctx.customers.search("orders@").into_iter().cloned().collect();
    ctx.exports.export_records(&visible, ExportFormat::Json).unwrap();

    let text = std::fs::read_to_string(dir.path().join("orders-export-2024-11-05.json")).unwrap();
    let parsed: Vec<veggieworld_domain::Customer> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, visible);
    assert_eq!(parsed.len(), 2);
}

#[test]
fn test_pdf_export_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);

    let result = ctx.exports.export_orders(&ExportRequest::new(ExportFormat::Pdf));

    assert!(matches!(result, Err(DashboardError::UnsupportedFormat(_))));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    assert_eq!(ctx.take_notices()[0].variant, NoticeVariant::Blocking);
}

// ============================================================================
// Roster
// ============================================================================

#[test]
fn test_seeded_admin_is_protected() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);

    let result = ctx.roster.remove("TM-001");
    assert!(matches!(result, Err(DashboardError::ProtectedMember(_))));
    assert!(ctx.roster.get("TM-001").is_some());
}

#[test]
fn test_invite_then_remove() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);
    let before = ctx.roster.members().len();

    let invited = ctx
        .roster
        .invite(TeamMemberDraft::new("Bisi Ade", "bisi@veggieworld.com", Role::Staff))
        .unwrap();
    assert_eq!(ctx.roster.members().len(), before + 1);

    ctx.roster.remove(&invited.id).unwrap();
    assert_eq!(ctx.roster.members().len(), before);

    let titles: Vec<_> = ctx.take_notices().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, vec!["Team member invited", "Team member removed"]);
}
