//! Integration tests for the team roster service

mod support;

use std::sync::Arc;

use support::fixtures::member;
use support::ports::RecordingNotifier;
use veggieworld_core::{RosterService, TeamRoster};
use veggieworld_domain::constants::PRIMARY_ADMIN_ID;
use veggieworld_domain::{
    DashboardError, MemberStatus, NoticeVariant, Permission, Role, TeamMemberDraft,
};

fn service(notifier: &Arc<RecordingNotifier>) -> RosterService {
    let roster = TeamRoster::new(
        vec![
            member("TM-001", "Adebayo", Role::Admin),
            member("TM-002", "Ngozi", Role::Manager),
            member("TM-003", "Tunde", Role::Staff),
        ],
        PRIMARY_ADMIN_ID,
    )
    .unwrap();
    RosterService::new(roster, notifier.clone())
}

// ============================================================================
// Invite and edit
// ============================================================================

#[test]
fn test_invite_notifies_and_appends() {
    let notifier = Arc::new(RecordingNotifier::default());
    let roster = service(&notifier);

    let invited =
        roster.invite(TeamMemberDraft::new("Kemi Ade", "kemi@veggieworld.ng", Role::Manager)).unwrap();

    assert_eq!(invited.status, MemberStatus::Invited);
    assert_eq!(roster.members().last(), Some(&invited));
    let notice = notifier.last().unwrap();
    assert_eq!(notice.title, "Team member invited");
    assert_eq!(notice.description, "Kemi Ade has been invited successfully.");
}

#[test]
fn test_repeated_invites_get_distinct_ids() {
    let notifier = Arc::new(RecordingNotifier::default());
    let roster = service(&notifier);

    for i in 0..25 {
        roster
            .invite(TeamMemberDraft::new(format!("Member {i}"), format!("m{i}@veggieworld.ng"), Role::Staff))
            .unwrap();
    }

    let mut ids: Vec<_> = roster.members().into_iter().map(|m| m.id).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn test_invite_with_missing_email_is_rejected() {
    let notifier = Arc::new(RecordingNotifier::default());
    let roster = service(&notifier);

    let result = roster.invite(TeamMemberDraft::new("Kemi", "", Role::Staff));

    assert!(matches!(result, Err(DashboardError::Validation { .. })));
    assert_eq!(roster.members().len(), 3);
    let notice = notifier.last().unwrap();
    assert_eq!(notice.variant, NoticeVariant::Destructive);
    assert_eq!(notice.description, "Name and email are required fields");
}

#[test]
fn test_update_keeps_id() {
    let notifier = Arc::new(RecordingNotifier::default());
    let roster = service(&notifier);

    let updated = roster
        .update("TM-003", TeamMemberDraft::new("Tunde B.", "tunde@veggieworld.ng", Role::Manager))
        .unwrap();

    assert_eq!(updated.id, "TM-003");
    assert_eq!(updated.permissions, Role::Manager.default_permissions());
    assert_eq!(notifier.last().unwrap().title, "Team member updated");
}

// ============================================================================
// Delete and role changes
// ============================================================================

#[test]
fn test_primary_admin_cannot_be_removed() {
    let notifier = Arc::new(RecordingNotifier::default());
    let roster = service(&notifier);
    let before = roster.members();

    let result = roster.remove("TM-001");

    assert_eq!(result, Err(DashboardError::ProtectedMember("TM-001".to_string())));
    assert_eq!(roster.members(), before);
    assert!(notifier.last().unwrap().is_error());
}

#[test]
fn test_remove_other_member_removes_exactly_one() {
    let notifier = Arc::new(RecordingNotifier::default());
    let roster = service(&notifier);

    roster.remove("TM-002").unwrap();

    let ids: Vec<_> = roster.members().into_iter().map(|m| m.id).collect();
    assert_eq!(ids, vec!["TM-001", "TM-003"]);
    assert_eq!(notifier.last().unwrap().title, "Team member removed");
}

#[test]
fn test_role_change_discards_custom_permissions() {
    let notifier = Arc::new(RecordingNotifier::default());
    let roster = service(&notifier);

    roster.set_permission("TM-002", Permission::SettingsManage, true).unwrap();
    let changed = roster.change_role("TM-002", Role::Staff).unwrap();

    assert_eq!(changed.permissions, Role::Staff.default_permissions());
    assert!(!changed.has_permission(Permission::SettingsManage));

    let admin = roster.change_role("TM-003", Role::Admin).unwrap();
    assert_eq!(admin.permissions.len(), Permission::ALL.len());
}
