//! Roster operations as the settings page drives them

use std::sync::Arc;

use parking_lot::RwLock;
use veggieworld_domain::{Notice, Permission, Result, Role, TeamMember, TeamMemberDraft};

use super::team::TeamRoster;
use crate::ports::Notifier;

/// Team roster service
///
/// Wraps a [`TeamRoster`] behind a lock and reports every outcome through the
/// notifier. Failed operations leave the roster unchanged.
pub struct RosterService {
    roster: RwLock<TeamRoster>,
    notifier: Arc<dyn Notifier>,
}

impl RosterService {
    pub fn new(roster: TeamRoster, notifier: Arc<dyn Notifier>) -> Self {
        Self { roster: RwLock::new(roster), notifier }
    }

    /// Snapshot of the current members in roster order
    pub fn members(&self) -> Vec<TeamMember> {
        self.roster.read().members().to_vec()
    }

    pub fn get(&self, id: &str) -> Option<TeamMember> {
        self.roster.read().get(id).cloned()
    }

    /// # Errors
    /// See [`TeamRoster::add`].
    pub fn invite(&self, draft: TeamMemberDraft) -> Result<TeamMember> {
        let outcome = self.roster.write().add(draft);
        self.report(outcome, |member| {
            Notice::success(
                "Team member invited",
                format!("{} has been invited successfully.", member.name),
            )
        })
    }

    /// # Errors
    /// See [`TeamRoster::edit`].
    pub fn update(&self, id: &str, draft: TeamMemberDraft) -> Result<TeamMember> {
        let outcome = self.roster.write().edit(id, draft);
        self.report(outcome, |member| {
            Notice::success(
                "Team member updated",
                format!("{} has been updated successfully.", member.name),
            )
        })
    }

    /// # Errors
    /// See [`TeamRoster::delete`].
    pub fn remove(&self, id: &str) -> Result<TeamMember> {
        let outcome = self.roster.write().delete(id);
        self.report(outcome, |member| {
            Notice::success("Team member removed", format!("{} has been removed.", member.name))
        })
    }

    /// # Errors
    /// See [`TeamRoster::change_role`].
    pub fn change_role(&self, id: &str, role: Role) -> Result<TeamMember> {
        let outcome = self.roster.write().change_role(id, role);
        self.report(outcome, |member| {
            Notice::success("Role updated", format!("{} is now {}.", member.name, role))
        })
    }

    /// Permission toggles are silent on success.
    ///
    /// # Errors
    /// See [`TeamRoster::set_permission`].
    pub fn set_permission(&self, id: &str, permission: Permission, granted: bool) -> Result<TeamMember> {
        let outcome = self.roster.write().set_permission(id, permission, granted);
        if let Err(err) = &outcome {
            self.notifier.notify(Notice::from(err));
        }
        outcome
    }

    fn report<F>(&self, outcome: Result<TeamMember>, success: F) -> Result<TeamMember>
    where
        F: FnOnce(&TeamMember) -> Notice,
    {
        match &outcome {
            Ok(member) => self.notifier.notify(success(member)),
            Err(err) => self.notifier.notify(Notice::from(err)),
        }
        outcome
    }
}
