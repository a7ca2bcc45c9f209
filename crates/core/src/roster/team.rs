//! In-memory team roster
//!
//! The roster is the only mutable record collection. Ids are assigned on
//! insert and never change; the primary administrator can never be removed.

use tracing::{debug, info, warn};
use uuid::Uuid;
use veggieworld_domain::constants::{PRIMARY_ADMIN_ID, TEAM_MEMBER_ID_PREFIX};
use veggieworld_domain::{
    DashboardError, MemberStatus, Permission, Result, Role, TeamMember, TeamMemberDraft,
};

use crate::store::ensure_unique_ids;

/// Ordered team roster with a protected primary administrator
#[derive(Debug, Clone)]
pub struct TeamRoster {
    members: Vec<TeamMember>,
    protected_id: String,
}

impl Default for TeamRoster {
    fn default() -> Self {
        Self { members: Vec::new(), protected_id: PRIMARY_ADMIN_ID.to_string() }
    }
}

impl TeamRoster {
    /// Create a roster from loaded members.
    ///
    /// # Errors
    /// Returns `DashboardError::Validation` if two members share an id.
    pub fn new(members: Vec<TeamMember>, protected_id: impl Into<String>) -> Result<Self> {
        ensure_unique_ids(&members)?;
        Ok(Self { members, protected_id: protected_id.into() })
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TeamMember> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn protected_id(&self) -> &str {
        &self.protected_id
    }

    pub fn is_protected(&self, id: &str) -> bool {
        self.protected_id == id
    }

    /// Invite a new member.
    ///
    /// The member gets a fresh id and starts as `invited`. Permissions come
    /// from the draft, or from the role when the draft leaves them unset.
    ///
    /// # Errors
    /// Returns `DashboardError::Validation` for a blank name or email.
    pub fn add(&mut self, draft: TeamMemberDraft) -> Result<TeamMember> {
        draft.validate()?;

        let member = TeamMember {
            id: self.fresh_id(),
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            role: draft.role,
            permissions: draft.resolved_permissions(),
            status: MemberStatus::Invited,
        };

        info!(id = %member.id, role = %member.role, "team_member_added");
        self.members.push(member.clone());
        Ok(member)
    }

    /// Replace a member's editable fields, keeping id and status.
    ///
    /// # Errors
    /// - `DashboardError::Validation` for a blank name or email.
    /// - `DashboardError::NotFound` if no member has `id`.
    pub fn edit(&mut self, id: &str, draft: TeamMemberDraft) -> Result<TeamMember> {
        draft.validate()?;
        let member = self.member_mut(id)?;

        member.name = draft.name.trim().to_string();
        member.email = draft.email.trim().to_string();
        member.permissions = draft.resolved_permissions();
        member.role = draft.role;

        debug!(id, role = %member.role, "team_member_edited");
        Ok(member.clone())
    }

    /// Remove a member.
    ///
    /// # Errors
    /// - `DashboardError::ProtectedMember` for the primary administrator. The
    ///   roster is left unchanged.
    /// - `DashboardError::NotFound` if no member has `id`.
    pub fn delete(&mut self, id: &str) -> Result<TeamMember> {
        if self.is_protected(id) {
            warn!(id, "protected_member_delete_rejected");
            return Err(DashboardError::ProtectedMember(id.to_string()));
        }

        let index = self
            .members
            .iter()
            .position(|member| member.id == id)
            .ok_or_else(|| not_found(id))?;

        let removed = self.members.remove(index);
        info!(id, "team_member_removed");
        Ok(removed)
    }

    /// Set a member's role and replace their permissions with the role
    /// defaults.
    ///
    /// # Errors
    /// Returns `DashboardError::NotFound` if no member has `id`.
    pub fn change_role(&mut self, id: &str, role: Role) -> Result<TeamMember> {
        let member = self.member_mut(id)?;
        member.role = role;
        member.permissions = role.default_permissions();

        debug!(id, role = %role, "team_member_role_changed");
        Ok(member.clone())
    }

    /// Grant or revoke a single permission.
    ///
    /// # Errors
    /// Returns `DashboardError::NotFound` if no member has `id`.
    pub fn set_permission(
        &mut self,
        id: &str,
        permission: Permission,
        granted: bool,
    ) -> Result<TeamMember> {
        let member = self.member_mut(id)?;
        if granted {
            member.permissions.insert(permission);
        } else {
            member.permissions.remove(&permission);
        }
        Ok(member.clone())
    }

    fn member_mut(&mut self, id: &str) -> Result<&mut TeamMember> {
        self.members.iter_mut().find(|member| member.id == id).ok_or_else(|| not_found(id))
    }

    fn fresh_id(&self) -> String {
        loop {
            let suffix = Uuid::new_v4().simple().to_string();
            let candidate = format!("{}{}", TEAM_MEMBER_ID_PREFIX, suffix[..8].to_uppercase());
            if self.get(&candidate).is_none() && !self.is_protected(&candidate) {
                return candidate;
            }
        }
    }
}

fn not_found(id: &str) -> DashboardError {
    DashboardError::NotFound(format!("Team member '{id}'"))
}
