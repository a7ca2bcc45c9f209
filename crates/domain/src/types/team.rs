//! Team member types
//!
//! Team members are the only records the back office mutates. Permissions are
//! a closed set; each role carries a default set that replaces a member's
//! permissions whenever the role changes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::badge::{Badge, BadgeStyle, GRAY_SOFT, GREEN_SOFT, YELLOW_SOFT};
use crate::errors::{DashboardError, Result};

/// Member of the operations team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub permissions: BTreeSet<Permission>,
    pub status: MemberStatus,
}

impl TeamMember {
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

/// Form submission for inviting or editing a member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Explicit permission selection; `None` means the role's defaults.
    #[serde(default)]
    pub permissions: Option<BTreeSet<Permission>>,
}

impl TeamMemberDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self { name: name.into(), email: email.into(), role, permissions: None }
    }

    pub fn with_permissions(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.permissions = Some(permissions.into_iter().collect());
        self
    }

    /// Check required fields.
    ///
    /// # Errors
    /// Returns `DashboardError::Validation` when the name or email is blank.
    /// The email is not otherwise checked.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            let field = if self.name.trim().is_empty() { "name" } else { "email" };
            return Err(DashboardError::validation(field, "Name and email are required fields"));
        }

        Ok(())
    }

    /// Permissions the member ends up with after submission.
    pub fn resolved_permissions(&self) -> BTreeSet<Permission> {
        self.permissions.clone().unwrap_or_else(|| self.role.default_permissions())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    #[default]
    Staff,
}

crate::impl_record_enum_conversions!(Role {
    Admin => "admin",
    Manager => "manager",
    Staff => "staff",
});

impl Role {
    /// Default permission set for the role.
    pub fn default_permissions(&self) -> BTreeSet<Permission> {
        match self {
            Self::Admin => Permission::ALL.iter().copied().collect(),
            Self::Manager => [
                Permission::OrdersView,
                Permission::OrdersCreate,
                Permission::OrdersEdit,
                Permission::InventoryView,
                Permission::InventoryManage,
                Permission::CustomersView,
                Permission::CustomersManage,
                Permission::ReportsView,
            ]
            .into_iter()
            .collect(),
            Self::Staff => {
                [Permission::OrdersView, Permission::InventoryView, Permission::CustomersView]
                    .into_iter()
                    .collect()
            }
        }
    }
}

/// Fine-grained capability granted to a team member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    OrdersView,
    OrdersCreate,
    OrdersEdit,
    InventoryView,
    InventoryManage,
    CustomersView,
    CustomersManage,
    ReportsView,
    SettingsView,
    SettingsManage,
    TeamManage,
}

crate::impl_record_enum_conversions!(Permission {
    OrdersView => "orders_view",
    OrdersCreate => "orders_create",
    OrdersEdit => "orders_edit",
    InventoryView => "inventory_view",
    InventoryManage => "inventory_manage",
    CustomersView => "customers_view",
    CustomersManage => "customers_manage",
    ReportsView => "reports_view",
    SettingsView => "settings_view",
    SettingsManage => "settings_manage",
    TeamManage => "team_manage",
});

impl Permission {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OrdersView => "View Orders",
            Self::OrdersCreate => "Create Orders",
            Self::OrdersEdit => "Edit Orders",
            Self::InventoryView => "View Inventory",
            Self::InventoryManage => "Manage Inventory",
            Self::CustomersView => "View Customers",
            Self::CustomersManage => "Manage Customers",
            Self::ReportsView => "View Reports",
            Self::SettingsView => "View Settings",
            Self::SettingsManage => "Manage Settings",
            Self::TeamManage => "Manage Team",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::OrdersView => "Can view all orders",
            Self::OrdersCreate => "Can create new orders",
            Self::OrdersEdit => "Can edit existing orders",
            Self::InventoryView => "Can view inventory items",
            Self::InventoryManage => "Can add and update inventory",
            Self::CustomersView => "Can view customer details",
            Self::CustomersManage => "Can add and edit customers",
            Self::ReportsView => "Can access reports",
            Self::SettingsView => "Can view system settings",
            Self::SettingsManage => "Can modify system settings",
            Self::TeamManage => "Can add and edit team members",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Invited,
    Inactive,
}

crate::impl_record_enum_conversions!(MemberStatus {
    Active => "active",
    Invited => "invited",
    Inactive => "inactive",
});

impl Badge for MemberStatus {
    fn badge(&self) -> BadgeStyle {
        match self {
            Self::Active => BadgeStyle::new("Active", GREEN_SOFT),
            Self::Invited => BadgeStyle::new("Invited", YELLOW_SOFT),
            Self::Inactive => BadgeStyle::new("Inactive", GRAY_SOFT),
        }
    }
}
