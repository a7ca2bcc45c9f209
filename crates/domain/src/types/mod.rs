//! Domain types and models
//!
//! Flat records backing each back-office page, plus the closed enums they
//! reference. Records are immutable for the life of a page except team
//! members, which the roster edits in place.

pub mod badge;
pub mod customer;
pub mod export;
pub mod logs;
pub mod notice;
pub mod order;
pub mod team;

// Re-export record types for convenience
pub use badge::{render_badge, Badge, BadgeStyle};
pub use customer::{Customer, CustomerStatus, CustomerType};
pub use export::{DeliveryReceipt, ExportFormat, ExportPayload};
pub use logs::{ChatbotLog, ChatbotLogKind, ChatbotLogStatus, LogLevel, SystemLog};
pub use notice::{Notice, NoticeVariant};
pub use order::{Order, OrderSource, OrderStatus, PaymentStatus};
pub use team::{MemberStatus, Permission, Role, TeamMember, TeamMemberDraft};
