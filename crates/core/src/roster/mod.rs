//! Team roster management

pub mod service;
pub mod team;

pub use service::RosterService;
pub use team::TeamRoster;
