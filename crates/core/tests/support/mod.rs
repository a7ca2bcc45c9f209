//! Shared test helpers for `veggieworld-core` integration tests.
//!
//! In-memory port fakes and small record builders so the suites can focus on
//! behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod ports;
