//! Task management for Punchlist.
//!
//! This module owns the single entity of the system: a task with a title,
//! optional description, completion flag, priority, and creation/update
//! timestamps. It covers creating tasks with defaulted fields, partial
//! updates, status toggling, single and transactional bulk deletion, and
//! filtered/sorted listing. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
