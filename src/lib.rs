//! Punchlist: a small task-management service.
//!
//! This crate provides a REST backend over a single SQLite table of tasks,
//! plus a client state layer that mirrors the server and a terminal renderer
//! for it.
//!
//! # Architecture
//!
//! Punchlist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (SQLite, in-memory)
//!
//! # Modules
//!
//! - [`todo`]: Task domain, persistence port, storage adapters, and services
//! - [`api`]: HTTP resource layer exposing the task collection
//! - [`client`]: Client state layer and terminal rendering
//! - [`config`]: Environment-driven application configuration

pub mod api;
pub mod client;
pub mod config;
pub mod todo;
