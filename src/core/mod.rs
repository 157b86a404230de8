//! # Core Application Logic
//!
//! HealthChat's business logic. It knows nothing about any specific UI
//! technology or about HTTP.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │    API     │
//!            │  Adapter   │            │  (reqwest) │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and chat phase
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`conversation`]: Messages and the append-only history
//! - [`emphasis`]: `**marker**` → styled segment parsing
//! - [`nav`]: Navigation bar toggle and layout decision
//! - [`config`]: Layered configuration (file → env → CLI)

pub mod action;
pub mod config;
pub mod conversation;
pub mod emphasis;
pub mod nav;
pub mod state;
