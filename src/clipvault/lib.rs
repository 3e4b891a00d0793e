//! # Clipvault Architecture
//!
//! Clipvault is the **engine** of a web clipper that files pages into an
//! Obsidian vault: it validates the user's settings, expands note templates,
//! and produces the `obsidian://new` request the host hands to the vault
//! application. It is a library that happens to have a CLI client, not the
//! other way around.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, prints URIs and messages               │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: loads Settings, invokes the engine          │
//! │  - Generic over SettingsStore                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (policy, grammar, template, path, request)          │
//! │  - Pure, synchronous functions over plain values            │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Settings Storage (store/)                                  │
//! │  - Abstract SettingsStore capability (async key-value)      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in the Engine
//!
//! Everything from `request.rs` inward takes `Settings` and `ClipContext` as
//! plain values and returns plain values (`Result<ClipRequest>`). The engine
//! never touches the settings store; callers load settings through the store
//! capability and pass them in. This makes the engine trivially safe to
//! invoke from any concurrency context, and means the same core could sit
//! behind a browser extension, a REST endpoint, or the bundled CLI.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`request`]: Composes validation, templating, and path resolution into
//!   the final [`model::ClipRequest`]
//! - [`policy`]: Filesystem character policy for names
//! - [`grammar`]: Folder template grammar (`(segment/)*{title}`)
//! - [`template`]: Note content placeholder expansion
//! - [`path`]: Folder template → relative note path
//! - [`settings`]: The persisted [`settings::Settings`] value and its store keys
//! - [`store`]: Settings storage capability and implementations
//! - [`model`]: Core data types (`ClipContext`, `ClipRequest`)
//! - [`error`]: Error types

pub mod api;
pub mod error;
pub mod grammar;
pub mod model;
pub mod path;
pub mod policy;
pub mod request;
pub mod settings;
pub mod store;
pub mod template;
