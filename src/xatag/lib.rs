//! # Xatag Architecture
//!
//! Xatag is a **UI-agnostic file-tagging library**: tags are key/value
//! pairs stored in filesystem extended attributes, and the CLI is just one
//! client of the library.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles exit codes     │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Batches over file lists, isolating per-file failures     │
//! │  - Returns structured Result<CmdResult> values              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, set, set-all, delete, delete-all, copy, list, check │
//! │  - Warnings are data (CmdMessage), never printed here       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract XattrStore trait over a file's attribute table  │
//! │  - FsStore (production), InMemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Encoding
//!
//! Each tag key owns one extended attribute under the
//! `user.org.xatag.tags` namespace; the attribute value packs the key's
//! value set as a sorted, `;`-separated string. See [`codec`] and
//! [`attributes`] for the two halves of that contract.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` types, and never touches stdout/stderr or the process exit
//! code. Warnings travel as [`commands::CmdMessage`] values so any client
//! can render (or suppress) them.
//!
//! ## Concurrency
//!
//! Single-threaded and synchronous. The attribute table is shared mutable
//! OS state: no locking, no compare-and-swap, no cross-key atomicity. A
//! concurrent writer or a crash mid-operation can leave a partial update;
//! last writer wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: The mutation engine, one module per operation
//! - [`codec`]: Encoding of one attribute slot, value normalization
//! - [`attributes`]: Tag key ↔ namespaced attribute name mapping
//! - [`tag_dict`]: Pure set algebra (merge, subtract, select)
//! - [`store`]: Attribute-table abstraction and implementations
//! - [`model`]: Core data types (`Tag`, `FileTags`)
//! - [`config`]: Config file and the known-tags registry
//! - [`indexer`]: Search-index refresh hook
//! - [`error`]: Error types

pub mod api;
pub mod attributes;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod indexer;
pub mod model;
pub mod store;
pub mod tag_dict;
