//! # specfilter
//!
//! A small library for selecting records with composable predicates,
//! plus a binary that demonstrates it. The point it illustrates: filtering
//! code stays closed for modification while new conditions are added as
//! new [`spec::Specification`] implementations.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs, print.rs)                        │
//! │  - Parses arguments, loads config, prints results           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (spec.rs, filter.rs, attributes.rs)                   │
//! │  - Pure predicates and a lazy filter over borrowed data     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`spec`]: the `Specification` trait, primitives, compounds
//! - [`filter`]: lazy `filter` and the `Filter` trait
//! - [`attributes`]: parsing `attr=value` terms into specifications
//! - [`model`]: `Country`, `Continent`, `Language`
//! - [`commands`]: list, filter and demo commands
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod attributes;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod spec;
