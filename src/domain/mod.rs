//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types (display-only copies of server state)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `From` conversions from wire to domain types
//! - `client.rs` — Sub-client with HTTP methods and rendering hooks

pub mod inventory;
pub mod profile;
pub mod shop;
