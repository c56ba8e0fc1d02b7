//! Storage abstractions for service layer
//!
//! Contains reusable file-backed stores that persist whole collections as
//! JSON and reload them on every access.

pub mod json_list_store;
