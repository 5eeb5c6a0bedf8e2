//! Namespaced object-storage facade.
//!
//! `client::ObjectClient` exposes upload/download/list/copy/delete and
//! presigned-URL operations over any `backend::ObjectBackend`, mapping
//! every logical key into a fixed namespace on the way down.

pub mod backend;
pub mod client;
pub mod config;
