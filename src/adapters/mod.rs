//! Adapters implementing the domain ports against real infrastructure.

pub mod notify;
pub mod sqlite;
