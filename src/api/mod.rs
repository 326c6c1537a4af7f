// Google Tasks API module.
// Provides the HTTP client, typed endpoints, pagination, and wire types.

#![allow(dead_code, unused_imports)]

pub mod client;
pub mod endpoints;
pub mod pagination;
pub mod types;

pub use client::TasksClient;
pub use pagination::{Page, PageSource, list_all};
pub use types::*;
