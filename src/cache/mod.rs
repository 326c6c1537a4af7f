// Local persistence for the gtasks CLI.
// Holds the title/id resolution cache and the filesystem paths it lives under.

#![allow(dead_code)]

pub mod paths;
pub mod store;

pub use store::TasklistCache;
