//! In-process document store implementations

mod item_repo_impl;
mod store;
mod tree_repo_impl;

pub use store::InMemoryNavigationStore;
