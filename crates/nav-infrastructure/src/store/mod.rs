//! Document store module

pub mod memory;

pub use memory::InMemoryNavigationStore;
