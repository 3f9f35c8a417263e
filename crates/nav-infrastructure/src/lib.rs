//! # Navigation Infrastructure
//! 
//! Storage implementations (adapters) for the navigation repository ports.

pub mod store;

pub use store::InMemoryNavigationStore;
