//! Domain services (business logic)

pub mod navigation_service;

pub use navigation_service::{
    DynNavigationService, NavigationItemUpdate, NavigationService, NavigationTreeUpdate,
    NewNavigationItem, NewNavigationTree, ResolvedNavigationTree,
};
