//! Repository traits (ports)

pub mod navigation_item_repository;
pub mod navigation_tree_repository;

pub use navigation_item_repository::NavigationItemRepository;
pub use navigation_tree_repository::NavigationTreeRepository;

#[cfg(test)]
pub use navigation_item_repository::MockNavigationItemRepository;
#[cfg(test)]
pub use navigation_tree_repository::MockNavigationTreeRepository;
