//! # Navigation Core - Domain Module
//! 
//! Navigation items and the trees that arrange them.

pub mod navigation_item;
pub mod navigation_tree;

pub use navigation_item::{NavigationItem, NavigationItemContent, NavigationItemData, Metadata};
pub use navigation_tree::{NavigationTree, NavigationTreeItem, NavigationTreeSnapshot};
