//! Application-wide constants

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_MAX_TREE_DEPTH: usize = 16;
pub const DEFAULT_GRAPHQL_PATH: &str = "/graphql";
pub const DEFAULT_MAX_QUERY_DEPTH: usize = 32;
pub const DEFAULT_MAX_QUERY_COMPLEXITY: usize = 2_000;
