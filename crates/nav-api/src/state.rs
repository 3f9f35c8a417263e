use nav_shared::config::AppConfig;

use crate::graphql::NavigationSchema;

#[derive(Clone)]
pub struct AppState {
    pub schema: NavigationSchema,
    pub config: AppConfig,
}
