use std::sync::Arc;

use profile_core::domain::UserDefaults;
use profile_core::repositories::UserRepository;
use profile_core::services::UserService;
use profile_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService<dyn UserRepository>>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(user_repo: Arc<dyn UserRepository>, config: AppConfig) -> Self {
        let defaults = UserDefaults {
            first_name: config.users.default_first_name.clone(),
            last_name: config.users.default_last_name.clone(),
        };

        Self {
            users: Arc::new(UserService::new(user_repo, defaults)),
            config,
        }
    }
}
