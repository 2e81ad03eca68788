// ============================================================================
// Profile Core - User Entity
// File: crates/profile-core/src/domain/user.rs
// ============================================================================
//! User domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use profile_shared::constants::{ADMIN_ID, ADMIN_LOGIN};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Nil until the store assigns one.
    pub id: Uuid,
    pub login: String,
    pub first_name: String,
    pub last_name: String,

    /// Number of finished games
    pub games_played: u32,
    /// Game the user currently takes part in
    pub current_game_id: Option<Uuid>,
}

impl User {
    /// A record that has not been stored yet.
    pub fn new(login: String, first_name: String, last_name: String) -> Self {
        Self::with_id(Uuid::nil(), login, first_name, last_name)
    }

    pub fn with_id(id: Uuid, login: String, first_name: String, last_name: String) -> Self {
        Self {
            id,
            login,
            first_name,
            last_name,
            games_played: 0,
            current_game_id: None,
        }
    }

    pub fn admin() -> Self {
        Self {
            id: Uuid::parse_str(ADMIN_ID).unwrap_or_default(),
            login: ADMIN_LOGIN.to_string(),
            first_name: "James".to_string(),
            last_name: "Halliday".to_string(),
            games_played: 999,
            current_game_id: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_nil()
    }

    /// Leaves the current game, counting it as played.
    pub fn exit_game(&mut self) {
        if self.current_game_id.take().is_some() {
            self.games_played += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_is_last_then_first() {
        let user = User::new("mjackson".into(), "Michael".into(), "Jackson".into());
        assert_eq!(user.full_name(), "Jackson Michael");
        assert!(!user.has_id());
        assert_eq!(user.games_played, 0);
        assert!(user.current_game_id.is_none());
    }

    #[test]
    fn test_admin_seed() {
        let admin = User::admin();
        assert_eq!(admin.id.to_string(), ADMIN_ID);
        assert_eq!(admin.full_name(), "Halliday James");
        assert_eq!(admin.games_played, 999);
    }

    #[test]
    fn test_exit_game() {
        let mut user = User::new("player".into(), "A".into(), "B".into());
        user.exit_game();
        assert_eq!(user.games_played, 0);

        user.current_game_id = Some(Uuid::new_v4());
        user.exit_game();
        assert_eq!(user.games_played, 1);
        assert!(user.current_game_id.is_none());
    }
}
