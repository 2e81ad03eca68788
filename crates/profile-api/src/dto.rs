//! Wire shapes of the user resource.
//!
//! JSON uses camelCase member names. XML mirrors the same data with PascalCase
//! element names under fixed root elements.

use serde::Serialize;
use uuid::Uuid;

use profile_core::domain::User;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub login: String,
    pub full_name: String,
    pub games_played: u32,
    pub current_game_id: Option<Uuid>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            login: user.login.clone(),
            full_name: user.full_name(),
            games_played: user.games_played,
            current_game_id: user.current_game_id,
        }
    }
}

/// Identifier of a freshly created user, serialized as a bare value
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct CreatedUserId(pub Uuid);

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct UserListDto(pub Vec<UserDto>);

impl UserListDto {
    pub fn from_users(users: &[User]) -> Self {
        Self(users.iter().map(UserDto::from).collect())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct UserXml<'a> {
    id: Uuid,
    login: &'a str,
    full_name: &'a str,
    games_played: u32,
    current_game_id: Option<Uuid>,
}

impl<'a> From<&'a UserDto> for UserXml<'a> {
    fn from(dto: &'a UserDto) -> Self {
        Self {
            id: dto.id,
            login: &dto.login,
            full_name: &dto.full_name,
            games_played: dto.games_played,
            current_game_id: dto.current_game_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UserListXml<'a> {
    #[serde(rename = "UserDto")]
    users: Vec<UserXml<'a>>,
}

impl<'a> From<&'a UserListDto> for UserListXml<'a> {
    fn from(list: &'a UserListDto) -> Self {
        Self {
            users: list.0.iter().map(UserXml::from).collect(),
        }
    }
}
