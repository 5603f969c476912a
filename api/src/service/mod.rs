//! Typed wrappers around the backend endpoints, one per resource.
//!
//! Services borrow an [`ApiClient`] and are cheap to build per call:
//!
//! ```ignore
//! let teams = client.teams().get_all(&TeamFilter::default()).await?;
//! ```

pub mod auth;
pub mod competition;
pub mod matches;
pub mod media;
pub mod message;
pub mod notification;
pub mod player;
pub mod team;
pub mod user;

use crate::{client::ApiClient, http::Transport, storage::TokenStore};

pub use auth::AuthService;
pub use competition::CompetitionService;
pub use matches::MatchService;
pub use media::MediaService;
pub use message::MessageService;
pub use notification::NotificationService;
pub use player::PlayerService;
pub use team::TeamService;
pub use user::UserService;

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn auth(&self) -> AuthService<'_, T, S> {
        AuthService::new(self)
    }

    pub fn users(&self) -> UserService<'_, T, S> {
        UserService::new(self)
    }

    pub fn competitions(&self) -> CompetitionService<'_, T, S> {
        CompetitionService::new(self)
    }

    pub fn teams(&self) -> TeamService<'_, T, S> {
        TeamService::new(self)
    }

    pub fn players(&self) -> PlayerService<'_, T, S> {
        PlayerService::new(self)
    }

    pub fn matches(&self) -> MatchService<'_, T, S> {
        MatchService::new(self)
    }

    pub fn media(&self) -> MediaService<'_, T, S> {
        MediaService::new(self)
    }

    pub fn messages(&self) -> MessageService<'_, T, S> {
        MessageService::new(self)
    }

    pub fn notifications(&self) -> NotificationService<'_, T, S> {
        NotificationService::new(self)
    }
}
