use crate::{
    client::ApiClient,
    endpoints::media as ep,
    error::ApiError,
    http::Transport,
    model::media::{MediaDto, MediaFilter, MediaReport},
    storage::TokenStore,
};

pub struct MediaService<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<'a, T: Transport, S: TokenStore> MediaService<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>) -> Self {
        Self { client }
    }

    pub async fn get_by_id(&self, media_id: i64) -> Result<MediaDto, ApiError> {
        self.client.get(&ep::by_id(media_id)).await
    }

    pub async fn get_all(&self, filter: &MediaFilter) -> Result<Vec<MediaDto>, ApiError> {
        self.client.get_with(ep::BASE, filter).await
    }

    pub async fn create(&self, media: &MediaDto) -> Result<MediaDto, ApiError> {
        self.client.post(ep::CREATE, media).await
    }

    pub async fn update(&self, media_id: i64, media: &MediaDto) -> Result<MediaDto, ApiError> {
        self.client.put(&ep::update(media_id), media).await
    }

    pub async fn delete(&self, user_id: i64, media_id: i64) -> Result<(), ApiError> {
        self.client
            .delete_for_text(&ep::delete(user_id, media_id))
            .await
            .map(|_| ())
    }

    pub async fn report(&self, user_id: i64, reason: &str) -> Result<(), ApiError> {
        let report = MediaReport {
            reason: reason.to_string(),
        };
        self.client
            .post_for_text(&ep::report(user_id), Some(&report))
            .await
            .map(|_| ())
    }
}
