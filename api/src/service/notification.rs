use crate::{
    client::ApiClient,
    endpoints::notifications as ep,
    error::ApiError,
    http::Transport,
    model::notification::{NotificationDto, UnreadCount},
    storage::TokenStore,
};

pub struct NotificationService<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<'a, T: Transport, S: TokenStore> NotificationService<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<NotificationDto>, ApiError> {
        let notifications: Option<Vec<NotificationDto>> = self.client.get(ep::BASE).await?;
        Ok(notifications.unwrap_or_default())
    }

    pub async fn get_by_id(&self, notification_id: i64) -> Result<NotificationDto, ApiError> {
        self.client.get(&ep::by_id(notification_id)).await
    }

    pub async fn mark_as_read(&self, notification_id: i64) -> Result<(), ApiError> {
        self.client
            .post_for_text(&ep::read(notification_id), None::<&()>)
            .await
            .map(|_| ())
    }

    pub async fn mark_all_as_read(&self) -> Result<(), ApiError> {
        self.client
            .post_for_text(ep::READ_ALL, None::<&()>)
            .await
            .map(|_| ())
    }

    pub async fn unread_count(&self) -> Result<u32, ApiError> {
        let count: UnreadCount = self.client.get(ep::COUNT).await?;
        Ok(count.count)
    }

    /// Latest `limit` notifications, newest first.
    pub async fn recent(&self, limit: u32) -> Result<Vec<NotificationDto>, ApiError> {
        let notifications: Option<Vec<NotificationDto>> = self.client.get(&ep::recent(limit)).await?;
        Ok(notifications.unwrap_or_default())
    }

    pub async fn delete(&self, notification_id: i64) -> Result<(), ApiError> {
        self.client
            .delete_for_text(&ep::by_id(notification_id))
            .await
            .map(|_| ())
    }
}
