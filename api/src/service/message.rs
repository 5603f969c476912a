use crate::{
    client::ApiClient,
    endpoints::messages as ep,
    error::ApiError,
    http::Transport,
    model::{
        message::{
            InboxFilter, MessageDto, MessageList, RecipientCategory, RecipientDto,
            RecipientFilter, SentFilter,
        },
        user::Role,
    },
    storage::TokenStore,
};

pub struct MessageService<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<'a, T: Transport, S: TokenStore> MessageService<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>) -> Self {
        Self { client }
    }

    pub async fn get_inbox(&self, filter: &InboxFilter) -> Result<Vec<MessageDto>, ApiError> {
        let list: Option<MessageList> = self.client.get_with(ep::INBOX, filter).await?;
        Ok(list.map(MessageList::into_vec).unwrap_or_default())
    }

    pub async fn get_sent(&self, filter: &SentFilter) -> Result<Vec<MessageDto>, ApiError> {
        let list: Option<MessageList> = self.client.get_with(ep::SENT, filter).await?;
        Ok(list.map(MessageList::into_vec).unwrap_or_default())
    }

    pub async fn get_by_id(&self, message_id: i64) -> Result<MessageDto, ApiError> {
        self.client.get(&ep::by_id(message_id)).await
    }

    pub async fn send(&self, message: &MessageDto) -> Result<MessageDto, ApiError> {
        self.client.post(ep::SEND, message).await
    }

    pub async fn mark_as_read(&self, message_id: i64) -> Result<bool, ApiError> {
        let updated: Option<bool> = self.client.put_empty(&ep::read(message_id)).await?;
        Ok(updated.unwrap_or(true))
    }

    pub async fn mark_all_as_read(&self) -> Result<bool, ApiError> {
        let updated: Option<bool> = self.client.put_empty(ep::READ_ALL).await?;
        Ok(updated.unwrap_or(true))
    }

    pub async fn delete(&self, message_id: i64, user_id: i64) -> Result<(), ApiError> {
        self.client
            .delete_for_text(&ep::delete(message_id, user_id))
            .await
            .map(|_| ())
    }

    /// Users the current user may write to, sorted by display name.
    pub async fn get_recipients(&self, filter: &RecipientFilter) -> Result<Vec<RecipientDto>, ApiError> {
        let recipients: Option<Vec<RecipientDto>> =
            self.client.get_with(ep::RECIPIENTS, filter).await?;
        let mut recipients = recipients.unwrap_or_default();
        recipients.sort_by_key(|r| r.name().to_lowercase());
        Ok(recipients)
    }

    pub async fn get_recipient_categories(
        &self,
        role: &Role,
    ) -> Result<Vec<RecipientCategory>, ApiError> {
        self.client
            .get(&ep::recipient_categories(role.as_str()))
            .await
    }
}
