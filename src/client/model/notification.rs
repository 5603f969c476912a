use std::time::Duration;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use league_api::notification::NotificationCenter;

use crate::client::api::Client;

#[derive(Clone, Copy)]
pub struct NotificationContext {
    inner: Signal<NotificationCenter>,
}

impl NotificationContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(NotificationCenter::new()),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = NotificationCenter> + '_ {
        self.inner.read()
    }

    pub fn update(&self, f: impl FnOnce(&mut NotificationCenter)) {
        let mut inner = self.inner;
        f(&mut inner.write());
    }

    pub fn clear(&self) {
        self.update(|center| *center = NotificationCenter::new());
    }

    /// Reloads the list and the unread count from the backend.
    pub async fn refresh(&self, client: &Client) {
        match client.notifications().get_all().await {
            Ok(notifications) => self.update(|center| center.replace_all(notifications)),
            Err(err) => tracing::error!("Failed to fetch notifications: {}", err),
        }

        match client.notifications().unread_count().await {
            Ok(count) => self.update(|center| center.set_unread_count(count)),
            Err(err) => tracing::error!("Failed to fetch unread notification count: {}", err),
        }
    }
}

/// Waits between two notification polls.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "web")]
    {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }

    #[cfg(all(feature = "desktop", not(feature = "web")))]
    tokio::time::sleep(duration).await;
}
