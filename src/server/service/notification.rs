use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{CreateNotificationParam, Notification, NotificationPage},
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a notification for a user.
    pub async fn notify(&self, param: CreateNotificationParam) -> Result<Notification, AppError> {
        let repo = NotificationRepository::new(self.db);

        let notification = repo.create(param).await?;

        Ok(Notification::from_entity(notification))
    }

    /// Gets one page of a user's notifications, newest first, with the unread count.
    pub async fn list(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<NotificationPage, AppError> {
        let repo = NotificationRepository::new(self.db);

        let (notifications, total) = repo.list_by_user(user_id, page, per_page).await?;
        let unread = repo.count_unread(user_id).await?;

        let notifications = notifications
            .into_iter()
            .map(Notification::from_entity)
            .collect();

        Ok(NotificationPage {
            notifications,
            unread,
            total,
            page,
            per_page,
        })
    }

    /// Marks one of the user's notifications as read.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No such notification for this user
    pub async fn mark_read(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);

        if repo.mark_read(user_id, id).await? == 0 {
            return Err(AppError::not_found("Notification not found"));
        }

        Ok(())
    }

    /// Marks every notification of the user as read and returns how many changed.
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        let repo = NotificationRepository::new(self.db);

        Ok(repo.mark_all_read(user_id).await?)
    }
}
