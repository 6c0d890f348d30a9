//! In-app notifications.

use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;

use crate::model::notification::{NotificationDto, NotificationListDto};

pub use entity::notification::NotificationKind;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            message: entity.message,
            kind: entity.kind,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            title: self.title,
            message: self.message,
            kind: self.kind.to_value(),
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub user_id: i32,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl CreateNotificationParam {
    pub fn new(
        user_id: i32,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            title: title.into(),
            message: message.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotificationPage {
    pub notifications: Vec<Notification>,
    pub unread: u64,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl NotificationPage {
    pub fn into_dto(self) -> NotificationListDto {
        NotificationListDto {
            notifications: self
                .notifications
                .into_iter()
                .map(Notification::into_dto)
                .collect(),
            unread: self.unread,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}
