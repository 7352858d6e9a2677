use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::contacts::{ContactEntity, InsertContactEntity};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertContactModel {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl InsertContactModel {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is required".to_string());
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err("email must be a valid email address".to_string());
        }
        if self.message.trim().is_empty() {
            return Err("message is required".to_string());
        }
        Ok(())
    }

    pub fn to_entity(&self) -> InsertContactEntity {
        InsertContactEntity {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.clone(),
            message: self.message.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ContactEntity> for ContactDto {
    fn from(value: ContactEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
            is_read: value.is_read,
            created_at: value.created_at,
        }
    }
}
