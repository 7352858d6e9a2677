use serde::{Deserialize, Serialize};

use crate::domain::entities::services::{
    EditServiceEntity, InsertServiceEntity, ServiceEntity,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceDto {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub price_minor: i32,
    pub duration_min: i32,
    pub artist_id: i64,
}

impl From<ServiceEntity> for ServiceDto {
    fn from(value: ServiceEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            category: value.category,
            description: value.description,
            price_minor: value.price_minor,
            duration_min: value.duration_min,
            artist_id: value.artist_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertServiceModel {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub price_minor: i32,
    pub duration_min: i32,
    pub artist_id: i64,
}

impl InsertServiceModel {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is required".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("category is required".to_string());
        }
        if self.price_minor < 0 {
            return Err("price_minor must not be negative".to_string());
        }
        if self.duration_min <= 0 {
            return Err("duration_min must be positive".to_string());
        }
        Ok(())
    }

    pub fn to_entity(&self) -> InsertServiceEntity {
        InsertServiceEntity {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            description: self.description.clone(),
            price_minor: self.price_minor,
            duration_min: self.duration_min,
            artist_id: self.artist_id,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditServiceModel {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price_minor: Option<i32>,
    pub duration_min: Option<i32>,
    pub is_active: Option<bool>,
}

impl EditServiceModel {
    pub fn to_entity(&self) -> EditServiceEntity {
        EditServiceEntity {
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            price_minor: self.price_minor,
            duration_min: self.duration_min,
            is_active: self.is_active,
        }
    }
}
