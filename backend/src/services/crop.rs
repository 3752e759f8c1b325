//! Crop registration service

use shared::{CreateCropInput, Crop};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::store::IrrigationStore;

/// Crop service for registering and looking up crop thresholds
#[derive(Clone)]
pub struct CropService<S> {
    store: S,
}

impl<S: IrrigationStore> CropService<S> {
    /// Create a new CropService over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a new crop with its moisture and temperature thresholds
    pub async fn register_crop(&self, input: CreateCropInput) -> AppResult<Crop> {
        input.validate()?;

        let crop = self.store.insert_crop(input).await?;
        tracing::info!(crop_id = %crop.id, name = %crop.name, "Registered crop");

        Ok(crop)
    }

    /// Get a crop by ID
    pub async fn get_crop(&self, crop_id: Uuid) -> AppResult<Crop> {
        self.store
            .find_crop(crop_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Crop".to_string()))
    }

    /// List all registered crops
    pub async fn list_crops(&self) -> AppResult<Vec<Crop>> {
        self.store.list_crops().await
    }
}
