//! PostgreSQL-backed store

use chrono::{DateTime, Utc};
use shared::{
    CreateCropInput, CreateSensorReadingInput, Crop, DecisionStatus, IrrigationDecision,
    SensorReading, StressLevel,
};
use sqlx::PgPool;
use uuid::Uuid;

use super::{IrrigationStore, NewDecision};
use crate::error::{AppError, AppResult};

const CROP_COLUMNS: &str = "id, name, species, min_soil_moisture, max_soil_moisture, \
    optimal_temperature_min, optimal_temperature_max, water_requirement_mm, created_at, updated_at";

const READING_COLUMNS: &str = "id, crop_id, soil_moisture, temperature, humidity, rainfall_mm, \
    wind_speed, solar_radiation, recorded_at";

const DECISION_COLUMNS: &str = "id, crop_id, sensor_reading_id, water_stress_index, stress_level, \
    should_irrigate, recommended_water_mm, reason, status, decided_at";

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Check database connectivity
    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.db).await.is_ok()
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CropRow {
    id: Uuid,
    name: String,
    species: Option<String>,
    min_soil_moisture: f64,
    max_soil_moisture: f64,
    optimal_temperature_min: Option<f64>,
    optimal_temperature_max: Option<f64>,
    water_requirement_mm: Option<f64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CropRow> for Crop {
    fn from(row: CropRow) -> Self {
        Crop {
            id: row.id,
            name: row.name,
            species: row.species,
            min_soil_moisture: row.min_soil_moisture,
            max_soil_moisture: row.max_soil_moisture,
            optimal_temperature_min: row.optimal_temperature_min,
            optimal_temperature_max: row.optimal_temperature_max,
            water_requirement_mm: row.water_requirement_mm,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ReadingRow {
    id: Uuid,
    crop_id: Uuid,
    soil_moisture: f64,
    temperature: f64,
    humidity: Option<f64>,
    rainfall_mm: Option<f64>,
    wind_speed: Option<f64>,
    solar_radiation: Option<f64>,
    recorded_at: DateTime<Utc>,
}

impl From<ReadingRow> for SensorReading {
    fn from(row: ReadingRow) -> Self {
        SensorReading {
            id: row.id,
            crop_id: row.crop_id,
            soil_moisture: row.soil_moisture,
            temperature: row.temperature,
            humidity: row.humidity,
            rainfall_mm: row.rainfall_mm,
            wind_speed: row.wind_speed,
            solar_radiation: row.solar_radiation,
            recorded_at: row.recorded_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct DecisionRow {
    id: Uuid,
    crop_id: Uuid,
    sensor_reading_id: Uuid,
    water_stress_index: f64,
    stress_level: String,
    should_irrigate: bool,
    recommended_water_mm: Option<f64>,
    reason: String,
    status: String,
    decided_at: DateTime<Utc>,
}

impl TryFrom<DecisionRow> for IrrigationDecision {
    type Error = AppError;

    fn try_from(row: DecisionRow) -> Result<Self, Self::Error> {
        let stress_level = row
            .stress_level
            .parse::<StressLevel>()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let status = row
            .status
            .parse::<DecisionStatus>()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(IrrigationDecision {
            id: row.id,
            crop_id: row.crop_id,
            sensor_reading_id: row.sensor_reading_id,
            water_stress_index: row.water_stress_index,
            stress_level,
            should_irrigate: row.should_irrigate,
            recommended_water_mm: row.recommended_water_mm,
            reason: row.reason,
            status,
            decided_at: row.decided_at,
        })
    }
}

impl IrrigationStore for PgStore {
    async fn insert_crop(&self, input: CreateCropInput) -> AppResult<Crop> {
        let row = sqlx::query_as::<_, CropRow>(&format!(
            r#"
            INSERT INTO crops (name, species, min_soil_moisture, max_soil_moisture,
                               optimal_temperature_min, optimal_temperature_max, water_requirement_mm)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {CROP_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.species)
        .bind(input.min_soil_moisture)
        .bind(input.max_soil_moisture)
        .bind(input.optimal_temperature_min)
        .bind(input.optimal_temperature_max)
        .bind(input.water_requirement_mm)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    async fn find_crop(&self, crop_id: Uuid) -> AppResult<Option<Crop>> {
        let row = sqlx::query_as::<_, CropRow>(&format!(
            "SELECT {CROP_COLUMNS} FROM crops WHERE id = $1"
        ))
        .bind(crop_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Crop::from))
    }

    async fn list_crops(&self) -> AppResult<Vec<Crop>> {
        let rows = sqlx::query_as::<_, CropRow>(&format!(
            "SELECT {CROP_COLUMNS} FROM crops ORDER BY name ASC"
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Crop::from).collect())
    }

    async fn insert_reading(&self, input: CreateSensorReadingInput) -> AppResult<SensorReading> {
        let row = sqlx::query_as::<_, ReadingRow>(&format!(
            r#"
            INSERT INTO sensor_readings (crop_id, soil_moisture, temperature, humidity,
                                         rainfall_mm, wind_speed, solar_radiation)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {READING_COLUMNS}
            "#
        ))
        .bind(input.crop_id)
        .bind(input.soil_moisture)
        .bind(input.temperature)
        .bind(input.humidity)
        .bind(input.rainfall_mm)
        .bind(input.wind_speed)
        .bind(input.solar_radiation)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    async fn find_reading(&self, reading_id: Uuid) -> AppResult<Option<SensorReading>> {
        let row = sqlx::query_as::<_, ReadingRow>(&format!(
            "SELECT {READING_COLUMNS} FROM sensor_readings WHERE id = $1"
        ))
        .bind(reading_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(SensorReading::from))
    }

    async fn latest_reading(&self, crop_id: Uuid) -> AppResult<Option<SensorReading>> {
        let row = sqlx::query_as::<_, ReadingRow>(&format!(
            r#"
            SELECT {READING_COLUMNS}
            FROM sensor_readings
            WHERE crop_id = $1
            ORDER BY recorded_at DESC
            LIMIT 1
            "#
        ))
        .bind(crop_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(SensorReading::from))
    }

    async fn list_readings(&self, crop_id: Option<Uuid>, limit: i64) -> AppResult<Vec<SensorReading>> {
        let rows = sqlx::query_as::<_, ReadingRow>(&format!(
            r#"
            SELECT {READING_COLUMNS}
            FROM sensor_readings
            WHERE ($1::uuid IS NULL OR crop_id = $1)
            ORDER BY recorded_at DESC
            LIMIT $2
            "#
        ))
        .bind(crop_id)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(SensorReading::from).collect())
    }

    async fn insert_decision(&self, decision: NewDecision) -> AppResult<IrrigationDecision> {
        let score = decision.score;
        let row = sqlx::query_as::<_, DecisionRow>(&format!(
            r#"
            INSERT INTO irrigation_decisions (crop_id, sensor_reading_id, water_stress_index,
                                              stress_level, should_irrigate, recommended_water_mm,
                                              reason, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {DECISION_COLUMNS}
            "#
        ))
        .bind(decision.crop_id)
        .bind(decision.sensor_reading_id)
        .bind(score.water_stress_index)
        .bind(score.stress_level.as_str())
        .bind(score.should_irrigate)
        .bind(score.recommended_water_mm)
        .bind(&score.reason)
        .bind(DecisionStatus::Pending.as_str())
        .fetch_one(&self.db)
        .await?;

        row.try_into()
    }

    async fn find_decision(&self, decision_id: Uuid) -> AppResult<Option<IrrigationDecision>> {
        let row = sqlx::query_as::<_, DecisionRow>(&format!(
            "SELECT {DECISION_COLUMNS} FROM irrigation_decisions WHERE id = $1"
        ))
        .bind(decision_id)
        .fetch_optional(&self.db)
        .await?;

        row.map(IrrigationDecision::try_from).transpose()
    }

    async fn list_decisions(
        &self,
        crop_id: Option<Uuid>,
        limit: i64,
    ) -> AppResult<Vec<IrrigationDecision>> {
        let rows = sqlx::query_as::<_, DecisionRow>(&format!(
            r#"
            SELECT {DECISION_COLUMNS}
            FROM irrigation_decisions
            WHERE ($1::uuid IS NULL OR crop_id = $1)
            ORDER BY decided_at DESC
            LIMIT $2
            "#
        ))
        .bind(crop_id)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(IrrigationDecision::try_from).collect()
    }

    async fn set_decision_status(
        &self,
        decision_id: Uuid,
        status: DecisionStatus,
    ) -> AppResult<Option<IrrigationDecision>> {
        let row = sqlx::query_as::<_, DecisionRow>(&format!(
            r#"
            UPDATE irrigation_decisions
            SET status = $1
            WHERE id = $2 AND status = $3
            RETURNING {DECISION_COLUMNS}
            "#
        ))
        .bind(status.as_str())
        .bind(decision_id)
        .bind(DecisionStatus::Pending.as_str())
        .fetch_optional(&self.db)
        .await?;

        row.map(IrrigationDecision::try_from).transpose()
    }
}
