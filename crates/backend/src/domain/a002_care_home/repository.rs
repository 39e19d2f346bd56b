use contracts::domain::a002_care_home::aggregate::{CareHome, CareHomeId};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_care_home")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Catalog order
    pub position: i32,
    pub name: String,
    pub location: String,
    pub monthly_price: i64,
    pub facilities_json: String,
    pub rating: f64,
    pub occupancy: i32,
    pub medical_staff: bool,
    pub visiting_hours: String,
    pub meal_options_json: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn string_list(id: &str, column: &str, json: &str) -> Vec<String> {
    serde_json::from_str(json).unwrap_or_else(|e| {
        tracing::warn!("a002 id={}: bad {}: {}", id, column, e);
        Vec::new()
    })
}

impl From<Model> for CareHome {
    fn from(m: Model) -> Self {
        let facilities = string_list(&m.id, "facilities_json", &m.facilities_json);
        let meal_options = string_list(&m.id, "meal_options_json", &m.meal_options_json);
        CareHome {
            id: CareHomeId(m.id),
            name: m.name,
            location: m.location,
            monthly_price: m.monthly_price,
            facilities,
            rating: m.rating as f32,
            occupancy: m.occupancy.clamp(0, 100) as u8,
            medical_staff: m.medical_staff,
            visiting_hours: m.visiting_hours,
            meal_options,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<CareHome>> {
    let items = Entity::find()
        .order_by_asc(Column::Position)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: &CareHomeId) -> anyhow::Result<Option<CareHome>> {
    let result = Entity::find_by_id(id.as_str().to_string())
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

pub async fn insert(aggregate: &CareHome, position: i32) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id.as_str().to_string()),
        position: Set(position),
        name: Set(aggregate.name.clone()),
        location: Set(aggregate.location.clone()),
        monthly_price: Set(aggregate.monthly_price),
        facilities_json: Set(serde_json::to_string(&aggregate.facilities)?),
        rating: Set(aggregate.rating as f64),
        occupancy: Set(aggregate.occupancy as i32),
        medical_staff: Set(aggregate.medical_staff),
        visiting_hours: Set(aggregate.visiting_hours.clone()),
        meal_options_json: Set(serde_json::to_string(&aggregate.meal_options)?),
    };
    active.insert(conn()).await?;
    Ok(())
}
