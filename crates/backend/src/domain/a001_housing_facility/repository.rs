use contracts::domain::a001_housing_facility::aggregate::{FacilityId, HousingFacility};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_housing_facility")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name: String,
    pub category: String,
    pub location: String,
    pub price_range: String,
    pub capacity: i64,
    pub amenities_json: String,
    pub rating: f64,
    pub reviews: i64,
    pub image: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for HousingFacility {
    fn from(m: Model) -> Self {
        let amenities: Vec<String> = serde_json::from_str(&m.amenities_json).unwrap_or_else(|e| {
            tracing::warn!("a001 id={}: bad amenities_json: {}", m.id, e);
            Vec::new()
        });
        HousingFacility {
            id: FacilityId(m.id as u32),
            name: m.name,
            category: m.category,
            location: m.location,
            price_range: m.price_range,
            capacity: m.capacity as u32,
            amenities,
            rating: m.rating as f32,
            reviews: m.reviews as u32,
            image: m.image,
            description: m.description,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Catalog order is id order
pub async fn list_all() -> anyhow::Result<Vec<HousingFacility>> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: FacilityId) -> anyhow::Result<Option<HousingFacility>> {
    let result = Entity::find_by_id(id.value() as i64).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

pub async fn insert(aggregate: &HousingFacility) -> anyhow::Result<FacilityId> {
    let active = ActiveModel {
        id: Set(aggregate.id.value() as i64),
        name: Set(aggregate.name.clone()),
        category: Set(aggregate.category.clone()),
        location: Set(aggregate.location.clone()),
        price_range: Set(aggregate.price_range.clone()),
        capacity: Set(aggregate.capacity as i64),
        amenities_json: Set(serde_json::to_string(&aggregate.amenities)?),
        rating: Set(aggregate.rating as f64),
        reviews: Set(aggregate.reviews as i64),
        image: Set(aggregate.image.clone()),
        description: Set(aggregate.description.clone()),
    };
    active.insert(conn()).await?;
    Ok(aggregate.id)
}
