use chrono::{DateTime, Utc};
use contracts::domain::a004_disability_profile::aggregate::{DisabilityProfile, ProfileId};
use contracts::domain::common::AggregateId;
use contracts::enums::disability_type::DisabilityType;
use contracts::enums::language::Language;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_disability_profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Display label of the disability type
    pub disability_type: String,
    pub disability_background: String,
    pub accommodations_json: String,
    pub work_experience: String,
    pub has_resume: bool,
    /// Language code
    pub preferred_language: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for DisabilityProfile {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let disability_type = DisabilityType::from_display_name(&m.disability_type)
            .ok_or_else(|| anyhow::anyhow!("Unknown disability type: {}", m.disability_type))?;
        Ok(DisabilityProfile {
            id: ProfileId::from_string(&m.id).map_err(anyhow::Error::msg)?,
            disability_type,
            disability_background: m.disability_background,
            accommodations: serde_json::from_str(&m.accommodations_json)?,
            work_experience: m.work_experience,
            has_resume: m.has_resume,
            preferred_language: Language::from_code(&m.preferred_language).unwrap_or_default(),
            created_at: m.created_at,
        })
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn get_by_id(id: &ProfileId) -> anyhow::Result<Option<DisabilityProfile>> {
    match Entity::find_by_id(id.as_string()).one(conn()).await? {
        Some(m) => Ok(Some(m.try_into()?)),
        None => Ok(None),
    }
}

pub async fn insert(aggregate: &DisabilityProfile) -> anyhow::Result<ProfileId> {
    let active = ActiveModel {
        id: Set(aggregate.id.as_string()),
        disability_type: Set(aggregate.disability_type.display_name().to_string()),
        disability_background: Set(aggregate.disability_background.clone()),
        accommodations_json: Set(serde_json::to_string(&aggregate.accommodations)?),
        work_experience: Set(aggregate.work_experience.clone()),
        has_resume: Set(aggregate.has_resume),
        preferred_language: Set(aggregate.preferred_language.code().to_string()),
        created_at: Set(aggregate.created_at),
    };
    active.insert(conn()).await?;
    Ok(aggregate.id)
}
