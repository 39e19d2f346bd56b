use chrono::{DateTime, Utc};
use contracts::domain::a003_donation::aggregate::{Donation, DonationId};
use contracts::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_donation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub amount: i64,
    pub donor_name: String,
    pub donor_email: String,
    pub is_monthly: bool,
    pub is_anonymous: bool,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Donation {
    fn from(m: Model) -> Self {
        let id = DonationId::from_string(&m.id).unwrap_or_else(|e| {
            tracing::warn!("a003 {}", e);
            DonationId(uuid::Uuid::nil())
        });
        Donation {
            id,
            amount: m.amount,
            donor_name: m.donor_name,
            donor_email: m.donor_email,
            is_monthly: m.is_monthly,
            is_anonymous: m.is_anonymous,
            message: m.message,
            created_at: m.created_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Newest first
pub async fn list_recent(limit: u64) -> anyhow::Result<Vec<Donation>> {
    let items = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .limit(limit)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Amounts of donations made at or after `since`
pub async fn amounts_since(since: DateTime<Utc>) -> anyhow::Result<Vec<i64>> {
    let amounts = Entity::find()
        .select_only()
        .column(Column::Amount)
        .filter(Column::CreatedAt.gte(since))
        .into_tuple::<i64>()
        .all(conn())
        .await?;
    Ok(amounts)
}

pub async fn insert(aggregate: &Donation) -> anyhow::Result<DonationId> {
    let active = ActiveModel {
        id: Set(aggregate.id.as_string()),
        amount: Set(aggregate.amount),
        donor_name: Set(aggregate.donor_name.clone()),
        donor_email: Set(aggregate.donor_email.clone()),
        is_monthly: Set(aggregate.is_monthly),
        is_anonymous: Set(aggregate.is_anonymous),
        message: Set(aggregate.message.clone()),
        created_at: Set(aggregate.created_at),
    };
    active.insert(conn()).await?;
    Ok(aggregate.id)
}
