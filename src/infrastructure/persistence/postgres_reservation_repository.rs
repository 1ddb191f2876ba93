use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::application::ports::{RepositoryError, ReservationRepository};
use crate::domain::entities::Reservation;
use crate::domain::value_objects::{PropertyId, UserId};

pub struct PostgresReservationRepository {
    pool: PgPool,
}

impl PostgresReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PostgresReservationRepository {
    async fn list_by_guest(
        &self,
        guest_id: UserId,
        limit: i64,
    ) -> Result<Vec<Reservation>, RepositoryError> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
            SELECT id, start_date, end_date, property_id, guest_id
            FROM reservations
            WHERE guest_id = $1
            ORDER BY start_date, id
            LIMIT $2
            "#,
        )
        .bind(guest_id.as_i32())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }
}

#[derive(sqlx::FromRow)]
struct ReservationRow {
    id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    property_id: i32,
    guest_id: i32,
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Self {
            id: row.id,
            start_date: row.start_date,
            end_date: row.end_date,
            property_id: PropertyId::new(row.property_id),
            guest_id: UserId::new(row.guest_id),
        }
    }
}
