use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::listing_query::{ListingQuery, QueryParam, RenderedQuery};
use crate::application::ports::{PropertyFilter, PropertyRepository, RepositoryError};
use crate::domain::entities::{NewProperty, Property, PropertyListing};
use crate::domain::value_objects::{Cents, PropertyId, UserId};

pub struct PostgresPropertyRepository {
    pool: PgPool,
}

impl PostgresPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyRepository for PostgresPropertyRepository {
    async fn list(
        &self,
        filter: &PropertyFilter,
        limit: i64,
    ) -> Result<Vec<PropertyListing>, RepositoryError> {
        let RenderedQuery { sql, params } = ListingQuery::from_filter(filter, limit).render();
        debug!(params = params.len(), "Listing query:\n{}", sql);

        let mut query = sqlx::query_as::<_, ListingRow>(&sql);
        for param in params {
            query = match param {
                QueryParam::Text(value) => query.bind(value),
                QueryParam::Int(value) => query.bind(value),
                QueryParam::Float(value) => query.bind(value),
            };
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(PropertyListing::from).collect())
    }

    async fn create(&self, property: &NewProperty) -> Result<Property, RepositoryError> {
        let row = sqlx::query_as::<_, PropertyRow>(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, street, city, province, post_code, country,
                parking_spaces, number_of_bathrooms, number_of_bedrooms
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(property.owner_id.as_i32())
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night.as_i32())
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .bind(&property.country)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }
}

// Internal row mapping structs
#[derive(sqlx::FromRow)]
struct PropertyRow {
    id: i32,
    owner_id: i32,
    title: String,
    description: String,
    thumbnail_photo_url: String,
    cover_photo_url: String,
    cost_per_night: i32,
    parking_spaces: i32,
    number_of_bathrooms: i32,
    number_of_bedrooms: i32,
    country: String,
    street: String,
    city: String,
    province: String,
    post_code: String,
    active: bool,
}

impl From<PropertyRow> for Property {
    fn from(row: PropertyRow) -> Self {
        Self {
            id: PropertyId::new(row.id),
            owner_id: UserId::new(row.owner_id),
            title: row.title,
            description: row.description,
            thumbnail_photo_url: row.thumbnail_photo_url,
            cover_photo_url: row.cover_photo_url,
            cost_per_night: Cents::new(row.cost_per_night),
            parking_spaces: row.parking_spaces,
            number_of_bathrooms: row.number_of_bathrooms,
            number_of_bedrooms: row.number_of_bedrooms,
            country: row.country,
            street: row.street,
            city: row.city,
            province: row.province,
            post_code: row.post_code,
            active: row.active,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ListingRow {
    #[sqlx(flatten)]
    property: PropertyRow,
    average_rating: f64,
}

impl From<ListingRow> for PropertyListing {
    fn from(row: ListingRow) -> Self {
        Self {
            property: row.property.into(),
            average_rating: row.average_rating,
        }
    }
}
