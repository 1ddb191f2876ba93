//! Statement builder for the property listing query.
//!
//! Filters fall into two classes that are rendered into separate clauses:
//! per-row predicates go into `WHERE` before grouping, and the rating bound
//! goes into `HAVING` after `GROUP BY properties.id`. Rendering is a pure
//! function of the builder state, so the generated SQL and its parameter
//! list can be checked without a database.

use crate::application::ports::PropertyFilter;

/// A value bound to a `$n` placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    Text(String),
    Int(i32),
    Float(f64),
}

/// Comparison used by a pre-aggregation predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Like,
    Eq,
    Gte,
    Lte,
}

impl Comparison {
    fn as_sql(self) -> &'static str {
        match self {
            Comparison::Like => "LIKE",
            Comparison::Eq => "=",
            Comparison::Gte => ">=",
            Comparison::Lte => "<=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Predicate {
    column: &'static str,
    comparison: Comparison,
    param: QueryParam,
}

/// SQL text plus the parameters its placeholders refer to, in order
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedQuery {
    pub sql: String,
    pub params: Vec<QueryParam>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    predicates: Vec<Predicate>,
    minimum_rating: Option<f64>,
    limit: i64,
}

impl ListingQuery {
    pub const SELECT: &'static str =
        "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating";
    pub const FROM: &'static str =
        "FROM properties\nJOIN property_reviews ON properties.id = property_reviews.property_id";
    pub const GROUP_BY: &'static str = "GROUP BY properties.id";
    pub const ORDER_BY: &'static str = "ORDER BY properties.cost_per_night";
    const AVERAGE_RATING: &'static str = "avg(property_reviews.rating)";

    pub fn new(limit: i64) -> Self {
        Self {
            predicates: Vec::new(),
            minimum_rating: None,
            limit,
        }
    }

    /// Translate a validated filter. Predicates are added in a fixed order:
    /// city, owner, minimum price, maximum price.
    pub fn from_filter(filter: &PropertyFilter, limit: i64) -> Self {
        let mut query = Self::new(limit);

        if let Some(city) = &filter.city {
            query = query.filter(
                "properties.city",
                Comparison::Like,
                QueryParam::Text(format!("%{}%", escape_like(city))),
            );
        }

        if let Some(owner_id) = filter.owner_id {
            query = query.filter(
                "properties.owner_id",
                Comparison::Eq,
                QueryParam::Int(owner_id.as_i32()),
            );
        }

        if let Some(min) = filter.minimum_price_per_night {
            query = query.filter(
                "properties.cost_per_night",
                Comparison::Gte,
                QueryParam::Int(min.as_i32()),
            );
        }

        if let Some(max) = filter.maximum_price_per_night {
            query = query.filter(
                "properties.cost_per_night",
                Comparison::Lte,
                QueryParam::Int(max.as_i32()),
            );
        }

        if let Some(rating) = filter.minimum_rating {
            query = query.minimum_rating(rating);
        }

        query
    }

    /// Append a pre-aggregation predicate
    pub fn filter(mut self, column: &'static str, comparison: Comparison, param: QueryParam) -> Self {
        self.predicates.push(Predicate {
            column,
            comparison,
            param,
        });
        self
    }

    /// Set the post-aggregation bound on the average rating
    pub fn minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn render(&self) -> RenderedQuery {
        let mut lines = vec![Self::SELECT.to_string(), Self::FROM.to_string()];
        let mut params = Vec::with_capacity(self.predicates.len() + 1);

        for (i, predicate) in self.predicates.iter().enumerate() {
            params.push(predicate.param.clone());
            let keyword = if i == 0 { "WHERE" } else { "AND" };
            lines.push(format!(
                "{} {} {} ${}",
                keyword,
                predicate.column,
                predicate.comparison.as_sql(),
                params.len()
            ));
        }

        lines.push(Self::GROUP_BY.to_string());

        if let Some(rating) = self.minimum_rating {
            params.push(QueryParam::Float(rating));
            lines.push(format!(
                "HAVING {} >= ${}",
                Self::AVERAGE_RATING,
                params.len()
            ));
        }

        lines.push(Self::ORDER_BY.to_string());
        // integer limit is rendered inline and is not part of `params`
        lines.push(format!("LIMIT {}", self.limit));

        RenderedQuery {
            sql: lines.join("\n"),
            params,
        }
    }
}

/// Escape `LIKE` metacharacters with Postgres' default escape character so
/// the input only ever matches itself.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
