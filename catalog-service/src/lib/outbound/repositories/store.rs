use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::FromRow;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::QueryBuilder;

use crate::domain::record::Record;
use crate::domain::record::RecordStore;
use crate::domain::record::StoreError;

/// Tables created at startup when missing. There is no unique index on email;
/// registration checks for an existing address before inserting.
const SCHEMA: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        email VARCHAR(100) NOT NULL,
        password_hash VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        description VARCHAR(250) NOT NULL,
        price BIGINT NOT NULL,
        stock BIGINT NOT NULL
    )
    "#,
];

/// A bindable column value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int(i64),
    Text(String),
}

/// Table mapping for a record type stored in PostgreSQL.
///
/// `COLUMNS` lists the writable columns in the order produced by `draft_values` and
/// `record_values`. The `id` column is implicit and always generated by the database.
pub trait PgRecord: Record {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    type Row: for<'r> FromRow<'r, PgRow> + TryInto<Self, Error = StoreError> + Send + Unpin;

    /// Column and value a lookup key compares against.
    fn key_binding(key: &Self::Key) -> (&'static str, FieldValue);

    fn draft_values(draft: &Self::Draft) -> Vec<FieldValue>;

    fn record_values(&self) -> Vec<FieldValue>;
}

fn select_list<R: PgRecord>() -> String {
    format!("id, {}", R::COLUMNS.join(", "))
}

fn push_value(query: &mut QueryBuilder<'_, Postgres>, value: FieldValue) {
    match value {
        FieldValue::Int(v) => query.push_bind(v),
        FieldValue::Text(v) => query.push_bind(v),
    };
}

fn store_error<R: PgRecord>(error: sqlx::Error) -> StoreError {
    if let Some(db_err) = error.as_database_error() {
        if db_err.is_unique_violation()
            || db_err.is_foreign_key_violation()
            || db_err.is_check_violation()
        {
            return StoreError::ConstraintViolation(format!("{}: {}", R::TABLE, db_err.message()));
        }
    }
    StoreError::Database(error.to_string())
}

/// Record store adapter backed by a PostgreSQL connection pool.
///
/// Pool sizing and queuing on exhaustion are left to `sqlx`.
pub struct PostgresRecordStore {
    pool: PgPool,
}

impl PostgresRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `users` and `products` tables if they do not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| StoreError::Database(e.to_string()))?;
        }

        Ok(())
    }
}

#[async_trait]
impl<R> RecordStore<R> for PostgresRecordStore
where
    R: PgRecord,
{
    async fn find_all(&self) -> Result<Vec<R>, StoreError> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT ");
        query
            .push(select_list::<R>())
            .push(" FROM ")
            .push(R::TABLE)
            .push(" ORDER BY id");

        let rows = query
            .build_query_as::<R::Row>()
            .fetch_all(&self.pool)
            .await
            .map_err(store_error::<R>)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn find_one(&self, key: &R::Key) -> Result<R, StoreError> {
        let (column, value) = R::key_binding(key);

        let mut query = QueryBuilder::<Postgres>::new("SELECT ");
        query
            .push(select_list::<R>())
            .push(" FROM ")
            .push(R::TABLE)
            .push(" WHERE ")
            .push(column)
            .push(" = ");
        push_value(&mut query, value);
        query.push(" ORDER BY id LIMIT 1");

        let row = query
            .build_query_as::<R::Row>()
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error::<R>)?;

        match row {
            Some(r) => r.try_into(),
            None => Err(StoreError::not_found::<R>(key)),
        }
    }

    async fn insert(&self, draft: R::Draft) -> Result<R, StoreError> {
        let mut query = QueryBuilder::<Postgres>::new("INSERT INTO ");
        query
            .push(R::TABLE)
            .push(" (")
            .push(R::COLUMNS.join(", "))
            .push(") VALUES (");
        for (index, value) in R::draft_values(&draft).into_iter().enumerate() {
            if index > 0 {
                query.push(", ");
            }
            push_value(&mut query, value);
        }
        query.push(") RETURNING ").push(select_list::<R>());

        let row = query
            .build_query_as::<R::Row>()
            .fetch_one(&self.pool)
            .await
            .map_err(store_error::<R>)?;

        row.try_into()
    }

    async fn update(&self, record: R) -> Result<R, StoreError> {
        let mut query = QueryBuilder::<Postgres>::new("UPDATE ");
        query.push(R::TABLE).push(" SET ");
        for (index, (column, value)) in R::COLUMNS
            .iter()
            .zip(record.record_values())
            .enumerate()
        {
            if index > 0 {
                query.push(", ");
            }
            query.push(*column).push(" = ");
            push_value(&mut query, value);
        }
        query
            .push(" WHERE id = ")
            .push_bind(record.record_id())
            .push(" RETURNING ")
            .push(select_list::<R>());

        let row = query
            .build_query_as::<R::Row>()
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error::<R>)?;

        match row {
            Some(r) => r.try_into(),
            None => Err(StoreError::missing(&record)),
        }
    }

    async fn delete(&self, record: &R) -> Result<(), StoreError> {
        let mut query = QueryBuilder::<Postgres>::new("DELETE FROM ");
        query
            .push(R::TABLE)
            .push(" WHERE id = ")
            .push_bind(record.record_id());

        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(store_error::<R>)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::missing(record));
        }

        Ok(())
    }
}
