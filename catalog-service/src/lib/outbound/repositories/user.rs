use crate::domain::record::StoreError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserKey;
use crate::domain::user::models::UserName;
use crate::outbound::repositories::store::FieldValue;
use crate::outbound::repositories::store::PgRecord;

/// Internal row type for `users` queries.
#[derive(Debug, sqlx::FromRow)]
pub struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt = |reason: String| StoreError::DataCorruption {
            entity: "user",
            reason: format!("row {id}: {reason}"),
        };

        Ok(Self {
            id: UserId(id),
            name: UserName::new(row.name).map_err(|e| corrupt(e.to_string()))?,
            email: EmailAddress::new(row.email).map_err(|e| corrupt(e.to_string()))?,
            password_hash: row.password_hash,
        })
    }
}

impl PgRecord for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["name", "email", "password_hash"];

    type Row = UserRow;

    fn key_binding(key: &UserKey) -> (&'static str, FieldValue) {
        match key {
            UserKey::Id(id) => ("id", FieldValue::Int(id.0)),
            UserKey::Email(email) => ("email", FieldValue::Text(email.as_str().to_string())),
        }
    }

    fn draft_values(draft: &NewUser) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(draft.name.as_str().to_string()),
            FieldValue::Text(draft.email.as_str().to_string()),
            FieldValue::Text(draft.password_hash.clone()),
        ]
    }

    fn record_values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(self.name.as_str().to_string()),
            FieldValue::Text(self.email.as_str().to_string()),
            FieldValue::Text(self.password_hash.clone()),
        ]
    }
}
