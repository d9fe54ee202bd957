//! student — one learner's marks in three subjects plus the derived grade.

use chrono::{DateTime, Utc};
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::prelude::*;
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Jsonb;
use serde::{Deserialize, Serialize};

use crate::schema::students;

/// Marks sub-document, persisted as a single JSONB value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow,
)]
#[diesel(sql_type = Jsonb)]
pub struct Marks {
    #[serde(default)]
    pub math: f64,
    #[serde(default)]
    pub science: f64,
    #[serde(default)]
    pub english: f64,
}

impl FromSql<Jsonb, Pg> for Marks {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let value = <serde_json::Value as FromSql<Jsonb, Pg>>::from_sql(bytes)?;
        Ok(serde_json::from_value(value)?)
    }
}

impl ToSql<Jsonb, Pg> for Marks {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        let value = serde_json::to_value(self)?;
        <serde_json::Value as ToSql<Jsonb, Pg>>::to_sql(&value, &mut out.reborrow())
    }
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = students)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub roll: String,
    pub class_name: String,
    pub marks: Marks,
    pub total: f64,
    pub percent: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Case-insensitive literal substring match over name, roll and class.
    pub fn matches(&self, needle_lower: &str) -> bool {
        [&self.name, &self.roll, &self.class_name]
            .iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
    }
}

/// Writable columns, shared by insert and update.
#[derive(Debug, Clone, PartialEq, Insertable, AsChangeset, Deserialize)]
#[diesel(table_name = students)]
pub struct NewStudent {
    pub name: String,
    pub roll: String,
    pub class_name: String,
    pub marks: Marks,
    pub total: f64,
    pub percent: f64,
}

/// Raw form body of the add/edit page. Every field arrives as text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentForm {
    pub name: Option<String>,
    pub roll: Option<String>,
    #[serde(rename = "className")]
    pub class_name: Option<String>,
    pub math: Option<String>,
    pub science: Option<String>,
    pub english: Option<String>,
}
