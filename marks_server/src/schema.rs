//! Diesel table definitions.
//!
//! `marks` holds the `{math, science, english}` sub-document as JSONB.

diesel::table! {
    students (id) {
        id -> Int8,
        name -> Varchar,
        roll -> Varchar,
        class_name -> Varchar,
        marks -> Jsonb,
        total -> Float8,
        percent -> Float8,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
