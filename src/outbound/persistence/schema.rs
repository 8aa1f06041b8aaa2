//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation. When migrations change the schema, regenerate or manually
//! update this file (`diesel print-schema` against a live database).

diesel::table! {
    /// Animal registry table.
    ///
    /// One row per animal kept in the park. The `id` column is the primary
    /// key (UUID v4, assigned by the application).
    animals (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Individual name (max 64 characters).
        name -> Varchar,
        /// Species designation (max 64 characters).
        species -> Varchar,
        /// Age in years (non-negative, enforced by a check constraint).
        age -> Int4,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
