//! Diesel schema for task persistence.
//!
//! Column names are camelCase to stay byte-compatible with databases
//! created by earlier versions of this application.

diesel::table! {
    /// Task records.
    todos (id) {
        /// Engine-assigned identifier.
        id -> BigInt,
        /// Task title, never blank.
        title -> Text,
        /// Task description, defaults to empty.
        description -> Text,
        /// Completion flag.
        completed -> Bool,
        /// Priority stored as text (`low`, `medium`, `high`).
        priority -> Text,
        /// Creation timestamp (UTC).
        #[sql_name = "createdAt"]
        created_at -> Timestamp,
        /// Last-mutation timestamp (UTC).
        #[sql_name = "updatedAt"]
        updated_at -> Timestamp,
    }
}
