//! Diesel schema for list and task persistence.

diesel::table! {
    /// Named lists.
    lists (id) {
        /// Storage-assigned list identifier.
        id -> BigInt,
        /// Trimmed list name.
        name -> Text,
    }
}

diesel::table! {
    /// Tasks, each owned by one list.
    tasks (id) {
        /// Storage-assigned task identifier.
        id -> BigInt,
        /// Trimmed task name.
        name -> Text,
        /// Owning list identifier; not enforced as a foreign key.
        list_id -> BigInt,
    }
}

diesel::allow_tables_to_appear_in_same_query!(lists, tasks);
