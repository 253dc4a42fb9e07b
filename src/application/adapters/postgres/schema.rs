//! Diesel schema for application lifecycle persistence.

diesel::table! {
    /// Registered application integrations.
    applications (id) {
        /// Internal application identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Lifecycle status code, constrained to the eight canonical
        /// values.
        #[max_length = 50]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Deployment records owned by applications.
    deployments (id) {
        /// Internal deployment identifier.
        id -> Uuid,
        /// Owning application identifier.
        application_id -> Uuid,
        /// Deployment strategy copied from the resolved configuration.
        #[max_length = 255]
        strategy -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(deployments -> applications (application_id));
diesel::allow_tables_to_appear_in_same_query!(applications, deployments);
