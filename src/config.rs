/// Configuration constants for the vRA API
pub mod api {
    /// Entitled catalog item views endpoint
    pub const CATALOG_ITEMS: &str = "/catalog-service/api/consumer/entitledCatalogItemViews";

    /// Consumer requests endpoint
    pub const REQUESTS: &str = "/catalog-service/api/consumer/requests";

    /// Identity token endpoint
    pub const TOKENS: &str = "/identity/api/tokens";

    /// Page size for list endpoints (server caps pages, no further pagination)
    pub const PAGE_LIMIT: u32 = 1000;

    /// Request states reported as still running
    pub const IN_PROGRESS_STATES: &[&str] = &["IN_PROGRESS", "PENDING_PRE_APPROVAL", "SUBMITTED"];
}

/// Environment variable names
pub mod env {
    /// Token environment variable
    pub const TOKEN: &str = "VRA_TOKEN";

    /// Host environment variable
    pub const HOST: &str = "VRA_HOSTNAME";

    /// User name environment variable (used by `login`)
    pub const USERNAME: &str = "VRA_USERNAME";

    /// Password environment variable (used by `login`)
    pub const PASSWORD: &str = "VRA_PASSWORD";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default identity tenant
    pub const TENANT: &str = "vsphere.local";
}
