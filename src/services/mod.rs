pub mod catalog_service;
pub use catalog_service::{CatalogError, CatalogService, SeedOutcome};

pub mod catalog_service_impl;
pub use catalog_service_impl::{DisabledCatalogService, SeaOrmCatalogService};

pub mod diagnostics;
pub use diagnostics::DiagnosticsReport;

pub mod seed;
