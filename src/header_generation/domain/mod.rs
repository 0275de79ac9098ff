pub mod header_config;
pub mod license_registry;
pub mod license_table;
pub mod template_source;

pub use header_config::HeaderConfig;
pub use license_registry::LicenseRegistry;
pub use license_table::LicenseTable;
pub use template_source::TemplateSource;
