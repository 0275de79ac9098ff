//! boilerplate-gen - copyright/license header generator for scaffolded projects
//!
//! Renders the `hack/boilerplate.<ext>.txt` header file that code generators
//! prepend to every file they emit. A license key is resolved against a small
//! built-in table (`apache2`, `none`) merged with caller-supplied licenses,
//! the year and owner are defaulted, and the header is rendered as a block
//! comment.
//!
//! # Architecture
//!
//! - **Domain Layer** (`header_generation`): `HeaderConfig`, license tables and the `HeaderTemplate` service
//! - **Application Layer** (`application`): request/response DTOs and the use case
//! - **Ports** (`ports`): interfaces for the file system and console
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): errors, `Result` alias and file safety checks
//!
//! # Example
//!
//! ```
//! use boilerplate_gen::prelude::*;
//!
//! let config = HeaderConfig::new().with_license("none").with_year("2024");
//! HeaderTemplate::validate(&config).unwrap();
//! let config = HeaderTemplate::apply_defaults(&config);
//! assert_eq!(HeaderTemplate::render(&config), "/*\nCopyright 2024.\n*/");
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod header_generation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::application::dto::{HeaderRequest, HeaderResponse};
    pub use crate::application::use_cases::GenerateHeaderUseCase;
    pub use crate::header_generation::domain::{
        HeaderConfig, LicenseRegistry, LicenseTable, TemplateSource,
    };
    pub use crate::header_generation::services::HeaderTemplate;
    pub use crate::ports::outbound::{BoilerplateSourceReader, OutputPresenter, ProgressReporter};
    pub use crate::shared::error::HeaderError;
    pub use crate::shared::Result;
}
