pub mod header_template;

pub use header_template::{current_year, HeaderTemplate};
