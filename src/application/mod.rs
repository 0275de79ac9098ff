/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the header generation core and coordinates
/// with infrastructure through ports.
pub mod dto;
pub mod use_cases;
