/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI adapter and the use case, keeping the
/// domain layer isolated.
mod header_request;
mod header_response;

pub use header_request::{HeaderRequest, HeaderRequestBuilder};
pub use header_response::HeaderResponse;
