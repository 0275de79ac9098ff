/// Use cases module containing application business logic orchestration
mod generate_header;

pub use generate_header::GenerateHeaderUseCase;
