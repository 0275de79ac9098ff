/// Header generation core - pure domain logic, no I/O
pub mod domain;
pub mod services;
