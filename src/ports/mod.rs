/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the seams between the header generation core and
/// the file system and console.
pub mod outbound;
