/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are the query entry points used by the CLI; outbound ports
/// are the infrastructure the application core drives (file system,
/// formatters, console).
pub mod inbound;
pub mod outbound;
