/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are what a driver (the CLI) calls into; outbound ports are
/// what the application core needs from the outside world.
pub mod inbound;
pub mod outbound;
