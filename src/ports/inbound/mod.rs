/// Inbound ports (Driving ports) - Use case interfaces
pub mod uses_query_port;

pub use uses_query_port::UsesQueryPort;
