/// Inbound ports (Driving ports) - Use case interfaces
pub mod graph_query_port;

pub use graph_query_port::GraphQueryPort;
