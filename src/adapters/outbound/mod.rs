/// Outbound adapters - infrastructure implementations of the driven ports
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod http;
