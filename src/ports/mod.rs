/// Ports - interface definitions between the application core and
/// infrastructure
pub mod outbound;
