/// Dashboard domain layer - pure view-derivation logic
///
/// This layer contains the record model, the user-controlled query state,
/// and the services that derive every rendered view from them. Nothing in
/// here performs I/O; loading and presentation live in the adapters.
pub mod domain;
pub mod services;
