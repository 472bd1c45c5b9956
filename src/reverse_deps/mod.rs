/// Reverse-dependency domain - formula model and the resolver
///
/// Pure logic only: nothing in here performs I/O.
pub mod domain;
pub mod services;
