/// Duplication analysis domain
///
/// Pure business logic: typed records, classification policies and the
/// four pipeline services (extract, group, suggest, measure). Nothing in
/// this module performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
