/// Crate-wide Result alias.
///
/// Domain failures are raised as [`SbomError`](super::error::SbomError) and carried
/// as `anyhow::Error`, so callers that need the failure kind can downcast.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
