/// Port traits separating the application core from infrastructure
///
/// `inbound` is what drivers such as the CLI call; `outbound` is what the
/// core calls to read options, write documents and report progress.
pub mod inbound;
pub mod outbound;
