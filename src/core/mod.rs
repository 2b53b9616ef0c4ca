pub mod auth;
pub mod export;
pub mod ledger;
pub mod session;

pub use auth::{LoginOutcome, LogoutOutcome};
pub use export::ExportOutcome;
pub use ledger::Ledger;
