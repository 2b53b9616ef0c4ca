pub mod export_event;
pub mod record;
pub mod role;
pub mod session;
pub mod user;

pub use export_event::ExportEvent;
pub use record::AttendanceRecord;
pub use role::Role;
pub use session::Session;
pub use user::UserAccount;
