pub use super::activity_log::Entity as ActivityLog;
pub use super::hackathon::Entity as Hackathon;
pub use super::team::Entity as Team;
