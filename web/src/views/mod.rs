mod about;
mod dashboard;
mod not_found;

pub use about::About;
pub use dashboard::Dashboard;
pub use not_found::NotFound;
