//! Page components, one per route.

pub mod dashboard;
pub mod employees;
pub mod home;
pub mod intro;
pub mod login;
pub mod payroll;
pub mod performance;
pub mod timeoff;

pub use dashboard::Dashboard;
pub use employees::Employees;
pub use home::Home;
pub use intro::Intro;
pub use login::Login;
pub use payroll::Payroll;
pub use performance::Performance;
pub use timeoff::TimeOff;
