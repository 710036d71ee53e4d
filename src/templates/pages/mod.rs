pub mod dashboard;
pub mod simple;

pub use dashboard::{dashboard_page, property_results, DashboardVm, DASHBOARD_CAP};
pub use simple::simple_page;
