pub mod dashboard;
pub mod detail;
pub mod flow;
pub mod state;

pub use dashboard::AppLevelRetnRemDashboard;
pub use detail::AssetLevelRetnRemDetail;
