//! Pages

mod browse;
mod guide;
mod home;
mod map_page;
mod plan;

pub use browse::BrowsePage;
pub use guide::GuidePage;
pub use home::HomePage;
pub use map_page::MapPage;
pub use plan::PlanPage;
