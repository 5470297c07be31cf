mod explorer;
mod planner;

pub use explorer::Explorer;
pub use planner::Planner;
