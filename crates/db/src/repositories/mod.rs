//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods. Methods
//! accept any [`sqlx::PgExecutor`] so callers can pass `&PgPool` for a single
//! statement or `&mut *tx` to compose several statements in one transaction.

pub mod brigade_repo;
pub mod collector_repo;
pub mod harvest_log_repo;
pub mod harvest_stats_repo;
pub mod product_category_repo;
pub mod product_repo;
pub mod user_repo;

pub use brigade_repo::BrigadeRepo;
pub use collector_repo::CollectorRepo;
pub use harvest_log_repo::HarvestLogRepo;
pub use harvest_stats_repo::HarvestStatsRepo;
pub use product_category_repo::ProductCategoryRepo;
pub use product_repo::ProductRepo;
pub use user_repo::UserRepo;
