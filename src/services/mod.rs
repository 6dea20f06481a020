// Service exports
pub mod memory;
pub mod repository;
pub mod seed;

pub use memory::{CampaignStore, Catalog, CreatorStore, PastDealStore};
pub use repository::{CampaignRepository, CreatorRepository, PastDealRepository};
pub use seed::DataError;
