pub mod criteria;
pub mod filter;
pub mod record;
pub mod score;
pub mod sort;
pub mod stats;

pub use criteria::{BedroomFilter, DistrictFilter, FilterCriteria, SortKey};
pub use record::Record;
pub use score::ScoreTier;
pub use stats::{DistrictStat, Summary};
