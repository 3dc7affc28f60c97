pub mod aggregator;
pub mod constants;
pub mod cost;
pub mod partition;

pub use aggregator::{aggregate, locale_cmp};
pub use constants::*;
pub use cost::{estimate_cost, estimate_total, unpriced_count};
pub use partition::{already_have_key, partition, AlreadyHaveSet, ShoppingPartition};
