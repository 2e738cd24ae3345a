pub mod args;
pub mod dates;
pub mod generate;
pub mod output;
pub mod record;
pub mod utils;
pub mod values;

pub use args::Args;
pub use generate::{generate_follower_data, GenerationPlan, GenerationSummary};
pub use record::{FollowerRecord, FollowerSeries};
pub use values::{RngSource, ValueSource};
