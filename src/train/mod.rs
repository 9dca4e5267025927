pub mod epoch_stats;
pub mod history;
pub mod train_config;
pub mod loop_fn;

pub use epoch_stats::EpochStats;
pub use history::ErrorHistory;
pub use train_config::TrainConfig;
pub use loop_fn::{train_loop, Trainable};
