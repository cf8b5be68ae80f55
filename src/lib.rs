pub mod config;
pub mod error;
pub mod eval;

pub use config::Config;
pub use error::{MetricsError, Result};
pub use eval::{
    avg_ndcg, cumulative_gain, discounted_cumulative_gain, f1_at_k, normalized_dcg,
    precision_at_k, recall_at_k, specificity_at_k, ClassificationMetrics, DcgMethod, Evaluator,
    RankingMetrics,
};
