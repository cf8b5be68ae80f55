//! Ranking-quality metrics: graded relevance (CG, DCG, NDCG), threshold-K
//! classification (recall, precision, specificity, F1), and report bundles.

pub mod classification;
pub mod method;
pub mod ranking;
pub mod report;

pub use classification::{f1_at_k, precision_at_k, ranked_labels, recall_at_k, specificity_at_k};
pub use method::DcgMethod;
pub use ranking::{
    avg_ndcg, cumulative_gain, dcg_at_k, discounted_cumulative_gain, mean_ndcg, ndcg_at_k,
    normalized_dcg,
};
pub use report::{ClassificationMetrics, Evaluator, RankingMetrics};
