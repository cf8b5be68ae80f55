//! Metric bundles at a single cutoff, and an evaluator carrying configured defaults.

use crate::config::MetricsConfig;
use crate::error::Result;
use crate::eval::classification::{
    f1_ranked, precision_ranked, ranked_labels, recall_ranked, specificity_ranked,
};
use crate::eval::method::DcgMethod;
use crate::eval::ranking::{cumulative_gain, dcg_at_k, mean_ndcg, ndcg_at_k};
use serde::{Deserialize, Serialize};

/// Graded-relevance metrics for one ranked list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingMetrics {
    pub k: usize,
    pub method: DcgMethod,
    pub cg: f64,
    pub dcg: f64,
    pub ndcg: f64,
}

impl RankingMetrics {
    pub fn compute(relevance: &[f64], k: usize, method: DcgMethod) -> Self {
        Self {
            k,
            method,
            cg: cumulative_gain(relevance, k),
            dcg: dcg_at_k(relevance, k, method),
            ndcg: ndcg_at_k(relevance, k, method),
        }
    }
}

/// Threshold-K classification metrics for one labeled, scored list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    pub k: usize,
    pub recall: f64,
    pub precision: f64,
    pub specificity: f64,
    pub f1: f64,
}

impl ClassificationMetrics {
    /// Ranks the items once and derives all four metrics from that order.
    pub fn compute(labels: &[u8], scores: &[f64], k: usize) -> Self {
        let ranked = ranked_labels(labels, scores);
        Self {
            k,
            recall: recall_ranked(&ranked, labels, k),
            precision: precision_ranked(&ranked, k),
            specificity: specificity_ranked(&ranked, labels, k),
            f1: f1_ranked(&ranked, k),
        }
    }
}

/// Computes metrics at a fixed cutoff and DCG method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    k: usize,
    method: DcgMethod,
}

impl Evaluator {
    pub fn new(k: usize, method: DcgMethod) -> Self {
        Self { k, method }
    }

    /// Builds an evaluator from a method token, failing on unknown tokens.
    pub fn with_method_str(k: usize, method: &str) -> Result<Self> {
        Ok(Self::new(k, method.parse()?))
    }

    pub fn from_config(config: &MetricsConfig) -> Self {
        Self::new(config.default_k, config.method)
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn method(&self) -> DcgMethod {
        self.method
    }

    pub fn ranking(&self, relevance: &[f64]) -> RankingMetrics {
        RankingMetrics::compute(relevance, self.k, self.method)
    }

    pub fn classification(&self, labels: &[u8], scores: &[f64]) -> ClassificationMetrics {
        ClassificationMetrics::compute(labels, scores, self.k)
    }

    pub fn avg_ndcg<Q: AsRef<[f64]>>(&self, queries: &[Q]) -> f64 {
        mean_ndcg(queries, self.k, self.method)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::from_config(&MetricsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::classification::{f1_at_k, precision_at_k, recall_at_k, specificity_at_k};
    use crate::eval::ranking::normalized_dcg;

    const EPS: f64 = 1e-9;

    #[test]
    fn classification_report_matches_individual_metrics() {
        let labels = [1, 0, 0, 1, 1, 0];
        let scores = [0.3, 0.9, 0.2, 0.8, 0.5, 0.4];
        for k in 1..=6 {
            let report = ClassificationMetrics::compute(&labels, &scores, k);
            assert_eq!(report.k, k);
            assert!((report.recall - recall_at_k(&labels, &scores, k)).abs() < EPS);
            assert!((report.precision - precision_at_k(&labels, &scores, k)).abs() < EPS);
            assert!((report.specificity - specificity_at_k(&labels, &scores, k)).abs() < EPS);
            assert!((report.f1 - f1_at_k(&labels, &scores, k)).abs() < EPS);
        }
    }

    #[test]
    fn ranking_report_values() {
        let report = RankingMetrics::compute(&[3.0, 2.0, 1.0], 2, DcgMethod::Standard);
        assert!((report.cg - 5.0).abs() < EPS);
        assert!((report.dcg - (3.0 + 2.0 / 3f64.log2())).abs() < EPS);
        assert!((report.ndcg - 1.0).abs() < EPS);
    }

    #[test]
    fn report_serializes_with_lowercase_method() {
        let report = RankingMetrics::compute(&[1.0, 0.0], 2, DcgMethod::Industry);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["method"], "industry");
        assert_eq!(json["k"], 2);
        let back: RankingMetrics = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn evaluator_uses_its_cutoff_and_method() {
        let eval = Evaluator::with_method_str(3, "industry").unwrap();
        assert_eq!(eval.k(), 3);
        assert_eq!(eval.method(), DcgMethod::Industry);

        let query = [0.0, 2.0, 1.0, 3.0];
        let expected = normalized_dcg(&query[..3], 3, "industry").unwrap();
        assert!((eval.avg_ndcg(&[query, query]) - expected).abs() < EPS);
        let single = ndcg_at_k(&query, 3, DcgMethod::Industry);
        assert!((eval.ranking(&query).ndcg - single).abs() < EPS);

        let report = eval.classification(&[1, 0, 1, 0], &[0.9, 0.8, 0.7, 0.1]);
        assert!((report.f1 - 0.8).abs() < EPS);
    }

    #[test]
    fn public_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Evaluator>();
        assert_send_sync::<RankingMetrics>();
        assert_send_sync::<ClassificationMetrics>();
    }

    #[test]
    fn evaluator_rejects_unknown_method() {
        assert!(Evaluator::with_method_str(5, "log2").is_err());
    }

    #[test]
    fn evaluator_default_follows_config_default() {
        let eval = Evaluator::default();
        let config = MetricsConfig::default();
        assert_eq!(eval.k(), config.default_k);
        assert_eq!(eval.method(), config.method);
    }
}
