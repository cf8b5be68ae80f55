//! Graded-relevance metrics: CG@K, DCG@K, NDCG@K and mean NDCG over queries.
//!
//! Relevance slices are taken to be in ranked order already (index 0 is the
//! top result). Only NDCG reorders, and only to build the ideal ranking.

use crate::error::Result;
use crate::eval::method::{discount, DcgMethod};
use log::debug;

/// Cumulative gain at K: sum of the first K relevance values.
/// If k exceeds the slice length, all values are summed.
pub fn cumulative_gain(relevance: &[f64], k: usize) -> f64 {
    relevance.iter().take(k).sum()
}

/// Discounted cumulative gain at K for a method token.
///
/// Unlike [`normalized_dcg`], an unrecognized token is not an error here: no
/// terms are accumulated and the result is 0.0.
pub fn discounted_cumulative_gain(relevance: &[f64], k: usize, method: &str) -> f64 {
    match method.parse::<DcgMethod>() {
        Ok(method) => dcg_at_k(relevance, k, method),
        Err(_) => {
            debug!("dcg: unrecognized method {:?}, returning 0", method);
            0.0
        }
    }
}

/// Discounted cumulative gain at K.
pub fn dcg_at_k(relevance: &[f64], k: usize, method: DcgMethod) -> f64 {
    relevance
        .iter()
        .take(k)
        .enumerate()
        .map(|(rank, &rel)| method.gain(rel) / discount(rank))
        .sum()
}

/// Relevance values sorted descending and truncated to K.
fn ideal_ranking(relevance: &[f64], k: usize) -> Vec<f64> {
    let mut ideal = relevance.to_vec();
    ideal.sort_by(|a, b| b.total_cmp(a));
    ideal.truncate(k);
    ideal
}

/// Normalized DCG at K: DCG of the given order over DCG of the ideal order.
///
/// When the ideal DCG is zero (no relevant items in the ideal top-K) the
/// division is left to IEEE-754, so the result is NaN.
pub fn ndcg_at_k(relevance: &[f64], k: usize, method: DcgMethod) -> f64 {
    let dcg = dcg_at_k(relevance, k, method);
    let idcg = dcg_at_k(&ideal_ranking(relevance, k), k, method);
    dcg / idcg
}

/// Normalized DCG at K for a method token.
/// Fails with `InvalidMethod` for anything but "standard" or "industry".
pub fn normalized_dcg(relevance: &[f64], k: usize, method: &str) -> Result<f64> {
    let method: DcgMethod = method.parse()?;
    Ok(ndcg_at_k(relevance, k, method))
}

/// Arithmetic mean of per-query NDCG@K.
///
/// Each query is cut to its top K before the ideal ordering is built. An
/// empty query list yields NaN.
pub fn mean_ndcg<Q: AsRef<[f64]>>(queries: &[Q], k: usize, method: DcgMethod) -> f64 {
    let scores: Vec<f64> = queries
        .iter()
        .map(|q| {
            let q = q.as_ref();
            ndcg_at_k(&q[..q.len().min(k)], k, method)
        })
        .collect();
    debug!("per-query ndcg@{} ({}): {:?}", k, method, scores);
    scores.iter().sum::<f64>() / queries.len() as f64
}

/// Mean NDCG@K for a method token. The token is validated before any query is
/// scored, so an empty query list with a bad token still fails.
pub fn avg_ndcg<Q: AsRef<[f64]>>(queries: &[Q], k: usize, method: &str) -> Result<f64> {
    let method: DcgMethod = method.parse()?;
    Ok(mean_ndcg(queries, k, method))
}
