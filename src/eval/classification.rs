//! Threshold-K classification metrics: Recall@K, Precision@K, Specificity@K, F1@K.
//!
//! Inputs are binary labels (0 or 1) and model scores in arbitrary order.
//! Items are ranked by descending score; the top K are treated as predicted
//! positive and the rest as predicted negative.

use log::warn;
use std::cmp::Ordering;

/// Labels reordered by descending score. Equal scores put the positive label
/// first. Pairs are formed positionally; a longer tail on either side is dropped.
pub fn ranked_labels(labels: &[u8], scores: &[f64]) -> Vec<u8> {
    if labels.len() != scores.len() {
        warn!(
            "label/score length mismatch ({} labels, {} scores); extra items ignored",
            labels.len(),
            scores.len()
        );
    }
    let mut pairs: Vec<(f64, u8)> = scores.iter().copied().zip(labels.iter().copied()).collect();
    pairs.sort_by(compare_desc);
    pairs.into_iter().map(|(_, label)| label).collect()
}

fn compare_desc(a: &(f64, u8), b: &(f64, u8)) -> Ordering {
    b.0.total_cmp(&a.0).then_with(|| b.1.cmp(&a.1))
}

fn label_sum(labels: &[u8]) -> f64 {
    labels.iter().map(|&l| f64::from(l)).sum()
}

fn count(labels: &[u8], value: u8) -> usize {
    labels.iter().filter(|&&l| l == value).count()
}

/// Splits a ranked label list at K into (top-K, rest).
fn split_at_k(ranked: &[u8], k: usize) -> (&[u8], &[u8]) {
    ranked.split_at(k.min(ranked.len()))
}

pub(crate) fn recall_ranked(ranked: &[u8], labels: &[u8], k: usize) -> f64 {
    let (top_k, _) = split_at_k(ranked, k);
    label_sum(top_k) / label_sum(labels)
}

pub(crate) fn precision_ranked(ranked: &[u8], k: usize) -> f64 {
    let (top_k, _) = split_at_k(ranked, k);
    label_sum(top_k) / top_k.len() as f64
}

pub(crate) fn specificity_ranked(ranked: &[u8], labels: &[u8], k: usize) -> f64 {
    let negatives = count(labels, 0);
    if negatives == 0 {
        return 0.0;
    }
    let (_, rest) = split_at_k(ranked, k);
    count(rest, 0) as f64 / negatives as f64
}

pub(crate) fn f1_ranked(ranked: &[u8], k: usize) -> f64 {
    let (top_k, rest) = split_at_k(ranked, k);
    let tp = count(top_k, 1) as f64;
    let fp = count(top_k, 0) as f64;
    let fn_ = count(rest, 1) as f64;
    2.0 * tp / (2.0 * tp + fp + fn_)
}

/// Recall at K: positives in the top K over all positives in `labels`.
/// With no positives at all the result is NaN.
pub fn recall_at_k(labels: &[u8], scores: &[f64], k: usize) -> f64 {
    recall_ranked(&ranked_labels(labels, scores), labels, k)
}

/// Precision at K: positives in the top K over the number of items actually
/// in the top K (fewer than K when the input is short). NaN when that slice is
/// empty.
pub fn precision_at_k(labels: &[u8], scores: &[f64], k: usize) -> f64 {
    precision_ranked(&ranked_labels(labels, scores), k)
}

/// Specificity at K: negatives ranked below the top K over all negatives.
/// Returns 0.0 when `labels` has no negatives.
pub fn specificity_at_k(labels: &[u8], scores: &[f64], k: usize) -> f64 {
    specificity_ranked(&ranked_labels(labels, scores), labels, k)
}

/// F1 at K: `2tp / (2tp + fp + fn)` with the top K as predicted positives.
pub fn f1_at_k(labels: &[u8], scores: &[f64], k: usize) -> f64 {
    f1_ranked(&ranked_labels(labels, scores), k)
}
