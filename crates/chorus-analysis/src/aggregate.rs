//! Merge of per-chunk results.

use crate::types::{Aggregate, PartialResult};

/// Merge partial results into a single [`Aggregate`].
///
/// Percentages are a plain unweighted mean over chunks: a final chunk of 50
/// comments counts as much as a full chunk of 100. Lists are concatenated in
/// chunk order with duplicates kept. Returns `None` for an empty slice.
#[must_use]
pub fn aggregate(results: &[PartialResult]) -> Option<Aggregate> {
    if results.is_empty() {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let count = results.len() as f64;
    let mean = |field: fn(&PartialResult) -> f64| results.iter().map(field).sum::<f64>() / count;

    Some(Aggregate {
        pos_avg: mean(|r| r.pos),
        neg_avg: mean(|r| r.neg),
        neu_avg: mean(|r| r.neu),
        praise: results.iter().flat_map(|r| r.praise.iter().cloned()).collect(),
        pain: results.iter().flat_map(|r| r.pain.iter().cloned()).collect(),
        themes: results.iter().flat_map(|r| r.themes.iter().cloned()).collect(),
    })
}

/// Round a percentage to the nearest integer, halves rounding up.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_percentage(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial(pos: f64, neg: f64, neu: f64, praise: &[&str]) -> PartialResult {
        PartialResult {
            pos,
            neg,
            neu,
            praise: praise.iter().map(|s| (*s).to_string()).collect(),
            pain: Vec::new(),
            themes: Vec::new(),
        }
    }

    #[test]
    fn empty_input_has_no_aggregate() {
        assert!(aggregate(&[]).is_none());
    }

    #[test]
    fn single_result_is_its_own_mean() {
        let agg = aggregate(&[partial(60.0, 30.0, 10.0, &[])]).unwrap();
        assert_eq!(agg.pos_avg, 60.0);
        assert_eq!(agg.neg_avg, 30.0);
        assert_eq!(agg.neu_avg, 10.0);
    }

    #[test]
    fn averages_are_unweighted() {
        let agg = aggregate(&[
            partial(60.0, 20.0, 20.0, &[]),
            partial(40.0, 40.0, 20.0, &[]),
            partial(20.0, 0.0, 80.0, &[]),
        ])
        .unwrap();
        assert!((agg.pos_avg - 40.0).abs() < 1e-9);
        assert!((agg.neg_avg - 20.0).abs() < 1e-9);
        assert!((agg.neu_avg - 40.0).abs() < 1e-9);
    }

    #[test]
    fn fallback_chunks_pull_the_mean_down() {
        let agg = aggregate(&[partial(80.0, 10.0, 10.0, &[]), PartialResult::default()]).unwrap();
        assert_eq!(agg.pos_avg, 40.0);
    }

    #[test]
    fn lists_concatenate_in_chunk_order_with_duplicates() {
        let agg = aggregate(&[
            partial(0.0, 0.0, 0.0, &["taste", "price"]),
            partial(0.0, 0.0, 0.0, &[]),
            partial(0.0, 0.0, 0.0, &["taste"]),
        ])
        .unwrap();
        assert_eq!(agg.praise, vec!["taste", "price", "taste"]);
    }

    #[test]
    fn rounding_matches_half_up() {
        assert_eq!(round_percentage(49.5), 50);
        assert_eq!(round_percentage(49.49), 49);
        assert_eq!(round_percentage(0.0), 0);
        assert_eq!(round_percentage(33.333), 33);
        assert_eq!(round_percentage(66.667), 67);
        assert_eq!(round_percentage(f64::NAN), 0);
    }
}
