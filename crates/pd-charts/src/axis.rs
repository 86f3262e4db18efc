//! Axis label thinning for long categorical series.

/// Most x labels drawn on the production trend.
pub const DEFAULT_MAX_X_LABELS: usize = 40;

/// Indices of the labels to draw when at most `max_labels` fit.
///
/// Labels are subsampled with a fixed stride so the kept ones are evenly
/// spread and always include the first label.
pub fn thin_label_indices(len: usize, max_labels: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let shown = len.min(max_labels.max(1));
    let stride = len.div_ceil(shown);
    (0..len).step_by(stride).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn short_series_keeps_everything() {
        assert_eq!(thin_label_indices(5, 40), vec![0, 1, 2, 3, 4]);
        assert!(thin_label_indices(0, 40).is_empty());
    }

    #[test]
    fn year_of_days() {
        let kept = thin_label_indices(365, 40);
        // ceil(365 / 40) = 10
        assert_eq!(kept.len(), 37);
        assert_eq!(kept[1], 10);
        assert_eq!(*kept.last().unwrap(), 360);
    }

    proptest! {
        #[test]
        fn never_exceeds_cap(len in 0usize..2000, cap in 1usize..100) {
            let kept = thin_label_indices(len, cap);
            prop_assert!(kept.len() <= cap);
            prop_assert!(kept.iter().all(|&i| i < len));
            if len > 0 {
                prop_assert_eq!(kept[0], 0);
            }
        }
    }
}
