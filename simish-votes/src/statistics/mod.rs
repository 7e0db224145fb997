use libm::sqrt;

/// Summary of a set of match scores, used when evaluating a room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreStats {
    /// The arithmetic mean of the scores.
    pub mean: f64,
    /// The population standard deviation of the scores.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Calculates mean, standard deviation and range for a slice of scores.
///
/// An empty slice yields all zeros.
pub fn compute_stats(values: &[f64]) -> ScoreStats {
    if values.is_empty() {
        return ScoreStats { mean: 0.0, std_dev: 0.0, min: 0.0, max: 0.0 };
    }

    let len = values.len() as f64;
    let mean = values.iter().sum::<f64>() / len;

    let variance = values.iter()
        .map(|value| {
            let diff = mean - value;
            diff * diff
        })
        .sum::<f64>() / len;

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    ScoreStats {
        mean,
        std_dev: sqrt(variance),
        min,
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate alloc;
    use alloc::vec;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_compute_stats_empty() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_compute_stats_single_value() {
        let stats = compute_stats(&[0.5]);
        assert_eq!(stats.mean, 0.5);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.min, 0.5);
        assert_eq!(stats.max, 0.5);
    }

    #[test]
    fn test_compute_stats_simple_range() {
        // Mean 5.0, variance 32/8 = 4.0, std dev 2.0
        let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = compute_stats(&values);

        assert!((stats.mean - 5.0).abs() < EPSILON);
        assert!((stats.std_dev - 2.0).abs() < EPSILON);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
    }
}
