use std::collections::HashMap;
use std::f64::consts::PI;

use super::{quantile, sample_std, sorted};

// ---------------------------------------------------------------------------
// Categorical frequencies
// ---------------------------------------------------------------------------

/// Frequency of every present value, most frequent first. Ties keep the
/// order in which values first appear.
pub fn value_counts(values: &[Option<String>]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (i, v) in values.iter().enumerate() {
        if let Some(s) = v {
            counts.entry(s.as_str()).or_insert((0, i)).0 += 1;
        }
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(value, (count, first))| (value, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked
        .into_iter()
        .map(|(value, count, _)| (value.to_string(), count))
        .collect()
}

/// The `n` most frequent values.
pub fn top_values(values: &[Option<String>], n: usize) -> Vec<(String, usize)> {
    let mut counts = value_counts(values);
    counts.truncate(n);
    counts
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Equal-width bins over the data range. The last bin is closed on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `counts.len() + 1` bin edges, ascending.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.last()) {
            (Some(first), Some(last)) if !self.counts.is_empty() => {
                (last - first) / self.counts.len() as f64
            }
            _ => 0.0,
        }
    }

    /// `(center, count)` per bin.
    pub fn bars(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(edge, &count)| ((edge[0] + edge[1]) / 2.0, count))
    }
}

/// Number of bins picked by the "auto" rule: the smaller of the Sturges and
/// Freedman–Diaconis widths, Sturges alone when the IQR is zero.
pub fn auto_bin_count(sorted_values: &[f64]) -> usize {
    let n = sorted_values.len();
    let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
        return 1;
    };
    let range = max - min;
    if range <= 0.0 {
        return 1;
    }

    let sturges = range / ((n as f64).log2() + 1.0);
    let iqr = quantile(sorted_values, 0.75) - quantile(sorted_values, 0.25);
    let fd = 2.0 * iqr * (n as f64).powf(-1.0 / 3.0);
    let width = if fd > 0.0 { fd.min(sturges) } else { sturges };

    ((range / width).ceil() as usize).max(1)
}

/// Histogram of `values` with an automatic bin count capped at `max_bins`.
/// `None` when there are no values.
pub fn histogram(values: &[f64], max_bins: usize) -> Option<Histogram> {
    let v = sorted(values.iter().copied().filter(|x| x.is_finite()).collect());
    let (&min, &max) = (v.first()?, v.last()?);

    let bins = auto_bin_count(&v).clamp(1, max_bins.max(1));
    let (lo, hi) = if max > min {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    };
    let width = (hi - lo) / bins as f64;

    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
    let mut counts = vec![0usize; bins];
    for x in &v {
        let idx = (((x - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Some(Histogram { edges, counts })
}

// ---------------------------------------------------------------------------
// Kernel density estimate
// ---------------------------------------------------------------------------

/// Gaussian KDE with Scott's bandwidth, evaluated at `points` evenly spaced
/// positions across the data range. Returns `[x, density]` pairs.
///
/// `None` with fewer than two values or zero variance.
pub fn kde_curve(values: &[f64], points: usize) -> Option<Vec<[f64; 2]>> {
    let v: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    let n = v.len();
    if n < 2 || points < 2 {
        return None;
    }
    let std = sample_std(&v);
    if std.is_nan() || std <= 0.0 {
        return None;
    }

    let bandwidth = std * (n as f64).powf(-0.2);
    let norm = 1.0 / (n as f64 * bandwidth * (2.0 * PI).sqrt());
    let min = v.iter().copied().fold(f64::INFINITY, f64::min);
    let max = v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let step = (max - min) / (points - 1) as f64;

    let curve = (0..points)
        .map(|i| {
            let x = min + step * i as f64;
            let density: f64 = v
                .iter()
                .map(|xi| {
                    let z = (x - xi) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum();
            [x, density * norm]
        })
        .collect();
    Some(curve)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn value_counts_rank_by_frequency_then_first_appearance() {
        let counts = value_counts(&strings(&[
            Some("b"),
            Some("a"),
            Some("c"),
            Some("a"),
            None,
            Some("c"),
            Some("d"),
        ]));
        assert_eq!(
            counts,
            vec![
                ("a".to_string(), 2),
                ("c".to_string(), 2),
                ("b".to_string(), 1),
                ("d".to_string(), 1),
            ]
        );
    }

    #[test]
    fn top_values_keeps_at_most_n() {
        let values: Vec<Option<String>> = (0..25).map(|i| Some(format!("v{i}"))).collect();
        assert_eq!(top_values(&values, 10).len(), 10);
        assert_eq!(top_values(&values[..3], 10).len(), 3);
    }

    #[test]
    fn histogram_counts_every_value() {
        let values: Vec<f64> = (1..=100).map(f64::from).collect();
        let hist = histogram(&values, 500).unwrap();
        assert_eq!(hist.counts.iter().sum::<usize>(), 100);
        assert_eq!(hist.edges.len(), hist.counts.len() + 1);
        assert_eq!(hist.edges[0], 1.0);
        assert!((hist.edges.last().unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn auto_bins_follow_sturges_for_small_samples() {
        // range 4, n = 5: sturges width 4 / (log2(5) + 1) ≈ 1.20, fd width ≈ 2.34
        let bins = auto_bin_count(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(bins, 4);
    }

    #[test]
    fn constant_values_get_a_single_unit_bin() {
        let hist = histogram(&[7.0, 7.0, 7.0], 500).unwrap();
        assert_eq!(hist.counts, vec![3]);
        assert_eq!(hist.edges, vec![6.5, 7.5]);
        assert_eq!(hist.bin_width(), 1.0);
    }

    #[test]
    fn histogram_respects_bin_cap() {
        let values: Vec<f64> = (0..10_000).map(|i| i as f64).collect();
        let hist = histogram(&values, 12).unwrap();
        assert_eq!(hist.counts.len(), 12);
        assert_eq!(hist.counts.iter().sum::<usize>(), 10_000);
    }

    #[test]
    fn histogram_of_nothing_is_none() {
        assert!(histogram(&[], 10).is_none());
    }

    #[test]
    fn kde_integrates_to_roughly_one_over_data_range() {
        let values: Vec<f64> = (0..200).map(|i| (i % 20) as f64).collect();
        let curve = kde_curve(&values, 200).unwrap();
        assert_eq!(curve.len(), 200);
        let step = curve[1][0] - curve[0][0];
        let area: f64 = curve.iter().map(|p| p[1] * step).sum();
        assert!(area > 0.8 && area < 1.05, "area = {area}");
    }

    #[test]
    fn kde_needs_spread() {
        assert!(kde_curve(&[1.0], 200).is_none());
        assert!(kde_curve(&[3.0, 3.0, 3.0], 200).is_none());
    }
}
