//! Scales mapping data into plot coordinates.
//!
//! Categorical scales span `[0, n]` for `n` labels, so one category step is
//! about one plot unit. They keep the order of their domain as given and
//! never sort or deduplicate labels.

/// Categorical scale placing each label at a single point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointScale {
    domain: Vec<String>,
    padding: f64,
}

impl PointScale {
    pub fn new(domain: Vec<String>, padding: f64) -> Self {
        Self { domain, padding }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Range covered by the axis: `[0, n]`.
    pub fn extent(&self) -> (f64, f64) {
        (0.0, self.domain.len() as f64)
    }

    /// Distance between adjacent points.
    pub fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        n / (n - 1.0 + 2.0 * self.padding).max(1.0)
    }

    /// Position of the `index`-th label, or `None` past the end of the domain.
    pub fn position(&self, index: usize) -> Option<f64> {
        if index >= self.domain.len() {
            return None;
        }
        let n = self.domain.len() as f64;
        let step = self.step();
        let start = (n - step * (n - 1.0)) * 0.5;
        Some(start + step * index as f64)
    }
}

/// Categorical scale dividing the axis into equal bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    padding: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, padding: f64) -> Self {
        Self {
            domain,
            padding: padding.clamp(0.0, 1.0),
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn extent(&self) -> (f64, f64) {
        (0.0, self.domain.len() as f64)
    }

    pub fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        n / (n - self.padding + 2.0 * self.padding).max(1.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Center of the `index`-th band.
    pub fn center(&self, index: usize) -> Option<f64> {
        if index >= self.domain.len() {
            return None;
        }
        let n = self.domain.len() as f64;
        let step = self.step();
        let offset = (n - step * (n - self.padding)) * 0.5;
        Some(offset + step * index as f64 + self.bandwidth() * 0.5)
    }
}

/// Linear value scale over a data domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Scale spanning `[min, max]` of `values`; `None` when there are no finite values.
    pub fn from_extent(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        extent(values).map(Self::new)
    }

    /// Scale spanning `[0, max]` of `values`; `None` when there are no finite values.
    pub fn from_zero(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let (_, hi) = extent(values)?;
        Some(Self::new((0.0, hi)))
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn is_degenerate(&self) -> bool {
        self.domain.1 <= self.domain.0
    }

    /// Axis bounds: exactly the domain, widened by one unit each way only when
    /// the domain collapses to a single value.
    pub fn bounds(&self) -> (f64, f64) {
        let (lo, hi) = self.domain;
        if self.is_degenerate() {
            (lo - 1.0, hi + 1.0)
        } else {
            (lo, hi)
        }
    }
}

fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn point_scale_centers_points() {
        let scale = PointScale::new(labels(&["a", "b", "c"]), 0.5);
        assert_eq!(scale.step(), 1.0);
        assert_eq!(scale.extent(), (0.0, 3.0));
        assert_eq!(scale.position(0), Some(0.5));
        assert_eq!(scale.position(2), Some(2.5));
        assert_eq!(scale.position(3), None);
    }

    #[test]
    fn point_scale_single_point_is_centered() {
        let scale = PointScale::new(labels(&["only"]), 0.5);
        assert_eq!(scale.position(0), Some(0.5));
    }

    #[test]
    fn point_scale_preserves_order() {
        let scale = PointScale::new(labels(&["Mar", "Jan", "Feb"]), 0.5);
        assert_eq!(scale.domain()[0], "Mar");
        assert!(scale.position(0).unwrap() < scale.position(1).unwrap());
    }

    #[test]
    fn band_scale_layout() {
        let scale = BandScale::new(labels(&["s1", "s2"]), 0.1);
        let step = 2.0 / 2.1;
        assert!((scale.step() - step).abs() < 1e-9);
        assert!((scale.bandwidth() - step * 0.9).abs() < 1e-9);

        // Outer padding is symmetric.
        let half = scale.bandwidth() * 0.5;
        let left_gap = scale.center(0).unwrap() - half;
        let right_gap = 2.0 - (scale.center(1).unwrap() + half);
        assert!((left_gap - step * 0.1).abs() < 1e-9);
        assert!((left_gap - right_gap).abs() < 1e-9);
        assert_eq!(scale.center(2), None);
    }

    #[test]
    fn linear_extent_and_zero() {
        let s = LinearScale::from_extent([10.0, 30.0, 20.0]).unwrap();
        assert_eq!(s.domain(), (10.0, 30.0));
        assert_eq!(s.bounds(), (10.0, 30.0));

        let z = LinearScale::from_zero([5.0, 9.0]).unwrap();
        assert_eq!(z.domain(), (0.0, 9.0));

        assert!(LinearScale::from_extent([]).is_none());
        assert!(LinearScale::from_extent([f64::NAN]).is_none());
    }

    #[test]
    fn degenerate_domain_is_widened() {
        let s = LinearScale::new((4.0, 4.0));
        assert!(s.is_degenerate());
        assert_eq!(s.domain(), (4.0, 4.0));
        assert_eq!(s.bounds(), (3.0, 5.0));
    }
}
