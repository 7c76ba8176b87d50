//! Coverage matrix: which test exercises which line.
//!
//! The matrix is the read-only input of every search. Row `t` holds one
//! boolean per source line, `true` when test `t` executes that line.
//! Parsing it from a trace source is left to the caller.

/// Immutable rectangular boolean grid of `num_tests × num_lines`.
///
/// Rectangularity is a precondition of the caller and is only checked in
/// debug builds.
///
/// # Example
///
/// ```
/// use suite_minimizer::coverage::CoverageMatrix;
///
/// let matrix = CoverageMatrix::from_rows(vec![
///     vec![true, false],
///     vec![false, true],
///     vec![true, true],
/// ]);
/// assert_eq!(matrix.num_tests(), 3);
/// assert_eq!(matrix.num_lines(), 2);
/// assert!(matrix.covers(2, 1));
/// assert_eq!(matrix.lines_covered_by(2), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageMatrix {
    rows: Vec<Vec<bool>>,
    num_lines: usize,
}

impl CoverageMatrix {
    /// Builds a matrix from one row per test.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        let num_lines = rows.first().map_or(0, Vec::len);
        debug_assert!(
            rows.iter().all(|r| r.len() == num_lines),
            "coverage matrix must be rectangular"
        );
        Self { rows, num_lines }
    }

    /// Number of tests (rows).
    pub fn num_tests(&self) -> usize {
        self.rows.len()
    }

    /// Number of lines (columns).
    pub fn num_lines(&self) -> usize {
        self.num_lines
    }

    /// Whether test `test` covers line `line`.
    pub fn covers(&self, test: usize, line: usize) -> bool {
        self.rows[test][line]
    }

    /// The coverage row of one test.
    pub fn row(&self, test: usize) -> &[bool] {
        &self.rows[test]
    }

    /// Number of lines covered by test `test` on its own.
    pub fn lines_covered_by(&self, test: usize) -> usize {
        self.rows[test].iter().filter(|&&c| c).count()
    }

    /// Number of lines covered by the union of the given tests.
    pub fn lines_covered_by_all<I>(&self, tests: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        let mut covered = vec![false; self.num_lines];
        for t in tests {
            for (c, &hit) in covered.iter_mut().zip(&self.rows[t]) {
                *c |= hit;
            }
        }
        covered.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CoverageMatrix {
        CoverageMatrix::from_rows(vec![
            vec![true, false, false],
            vec![false, true, false],
            vec![true, true, false],
        ])
    }

    #[test]
    fn test_dimensions() {
        let m = sample();
        assert_eq!(m.num_tests(), 3);
        assert_eq!(m.num_lines(), 3);
    }

    #[test]
    fn test_empty_matrix() {
        let m = CoverageMatrix::from_rows(vec![]);
        assert_eq!(m.num_tests(), 0);
        assert_eq!(m.num_lines(), 0);
    }

    #[test]
    fn test_per_test_coverage() {
        let m = sample();
        assert_eq!(m.lines_covered_by(0), 1);
        assert_eq!(m.lines_covered_by(1), 1);
        assert_eq!(m.lines_covered_by(2), 2);
        assert_eq!(m.row(1), &[false, true, false]);
    }

    #[test]
    fn test_union_coverage() {
        let m = sample();
        assert_eq!(m.lines_covered_by_all([0, 1]), 2);
        assert_eq!(m.lines_covered_by_all([0, 1, 2]), 2);
        assert_eq!(m.lines_covered_by_all(std::iter::empty()), 0);
    }
}
