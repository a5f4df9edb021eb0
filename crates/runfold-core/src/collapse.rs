use serde::Serialize;

use crate::error::CollapseError;

/// A maximal stretch of equal adjacent elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Run<T> {
    pub value: T,
    /// Number of input elements the run covers. Always at least 1.
    pub len: usize,
}

/// Collapse every run of equal adjacent elements into a single element.
///
/// Non-adjacent repeats are kept: `[1, 2, 1]` comes back unchanged.
/// Fails with [`CollapseError::InvalidArgument`] when `sequence` is empty.
///
/// ```rust
/// use runfold_core::collapse;
///
/// assert_eq!(collapse(&[1, 1, 2, 2, 3, 3]).unwrap(), vec![1, 2, 3]);
/// assert_eq!(collapse(&[1, 2, 1]).unwrap(), vec![1, 2, 1]);
/// ```
pub fn collapse<T: PartialEq + Clone>(sequence: &[T]) -> Result<Vec<T>, CollapseError> {
    let (first, rest) = sequence
        .split_first()
        .ok_or_else(CollapseError::empty_sequence)?;

    let mut result = vec![first.clone()];
    let mut last = first;
    for item in rest {
        if item != last {
            result.push(item.clone());
            last = item;
        }
    }

    tracing::trace!(
        input_len = sequence.len(),
        output_len = result.len(),
        "collapsed sequence"
    );
    Ok(result)
}

/// Like [`collapse`], but each element remembers how long its run was.
pub fn collapse_counted<T: PartialEq + Clone>(
    sequence: &[T],
) -> Result<Vec<Run<T>>, CollapseError> {
    if sequence.is_empty() {
        return Err(CollapseError::empty_sequence());
    }
    Ok(runs(sequence)
        .map(|run| Run {
            value: run.value.clone(),
            len: run.len,
        })
        .collect())
}

/// Iterate over the runs of `sequence` without allocating.
///
/// An empty slice yields nothing.
pub fn runs<T: PartialEq>(sequence: &[T]) -> Runs<'_, T> {
    Runs { rest: sequence }
}

/// Iterator returned by [`runs`].
#[derive(Debug, Clone)]
pub struct Runs<'a, T> {
    rest: &'a [T],
}

impl<'a, T: PartialEq> Iterator for Runs<'a, T> {
    type Item = Run<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (value, tail) = self.rest.split_first()?;
        // The head always opens a run, even when it is not equal to itself (NaN).
        let len = 1 + tail.iter().take_while(|item| *item == value).count();
        self.rest = &self.rest[len..];
        Some(Run { value, len })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rest.is_empty() {
            (0, Some(0))
        } else {
            (1, Some(self.rest.len()))
        }
    }
}

impl<T: PartialEq> std::iter::FusedIterator for Runs<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_duplicates_collapsed() {
        assert_eq!(collapse(&[1, 1, 2, 2, 3, 3]).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn non_consecutive_duplicates_preserved() {
        assert_eq!(collapse(&[1, 2, 1]).unwrap(), vec![1, 2, 1]);
    }

    #[test]
    fn single_element() {
        assert_eq!(collapse(&[5]).unwrap(), vec![5]);
    }

    #[test]
    fn all_identical_elements() {
        assert_eq!(collapse(&[4, 4, 4, 4]).unwrap(), vec![4]);
    }

    #[test]
    fn empty_input_is_invalid_argument() {
        let err = collapse::<i32>(&[]).unwrap_err();
        assert!(matches!(err, CollapseError::InvalidArgument(_)));
    }

    #[test]
    fn input_is_left_untouched() {
        let input = vec![7, 7, 8];
        let output = collapse(&input).unwrap();
        assert_eq!(input, vec![7, 7, 8]);
        assert_eq!(output, vec![7, 8]);
    }

    #[test]
    fn works_for_non_integer_elements() {
        let words = ["a", "a", "b", "a"];
        assert_eq!(collapse(&words).unwrap(), vec!["a", "b", "a"]);
    }

    #[test]
    fn extreme_values() {
        let input = [i64::MIN, i64::MIN, 0, i64::MAX, i64::MAX];
        assert_eq!(collapse(&input).unwrap(), vec![i64::MIN, 0, i64::MAX]);
    }

    #[test]
    fn runs_reports_lengths() {
        let got: Vec<(i32, usize)> = runs(&[1, 1, 2, 3, 3, 3])
            .map(|run| (*run.value, run.len))
            .collect();
        assert_eq!(got, vec![(1, 2), (2, 1), (3, 3)]);
    }

    #[test]
    fn runs_of_empty_slice_is_empty() {
        assert_eq!(runs::<i32>(&[]).count(), 0);
    }

    #[test]
    fn runs_terminate_on_values_unequal_to_themselves() {
        let lens: Vec<usize> = runs(&[f64::NAN, f64::NAN, 1.0, 1.0])
            .take(10)
            .map(|run| run.len)
            .collect();
        assert_eq!(lens, vec![1, 1, 2]);
    }

    #[test]
    fn collapse_counted_handles_nan() {
        let counted = collapse_counted(&[f64::NAN, 1.0]).unwrap();
        assert_eq!(counted.len(), 2);
        assert!(counted[0].value.is_nan());
        assert_eq!(counted[0].len, 1);
        assert_eq!(counted[1], Run { value: 1.0, len: 1 });
        assert_eq!(collapse(&[f64::NAN, 1.0]).unwrap().len(), counted.len());
    }

    #[test]
    fn runs_is_fused() {
        let mut it = runs(&[9]);
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn collapse_counted_matches_collapse() {
        let input = [4, 4, 1, 4, 4, 4];
        let counted = collapse_counted(&input).unwrap();
        assert_eq!(
            counted,
            vec![
                Run { value: 4, len: 2 },
                Run { value: 1, len: 1 },
                Run { value: 4, len: 3 },
            ]
        );
        let values: Vec<i32> = counted.iter().map(|r| r.value).collect();
        assert_eq!(values, collapse(&input).unwrap());
    }

    #[test]
    fn collapse_counted_rejects_empty_input() {
        assert!(matches!(
            collapse_counted::<i64>(&[]),
            Err(CollapseError::InvalidArgument(_))
        ));
    }
}
