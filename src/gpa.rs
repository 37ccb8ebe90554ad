//! GPA aggregation over credit ledgers.

use tracing::debug;

use crate::credit::Credit;
use crate::error::LedgerError;

/// Converts a credit-weighted 100-point average into grade points.
pub const GPA_DIVISOR: f64 = 20.0;

/// Sum of credit-hour weights.
pub fn total_weight(credits: &[Credit]) -> f64 {
    credits.iter().map(Credit::grade).sum()
}

/// Sum of scores weighted by credit hours.
pub fn weighted_score(credits: &[Credit]) -> f64 {
    credits.iter().map(Credit::score_grade).sum()
}

/// Computes `Σ(score × grade) / Σ grade / 20`.
///
/// # Errors
///
/// Returns [`LedgerError::DivisionByZero`] when the total weight is zero,
/// which includes an empty ledger.
pub fn gpa(credits: &[Credit]) -> Result<f64, LedgerError> {
    let weight_sum = total_weight(credits);
    if weight_sum == 0.0 {
        return Err(LedgerError::DivisionByZero);
    }

    let value = weighted_score(credits) / weight_sum / GPA_DIVISOR;
    debug!(courses = credits.len(), weight_sum, gpa = value, "Computed GPA");
    Ok(value)
}

/// Computes the GPA of both ledgers concatenated, `first` before `second`.
///
/// Courses present in both are counted twice.
pub fn merge_gpa(first: &[Credit], second: &[Credit]) -> Result<f64, LedgerError> {
    let merged: Vec<Credit> = first.iter().chain(second).cloned().collect();
    gpa(&merged)
}

/// Computes the GPA of `credits` without any course named in `exclude`.
///
/// Matching is by course name only; score and grade of the excluded entries
/// are ignored.
pub fn exclude_from(credits: &[Credit], exclude: &[Credit]) -> Result<f64, LedgerError> {
    let kept: Vec<Credit> = credits
        .iter()
        .filter(|c| !exclude.contains(c))
        .cloned()
        .collect();

    debug!(
        excluded = credits.len() - kept.len(),
        kept = kept.len(),
        "Filtered excluded courses"
    );
    gpa(&kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Credit> {
        vec![Credit::new("Math", 90.0, 4.0), Credit::new("PE", 85.0, 2.0)]
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_gpa_example() {
        let value = gpa(&sample()).unwrap();
        assert!(approx_eq(value, 530.0 / 120.0));
        assert!((value - 4.4167).abs() < 1e-4);
    }

    #[test]
    fn test_gpa_empty_is_division_by_zero() {
        assert!(matches!(gpa(&[]), Err(LedgerError::DivisionByZero)));
    }

    #[test]
    fn test_gpa_zero_weight_is_division_by_zero() {
        let credits = vec![Credit::new("Seminar", 100.0, 0.0), Credit::unnamed(90.0, 0.0)];
        assert!(matches!(gpa(&credits), Err(LedgerError::DivisionByZero)));
    }

    #[test]
    fn test_totals() {
        let credits = sample();
        assert_eq!(total_weight(&credits), 6.0);
        assert_eq!(weighted_score(&credits), 530.0);
    }

    #[test]
    fn test_merge_equals_concatenation() {
        let a = sample();
        let b = vec![Credit::new("Art", 70.0, 1.0), Credit::unnamed(95.0, 3.0)];

        let mut all = a.clone();
        all.extend(b.clone());

        assert!(approx_eq(merge_gpa(&a, &b).unwrap(), gpa(&all).unwrap()));
    }

    #[test]
    fn test_merge_does_not_deduplicate() {
        let a = vec![Credit::new("Math", 90.0, 4.0)];
        let b = vec![Credit::new("Math", 60.0, 4.0)];

        let value = merge_gpa(&a, &b).unwrap();
        assert!(approx_eq(value, (360.0 + 240.0) / 8.0 / 20.0));
    }

    #[test]
    fn test_merge_of_empties_is_division_by_zero() {
        assert!(matches!(
            merge_gpa(&[], &[]),
            Err(LedgerError::DivisionByZero)
        ));
    }

    #[test]
    fn test_exclude_nothing_is_identity() {
        let credits = sample();
        assert!(approx_eq(
            exclude_from(&credits, &[]).unwrap(),
            gpa(&credits).unwrap()
        ));
    }

    #[test]
    fn test_exclude_everything_is_division_by_zero() {
        let credits = sample();
        assert!(matches!(
            exclude_from(&credits, &credits),
            Err(LedgerError::DivisionByZero)
        ));
    }

    #[test]
    fn test_exclude_matches_by_name_only() {
        let credits = sample();
        let exclude = vec![Credit::new("PE", 0.0, 0.0)];

        let value = exclude_from(&credits, &exclude).unwrap();
        assert!(approx_eq(value, 90.0 / 20.0));
        assert_eq!(credits.len(), 2);
    }

    #[test]
    fn test_exclude_placeholder_removes_all_unnamed() {
        let credits = vec![
            Credit::new("Math", 90.0, 4.0),
            Credit::unnamed(60.0, 2.0),
            Credit::unnamed(70.0, 1.0),
        ];
        let exclude = vec![Credit::unnamed(0.0, 0.0)];

        let value = exclude_from(&credits, &exclude).unwrap();
        assert!(approx_eq(value, 4.5));
    }
}
