//! Budget allocator
//!
//! Maps a financial input record to a seven-bucket allocation using fixed
//! ratios. The transform is pure: identical input always gives a bit-identical
//! allocation, and the interest rate has no effect on the result.

use tracing::debug;

use crate::models::{BudgetAllocation, Category, FinancialInput, NET_INCOME_RATIO};

/// Compute the spending plan for `input`
///
/// Returns `None` when the salary is not positive (including NaN). Callers
/// must keep whatever allocation they already hold in that case.
///
/// # Examples
/// ```
/// use budget_brain::models::FinancialInput;
/// use budget_brain::services::allocate;
///
/// let plan = allocate(&FinancialInput::new(5000.0, 800.0, 5.5)).unwrap();
/// assert_eq!(plan.housing, 885.0);
/// assert!(allocate(&FinancialInput::default()).is_none());
/// ```
pub fn allocate(input: &FinancialInput) -> Option<BudgetAllocation> {
    if input.salary.is_nan() || input.salary <= 0.0 {
        debug!(salary = input.salary, "allocation declined, salary not positive");
        return None;
    }

    let net_income = input.salary * NET_INCOME_RATIO;
    let available_income = net_income - input.loan_payment;
    let share = |category: Category| available_income * category.ratio();

    let allocation = BudgetAllocation {
        housing: share(Category::Housing),
        food: share(Category::Food),
        transportation: share(Category::Transportation),
        savings: share(Category::Savings),
        investment: share(Category::Investment),
        entertainment: share(Category::Entertainment),
        remaining: share(Category::Remaining),
    };

    debug!(net_income, available_income, "allocation computed");
    Some(allocation)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn available(input: &FinancialInput) -> f64 {
        input.salary * 0.75 - input.loan_payment
    }

    #[test]
    fn test_reference_scenario() {
        let input = FinancialInput::new(5000.0, 800.0, 5.5);
        let plan = allocate(&input).unwrap();

        assert_eq!(available(&input), 2950.0);
        assert_eq!(plan.housing, 885.0);
        assert_eq!(plan.food, 442.5);
        assert_eq!(plan.transportation, 442.5);
        assert_eq!(plan.savings, 590.0);
        assert_eq!(plan.investment, 295.0);
        assert_eq!(plan.entertainment, 147.5);
        assert_eq!(plan.remaining, 147.5);
    }

    #[test]
    fn test_zero_salary_declines() {
        assert!(allocate(&FinancialInput::new(0.0, 0.0, 0.0)).is_none());
        assert!(allocate(&FinancialInput::new(-100.0, 0.0, 0.0)).is_none());
        assert!(allocate(&FinancialInput::new(f64::NAN, 0.0, 0.0)).is_none());
    }

    #[test]
    fn test_loan_exceeding_net_income_goes_negative() {
        let input = FinancialInput::new(1000.0, 2000.0, 0.0);
        let plan = allocate(&input).unwrap();

        assert_eq!(available(&input), -1250.0);
        assert_eq!(plan.housing, -375.0);
        assert!((plan.total() - (-1250.0)).abs() < TOLERANCE);
        assert!(plan.entries().iter().all(|(_, amount)| *amount < 0.0));
    }

    #[test]
    fn test_sum_matches_available_income() {
        let salaries = [1.0, 333.33, 1234.56, 5000.0, 98765.4321, 1e7];
        let loans = [0.0, 12.5, 800.0, 4999.99, 1e6];

        for &salary in &salaries {
            for &loan in &loans {
                let input = FinancialInput::new(salary, loan, 0.0);
                let plan = allocate(&input).unwrap();
                let expected = available(&input);
                let tolerance = TOLERANCE * expected.abs().max(1.0);
                assert!(
                    (plan.total() - expected).abs() < tolerance,
                    "salary {} loan {}: {} != {}",
                    salary,
                    loan,
                    plan.total(),
                    expected
                );
            }
        }
    }

    #[test]
    fn test_ratio_invariant() {
        let input = FinancialInput::new(7321.0, 410.0, 0.0);
        let plan = allocate(&input).unwrap();
        let available_income = available(&input);

        for (category, amount) in plan.entries() {
            assert!((amount / available_income - category.ratio()).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_idempotent() {
        let input = FinancialInput::new(4321.09, 876.54, 3.2);
        let first = allocate(&input).unwrap();
        let second = allocate(&input).unwrap();

        for ((_, a), (_, b)) in first.entries().into_iter().zip(second.entries()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_interest_rate_is_ignored() {
        let low = allocate(&FinancialInput::new(5000.0, 800.0, 0.0)).unwrap();
        let high = allocate(&FinancialInput::new(5000.0, 800.0, 99.9)).unwrap();
        assert_eq!(low, high);
    }
}
