//! End-to-end comparison scenarios across both product variants

use approx::assert_relative_eq;
use renewal_compare::{
    assumptions::default_rates, compare, generate_flat_summary, generate_renewal_schedule,
    RenewalParams,
};

#[test]
fn ten_year_cycle_reference_comparison() {
    let params = RenewalParams {
        start_age: 40,
        end_age: 90,
        initial_monthly_premium: 100_000.0,
        cycle_length: 10,
        increase_rates: default_rates(10).unwrap().to_vec(),
    };
    let schedule = generate_renewal_schedule(&params).unwrap();
    assert_eq!(schedule.periods.len(), 5);

    // Premiums compound through the rate table: 100000, then *2.5166, *2.311, ...
    let mut expected_premium = 100_000.0;
    let rates = default_rates(10).unwrap();
    for (i, period) in schedule.periods.iter().enumerate() {
        assert_relative_eq!(period.monthly_premium, expected_premium);
        assert_relative_eq!(period.period_total, expected_premium * 120.0);
        expected_premium *= rates[i];
    }

    let flat = generate_flat_summary(150_000.0, 20).unwrap();
    assert_eq!(flat.total_paid, 36_000_000.0);

    let result = compare(&schedule, Some(&flat));
    assert_eq!(result.renewal_total_months, 600);

    let flat_cmp = result.flat.unwrap();
    assert_relative_eq!(flat_cmp.difference, result.renewal_total - 36_000_000.0);
    // The renewing policy costs far more here, so the recommendation fires
    assert!(flat_cmp.difference > 0.0);
    assert!(flat_cmp.equivalent_years_saved > 0);
}

#[test]
fn twenty_year_cycle_uses_its_own_table() {
    let params = RenewalParams {
        start_age: 30,
        end_age: 90,
        initial_monthly_premium: 50_000.0,
        cycle_length: 20,
        increase_rates: default_rates(20).unwrap().to_vec(),
    };
    let schedule = generate_renewal_schedule(&params).unwrap();

    // 30..90 in 20-year steps: three full cycles
    assert_eq!(schedule.periods.len(), 3);
    assert_relative_eq!(schedule.periods[1].monthly_premium, 50_000.0 * 4.82);
    assert_relative_eq!(schedule.periods[2].monthly_premium, 50_000.0 * 4.82 * 1.5);
    assert_eq!(schedule.total_months(), 720);
}

#[test]
fn comparison_without_flat_input_reports_renewal_only() {
    let params = RenewalParams {
        start_age: 55,
        initial_monthly_premium: 80_000.0,
        ..Default::default()
    };
    let schedule = generate_renewal_schedule(&params).unwrap();
    let result = compare(&schedule, None);

    assert!(result.flat.is_none());
    assert_relative_eq!(result.renewal_total, schedule.total_paid());
}

#[test]
fn degenerate_range_produces_zero_totals() {
    let params = RenewalParams {
        start_age: 90,
        end_age: 90,
        initial_monthly_premium: 100_000.0,
        ..Default::default()
    };
    let schedule = generate_renewal_schedule(&params).unwrap();
    let result = compare(&schedule, None);

    assert_eq!(result.renewal_total, 0.0);
    assert_eq!(result.avg_monthly_renewal, 0.0);
}

#[test]
fn scenario_roundtrips_through_json() {
    let params = RenewalParams {
        start_age: 40,
        initial_monthly_premium: 100_000.0,
        ..Default::default()
    };
    let schedule = generate_renewal_schedule(&params).unwrap();
    let flat = generate_flat_summary(150_000.0, 20).unwrap();
    let result = compare(&schedule, Some(&flat));

    let json = serde_json::to_string(&result).unwrap();
    let back: renewal_compare::ComparisonResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);

    // Defaults fill omitted params fields the same way the CLI scenario file does
    let sparse: RenewalParams =
        serde_json::from_str(r#"{"start_age": 40, "initial_monthly_premium": 100000.0}"#).unwrap();
    assert_eq!(sparse.end_age, 90);
    assert_eq!(sparse.cycle_length, 10);
    assert_eq!(sparse.increase_rates, default_rates(10).unwrap().to_vec());
}
