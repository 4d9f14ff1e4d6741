//! Compare a renewing policy's payment schedule against a non-renewing one
//!
//! Prints the renewal schedule table, the flat summary when a flat premium is
//! supplied, and the aggregate comparison. All rounding and currency
//! formatting happens here, once, at the display boundary.

use anyhow::{bail, Context, Result};
use clap::Parser;
use renewal_compare::{
    assumptions::default_rates,
    compare, generate_flat_summary, generate_renewal_schedule, ComparisonResult, FlatPaymentSummary,
    RenewalParams, RenewalSchedule,
};
use serde::Deserialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "compare", about = "Renewing vs non-renewing premium comparison")]
struct Args {
    /// Age at policy issue
    #[arg(long, required_unless_present = "scenario")]
    start_age: Option<u32>,

    /// Age at which payments stop
    #[arg(long, default_value_t = 90)]
    end_age: u32,

    /// Renewal cycle length in years (10 or 20 have built-in rate tables)
    #[arg(long, default_value_t = 10)]
    cycle: u32,

    /// Current monthly premium of the renewing policy
    #[arg(long, required_unless_present = "scenario")]
    monthly_premium: Option<f64>,

    /// Monthly premium of the non-renewing policy (omit to skip the comparison)
    #[arg(long)]
    flat_premium: Option<f64>,

    /// Payment term of the non-renewing policy in years
    #[arg(long, default_value_t = 20)]
    flat_term: u32,

    /// Comma-separated increase rates overriding the built-in table
    #[arg(long, value_delimiter = ',')]
    rates: Option<Vec<f64>>,

    /// JSON scenario file overriding the individual flags
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Write the schedule and comparison as CSV
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the comparison result as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

/// Scenario file contents, deserialized with the library's serde defaults
#[derive(Debug, Deserialize)]
struct ScenarioInput {
    renewal: RenewalParams,
    flat: Option<FlatInput>,
}

#[derive(Debug, Deserialize)]
struct FlatInput {
    monthly_premium: f64,
    term_years: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (renewal_params, flat_input) = match &args.scenario {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open scenario file {}", path.display()))?;
            let scenario: ScenarioInput =
                serde_json::from_reader(file).context("failed to parse scenario file")?;
            (scenario.renewal, scenario.flat)
        }
        None => {
            let rates = match &args.rates {
                Some(rates) => rates.clone(),
                None => default_rates(args.cycle)
                    .map(<[f64]>::to_vec)
                    .unwrap_or_default(),
            };
            if rates.is_empty() {
                bail!(
                    "no built-in rate table for a {}-year cycle; pass --rates",
                    args.cycle
                );
            }
            let params = RenewalParams {
                start_age: args.start_age.unwrap_or_default(),
                end_age: args.end_age,
                initial_monthly_premium: args.monthly_premium.unwrap_or_default(),
                cycle_length: args.cycle,
                increase_rates: rates,
            };
            let flat = args.flat_premium.map(|premium| FlatInput {
                monthly_premium: premium,
                term_years: args.flat_term,
            });
            (params, flat)
        }
    };

    log::info!(
        "comparing ages {}..{}, cycle {}",
        renewal_params.start_age,
        renewal_params.end_age,
        renewal_params.cycle_length
    );

    let schedule = generate_renewal_schedule(&renewal_params)?;
    let flat_summary = flat_input
        .map(|f| generate_flat_summary(f.monthly_premium, f.term_years))
        .transpose()?;
    let result = compare(&schedule, flat_summary.as_ref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&schedule, flat_summary.as_ref(), &result);
    }

    if let Some(path) = &args.output {
        write_csv(path, &schedule, &result)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("\nOutput written to {}", path.display());
    }

    Ok(())
}

fn print_report(
    schedule: &RenewalSchedule,
    flat: Option<&FlatPaymentSummary>,
    result: &ComparisonResult,
) {
    println!("Renewing policy payment schedule:");
    println!(
        "{:<10} {:<10} {:>16} {:>8} {:>18}",
        "StartAge", "EndAge", "MonthlyPremium", "Months", "PeriodTotal"
    );
    for period in &schedule.periods {
        println!(
            "{:<10} {:<10} {:>16} {:>8} {:>18}",
            period.start_age,
            period.end_age(),
            format_currency(period.monthly_premium),
            period.months(),
            format_currency(period.period_total),
        );
    }

    println!(
        "\nRenewal total: {} over {} months (avg monthly {})",
        format_currency(result.renewal_total),
        result.renewal_total_months,
        format_currency(result.avg_monthly_renewal),
    );

    if let (Some(summary), Some(flat_cmp)) = (flat, &result.flat) {
        println!(
            "\nNon-renewing policy: {} / month for {} years, total {}",
            format_currency(summary.monthly_premium),
            summary.term_years,
            format_currency(flat_cmp.flat_total),
        );
        println!("Difference (renewal - flat): {}", format_currency(flat_cmp.difference));
        if flat_cmp.equivalent_years_saved > 0 {
            println!(
                "Switching saves the equivalent of {} years of flat premiums",
                flat_cmp.equivalent_years_saved
            );
        }
    }
}

fn write_csv(path: &PathBuf, schedule: &RenewalSchedule, result: &ComparisonResult) -> Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "StartAge,EndAge,MonthlyPremium,Months,PeriodTotal")?;
    for period in &schedule.periods {
        writeln!(
            file,
            "{},{},{:.0},{},{:.0}",
            period.start_age,
            period.end_age(),
            period.monthly_premium,
            period.months(),
            period.period_total,
        )?;
    }

    writeln!(file)?;
    writeln!(file, "RenewalTotal,RenewalMonths,AvgMonthlyRenewal")?;
    writeln!(
        file,
        "{:.0},{},{:.0}",
        result.renewal_total, result.renewal_total_months, result.avg_monthly_renewal
    )?;

    if let Some(flat) = &result.flat {
        writeln!(file)?;
        writeln!(file, "FlatTotal,AvgMonthlyFlat,Difference,EquivalentYearsSaved")?;
        writeln!(
            file,
            "{:.0},{:.0},{:.0},{}",
            flat.flat_total, flat.avg_monthly_flat, flat.difference, flat.equivalent_years_saved
        )?;
    }

    Ok(())
}

/// Round to whole currency units and insert thousands separators
fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if negative { format!("-{out}") } else { out }
}
