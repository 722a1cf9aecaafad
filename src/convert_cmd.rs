//! Convert command: derive everything a Long Count implies.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, info_span};

use baktun_longcount::{CorrelationConstant, LongCount};

use crate::cli::ConvertArgs;

/// Full derivation report for a concrete Long Count.
#[derive(Debug, Serialize)]
struct ConvertReport {
    long_count: String,
    correlation: String,
    position: i64,
    julian_day: i64,
    calendar_round: String,
    lord_of_night: String,
    gregorian: String,
    julian: String,
}

/// Run the conversion pipeline.
pub fn run(args: ConvertArgs) -> Result<()> {
    let _cmd = info_span!("convert").entered();

    let correlation = CorrelationConstant::from_name(&args.correlation)
        .context("unknown correlation constant")?;
    let parsed: LongCount = args
        .date
        .parse()
        .with_context(|| format!("failed to parse long count: {:?}", args.date))?;
    if parsed.is_partial() {
        bail!(
            "cannot convert a date containing wildcards: {:?} (use `baktun solve`)",
            args.date
        );
    }
    let date = LongCount::with_correlation(parsed.number().clone(), correlation);
    info!(date = %date, correlation = %correlation, "converting long count");

    let report = ConvertReport {
        long_count: date.to_string(),
        correlation: correlation.to_string(),
        position: date.position()?,
        julian_day: date.julian_day()?,
        calendar_round: date.build_calendar_round()?.to_string(),
        lord_of_night: date.lord_of_night()?.to_string(),
        gregorian: date.gregorian()?.to_string(),
        julian: date.julian()?.to_string(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Long count:     {}", report.long_count);
        println!("Correlation:    {}", report.correlation);
        println!("Maya day:       {}", report.position);
        println!("Julian day:     {}", report.julian_day);
        println!("Calendar round: {}", report.calendar_round);
        println!("Lord of night:  {}", report.lord_of_night);
        println!("Gregorian:      {}", report.gregorian);
        println!("Julian:         {}", report.julian);
    }

    Ok(())
}
