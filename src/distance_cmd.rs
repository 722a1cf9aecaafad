//! Distance command: signed distance number between two Long Counts.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use baktun_longcount::LongCount;

use crate::cli::DistanceArgs;

/// Report for a distance computation.
#[derive(Debug, Serialize)]
struct DistanceReport {
    from: String,
    to: String,
    distance: String,
    days: i64,
}

/// Run the distance computation.
pub fn run(args: DistanceArgs) -> Result<()> {
    let _cmd = info_span!("distance").entered();

    let from: LongCount = args
        .from
        .parse()
        .with_context(|| format!("failed to parse long count: {:?}", args.from))?;
    let to: LongCount = args
        .to
        .parse()
        .with_context(|| format!("failed to parse long count: {:?}", args.to))?;
    let distance = to
        .minus(&from)
        .context("cannot compute a distance over wildcard digits")?;
    info!(from = %from, to = %to, "computed distance number");

    let report = DistanceReport {
        from: from.to_string(),
        to: to.to_string(),
        distance: distance.to_string(),
        days: distance.position()?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("From:     {}", report.from);
        println!("To:       {}", report.to);
        println!("Distance: {}", report.distance);
        println!("Days:     {}", report.days);
    }

    Ok(())
}
