//! Subcommand implementations.
//!
//! Each command writes its result as JSON to `out`; `main` passes stdout.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;

use compound_growth_core::models::plan::Period;
use compound_growth_core::models::projection::{CalculationResponse, CalculationResult};
use compound_growth_core::models::request::{CalculationRequest, RawCalculationRequest};
use compound_growth_core::models::summary::ProjectionSummary;
use compound_growth_core::GrowthCalculator;

use crate::cli::{CalcArgs, HistoryArgs, PlanArgs, RequestArgs};

/// Output of `calc --summary`.
#[derive(Debug, Serialize)]
struct CalcOutput {
    #[serde(flatten)]
    response: CalculationResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ProjectionSummary>,
}

pub fn calc(engine: &GrowthCalculator, args: &CalcArgs, out: &mut impl Write) -> Result<()> {
    let request = CalculationRequest::new(args.principal, args.rate, args.years, args.monthly);
    let result = project(engine, &request, args.save)?;

    let summary = args.summary.then(|| engine.summarize(&request, &result));
    let output = CalcOutput {
        response: result.into(),
        summary,
    };
    write_json(out, &output)
}

pub fn request(engine: &GrowthCalculator, args: &RequestArgs, out: &mut impl Write) -> Result<()> {
    let body = match &args.file {
        Some(path) => read_file(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Reading request body from stdin")?;
            buf
        }
    };
    answer(engine, &body, args.save, out)
}

/// Answer one request body, optionally saving the history it produced.
pub fn answer(
    engine: &GrowthCalculator,
    body: &str,
    save: bool,
    out: &mut impl Write,
) -> Result<()> {
    let raw = RawCalculationRequest::from_json(body).context("Parsing request body")?;
    let response = if save {
        engine.handle_request_and_save(&raw).with_context(|| {
            format!("Saving history to {}", engine.store().path().display())
        })?
    } else {
        engine.handle_request(&raw).context("Answering request")?
    };
    write_json(out, &response)
}

pub fn plan(engine: &GrowthCalculator, args: &PlanArgs, out: &mut impl Write) -> Result<()> {
    let raw = read_file(&args.file)?;
    let periods: Vec<Period> = serde_json::from_str(&raw)
        .with_context(|| format!("Parsing plan JSON in {}", args.file.display()))?;
    write_json(out, &engine.simulate_plan(&periods))
}

pub fn history(engine: &GrowthCalculator, args: &HistoryArgs, out: &mut impl Write) -> Result<()> {
    let path = engine.store().path().display().to_string();
    if args.count {
        let count = engine
            .saved_count()
            .with_context(|| format!("Loading history from {path}"))?;
        writeln!(out, "{count}")?;
        return Ok(());
    }

    let collection = engine
        .load_history()
        .with_context(|| format!("Loading history from {path}"))?;
    write_json(out, &collection)
}

fn project(
    engine: &GrowthCalculator,
    request: &CalculationRequest,
    save: bool,
) -> Result<CalculationResult> {
    if save {
        engine.calculate_and_save(request).with_context(|| {
            format!("Saving history to {}", engine.store().path().display())
        })
    } else {
        Ok(engine.calculate(request))
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Writing output")?;
    writeln!(out)?;
    Ok(())
}
