use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use super::{ReducerArg, WidthArg};
use crate::config::load_or_default;
use crate::input::{decode_i32, open_payload};
use crate::report::json::{render_json, write_report};
use crate::report::text::render_text;
use crate::report::{InputSummary, ResultSummary, SumReport, ToolSummary, format_crc64};
use crate::sum::{ElementWidth, Reducer, SanitizeValue};

#[derive(Args, Debug)]
pub struct SumArgs {
    /// Raw little-endian buffer (.gz accepted)
    #[arg(long)]
    input: PathBuf,

    /// Element width in bits
    #[arg(long, value_enum)]
    pub(crate) width: Option<WidthArg>,

    /// Reducer implementation
    #[arg(long, value_enum)]
    pub(crate) reducer: Option<ReducerArg>,

    /// Sentinel excluded from 8-bit sums
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) sanitize: Option<i8>,

    /// Optional TOML config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    pub(crate) json: bool,

    /// Also write the JSON report to this path
    #[arg(long)]
    out: Option<PathBuf>,
}

pub fn handle(args: SumArgs) -> anyhow::Result<()> {
    let config = load_or_default(args.config.as_deref())?;
    let width: ElementWidth = args.width.map(Into::into).unwrap_or(config.sum.width);
    let reducer: Reducer = args.reducer.map(Into::into).unwrap_or(config.sum.reducer);
    let sanitize = args
        .sanitize
        .map(SanitizeValue)
        .unwrap_or(config.sum.sanitize);

    let start = Instant::now();
    info!(stage = "load", input = %args.input.display(), "starting stage");
    let payload = open_payload(&args.input)?;
    let crc = payload.crc64();
    info!(
        stage = "load",
        bytes = payload.bytes().len(),
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    let (count, total, elapsed_us) = match width {
        ElementWidth::Bits8 => {
            let values = payload.as_i8();
            let start = Instant::now();
            let total = reducer.sum8(values, sanitize);
            (values.len(), total, start.elapsed().as_micros() as u64)
        }
        ElementWidth::Bits32 => {
            let values = decode_i32(&args.input, payload.bytes())?;
            let start = Instant::now();
            let total = reducer.sum32(&values);
            (values.len(), total, start.elapsed().as_micros() as u64)
        }
    };
    info!(
        stage = "sum",
        reducer = reducer.name(),
        width = width.bits(),
        count,
        elapsed_us,
        "finished stage"
    );

    let report = SumReport {
        tool: ToolSummary::default(),
        input: InputSummary {
            path: Some(args.input.to_string_lossy().to_string()),
            width,
            count,
            crc64: format_crc64(crc),
        },
        result: ResultSummary {
            reducer,
            sanitize: (width == ElementWidth::Bits8).then_some(sanitize),
            total,
            elapsed_us,
        },
    };

    if let Some(out) = &args.out {
        write_report(out, &report)?;
    }
    if args.json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}
