use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tipselect_lib::{
    pressure_for_tip, resolve_chart_path, select_tip, to_lpm, FlowUnit, PressureUnit, SizingInput,
    TipChart,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Pressure washer nozzle sizing utilities")]
struct Cli {
    /// Override the tip chart file path.
    #[arg(long)]
    chart: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the nozzle number for a reading and match it to a tip.
    Size {
        /// Pump pressure reading.
        #[arg(long)]
        pressure: f64,
        /// Unit of the pressure reading.
        #[arg(long, value_enum, default_value = "psi")]
        pressure_unit: PressureUnitArg,
        /// Water flow reading.
        #[arg(long)]
        flow: f64,
        /// Unit of the flow reading.
        #[arg(long, value_enum, default_value = "lpm")]
        flow_unit: FlowUnitArg,
        /// Emit the result as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print the loaded tip chart.
    Chart {
        /// Emit the chart as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PressureUnitArg {
    Psi,
    Bar,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FlowUnitArg {
    Lpm,
    Gpm,
}

impl From<PressureUnitArg> for PressureUnit {
    fn from(value: PressureUnitArg) -> Self {
        match value {
            PressureUnitArg::Psi => PressureUnit::Psi,
            PressureUnitArg::Bar => PressureUnit::Bar,
        }
    }
}

impl From<FlowUnitArg> for FlowUnit {
    fn from(value: FlowUnitArg) -> Self {
        match value {
            FlowUnitArg::Lpm => FlowUnit::Lpm,
            FlowUnitArg::Gpm => FlowUnit::Gpm,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Size {
            pressure,
            pressure_unit,
            flow,
            flow_unit,
            json,
        } => handle_size(
            cli.chart.as_deref(),
            SizingInput {
                pressure,
                pressure_unit: pressure_unit.into(),
                flow,
                flow_unit: flow_unit.into(),
            },
            json,
        ),
        Command::Chart { json } => handle_chart(cli.chart.as_deref(), json),
    }
}

/// JSON output shape for the `size` subcommand.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SizeOutput {
    nozzle_number: f64,
    tip_size: f64,
    injector_size: f64,
    diffuser_size: f64,
    air_nozzle_size: f64,
    /// Pressure the pump would see through the matched tip, in psi.
    tip_pressure_psi: f64,
}

fn handle_size(chart_override: Option<&Path>, input: SizingInput, json: bool) -> Result<()> {
    let chart = load_chart(chart_override)?;

    let sizing = select_tip(&chart, &input).context("failed to compute sizing")?;
    let lpm = to_lpm(input.flow, input.flow_unit)?;
    let tip_pressure = pressure_for_tip(lpm, sizing.row.tip_size)
        .context("failed to project pressure for the matched tip")?;

    if json {
        let output = SizeOutput {
            nozzle_number: sizing.rounded_nozzle_number(),
            tip_size: sizing.row.tip_size,
            injector_size: sizing.row.injector_size,
            diffuser_size: sizing.row.diffuser_size,
            air_nozzle_size: sizing.row.air_nozzle_size,
            tip_pressure_psi: tip_pressure,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Nozzle number: {:.2}", sizing.rounded_nozzle_number());
        println!("Matched tip:   {}", sizing.row.tip_size);
        println!("- injector:    {}", sizing.row.injector_size);
        println!("- diffuser:    {}", sizing.row.diffuser_size);
        println!("- air nozzle:  {}", sizing.row.air_nozzle_size);
        println!("Pump pressure at this tip: {:.0} psi", tip_pressure);
    }

    Ok(())
}

fn handle_chart(chart_override: Option<&Path>, json: bool) -> Result<()> {
    let chart = load_chart(chart_override)?;

    if json {
        println!("{}", serde_json::to_string_pretty(chart.rows())?);
    } else {
        println!("Tip chart ({} rows):", chart.len());
        for row in chart.rows() {
            println!(
                "- tip {} -> injector {}, diffuser {}, air nozzle {}",
                row.tip_size, row.injector_size, row.diffuser_size, row.air_nozzle_size
            );
        }
    }

    Ok(())
}

fn load_chart(chart_override: Option<&Path>) -> Result<TipChart> {
    let path = resolve_chart_path(chart_override).context("failed to resolve tip chart path")?;
    TipChart::from_path(&path)
        .with_context(|| format!("failed to load tip chart from {}", path.display()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
