use clap::Parser;
use resistor_bands::{BandConfig, BandReader, BandReading, LabelTable, RawOutput};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Read resistor band colors from detector output (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for each pipeline stage.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    rows_path: String,
    output_path: Option<String>,
    labels: Option<Vec<String>>,
    confidence_threshold: f32,
    iou_threshold: f32,
    parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        let cfg = BandConfig::default();
        Self {
            rows_path: String::new(),
            output_path: None,
            labels: None,
            confidence_threshold: cfg.confidence_threshold,
            iou_threshold: cfg.iou_threshold,
            parallel: cfg.parallel,
        }
    }
}

/// Detector output as stored on disk.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RowsFile {
    Nested(Vec<Vec<f32>>),
    Flat { data: Vec<f32>, row_len: usize },
}

#[derive(Debug, Serialize)]
struct DetectionRecord {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    confidence: f32,
    class_id: usize,
    class_name: Option<String>,
}

#[derive(Debug, Serialize)]
struct Output {
    bands: Vec<String>,
    summary: String,
    detections: Vec<DetectionRecord>,
}

impl Output {
    fn from_reading(reading: BandReading, labels: &LabelTable) -> Self {
        let summary = reading.summary();
        let detections = reading
            .detections
            .iter()
            .map(|det| DetectionRecord {
                x1: det.bbox.x1,
                y1: det.bbox.y1,
                x2: det.bbox.x2,
                y2: det.bbox.y2,
                confidence: det.confidence,
                class_id: det.class_id,
                class_name: det.class_name(labels).map(str::to_owned),
            })
            .collect();
        Self {
            bands: reading.bands,
            summary,
            detections,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("resistor_bands=debug".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.rows_path.is_empty() {
        return Err("rows_path must be set in the config".into());
    }

    let labels = match config.labels {
        Some(names) => LabelTable::new(names)?,
        None => LabelTable::resistor_colors(),
    };
    let reader = BandReader::new(labels.clone()).with_config(BandConfig {
        confidence_threshold: config.confidence_threshold,
        iou_threshold: config.iou_threshold,
        parallel: config.parallel,
    });

    let rows_text = fs::read_to_string(&config.rows_path)?;
    let reading = match serde_json::from_str::<RowsFile>(&rows_text)? {
        RowsFile::Nested(rows) => reader.read_detailed(&rows)?,
        RowsFile::Flat { data, row_len } => {
            if row_len == 0 || data.len() % row_len != 0 {
                return Err("flat data length must be a positive multiple of row_len".into());
            }
            let view = RawOutput::from_slice(&data, data.len() / row_len, row_len)?;
            reader.read_detailed(view.rows())?
        }
    };

    tracing::info!(
        bands = reading.bands.len(),
        detections = reading.detections.len(),
        "reading complete"
    );
    let output = Output::from_reading(reading, &labels);
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
