use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledgrid::models::{GridConfig, LayoutConfig, CONFIG_ENV};
use ledgrid::rendering::ExportFormat;
use ledgrid::services::GridPipeline;
use led_resample::{BackgroundPolicy, CropRegion, ScalingAlgorithm};

#[derive(Parser)]
#[command(name = "ledgrid")]
#[command(about = "Resample image crops onto LED grids", version)]
struct Cli {
    /// YAML config file (falls back to $LEDGRID_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resample a PNG crop into LED samples
    Resample {
        /// Source PNG file
        input: PathBuf,

        /// Square crop as X,Y,SIZE (default: largest centered square)
        #[arg(long, value_parser = parse_crop)]
        crop: Option<CropRegion>,

        /// Named layout from the config file
        #[arg(short, long)]
        layout: Option<String>,

        /// LEDs per row
        #[arg(long)]
        width: Option<usize>,

        /// Number of LED rows
        #[arg(long)]
        height: Option<usize>,

        /// box, bilinear, bicubic or lanczos
        #[arg(short, long)]
        algorithm: Option<ScalingAlgorithm>,

        /// transparent, true-black[:LIFT] or a hex color like "#202020"
        #[arg(short, long)]
        background: Option<BackgroundPolicy>,

        /// json, hex or c-array
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Write samples here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write a magnified preview PNG of the grid
        #[arg(short, long)]
        preview: Option<PathBuf>,

        /// Preview magnification per LED
        #[arg(long)]
        preview_scale: Option<u32>,
    },
    /// List the scaling algorithms
    Algorithms,
    /// List the configured layouts
    Layouts,
}

/// Layout overrides given on the command line
#[derive(Default)]
struct LayoutOverrides {
    width: Option<usize>,
    height: Option<usize>,
    algorithm: Option<ScalingAlgorithm>,
    background: Option<BackgroundPolicy>,
    preview_scale: Option<u32>,
}

impl LayoutOverrides {
    fn apply(self, layout: LayoutConfig) -> LayoutConfig {
        LayoutConfig {
            width: self.width.unwrap_or(layout.width),
            height: self.height.unwrap_or(layout.height),
            algorithm: self.algorithm.unwrap_or(layout.algorithm),
            background: self.background.unwrap_or(layout.background),
            preview_scale: self.preview_scale.unwrap_or(layout.preview_scale),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the samples
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ledgrid=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = GridConfig::locate(cli.config.as_deref());
    let config = GridConfig::load(config_path.as_deref());

    match cli.command {
        Some(Commands::Resample {
            input,
            crop,
            layout,
            width,
            height,
            algorithm,
            background,
            format,
            output,
            preview,
            preview_scale,
        }) => {
            let overrides = LayoutOverrides {
                width,
                height,
                algorithm,
                background,
                preview_scale,
            };
            run_resample_command(
                &config,
                &input,
                crop,
                layout.as_deref(),
                overrides,
                format.unwrap_or(config.format),
                output.as_deref(),
                preview.as_deref(),
            )
        }
        Some(Commands::Algorithms) => {
            run_algorithms_command();
            Ok(())
        }
        Some(Commands::Layouts) => {
            run_layouts_command(&config);
            Ok(())
        }
        None => {
            run_status_command(&config, config_path.as_deref());
            Ok(())
        }
    }
}

/// Resample one PNG crop and write samples and preview
#[allow(clippy::too_many_arguments)]
fn run_resample_command(
    config: &GridConfig,
    input: &Path,
    crop: Option<CropRegion>,
    layout_name: Option<&str>,
    overrides: LayoutOverrides,
    format: ExportFormat,
    output: Option<&Path>,
    preview: Option<&Path>,
) -> anyhow::Result<()> {
    let layout = overrides.apply(config.resolve_layout(layout_name)?);
    let pipeline = GridPipeline::new(layout).context("Invalid LED grid")?;

    let result = pipeline
        .process_file(input, crop)
        .with_context(|| format!("Failed to resample {}", input.display()))?;

    let text = pipeline.export(&result, format);
    match output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "Wrote {} samples to {}",
                result.output.grid.len(),
                path.display()
            );
        }
        None => print!("{text}"),
    }

    if let Some(path) = preview {
        let png_bytes = pipeline.preview_png(&result)?;
        std::fs::write(path, &png_bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Wrote preview {} ({} bytes)", path.display(), png_bytes.len());
    }

    Ok(())
}

fn run_algorithms_command() {
    for algorithm in ScalingAlgorithm::ALL {
        let marker = if algorithm == ScalingAlgorithm::default() {
            " (default)"
        } else {
            ""
        };
        println!("  {:<9} {}{marker}", algorithm.name(), algorithm.summary());
    }
}

fn run_layouts_command(config: &GridConfig) {
    let mut names: Vec<_> = config.layouts.keys().collect();
    names.sort();

    if names.is_empty() {
        println!("No layouts configured, built-in default is 16x16");
        return;
    }

    for name in names {
        let layout = &config.layouts[name];
        let marker = if config.default_layout.as_deref() == Some(name.as_str()) {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {name}: {}x{} {} {}{marker}",
            layout.width, layout.height, layout.algorithm, layout.background
        );
    }
}

fn run_status_command(config: &GridConfig, config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("ledgrid v{VERSION}");
    println!("Resample image crops onto LED grids\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        std::env::var(CONFIG_ENV)
            .ok()
            .as_deref()
            .unwrap_or("(not set)")
    );

    let config_source = match config_path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(_) => "built-in (file not found)".to_string(),
        None => "built-in".to_string(),
    };
    println!("\nConfig:  {config_source}");
    println!("Format:  {}", config.format);

    let layout = config.get_default_layout().cloned().unwrap_or_default();
    println!(
        "Default: {}x{} {} {} (preview x{})",
        layout.width, layout.height, layout.algorithm, layout.background, layout.preview_scale
    );

    println!("\nRun 'ledgrid --help' for usage information.");
}

/// Parse `X,Y,SIZE` into a crop region
fn parse_crop(s: &str) -> Result<CropRegion, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, size] = parts.as_slice() else {
        return Err(format!("expected X,Y,SIZE, got {s:?}"));
    };

    let parse = |v: &str, what: &str| {
        v.parse::<usize>()
            .map_err(|e| format!("invalid crop {what} {v:?}: {e}"))
    };

    Ok(CropRegion::new(parse(x, "x")?, parse(y, "y")?, parse(size, "size")?))
}
