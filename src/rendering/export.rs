//! Text renderings of a sample list for the tools that consume LED colors.

use std::fmt::Write as _;
use std::str::FromStr;

use led_resample::SampleList;
use serde::Deserialize;

use crate::error::GridError;

/// Output format for the sample list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// `[[r,g,b],...]`
    #[default]
    Json,
    /// `RRGGBB,RRGGBB,...`
    Hex,
    /// `const uint8_t` initializer for firmware sources
    CArray,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [
        ExportFormat::Json,
        ExportFormat::Hex,
        ExportFormat::CArray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Hex => "hex",
            ExportFormat::CArray => "c-array",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GridError::UnknownFormat(s.to_string()))
    }
}

/// Render `samples` in `format`. The result always ends with a newline.
pub fn render_samples(samples: &SampleList, format: ExportFormat) -> String {
    match format {
        ExportFormat::Json => render_json(samples),
        ExportFormat::Hex => render_hex(samples),
        ExportFormat::CArray => render_c_array(samples),
    }
}

fn render_json(samples: &SampleList) -> String {
    let triples: Vec<[u8; 3]> = samples.iter().map(|c| c.to_bytes()).collect();
    // serializing plain integer arrays cannot fail
    let mut out = serde_json::to_string(&triples).unwrap_or_else(|_| "[]".to_string());
    out.push('\n');
    out
}

fn render_hex(samples: &SampleList) -> String {
    let mut out = samples
        .iter()
        .map(|c| c.to_hex())
        .collect::<Vec<_>>()
        .join(",");
    out.push('\n');
    out
}

fn render_c_array(samples: &SampleList) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "// {}x{} LED grid, {} pixels, RGB",
        samples.width(),
        samples.height(),
        samples.len()
    );
    let _ = writeln!(out, "const uint8_t led_grid[{}] = {{", samples.len() * 3);
    for (i, c) in samples.iter().enumerate() {
        let sep = if i + 1 == samples.len() { "" } else { "," };
        let _ = writeln!(out, "  0x{:02X}, 0x{:02X}, 0x{:02X}{sep}", c.r, c.g, c.b);
    }
    out.push_str("};\n");
    out
}
