//! Streaming CSV enrichment.
//!
//! Reads delimited records one at a time, resolves the configured name
//! column through the geocoding pipeline, and writes each record back out
//! with three appended columns: `latitud`, `longitud`,
//! `fuente_geocodificacion`. Rows stay rectangular: short input rows are
//! padded to the header width before the appended columns. Output order
//! matches input order. Only configuration problems abort a run;
//! per-record failures are counted as unresolved and warned about on
//! stderr.

use crate::geocode::{Geocoder, RateGate, Source};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

// ─── Options ─────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct EnrichOptions {
    /// Header name of the column holding place names.
    pub name_column: String,
    /// Single-byte field delimiter.
    pub delimiter: u8,
    /// Whether the remote tier may be consulted on local misses.
    pub allow_remote: bool,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self {
            name_column: "localidad".to_string(),
            delimiter: b',',
            allow_remote: true,
        }
    }
}

// ─── Run statistics ──────────────────────────────────────────────

/// Outcome counters for one enrichment run.
///
/// Invariant: `resolved_local + resolved_remote + unresolved == total`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub total: u64,
    pub resolved_local: u64,
    pub resolved_remote: u64,
    pub unresolved: u64,
}

impl RunStats {
    fn record(&mut self, source: Source) {
        self.total += 1;
        match source {
            Source::Local => self.resolved_local += 1,
            Source::Remote => self.resolved_remote += 1,
            Source::Unresolved => self.unresolved += 1,
        }
    }

    /// Resolved share in percent. 0 when no records were processed.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.resolved_local + self.resolved_remote) as f64 / self.total as f64 * 100.0
    }

    /// The end-of-run report block, in the register of the datasets this
    /// tool targets.
    pub fn render_summary(&self) -> String {
        let bar = "=".repeat(50);
        let mut out = String::new();
        out.push_str(&format!("{}\n", bar));
        out.push_str("RESUMEN DE GEOCODIFICACIÓN\n");
        out.push_str(&format!("{}\n", bar));
        out.push_str(&format!("Total de registros:       {:>8}\n", self.total));
        out.push_str(&format!("Geocodificados (local):   {:>8}\n", self.resolved_local));
        out.push_str(&format!("Geocodificados (remoto):  {:>8}\n", self.resolved_remote));
        out.push_str(&format!("No encontrados:           {:>8}\n", self.unresolved));
        out.push_str(&format!("Tasa de éxito:            {:>7.1}%\n", self.success_rate()));
        out.push_str(&format!("{}\n", bar));
        out
    }
}

// ─── Errors ──────────────────────────────────────────────────────

/// Configuration and structural errors. All of these are fatal: nothing
/// here represents a per-record miss.
#[derive(Debug)]
pub enum EnrichError {
    MissingColumn {
        requested: String,
        available: Vec<String>,
    },
    Input {
        path: PathBuf,
        source: io::Error,
    },
    Output {
        path: PathBuf,
        source: io::Error,
    },
    Csv(csv::Error),
    Io(io::Error),
}

impl fmt::Display for EnrichError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { requested, available } => write!(
                f,
                "column '{}' not found in input. Available columns: {}",
                requested,
                available.join(", ")
            ),
            Self::Input { path, source } => {
                write!(f, "cannot read '{}': {}", path.display(), source)
            }
            Self::Output { path, source } => {
                write!(f, "cannot write '{}': {}", path.display(), source)
            }
            Self::Csv(e) => write!(f, "CSV error: {}", e),
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for EnrichError {}

impl From<csv::Error> for EnrichError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl From<io::Error> for EnrichError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

// ─── Enrichment loop ─────────────────────────────────────────────

/// Enrich records from any reader into any writer.
pub fn enrich<R, W>(
    input: R,
    output: W,
    geocoder: &Geocoder,
    gate: &mut dyn RateGate,
    opts: &EnrichOptions,
) -> Result<RunStats, EnrichError>
where
    R: io::Read,
    W: io::Write,
{
    let reader = reader_for(input, opts);
    run(reader, output, geocoder, gate, opts)
}

/// Enrich one file into another.
///
/// The name column is validated before the output file is created, so a
/// configuration error leaves no output behind.
pub fn enrich_file(
    input: &Path,
    output: &Path,
    geocoder: &Geocoder,
    gate: &mut dyn RateGate,
    opts: &EnrichOptions,
) -> Result<RunStats, EnrichError> {
    let infile = File::open(input).map_err(|e| EnrichError::Input {
        path: input.to_path_buf(),
        source: e,
    })?;
    let mut reader = reader_for(BufReader::new(infile), opts);
    name_column_index(&mut reader, &opts.name_column)?;

    let outfile = File::create(output).map_err(|e| EnrichError::Output {
        path: output.to_path_buf(),
        source: e,
    })?;
    run(reader, BufWriter::new(outfile), geocoder, gate, opts)
}

fn reader_for<R: io::Read>(input: R, opts: &EnrichOptions) -> csv::Reader<R> {
    // flexible: a short row means an absent name cell (resolved as empty),
    // not a fatal parse error.
    csv::ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .flexible(true)
        .from_reader(input)
}

fn name_column_index<R: io::Read>(
    reader: &mut csv::Reader<R>,
    name_column: &str,
) -> Result<usize, EnrichError> {
    let headers = reader.headers()?;
    headers
        .iter()
        .position(|h| h == name_column)
        .ok_or_else(|| EnrichError::MissingColumn {
            requested: name_column.to_string(),
            available: headers.iter().map(str::to_string).collect(),
        })
}

fn run<R, W>(
    mut reader: csv::Reader<R>,
    output: W,
    geocoder: &Geocoder,
    gate: &mut dyn RateGate,
    opts: &EnrichOptions,
) -> Result<RunStats, EnrichError>
where
    R: io::Read,
    W: io::Write,
{
    let name_idx = name_column_index(&mut reader, &opts.name_column)?;
    let headers = reader.headers()?.clone();

    let mut writer = csv::WriterBuilder::new()
        .delimiter(opts.delimiter)
        .flexible(true)
        .from_writer(output);

    let mut out_headers = headers.clone();
    out_headers.push_field("latitud");
    out_headers.push_field("longitud");
    out_headers.push_field("fuente_geocodificacion");
    writer.write_record(&out_headers)?;

    let mut stats = RunStats::default();

    for result in reader.records() {
        let record = result?;
        let name = record.get(name_idx).unwrap_or("");

        let resolution = geocoder.resolve(name, opts.allow_remote, gate);

        let (lat, lon) = match resolution.coordinate {
            Some(c) => (c.lat.to_string(), c.lon.to_string()),
            None => (String::new(), String::new()),
        };
        let mut out = record.clone();
        // Pad short rows to the header width so the appended columns stay
        // under their own headers.
        for _ in record.len()..headers.len() {
            out.push_field("");
        }
        out.push_field(&lat);
        out.push_field(&lon);
        out.push_field(&resolution.source.to_string());
        writer.write_record(&out)?;

        stats.record(resolution.source);
        if resolution.source == Source::Unresolved {
            eprintln!("  Advertencia: no se encontró '{}'", name);
        }

        if stats.total % 10 == 0 {
            eprintln!("  Procesados: {} registros...", stats.total);
        }
    }

    writer.flush()?;
    Ok(stats)
}
