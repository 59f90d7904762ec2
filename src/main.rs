use clap::Parser;
use cordoba_geocoder::enrich::{self, EnrichOptions};
use cordoba_geocoder::geocode::{Gazetteer, Geocoder, IntervalGate};
use cordoba_geocoder::server;
use std::path::PathBuf;

/// Geocode localities of Córdoba, Argentina in a delimited file.
///
/// Each place name is looked up in a built-in gazetteer first; names the
/// gazetteer does not know are optionally resolved via OpenStreetMap
/// Nominatim, paced to one query per second.
///
/// Examples:
///   geocodificar --input datos.csv --column localidad --output datos_geo.csv
///   geocodificar -i pacientes.csv -c ciudad -o pacientes_geo.csv --local-only
///   geocodificar -i datos.csv -o datos_geo.csv --delimiter ";"
///   geocodificar --list-places
///   geocodificar --serve --port 8080
#[derive(Parser)]
#[command(name = "geocodificar", version, about, long_about = None)]
struct Cli {
    /// Input CSV file.
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Output CSV file.
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Name of the column holding place names.
    #[arg(long, short = 'c', default_value = "localidad")]
    column: String,

    /// Field delimiter (single character; use \t for tab).
    #[arg(long, short = 'd', default_value = ",")]
    delimiter: String,

    /// Use only the built-in gazetteer; never query Nominatim.
    #[arg(long)]
    local_only: bool,

    /// List the built-in gazetteer and exit.
    #[arg(long)]
    list_places: bool,

    /// Run the HTTP API instead of a batch job.
    #[arg(long)]
    serve: bool,

    /// Bind address for --serve.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Bind port for --serve.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn main() {
    let cli = Cli::parse();

    if cli.list_places {
        list_places();
        return;
    }

    if cli.serve {
        let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("Error: Cannot start async runtime: {}", e);
            std::process::exit(1);
        });
        runtime.block_on(server::start(&cli.host, cli.port));
        return;
    }

    let (Some(input), Some(output)) = (&cli.input, &cli.output) else {
        eprintln!("Error: --input and --output are required for an enrichment run.");
        eprintln!();
        eprintln!("Usage:");
        eprintln!("  geocodificar --input datos.csv --column localidad --output datos_geo.csv");
        eprintln!("  geocodificar --list-places");
        eprintln!("  geocodificar --serve");
        std::process::exit(1);
    };

    let delimiter = parse_delimiter(&cli.delimiter).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    eprintln!("Archivo de entrada:     {}", input.display());
    eprintln!("Columna de localidades: {}", cli.column);
    eprintln!("Archivo de salida:      {}", output.display());
    eprintln!(
        "Modo:                   {}",
        if cli.local_only { "solo local" } else { "local + Nominatim" }
    );
    eprintln!("{}", "-".repeat(50));

    let geocoder = Geocoder::cordoba();
    let mut gate = IntervalGate::nominatim();
    let opts = EnrichOptions {
        name_column: cli.column.clone(),
        delimiter,
        allow_remote: !cli.local_only,
    };

    let stats = enrich::enrich_file(input, output, &geocoder, &mut gate, &opts)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    eprintln!();
    eprint!("{}", stats.render_summary());
}

fn list_places() {
    let gazetteer = Gazetteer::cordoba();
    println!("Localidades disponibles en la base de datos local:");
    println!("{}", "-".repeat(50));
    for (name, coord) in gazetteer.sorted_entries() {
        println!("  {}: ({}, {})", name, coord.lat, coord.lon);
    }
    println!();
    println!("Total: {} localidades", gazetteer.len());
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    let s = if s == "\\t" { "\t" } else { s };
    let bytes = s.as_bytes();
    if bytes.len() != 1 {
        return Err(format!(
            "delimiter must be a single ASCII character, got '{}'",
            s
        ));
    }
    Ok(bytes[0])
}
