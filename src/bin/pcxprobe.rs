//! pcxprobe CLI - PCX format detection tool
//!
//! Probes files with the PCX reader provider and reports which of them are
//! PCX images. Non-PCX files are reported, not treated as errors.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;

use pcx_provider::{FormatProbe, PcxReaderProvider, ProbeInput};

/// Detect PC Paintbrush (PCX) images by their header.
#[derive(Parser, Debug)]
#[command(name = "pcxprobe")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    pcxprobe image.pcx                 Check a single file
    pcxprobe assets/*                  Check many files
    pcxprobe --json *.pcx              Machine-readable output
    pcxprobe -v logo.pcx               Show header details")]
struct Args {
    /// Files to probe
    #[arg(value_name = "FILES", required = true)]
    files: Vec<PathBuf>,

    /// Show header details for PCX files on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long)]
    quiet: bool,

    /// Output results as JSON (for scripting)
    #[arg(long)]
    json: bool,
}

/// Outcome for a single file.
enum Outcome {
    Pcx,
    NotPcx,
    Failed(String),
}

fn main() {
    // Show concise help if no arguments provided
    if std::env::args().len() == 1 {
        print_concise_help();
        std::process::exit(0);
    }

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_concise_help() {
    eprintln!("pcxprobe - Detect PC Paintbrush (PCX) images");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    pcxprobe <FILES>... [OPTIONS]");
    eprintln!();
    eprintln!("For more options, run: pcxprobe --help");
}

/// Returns `Ok(false)` if any file could not be read.
fn run() -> Result<bool, Box<dyn std::error::Error>> {
    let args = Args::parse();
    let provider = PcxReaderProvider::new();
    let verbose = args.verbose && !args.quiet;

    if verbose {
        eprintln!(
            "{} {} ({})",
            provider.description(None),
            provider.config().version,
            provider.config().vendor
        );
    }

    let mut results = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let start = Instant::now();
        let outcome = probe_file(&provider, path, verbose);
        if verbose {
            eprintln!("  Probe time: {:.2?}", start.elapsed());
        }
        results.push((path, outcome));
    }

    let all_read = results
        .iter()
        .all(|(_, outcome)| !matches!(outcome, Outcome::Failed(_)));

    if args.json {
        let entries: Vec<String> = results
            .iter()
            .map(|(path, outcome)| json_entry(path, outcome))
            .collect();
        println!("[{}]", entries.join(","));
        return Ok(all_read);
    }

    for (path, outcome) in &results {
        match outcome {
            Outcome::Failed(msg) => eprintln!("{}: error: {msg}", path.display()),
            _ if args.quiet => {}
            Outcome::Pcx => println!("{}: PCX", path.display()),
            Outcome::NotPcx => println!("{}: not PCX", path.display()),
        }
    }

    Ok(all_read)
}

/// Probes one file. With `verbose`, header details of PCX files are
/// written to stderr; they never change the outcome.
fn probe_file(provider: &PcxReaderProvider, path: &Path, verbose: bool) -> Outcome {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return Outcome::Failed(format!("can't open: {e}")),
    };
    let mut input = BufReader::new(file);

    match provider.can_decode(ProbeInput::from(&mut input)) {
        Ok(true) => {
            if verbose {
                report_header(provider, path, &mut input);
            }
            Outcome::Pcx
        }
        Ok(false) => Outcome::NotPcx,
        Err(e) => Outcome::Failed(e.to_string()),
    }
}

fn report_header(provider: &PcxReaderProvider, path: &Path, input: &mut BufReader<File>) {
    let mut reader = provider.create_reader();
    match reader.read_header(input) {
        Ok(header) => {
            eprintln!("Header: {}", path.display());
            eprintln!("  Version: {}", header.version.name());
            eprintln!("  Dimensions: {}x{}", header.width(), header.height());
            eprintln!(
                "  Depth: {} bpp x {} planes",
                header.bits_per_pixel, header.planes
            );
            eprintln!("  Compression: {:?}", header.compression);
        }
        Err(e) => eprintln!("Header: {}: unreadable ({e})", path.display()),
    }
}

fn json_entry(path: &Path, outcome: &Outcome) -> String {
    let path = json_escape(&path.display().to_string());
    match outcome {
        Outcome::Pcx => format!(r#"{{"path":"{path}","pcx":true}}"#),
        Outcome::NotPcx => format!(r#"{{"path":"{path}","pcx":false}}"#),
        Outcome::Failed(msg) => format!(
            r#"{{"path":"{path}","pcx":null,"error":"{}"}}"#,
            json_escape(msg)
        ),
    }
}

fn json_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
