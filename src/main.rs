use clap::{Parser, Subcommand, ValueEnum};
use roster_atlas::config::AtlasConfig;
use roster_atlas::input::{dedup_preserving_order, extract_from_chat_lines, read_members};
use roster_atlas::logging::init_logging;
use roster_atlas::report::{render_text, Summary};
use roster_atlas::{analyze, AtlasError, Classifier, Schedule};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::info;

/// Roster Atlas — where is everybody in the group from?
///
/// Classifies member nicknames such as "002-广州-李四" by region and city and
/// prints a headcount report.
///
/// Examples:
///   roster analyze members.txt
///   roster analyze --format json < members.txt
///   roster analyze --chat-log export.txt --output group_analysis.txt
///   roster classify "007-沪-王五"
///   roster serve --port 8642
#[derive(Parser)]
#[command(name = "roster", version, about, long_about = None)]
struct Cli {
    /// Config file with regions, admin keywords and foreign cities.
    /// Falls back to $ROSTER_ATLAS_CONFIG, then ~/.roster-atlas/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug-level logging (overridden by RUST_LOG).
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a member list (one per line) from FILE or stdin.
    Analyze {
        file: Option<PathBuf>,

        #[arg(long, short = 'f', value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Treat input as an exported chat log and extract member names from it.
        #[arg(long)]
        chat_log: bool,

        /// Keep repeated members instead of counting them once.
        #[arg(long)]
        no_dedup: bool,

        /// Classify on all cores.
        #[arg(long)]
        parallel: bool,

        /// Write the report to this file instead of stdout.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show how each given member would be classified.
    Classify {
        #[arg(required = true)]
        members: Vec<String>,
    },

    /// List the loaded regions.
    Regions,

    /// Serve the HTTP API.
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value_t = 8642)]
        port: u16,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Summary,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AtlasError> {
    let config = AtlasConfig::load(cli.config.as_deref())?;
    let classifier = config.build_classifier()?;

    match cli.command {
        Command::Analyze {
            file,
            format,
            chat_log,
            no_dedup,
            parallel,
            output,
        } => {
            let members = load_members(file, chat_log, !no_dedup, &classifier)?;
            let schedule = if parallel { Schedule::Parallel } else { Schedule::Sequential };
            let report = analyze(&classifier, &members, schedule);

            let rendered = match format {
                Format::Text => render_text(&report),
                Format::Json => serde_json::to_string_pretty(&report)?,
                Format::Summary => serde_json::to_string_pretty(&Summary::from_report(&report))?,
            };

            match output {
                Some(path) => {
                    fs::write(&path, rendered)?;
                    info!(path = %path.display(), "report written");
                }
                None => println!("{}", rendered),
            }
        }
        Command::Classify { members } => {
            for raw in &members {
                let (member, classification) = classifier.classify_raw(raw);
                println!("{}\t{}", member, classification);
            }
        }
        Command::Regions => print_regions(&classifier),
        Command::Serve { host, port } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(roster_atlas::server::start(&host, port, classifier))?;
        }
    }

    Ok(())
}

fn load_members(
    file: Option<PathBuf>,
    chat_log: bool,
    dedup: bool,
    classifier: &Classifier,
) -> Result<Vec<String>, AtlasError> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let members = if chat_log {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        extract_from_chat_lines(lines, classifier.admin_keywords())
    } else {
        read_members(reader)?
    };

    let members = if dedup { dedup_preserving_order(members) } else { members };
    info!(count = members.len(), "members loaded");
    Ok(members)
}

fn print_regions(classifier: &Classifier) {
    let registry = classifier.registry();
    for region in registry.regions() {
        println!(
            "{}\t{}\t{} cities\taliases: {}",
            region.name,
            region.kind,
            region.cities.len(),
            region.aliases.join(", ")
        );
    }
    println!(
        "\n{} regions, {} cities, {} foreign cities",
        registry.len(),
        registry.cities_by_descending_length().len(),
        classifier.foreign().len()
    );
}
