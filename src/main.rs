use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use filesets::config::{normalize_args, Settings};
use filesets::engine::Engine;
use filesets::error::{FilesetsError, Result};
use filesets::output::write_ids;
use filesets::parse::join_words;
use filesets::shuffle::OutputOrder;
use filesets::source::FileSource;

const GRAMMAR: &str = "\
expression ::= ( expression )
             | I expression
             | expression binaryOp expression
             | file
binaryOp   ::= U | X | D
file       ::= <path to file>

Expression examples:
  I f1
  f1 U f2
  f1 D ( f2 X f3 )
  I ( ( f1 X f2 X f3 ) U ( f4 X f5 ) )

Notes:
1) files must contain only positive integers separated by newlines
2) all files, operators and parentheses must be separated by whitespace
3) operators must be upper case
4) U = union, X = intersection, D = difference,
   I = inversion/complement (highest precedence)

Settings may also come from filesets.{json,toml,yaml} or FILESETS_* variables.";

#[derive(Parser, Debug)]
#[command(name = "filesets", version, about = "Set algebra over files of integer IDs", after_help = GRAMMAR)]
struct Cli {
    /// Largest valid ID; sets are defined over [1, max] (`-max ID` also works)
    #[arg(short = 'm', long = "max", value_name = "ID")]
    max: Option<u32>,
    /// Trace conversion and evaluation on stderr
    #[arg(short, long)]
    verbose: bool,
    /// Shuffle (randomize) the order of IDs in the output
    #[arg(short, long)]
    shuffle: bool,
    /// Write output to OUTFILE instead of stdout
    #[arg(short, long, value_name = "OUTFILE")]
    output: Option<PathBuf>,
    /// Read settings from FILE instead of ./filesets.*
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// The expression, as one argument or as separate words
    #[arg(required = true, num_args = 1..)]
    expression: Vec<String>,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?.with_overrides(
        cli.max,
        cli.shuffle,
        cli.verbose,
        cli.output.clone(),
    );
    init_tracing(settings.verbose);
    debug!(?settings, "settings");

    let domain = settings.domain()?;
    let expression = join_words(&cli.expression);
    let source = FileSource;
    let engine = Engine::new(domain, &source).with_capacity(settings.stack_capacity);
    let order = if settings.shuffle {
        OutputOrder::Shuffled
    } else {
        OutputOrder::Ascending
    };

    let ids = match engine.execute_collect(&expression, order) {
        Ok(ids) => ids,
        Err(e) => {
            error!(%expression, "invalid input");
            return Err(e.in_expression(expression));
        }
    };

    match &settings.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FilesetsError::Resource(format!("can't open output file {}: {}", path.display(), e))
            })?;
            write_ids(&ids, file)
        }
        None => write_ids(&ids, io::stdout().lock()),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse_from(normalize_args(std::env::args()))) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("filesets: ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}
