use clap::{CommandFactory, Parser};
use hexlish::{transcode_stream, Mode};
use std::io::{self, BufWriter, IsTerminal};
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("HEXLISH_VERSION");
const BUILD: &str = env!("HEXLISH_BUILD");
const PROFILE: &str = env!("HEXLISH_PROFILE");
const GIT_HASH: &str = env!("HEXLISH_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

const AFTER_HELP: &str = "\
Examples:
  echo \"DEADBEEF\" | hexlish
  echo \"TUPTRUUV\" | hexlish -d
  cat large_hex_file.txt | hexlish > encoded.txt
  cat encoded.txt | hexlish -d > decoded.txt

Hexlish Alphabet Mapping:
  Hexlish:  A C E H I J L M N O P R S T U V
  Hex:      0 1 2 3 4 5 6 7 8 9 A B C D E F";

#[derive(Parser)]
#[command(name = "hexlish")]
#[command(author, about = "Convert between hexadecimal and Hexlish encoding", long_about = None)]
#[command(disable_help_flag = true, after_help = AFTER_HELP)]
struct Cli {
    /// Decode mode (convert Hexlish to hexadecimal)
    #[arg(short = 'd', long)]
    decode: bool,

    /// Show this help message
    #[arg(short = 'h', long)]
    help: bool,

    /// Print version
    #[arg(short = 'V', long)]
    version: bool,
}

/// Render the full usage text to the error stream
fn print_usage() {
    eprintln!("{}", Cli::command().render_long_help());
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("hexlish {}", get_version());
        return ExitCode::SUCCESS;
    }

    if cli.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Error: no input provided; hexlish reads from stdin");
        eprintln!();
        print_usage();
        return ExitCode::FAILURE;
    }

    let mode = if cli.decode { Mode::Decode } else { Mode::Encode };
    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());

    match transcode_stream(stdin.lock(), writer, mode) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
