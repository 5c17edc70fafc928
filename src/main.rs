use caesar::cli::{
    run_crack, run_decrypt, run_encrypt, run_keygen, CrackOptions, DecryptOptions,
    EncryptOptions, KeySource, KeygenOptions,
};
use caesar::key::parse_shift;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("CAESAR_VERSION");
const PROFILE: &str = env!("CAESAR_PROFILE");
const GIT_HASH: &str = env!("CAESAR_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} ({})", PROFILE, VERSION, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "caesar")]
#[command(author, about = "Fixed-shift substitution cipher", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct KeyArgs {
    /// Shift amount: an integer or a key letter (A=0 ... Z=25)
    #[arg(short, long, allow_hyphen_values = true, value_parser = parse_shift_arg)]
    shift: Option<i64>,

    /// JSON key file, used when --shift is absent
    #[arg(short, long)]
    key: Option<PathBuf>,
}

impl From<KeyArgs> for KeySource {
    fn from(args: KeyArgs) -> Self {
        Self {
            shift: args.shift,
            key: args.key,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize and encrypt text
    #[command(alias = "e")]
    Encrypt {
        #[command(flatten)]
        key: KeyArgs,

        /// Plaintext file (stdin if omitted)
        input: Option<PathBuf>,

        /// Ciphertext file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decrypt normalized ciphertext
    #[command(alias = "d")]
    Decrypt {
        #[command(flatten)]
        key: KeyArgs,

        /// Ciphertext file (stdin if omitted)
        input: Option<PathBuf>,

        /// Plaintext file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on characters outside A-Z instead of passing them through
        #[arg(long)]
        strict: bool,
    },

    /// Recover the shift by frequency analysis
    #[command(alias = "c")]
    Crack {
        /// Ciphertext file (stdin if omitted)
        input: Option<PathBuf>,

        /// Number of candidates to show
        #[arg(long, default_value = "3")]
        top: usize,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a key file with a random shift
    #[command(alias = "k")]
    Keygen {
        /// Key file to write (stdout if omitted)
        output: Option<PathBuf>,

        /// Use a fixed shift instead of a random one
        #[arg(short, long, allow_hyphen_values = true, value_parser = parse_shift_arg)]
        shift: Option<i64>,
    },
}

fn parse_shift_arg(s: &str) -> Result<i64, String> {
    parse_shift(s).map_err(|e| format!("{}", e))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn print_result(text: Option<String>) {
    if let Some(text) = text {
        if text.ends_with('\n') {
            print!("{}", text);
        } else {
            println!("{}", text);
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.version {
        println!("caesar {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt { key, input, output } => {
            let options = EncryptOptions {
                key: key.into(),
                input,
                output,
            };
            run_encrypt(&options).map(print_result)
        }

        Commands::Decrypt {
            key,
            input,
            output,
            strict,
        } => {
            let options = DecryptOptions {
                key: key.into(),
                input,
                output,
                strict,
            };
            run_decrypt(&options).map(print_result)
        }

        Commands::Crack { input, top, json } => {
            let options = CrackOptions { input, top, json };
            run_crack(&options).map(|report| print!("{}", report))
        }

        Commands::Keygen { output, shift } => {
            let options = KeygenOptions { output, shift };
            run_keygen(&options).map(print_result)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
