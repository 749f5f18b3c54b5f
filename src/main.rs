use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use popdist_merge::convert;
use popdist_merge::io::Endpoint;
use popdist_merge::options::{LineEnding, MergeOptions};
use popdist_merge::{Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            let code = match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    let result = init_logging(cli.verbose).and_then(|()| run(cli));
    if let Err(error) = result {
        if matches!(error, ToolError::Usage(_)) {
            eprintln!("{}", Cli::command().render_usage());
        }
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = cli.merge_options();
    let [input, output] = <[Endpoint; 2]>::try_from(cli.files).map_err(|files| {
        ToolError::Usage(format!(
            "expected INPUTFILE and OUTPUTFILE, got {} file argument(s)",
            files.len()
        ))
    })?;

    convert::merge_file(&input, &output, &options)
}

fn init_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| ToolError::Logging(err.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    args_override_self = true,
    about = "Merge fragmented popdist output tables into a single CSV file.",
    override_usage = "popdist-merge [OPTIONS] INPUTFILE OUTPUTFILE",
    after_help = "When INPUTFILE or OUTPUTFILE are -, standard input or standard output are used \
                  respectively.\n\nFor popdist see http://genetics.agrsci.dk/~bernt/popgen/"
)]
struct Cli {
    /// Input report followed by the output file.
    #[arg(value_name = "FILE")]
    files: Vec<Endpoint>,

    /// Field separator in output file (default is TAB).
    #[arg(
        short,
        long,
        value_name = "SEP",
        default_value = "\t",
        hide_default_value = true,
        allow_hyphen_values = true
    )]
    separator: String,

    /// Put double quotes around field values.
    #[arg(short, long)]
    quotes: bool,

    /// Use UNIX line breaks (default).
    #[arg(short, long, overrides_with = "windows")]
    unix: bool,

    /// Use Windows line breaks.
    #[arg(short, long, overrides_with = "unix")]
    windows: bool,

    /// Log progress to stderr; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn merge_options(&self) -> MergeOptions {
        // -u and -w override each other, so at most one is set.
        let line_ending = if self.windows && !self.unix {
            LineEnding::Windows
        } else {
            LineEnding::Unix
        };
        let options = MergeOptions::default()
            .with_separator(self.separator.clone())
            .with_line_ending(line_ending);

        if self.quotes {
            options.with_quote("\"")
        } else {
            options
        }
    }
}
