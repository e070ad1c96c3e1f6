use cifra::SongCategory;
use cifra_cli::commands;
use cifra_cli::{CliError, Shift};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "cifra", version, about = "Chord sheet tools: transpose, classify and structure lyrics")]
struct Cli {
    /// Write the result here instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Move every chord of a sheet by semitones or to a key
    Transpose {
        /// Sheet file, `-` for stdin
        file: PathBuf,

        /// Signed semitone offset
        #[arg(short, long, allow_hyphen_values = true, conflicts_with = "to", required_unless_present = "to")]
        semitones: Option<i32>,

        /// Target key
        #[arg(long)]
        to: Option<String>,

        /// Key the sheet is written in (defaults to the frontmatter tone, then C)
        #[arg(long, requires = "to")]
        from: Option<String>,
    },

    /// Transpose a sheet to a key and record the key in its frontmatter
    Retune {
        file: PathBuf,

        #[arg(long)]
        to: String,
    },

    /// Print the kind of every line
    Classify { file: PathBuf },

    /// Parse tagged lyrics into JSON sections
    Sections {
        file: PathBuf,

        /// "Louvor"/"general" or "Harpa Cristã"/"hymnal" (defaults to the frontmatter category)
        #[arg(short, long, value_parser = parse_category)]
        category: Option<SongCategory>,
    },

    /// Turn JSON sections back into tagged lyrics
    Format { file: PathBuf },

    /// Show stored lyrics content as a musician sees it
    Show {
        file: PathBuf,

        /// Key name ("D") or legacy offset ("+2")
        #[arg(short, long, allow_hyphen_values = true)]
        key: Option<String>,

        /// Hide chord lines
        #[arg(long)]
        lyrics_only: bool,
    },
}

fn parse_category(s: &str) -> Result<SongCategory, String> {
    SongCategory::from_name(s).ok_or_else(|| format!("unknown category '{}'", s))
}

fn run(cli: Cli) -> Result<(), CliError> {
    let text = match cli.command {
        Commands::Transpose {
            file,
            semitones,
            to,
            from,
        } => {
            let shift = match (semitones, to) {
                (Some(n), _) => Shift::Semitones(n),
                (None, Some(to)) => Shift::ToKey { to, from },
                (None, None) => Shift::Semitones(0),
            };
            commands::transpose(&commands::read_input(&file)?, &shift)?
        }
        Commands::Retune { file, to } => cifra::retune(&commands::read_input(&file)?, &to)?,
        Commands::Classify { file } => commands::classify(&commands::read_input(&file)?)?,
        Commands::Sections { file, category } => {
            commands::sections(&commands::read_input(&file)?, category)?
        }
        Commands::Format { file } => commands::format(&commands::read_input(&file)?)?,
        Commands::Show {
            file,
            key,
            lyrics_only,
        } => commands::show(&commands::read_input(&file)?, key.as_deref(), lyrics_only)?,
    };

    commands::write_output(cli.output.as_deref(), &text)
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
