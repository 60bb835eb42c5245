use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use jukebox::{cli, config, error, types::Coordinate};

const USAGE_STEPS: &str = "\
How it works:
  1. Tell jukebox where you are (--origin or --origin-address) and where you are going.
  2. Pick genres with --genre (repeatable), or leave them out for pop and rock.
  3. Log in with Spotify in the browser window that opens.
  4. Your playlist, as long as the trip, is created on Spotify.";

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  after_help=USAGE_STEPS,
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a playlist that lasts as long as the trip
    Trip(TripOptions),

    /// Print the travel time to a destination
    Route(RouteOptions),

    /// List the genres Spotify accepts as seeds
    Genres,

    /// Check the Spotify login
    Auth,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct OriginOptions {
    /// Starting point as latitude,longitude
    #[clap(long, allow_hyphen_values = true, conflicts_with = "origin_address")]
    pub origin: Option<Coordinate>,

    /// Starting point as an address, resolved with the geocoder
    #[clap(long)]
    pub origin_address: Option<String>,
}

impl From<OriginOptions> for cli::Origin {
    fn from(opts: OriginOptions) -> Self {
        cli::Origin {
            coordinate: opts.origin,
            address: opts.origin_address,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct TripOptions {
    #[clap(flatten)]
    pub origin: OriginOptions,

    /// Where the trip ends
    #[clap(long)]
    pub destination: String,

    /// Seed genre; can be repeated
    #[clap(long = "genre", action = ArgAction::Append, num_args = 1)]
    pub genres: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RouteOptions {
    #[clap(flatten)]
    pub origin: OriginOptions,

    /// Where the trip ends
    #[clap(long)]
    pub destination: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Trip(opt) => cli::trip(opt.origin.into(), opt.destination, opt.genres).await,
        Command::Route(opt) => cli::route(opt.origin.into(), opt.destination).await,
        Command::Genres => cli::genres().await,
        Command::Auth => cli::auth().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
