//! Tournament bot process.
//!
//! Reads one JSON request per line from stdin and writes one JSON response per
//! line to stdout. Logs go to stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Error};
use log::info;
use pico_args::Arguments;
use tourney_bots::{Bot, BotKind, BotSettings, PokerBot, Session};

const HELP: &str = "\
Run one tournament poker bot over stdin/stdout

USAGE:
  pp_bots [OPTIONS]

OPTIONS:
  --bot        KIND        Bot strategy: hybrid or random  [default: hybrid]
  --name       NAME        Seat name the engine uses for this bot  [default: hybrid_bot]
  --seed       N           Seed for reproducible decisions  [default: random]
  --config     PATH        JSON settings file  [default: env BOT_CONFIG_FILE]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  RUST_LOG                 Log level (logs are written to stderr)
  BOT_CONFIG_FILE          JSON settings file
  BOT_PREFLOP_RAISE_MIN_BB Smallest preflop open, in big blinds
  BOT_PREFLOP_RAISE_MAX_BB Largest preflop open, in big blinds
  BOT_PLAY_FREQUENCY       Starting play frequency
  BOT_RAISE_FREQUENCY      Starting raise frequency
  (See the tourney_bots config module for all overrides)
";

struct Args {
    kind: BotKind,
    name: String,
    seed: Option<u64>,
    config: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let kind: BotKind = pargs.opt_value_from_str("--bot")?.unwrap_or_default();
    let args = Args {
        kind,
        name: pargs
            .opt_value_from_str("--name")?
            .unwrap_or_else(|| format!("{kind}_bot")),
        seed: pargs.opt_value_from_str("--seed")?,
        config: pargs.opt_value_from_str("--config")?,
    };

    env_logger::builder().format_target(false).init();

    let settings = BotSettings::from_env(args.config).context("Failed to load bot settings")?;
    settings.validate().context("Invalid bot settings")?;

    let bot = Bot::from_kind(args.kind, args.name, &settings, args.seed);
    info!("Starting {} bot {}", args.kind, bot.name());
    let mut session = Session::new(bot);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = session.handle_line(&line);
        writeln!(stdout, "{reply}")?;
        stdout.flush()?;
    }

    let stats = session.bot().stats();
    info!(
        "Engine closed the stream after {} hands ({} won)",
        stats.hands_played, stats.hands_won
    );
    Ok(())
}
