//! Reads one JSON turn state per stdin line, feeds it to a [`Coordinator`],
//! and writes the resulting worker actions as one JSON line to stdout.

use anyhow::{Context, Result};
use atlantis_core::Action;
use atlantis_coordinator::{Coordinator, WireState};
use atlantis_worker::Mode;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

const USAGE: &str = "Usage: atlantis-cli [mode]\n\n\
mode -- scheduling discipline for each worker (default \"pq\")\n  \
pq   - priority queue, ordered by work remaining and next action\n  \
rr   - round-robin\n  \
fifo - first-in-first-out";

fn init_logging() -> Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("initialize logger")
}

fn parse_mode(arg: Option<&str>) -> Mode {
    match arg {
        None => Mode::default(),
        Some("-h") | Some("--help") => {
            println!("{USAGE}");
            std::process::exit(0);
        }
        Some(raw) => Mode::parse(raw),
    }
}

fn main() -> Result<()> {
    init_logging()?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = parse_mode(args.first().map(String::as_str));
    log::info!("starting atlantis coordinator in {mode:?} mode");

    let mut coordinator = Coordinator::new(mode);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (turn, line) in stdin.lock().lines().enumerate() {
        let line = line.with_context(|| format!("failed to read stdin at line {turn}"))?;
        if line.trim().is_empty() {
            continue;
        }
        let state: WireState = match serde_json::from_str(&line) {
            Ok(state) => state,
            Err(err) => {
                log::error!("failed to parse turn {turn} state: {err}");
                continue;
            }
        };
        let actions: BTreeMap<usize, Action> = coordinator.process(&state);
        let payload =
            serde_json::to_string(&actions).context("serialize actions for this turn")?;
        writeln!(out, "{payload}").context("write actions to stdout")?;
        out.flush().context("flush stdout")?;
    }

    Ok(())
}
