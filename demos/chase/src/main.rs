//! chase — a small pursuit run for the citywalk agent simulator.
//!
//! A randomly wandering thief is followed by three detectives, one per
//! deterministic strategy.  Every few turns the thief's position leaks and is
//! broadcast to everyone; the cheapest-least-visited detective treats it as a
//! place already covered.
//!
//! ```text
//! chase                          # embedded 8-town map
//! chase cities.csv roads.csv     # CSV map from disk
//! RUST_LOG=debug chase           # per-turn and tour-construction events
//! ```

mod map;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cw_agent::{Agent, Move, Strategy};
use cw_core::{CityId, GameConfig, Turn};
use cw_game::{AgentSpec, GameBuilder, GameObserver};
use cw_map::{Map, load_map_csv};

use map::demo_map;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:         u64  = 42;
const TOTAL_TURNS:  u64  = 40;
/// The thief's location is revealed every this many turns.
const REVEAL_EVERY: u64  = 5;
const THIEF:        &str = "Thief";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints each move and records the first turn a detective shares a city
/// with the thief.
#[derive(Default)]
struct ChaseObserver {
    moves:     usize,
    stays:     usize,
    caught_at: Option<(Turn, String)>,
}

impl GameObserver for ChaseObserver {
    fn on_move(&mut self, turn: Turn, agent: &Agent<'_>, from: CityId, mv: Move) {
        if mv.is_stay_at(from) {
            self.stays += 1;
        } else {
            self.moves += 1;
        }
        println!("{turn}  {agent}");
    }

    fn on_turn_end(&mut self, turn: Turn, agents: &[Agent<'_>]) {
        if self.caught_at.is_some() {
            return;
        }
        let Some(thief) = agents.iter().find(|a| a.name() == THIEF) else {
            return;
        };
        if let Some(d) = agents
            .iter()
            .find(|a| a.name() != THIEF && a.location() == thief.location())
        {
            info!(%turn, detective = d.name(), "thief caught");
            self.caught_at = Some((turn, d.name().to_owned()));
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // 1. Map.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let map: Map = match args.as_slice() {
        [] => demo_map().context("embedded demo map")?,
        [cities, roads] => load_map_csv(Path::new(cities), Path::new(roads))
            .with_context(|| format!("loading map from {cities} and {roads}"))?,
        _ => bail!("usage: chase [CITIES_CSV ROADS_CSV]"),
    };
    println!("=== chase — citywalk ===");
    println!("{map}");

    // 2. Agents.  The thief starts at the far end of the map.
    let far = CityId(map.city_count() as u32 - 1);
    let config = GameConfig { seed: SEED, total_turns: TOTAL_TURNS };
    let mut game = GameBuilder::new(&map, config.clone())
        .agent(AgentSpec::new(THIEF, far, 6, Strategy::Random))
        .agent(AgentSpec::new("Holmes", CityId(0), 10, Strategy::CheapestLeastVisited))
        .agent(AgentSpec::new("Poirot", CityId(0), 12, Strategy::DepthFirstSearch))
        .agent(AgentSpec::new("Marple", CityId(0), 1, Strategy::Stationary))
        .build()?;
    info!(agents = game.agents().len(), turns = config.total_turns, seed = config.seed, "starting");

    // 3. Run, leaking the thief's position on schedule.
    let mut obs = ChaseObserver::default();
    let t0 = Instant::now();
    while game.turn() < config.end_turn() {
        let turn = game.play_turn(&mut obs);
        if obs.caught_at.is_some() {
            break;
        }
        if (turn.0 + 1) % REVEAL_EVERY == 0 {
            if let Some(city) = game.agents().iter().find(|a| a.name() == THIEF).map(|a| a.location()) {
                info!(%turn, %city, "thief sighted");
                game.broadcast_observation(city);
            }
        }
    }
    let elapsed = t0.elapsed();

    // 4. Summary.
    println!();
    println!("Played {} turns in {:.3} ms", game.turn().0, elapsed.as_secs_f64() * 1e3);
    println!("  moves: {}  stays: {}", obs.moves, obs.stays);
    match &obs.caught_at {
        Some((turn, who)) => println!("  {who} caught the thief on {turn}"),
        None => println!("  the thief got away"),
    }
    println!();
    println!("{:<8} {:<24} {:<12} {:>7}", "Agent", "Strategy", "City", "Stamina");
    println!("{}", "-".repeat(54));
    for a in game.agents() {
        println!(
            "{:<8} {:<24} {:<12} {:>7}",
            a.name(),
            a.strategy().as_str(),
            map.name(a.location())?,
            a.stamina(),
        );
    }

    Ok(())
}
