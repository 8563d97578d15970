//! sandbox — headless simling room.
//!
//! Runs the two-agent prototype room (or a TOML scenario, or a seeded random
//! room) at a fixed tick rate, writes a CSV trace, and prints where everyone
//! ended up.  Player clicks are replaced by `--command agent,x,y@tick`.
//!
//! ```text
//! RUST_LOG=sl_agent=debug cargo run -p sandbox -- --ticks 3600 --command 0,400,300@600
//! ```

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use sl_agent::{Agent, AgentStore, UpdateReport};
use sl_core::{AgentId, SimConfig, Tick, Vec2};
use sl_output::{CsvWriter, OutputWriter, SimOutputObserver};
use sl_sim::{Scenario, SimObserver, TickSummary};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Size of the prototype window.
const ROOM: Vec2 = Vec2::new(800.0, 600.0);

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "sandbox", about = "Run a headless simling room")]
struct Cli {
    /// TOML file with optional `[sim]` and `[scenario]` tables.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Scatter a random room from this seed instead of the prototype layout.
    #[arg(long, conflicts_with = "scenario")]
    random: Option<u64>,

    /// Agents in a random room.
    #[arg(long, default_value_t = 4)]
    agents: usize,

    /// Food sources in a random room.
    #[arg(long, default_value_t = 3)]
    foods: usize,

    /// Beds in a random room.
    #[arg(long, default_value_t = 2)]
    beds: usize,

    /// Override `total_ticks`.
    #[arg(long)]
    ticks: Option<u64>,

    /// Override `tick_rate_hz`.
    #[arg(long)]
    hz: Option<f64>,

    /// Directory for `agent_snapshots.csv` and `tick_summaries.csv`.
    #[arg(long, default_value = "output/sandbox")]
    output: PathBuf,

    /// Player command `agent,x,y@tick`; repeatable.
    #[arg(long = "command", value_parser = parse_command)]
    commands: Vec<PlannedCommand>,
}

#[derive(Clone, Debug, PartialEq)]
struct PlannedCommand {
    tick:     Tick,
    agent:    AgentId,
    position: Vec2,
}

fn parse_command(s: &str) -> Result<PlannedCommand, String> {
    let (what, at) = s.split_once('@').ok_or("expected agent,x,y@tick")?;
    let tick: u64 = at.trim().parse().map_err(|e| format!("bad tick {at:?}: {e}"))?;

    let parts: Vec<&str> = what.split(',').map(str::trim).collect();
    let [agent, x, y] = parts.as_slice() else {
        return Err(format!("expected agent,x,y before '@', got {what:?}"));
    };
    let agent: u32 = agent.parse().map_err(|e| format!("bad agent {agent:?}: {e}"))?;
    let x: f64 = x.parse().map_err(|e| format!("bad x {x:?}: {e}"))?;
    let y: f64 = y.parse().map_err(|e| format!("bad y {y:?}: {e}"))?;
    if !(x.is_finite() && y.is_finite()) {
        return Err(format!("position must be finite, got ({x}, {y})"));
    }

    Ok(PlannedCommand { tick: Tick(tick), agent: AgentId(agent), position: Vec2::new(x, y) })
}

// ── Scenario file ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
struct ScenarioFile {
    sim:      SimConfig,
    scenario: Scenario,
}

fn load(cli: &Cli) -> Result<(SimConfig, Scenario)> {
    let (mut config, scenario) = match (&cli.scenario, cli.random) {
        (Some(path), _) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let file: ScenarioFile = toml::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?;
            (file.sim, file.scenario)
        }
        (None, Some(seed)) => {
            let config = SimConfig { seed, ..SimConfig::default() };
            (config, Scenario::random(seed, cli.agents, cli.foods, cli.beds, ROOM))
        }
        (None, None) => (SimConfig::default(), Scenario::prototype()),
    };

    if let Some(ticks) = cli.ticks {
        config.total_ticks = ticks;
    }
    if let Some(hz) = cli.hz {
        config.tick_rate_hz = hz;
    }
    Ok((config, scenario))
}

// ── Observer wrapper to count rows and events ─────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    interactions:  usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, interactions: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_agent_update(&mut self, tick: Tick, agent: &Agent, report: &UpdateReport) {
        if let Some((object, need)) = report.used {
            tracing::info!(%tick, agent = %agent.id(), %object, %need, "interaction");
        }
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.summary_rows += 1;
        self.interactions += summary.interactions;
        self.inner.on_tick_end(tick, summary);
    }

    fn on_snapshot(&mut self, tick: Tick, elapsed_secs: f64, agents: &AgentStore) {
        self.snapshot_rows += agents.count();
        self.inner.on_snapshot(tick, elapsed_secs, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let (config, scenario) = load(&cli)?;

    println!("=== sandbox — simling room ===");
    println!(
        "Agents: {}  |  Food: {}  |  Beds: {}  |  {} ticks at {} Hz",
        scenario.agents.len(),
        scenario.foods.len(),
        scenario.beds.len(),
        config.total_ticks,
        config.tick_rate_hz,
    );
    println!();

    // 1. Build sim.
    let mut sim = scenario.into_builder(config)?.build()?;

    // 2. Queue player commands.
    for c in &cli.commands {
        sim.schedule_command(c.tick, c.agent, c.position)
            .with_context(|| format!("command for {} at {}", c.agent, c.tick))?;
    }

    // 3. Set up output.
    let writer = CsvWriter::new(&cli.output)?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulated {} in {:.3} s", sim.clock, elapsed.as_secs_f64());
    println!("  interactions        : {}", obs.interactions);
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!();

    // 6. Final status table.
    println!(
        "{:<6} {:<18} {:>7} {:>7} {:>7} {:>7}  {}",
        "Agent", "Position", "Hunger", "Sleep", "Social", "Fun", "Action"
    );
    println!("{}", "-".repeat(72));
    for s in sim.status() {
        println!(
            "{:<6} {:<18} {:>7.1} {:>7.1} {:>7.1} {:>7.1}  {}",
            s.id.0,
            s.position.to_string(),
            s.needs.hunger,
            s.needs.sleep,
            s.needs.social,
            s.needs.fun,
            s.action,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command() {
        let c = parse_command("1, 400, 300.5@120").unwrap();
        assert_eq!(c, PlannedCommand { tick: Tick(120), agent: AgentId(1), position: Vec2::new(400.0, 300.5) });
    }

    #[test]
    fn rejects_malformed_command() {
        assert!(parse_command("1,400,300").is_err());
        assert!(parse_command("1,400@5").is_err());
        assert!(parse_command("x,1,2@5").is_err());
        assert!(parse_command("0,nan,1@5").is_err());
        assert!(parse_command("0,1,inf@5").is_err());
    }

    #[test]
    fn bundled_scenario_parses() {
        let file: ScenarioFile = toml::from_str(include_str!("../scenario.toml")).unwrap();
        assert_eq!(file.sim.tick_rate_hz, 30.0);
        assert_eq!(file.sim.seed, 42);
        assert_eq!(file.scenario.agents.len(), 3);
        assert_eq!(file.scenario.agent_params.speed, 60.0);
        assert_eq!(file.scenario.agent_params.size, 20.0);
    }

    #[test]
    fn empty_file_is_prototype() {
        let file: ScenarioFile = toml::from_str("").unwrap();
        assert_eq!(file.scenario, Scenario::prototype());
        assert_eq!(file.sim, SimConfig::default());
    }
}
