//! field-probe: inspect generated threat fields and replay cascades.
//!
//! Usage:
//!   field-probe generate --amount 12000 --seed 7
//!   field-probe simulate --amount 12000 --seed 7 --fps 30 --order 4,3,2,1,0
//!
//! JSON goes to stdout, logs go to stderr (`RUST_LOG` controls the level).

use std::process;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use threatfield_core::config::load_tuning_from_env;
use threatfield_core::enums::{CascadePhase, HitResult};
use threatfield_core::events::FieldEvent;
use threatfield_procgen::generate;
use threatfield_sim::Field;

/// Simulated time limit for `simulate`.
const MAX_SIM_SECS: f64 = 60.0;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "generate" => cmd_generate(&args[2..]),
        "simulate" => cmd_simulate(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "field-probe: threat field inspection tool\n\
         \n\
         Commands:\n\
         \n\
         generate  Print the generated field spec as JSON\n\
         \n\
           --amount <f64>     Threat amount (required, > 0)\n\
           --seed <i64>       Field seed (default: 0)\n\
         \n\
         simulate  Destroy rocks until the cascade triggers and print the event log\n\
         \n\
           --amount <f64>     Threat amount (required, > 0)\n\
           --seed <i64>       Field seed (default: 0)\n\
           --fps <f64>        Update rate (default: 60)\n\
           --order <i,j,..>   Rock hit order (default: index order)\n\
         \n\
         Examples:\n\
         \n\
           field-probe generate --amount 250 --seed 42\n\
           RUST_LOG=threatfield=debug field-probe simulate --amount 12000 --seed 7 --fps 15\n"
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].as_str());
        }
    }
    None
}

fn parse_amount(args: &[String]) -> f64 {
    match flag_value(args, "--amount").map(str::parse::<f64>) {
        Some(Ok(amount)) => amount,
        Some(Err(_)) => fail("--amount must be a number"),
        None => fail("--amount <f64> is required"),
    }
}

fn parse_seed(args: &[String]) -> i64 {
    match flag_value(args, "--seed").map(str::parse::<i64>) {
        Some(Ok(seed)) => seed,
        Some(Err(_)) => fail("--seed must be an integer"),
        None => 0,
    }
}

fn parse_fps(args: &[String]) -> f64 {
    match flag_value(args, "--fps").map(str::parse::<f64>) {
        Some(Ok(fps)) if fps.is_finite() && fps > 0.0 => fps,
        Some(_) => fail("--fps must be a positive number"),
        None => 60.0,
    }
}

fn parse_order(args: &[String]) -> Option<Vec<usize>> {
    let raw = flag_value(args, "--order")?;
    let order: Result<Vec<usize>, _> = raw.split(',').map(|s| s.trim().parse()).collect();
    match order {
        Ok(order) => Some(order),
        Err(_) => fail("--order must be a comma-separated list of rock indices"),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => fail(&format!("failed to serialize output: {e}")),
    }
}

// --- Generate command ---

fn cmd_generate(args: &[String]) {
    let amount = parse_amount(args);
    let seed = parse_seed(args);

    match generate(amount, seed) {
        Ok(spec) => print_json(&spec),
        Err(e) => fail(&e.to_string()),
    }
}

// --- Simulate command ---

#[derive(Serialize)]
struct TimedEvent {
    t: f64,
    #[serde(flatten)]
    event: FieldEvent,
}

#[derive(Serialize)]
struct SimulationLog {
    amount: f64,
    seed: i64,
    fps: f64,
    hits: Vec<HitRecord>,
    events: Vec<TimedEvent>,
    cleared: bool,
}

#[derive(Serialize)]
struct HitRecord {
    rock_index: usize,
    result: HitResult,
}

fn cmd_simulate(args: &[String]) {
    let amount = parse_amount(args);
    let seed = parse_seed(args);
    let fps = parse_fps(args);

    let tuning = load_tuning_from_env();
    let mut field = match Field::spawn_with_tuning(amount, seed, 0.0, tuning) {
        Ok(field) => field,
        Err(e) => fail(&e.to_string()),
    };

    let order = parse_order(args).unwrap_or_else(|| (0..field.spec().rock_count()).collect());

    let mut hits = Vec::new();
    'order: for rock_index in order {
        loop {
            let result = field.hit(rock_index);
            hits.push(HitRecord { rock_index, result });
            if field.cascade_phase() != CascadePhase::Idle {
                break 'order;
            }
            if !matches!(result, HitResult::Damaged { .. }) {
                break;
            }
        }
    }

    if field.cascade_phase() == CascadePhase::Idle {
        tracing::warn!(
            target: "threatfield::probe",
            destroyed = field.destroyed_count(),
            threshold = field.spec().cascade_threshold,
            "hit order did not reach the cascade threshold"
        );
    }

    let dt = 1.0 / fps;
    let mut events = Vec::new();
    let mut step: u64 = 0;
    loop {
        let now = step as f64 * dt;
        if now > MAX_SIM_SECS || field.is_cleared() {
            break;
        }
        let frame = field.update(now, if step == 0 { 0.0 } else { dt });
        events.extend(frame.events.into_iter().map(|event| TimedEvent { t: now, event }));
        step += 1;
    }

    tracing::info!(
        target: "threatfield::probe",
        frames = step,
        events = events.len(),
        cleared = field.is_cleared(),
        "simulation finished"
    );

    print_json(&SimulationLog {
        amount,
        seed,
        fps,
        hits,
        events,
        cleared: field.is_cleared(),
    });
}
