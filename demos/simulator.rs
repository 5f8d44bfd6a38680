use clap::Parser;
use log::info;
use logic_lab::gate::{signal_label, GateKind};
use logic_lab::simulator::Simulator;

#[derive(Parser, Debug)]
#[command(author, version, about = "Evaluate a logic gate and record snapshots")]
struct Cli {
    /// Gate to evaluate (AND, OR, XOR, NAND, NOR, NOT).
    #[arg(short, long, default_value = "AND")]
    gate: GateKind,

    /// Input signal A.
    #[arg(short)]
    a: bool,

    /// Input signal B (ignored by NOT).
    #[arg(short)]
    b: bool,

    /// Number of snapshots to take, toggling input A after each one.
    #[arg(long, default_value_t = 0)]
    snapshots: usize,

    #[arg(long, default_value = "info")]
    log_level: simplelog::LevelFilter,
}

const TIME_FORMAT: &str = "%H:%M:%S";

/// Current local time as `HH:MM:SS`.
fn timestamp() -> String {
    chrono::Local::now().format(TIME_FORMAT).to_string()
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut sim = Simulator::new();
    sim.select_gate(cli.gate);
    sim.set_input_a(cli.a);
    sim.set_input_b(cli.b);
    info!("request = {:?}", sim.request());

    println!("{}: {}", sim.gate(), sim.gate().summary());
    let b = if sim.input_b_enabled() { u8::from(sim.input_b()).to_string() } else { "-".to_string() };
    println!("A = {}, B = {}", u8::from(sim.input_a()), b);
    println!("output = {}", signal_label(sim.output()));

    if cli.snapshots > 0 {
        for _ in 0..cli.snapshots {
            sim.snapshot(timestamp());
            sim.toggle_input_a();
        }
        println!("history ({} of {}):", sim.history().len(), sim.history().capacity());
        for entry in sim.history().entries() {
            println!("- {}", entry);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{Local, NaiveTime};

    #[test]
    fn test_timestamp_is_local_time() {
        let before = Local::now().time();
        let stamp = timestamp();
        let after = Local::now().time();

        assert_eq!(stamp.len(), 8);
        let parsed = NaiveTime::parse_from_str(&stamp, TIME_FORMAT).expect("timestamp is HH:MM:SS");
        assert_eq!(parsed.format(TIME_FORMAT).to_string(), stamp);
        let before = before.format(TIME_FORMAT).to_string();
        let after = after.format(TIME_FORMAT).to_string();
        assert!(
            stamp == before || stamp == after,
            "stamp = {}, local = {}..{}",
            stamp,
            before,
            after
        );
    }
}
