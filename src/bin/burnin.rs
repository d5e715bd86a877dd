//! Headless fleet burn-in
//!
//! Soaks one part of every kind for a stretch of simulated hours and
//! prints failure and repair statistics. Deterministic for a given
//! seed, so it doubles as a quick calibration check after touching the
//! hazard math.

use std::collections::BTreeMap;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wearout::core::EngineConfig;
use wearout::economy::{self, CarriedStore, Ledger, Operator, SPARE_PARTS};
use wearout::engine::{PartReliability, PartSignals, ReliabilityProfile};
use wearout::parts::{
    Alternator, Battery, ChargeStore, ControlSurface, CoolantLine, Decoupler, EngineUnit, Gimbal,
    Intake, Light, PartAdapter, RcsThruster, ReactionWheel, SurfaceModule, Tank, TankResource,
    WheelModule, WheelMotor, WheelTire,
};

/// Headless burn-in - soak a fleet of parts and report statistics
#[derive(Parser, Debug)]
#[command(name = "burnin")]
#[command(about = "Soak a fleet of parts and report failure statistics")]
struct Args {
    /// Simulated duration in hours
    #[arg(long, default_value_t = 20.0)]
    hours: f64,

    /// Tick length in seconds (large values exercise time-warp math)
    #[arg(long, default_value_t = 1.0)]
    dt: f64,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Spares carried by the servicing operator
    #[arg(long, default_value_t = 500.0)]
    spares: f64,

    /// Operator repair-discount proficiency in [0, 1]
    #[arg(long, default_value_t = 0.5)]
    proficiency: f64,

    /// Log every failure and repair as it happens
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Short-lived test article tuning: parts wear out within hours, not
/// the hundreds of hours stock profiles are rated for
fn burnin_profile() -> ReliabilityProfile {
    ReliabilityProfile {
        mtbf_hours: 60.0,
        lifetime_hours: 6.0,
        repair_age_bonus: 0.1,
        ..ReliabilityProfile::default()
    }
}

fn fleet() -> Vec<PartReliability> {
    let profile = burnin_profile();
    let adapters: Vec<(&str, PartAdapter)> = vec![
        ("engine-1", PartAdapter::Engine(EngineUnit::new())),
        (
            "battery-1",
            PartAdapter::Battery(Battery::new(Some(ChargeStore::full(400.0)))),
        ),
        (
            "tank-1",
            PartAdapter::Tank(Tank::new(vec![
                TankResource::full("Fuel", 180.0),
                TankResource::full("Oxidizer", 220.0),
            ])),
        ),
        (
            "aileron-1",
            PartAdapter::ControlSurface(ControlSurface::new(SurfaceModule::default())),
        ),
        ("gimbal-1", PartAdapter::Gimbal(Gimbal::new())),
        (
            "reaction-wheel-1",
            PartAdapter::ReactionWheel(ReactionWheel::new()),
        ),
        ("decoupler-1", PartAdapter::Decoupler(Decoupler::new(100.0))),
        (
            "wheel-motor-1",
            PartAdapter::WheelMotor(WheelMotor::new(WheelModule::default())),
        ),
        (
            "wheel-tire-1",
            PartAdapter::WheelTire(WheelTire::new(WheelModule::default())),
        ),
        ("light-1", PartAdapter::Light(Light::new(true))),
        ("rcs-1", PartAdapter::Rcs(RcsThruster::new())),
        ("intake-1", PartAdapter::Intake(Intake::new())),
        ("alternator-1", PartAdapter::Alternator(Alternator::new())),
        ("coolant-1", PartAdapter::Coolant(CoolantLine::new())),
    ];

    adapters
        .into_iter()
        .map(|(name, adapter)| PartReliability::new(name, profile.clone(), adapter))
        .collect()
}

/// A busy ascent-like signal pattern so every part kind sees active
/// time: burning engine, thick air early, wheels down early, RCS
/// pulsing, temperature swinging toward the rating under thrust
fn signals_at(now: f64, dt: f64) -> PartSignals {
    let phase = now / 3600.0;
    PartSignals {
        now,
        dt,
        temperature: 400.0 + 500.0 * (phase * 7.0).sin().abs(),
        max_temperature: 1200.0,
        throttle: 0.4 + 0.5 * (phase * 3.0).sin().abs(),
        engine_ignited: true,
        atm_density: (1.0 - phase / 2.0).max(0.0),
        ground_contact: phase < 0.05,
        landed_or_splashed: phase < 0.05,
        staging_locked: false,
        rcs_firing: (now as u64 / 30) % 2 == 0,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let config = EngineConfig::default();
    let operator = Operator::new("Burn-in rig", args.proficiency);
    let mut store = CarriedStore::with(SPARE_PARTS, args.spares);

    let mut parts = fleet();
    for part in &mut parts {
        part.start(&config, 0.0);
    }

    let mut failures: BTreeMap<String, u64> = BTreeMap::new();
    let mut repairs = 0u64;
    let mut repairs_denied = 0u64;
    let mut spares_saved = 0.0;

    let total_seconds = args.hours * 3600.0;
    let mut now = 0.0;
    while now < total_seconds {
        now += args.dt;
        let signals = signals_at(now, args.dt);

        for part in &mut parts {
            if let Some(event) = part.update(&config, &signals, &mut rng) {
                *failures.entry(part.adapter().kind_name().to_string()).or_insert(0) += 1;
                if args.verbose {
                    println!("[{:>9.1}s] {}", now, event.message);
                }

                // The rig lets the part cool down before servicing it
                match economy::repair(part, &operator, &mut store, 25.0, &config, &mut rng) {
                    Ok(receipt) => {
                        repairs += 1;
                        spares_saved += receipt.saved;
                        if args.verbose {
                            println!(
                                "[{:>9.1}s] {} ({} spares, {} saved)",
                                now, receipt.event.message, receipt.cost_paid, receipt.saved
                            );
                        }
                    }
                    Err(denial) => {
                        repairs_denied += 1;
                        if args.verbose {
                            println!("[{:>9.1}s] repair denied: {}", now, denial);
                        }
                    }
                }
            }
        }
    }

    println!("burn-in: {} h simulated, seed {}", args.hours, seed);
    println!("  failures by kind:");
    for (kind, count) in &failures {
        println!("    {:<16} {}", kind, count);
    }
    let total: u64 = failures.values().sum();
    println!("  total failures:  {}", total);
    println!("  repairs:         {} ({} denied)", repairs, repairs_denied);
    println!("  spares left:     {:.1}", store.available(SPARE_PARTS));
    println!("  spares saved:    {:.1}", spares_saved);
    println!("  fleet condition:");
    for part in &parts {
        println!(
            "    {:<16} wear {:>5.2}, salvage {:>4.2}",
            part.name(),
            part.state().wear_ratio(),
            part.state().salvage_factor()
        );
    }
}
