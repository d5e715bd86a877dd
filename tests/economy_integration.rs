//! Integration tests for the repair economy working against live
//! parts and a shared vehicle ledger

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wearout::core::EngineConfig;
use wearout::economy::{
    maintain, repair, CarriedStore, Ledger, Operator, ServiceDenial, SPARE_PARTS,
};
use wearout::engine::{EventKind, PartReliability, ReliabilityProfile};
use wearout::parts::{Gimbal, Light, PartAdapter};

fn armed_part(name: &str, config: &EngineConfig) -> PartReliability {
    let mut part = PartReliability::new(
        name,
        ReliabilityProfile::default(),
        PartAdapter::Gimbal(Gimbal::new()),
    );
    part.start(config, 0.0);
    part
}

/// One spare short of the repair cost: the transaction is denied and
/// nothing changes anywhere
#[test]
fn test_repair_denied_without_enough_spares() {
    let config = EngineConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut part = armed_part("gimbal-1", &config);
    part.force_fail(&config, &mut rng);

    let short = part.profile().repair_cost - 1.0;
    let mut store = CarriedStore::with(SPARE_PARTS, short);

    let outcome = repair(
        &mut part,
        &Operator::new("Sam", 0.8),
        &mut store,
        20.0,
        &config,
        &mut rng,
    );

    assert_eq!(
        outcome,
        Err(ServiceDenial::InsufficientSpares {
            needed: part.profile().repair_cost,
            available: short,
        })
    );
    assert!(part.has_failed());
    assert_eq!(store.available(SPARE_PARTS), short);
}

/// Exactly the repair cost and zero proficiency: the full price is
/// paid and the part comes back
#[test]
fn test_repair_with_exact_spares_and_no_discount() {
    let config = EngineConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut part = armed_part("gimbal-1", &config);
    part.force_fail(&config, &mut rng);

    let cost = part.profile().repair_cost;
    let mut store = CarriedStore::with(SPARE_PARTS, cost);

    let receipt = repair(
        &mut part,
        &Operator::new("Sam", 0.0),
        &mut store,
        20.0,
        &config,
        &mut rng,
    )
    .unwrap();

    assert_eq!(receipt.cost_paid, cost);
    assert_eq!(receipt.saved, 0.0);
    assert_eq!(receipt.event.kind, EventKind::Repair);
    assert_eq!(store.available(SPARE_PARTS), 0.0);
    assert!(!part.has_failed());
}

/// Two parts on the same vehicle drain the same spares pool; the
/// second transaction sees what the first one left
#[test]
fn test_shared_ledger_across_parts() {
    let config = EngineConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    let mut gimbal = armed_part("gimbal-1", &config);
    let mut light = PartReliability::new(
        "light-1",
        ReliabilityProfile::default(),
        PartAdapter::Light(Light::new(true)),
    );
    light.start(&config, 0.0);

    gimbal.force_fail(&config, &mut rng);
    light.force_fail(&config, &mut rng);

    // Enough for one full repair plus a bit: the unlucky second part
    // is turned away
    let mut vehicle_store = CarriedStore::with(SPARE_PARTS, 6.0);
    let operator = Operator::new("Sam", 0.0);

    assert!(repair(&mut gimbal, &operator, &mut vehicle_store, 20.0, &config, &mut rng).is_ok());
    assert_eq!(vehicle_store.available(SPARE_PARTS), 1.0);

    let outcome = repair(&mut light, &operator, &mut vehicle_store, 20.0, &config, &mut rng);
    assert!(matches!(
        outcome,
        Err(ServiceDenial::InsufficientSpares { .. })
    ));
    assert!(light.has_failed());

    // Topping the store back up unblocks it
    vehicle_store.credit(SPARE_PARTS, 10.0);
    assert!(repair(&mut light, &operator, &mut vehicle_store, 20.0, &config, &mut rng).is_ok());
}

/// Maintenance knocks the configured fraction off the age, every time
#[test]
fn test_repeated_maintenance_compounds() {
    let config = EngineConfig::default();
    let mut part = armed_part("gimbal-1", &config);

    // Age the part artificially through its public surface: run it
    // hot and active for a while
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for i in 0..1000 {
        let signals = wearout::engine::PartSignals {
            engine_ignited: true,
            ..wearout::engine::PartSignals::at((i + 1) as f64, 1.0)
        };
        part.update(&config, &signals, &mut rng);
    }
    let aged = part.state().age_seconds;
    assert!(aged >= 999.0);

    let mut store = CarriedStore::with(SPARE_PARTS, 10.0);
    let operator = Operator::new("Sam", 0.0);

    maintain(&mut part, &operator, &mut store).unwrap();
    let after_one = part.state().age_seconds;
    assert!((after_one - aged * 0.8).abs() < 1e-9);

    maintain(&mut part, &operator, &mut store).unwrap();
    let after_two = part.state().age_seconds;
    assert!((after_two - aged * 0.64).abs() < 1e-9);

    assert_eq!(store.available(SPARE_PARTS), 8.0);
}
