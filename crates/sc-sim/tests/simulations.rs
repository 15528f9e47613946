//! Default-seed outputs of every simulation

use approx::assert_relative_eq;
use sc_sim::*;

#[test]
fn default_seed_outputs() {
    let opts = SeedOptions::default();

    assert_relative_eq!(float(3, &opts).unwrap(), 0.814);
    assert_eq!(array(3, 3, &opts).unwrap(), vec![814, 846, 878]);
    assert_eq!(uuid(&opts).unwrap(), "81481481-4814-4148-8481-481481481414");
    assert_eq!(hex_color(&opts).unwrap(), "#814814");
    assert_eq!(rgb(&opts).unwrap().to_hex(), "#0e2e4e");
    assert_eq!(roll(6, &opts).unwrap(), 4);
    assert_eq!(dice("2d6+3", &opts).unwrap().total, 13);
    assert_eq!(coin(&opts).unwrap(), Coin::Tails);
    assert!(boolean(&opts).unwrap());
    assert_eq!(card(&opts).unwrap().to_string(), "A♥");
    assert_eq!(tarot(&opts).unwrap(), "Death");
    assert_eq!(zodiac(&opts).unwrap(), "Taurus");
    assert_eq!(bingo(&opts).unwrap().to_string(), "B-14");
    assert_eq!(roulette(&opts).unwrap().to_string(), "14 red");
}

#[test]
fn options_document_drives_simulations() {
    let opts = SeedOptions::from_json(r#"{"seed": "brian"}"#).unwrap();
    assert_eq!(roll(100, &opts).unwrap(), 79);
    assert_eq!(uuid(&opts).unwrap(), "15791579-1579-4579-8579-157915791579");
}

#[test]
fn non_finite_seed_surfaces_core_error() {
    let opts = SeedOptions::default().with_seed(f64::INFINITY);
    assert!(matches!(roll(6, &opts), Err(SimError::Seed(SeedError::NonFinite(_)))));
    assert!(matches!(tarot(&opts), Err(SimError::Seed(_))));
}

#[test]
fn results_serialize() {
    let opts = SeedOptions::default();
    let json = serde_json::to_string(&dice("1d20", &opts).unwrap()).unwrap();
    assert!(json.contains(r#""rolls":[14]"#));
    let json = serde_json::to_string(&card(&opts).unwrap()).unwrap();
    assert_eq!(json, r#"{"suit":"Hearts","rank":1}"#);
}
