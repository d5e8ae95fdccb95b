use fluidium_engine::{default_preset_json, PresetBundle, SimCore, SimulationParameters};

#[test]
fn default_preset_parses_back_to_defaults() {
    let bundle = PresetBundle::from_json(&default_preset_json()).unwrap();
    assert_eq!(bundle.params, SimulationParameters::default());
    assert_eq!(bundle.name.as_deref(), Some("default"));
}

#[test]
fn preset_drives_a_session_end_to_end() {
    let mut sim = SimCore::new(SimulationParameters::default());
    sim.load_preset_json(
        r#"{
            "name": "ember",
            "params": {
                "resolution": 48,
                "viscosity": 0.0008,
                "diffusion": 0.00002,
                "dissipation": 0.99,
                "curlStrength": 30.0,
                "pressureIterations": 24
            }
        }"#,
    )
    .unwrap();

    assert_eq!(sim.resolution(), 48);

    sim.add_impulse(0.5, 0.5, 0.06, 25.0, 0.0);
    let ran = sim.advance(4.5 / 60.0);
    assert!(ran > 0);

    let dye = sim.get_dye_field();
    assert_eq!(dye.len(), 48 * 48);
    assert!(dye.iter().any(|&v| v > 0.0));
    assert!(dye.iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn rejected_preset_reports_the_parse_error() {
    let mut sim = SimCore::new(SimulationParameters::default());
    let err = sim.load_preset_json("not even json").unwrap_err();
    assert!(!err.is_empty());
}
