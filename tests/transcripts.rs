// Every demo's output compared line by line with its documented transcript.

use design_patterns::catalog;
use design_patterns::CatalogConfig;

fn config_for(platform: &str) -> CatalogConfig {
    CatalogConfig {
        color: false,
        platform: Some(platform.to_string()),
        ..CatalogConfig::default()
    }
}

fn transcript(name: &str, config: &CatalogConfig) -> Vec<String> {
    let entry = catalog::find(name).unwrap();
    let mut out = Vec::new();
    (entry.demo)(config, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn assert_transcript(name: &str, expected: &[&str]) {
    assert_eq!(transcript(name, &config_for("linux")), expected, "demo {}", name);
}

#[test]
fn test_builder_transcript() {
    assert_transcript(
        "builder",
        &[
            r#"Car parts: ["Set Big one Engine", "Set 10 Seats"]"#,
            r#"Manual parts: ["The car have a very insatiable engine. You should by more fuel", "There are many doors in the car"]"#,
            r#"Car parts: ["Set Sport Engine", "Set 2 Seats"]"#,
            r#"Manual parts: ["The car have a good engine for sport competitions", "There are 3 doors in the car"]"#,
            r#"Car parts: ["Set 4 Seats"]"#,
            r#"Manual parts: ["There are 5 doors in the car"]"#,
            r#"Car parts: ["Set 1 Seats", "Set minimal one Engine"]"#,
            r#"Manual parts: ["There should be some doors in the car, I think", "The car have some engine, I think"]"#,
        ],
    );
}

#[test]
fn test_vehicle_builder_transcript() {
    assert_transcript(
        "vehicle-builder",
        &[
            "Jeep",
            "body: SUV",
            "engine horsepower: 400",
            "tire size: 22'",
            "",
            "Passenger",
            "body: simple one",
            "engine horsepower: 200",
            "tire size: 18'",
        ],
    );
}

#[test]
fn test_prototype_transcript() {
    assert_transcript(
        "prototype",
        &[
            "Circle. X: 10, Y: 10, Height: 50, Width: 300",
            "Circle. X: 20, Y: 20, Height: 50, Width: 300",
            "Rectangle. X: 0, Y: 0, Corner radius: 8",
            "Clone of 2 failed: Incorrect object identifier: 2",
        ],
    );
}

#[test]
fn test_simple_factory_transcript() {
    assert_transcript(
        "simple-factory",
        &[
            "Created admin user",
            "Created simple user",
            "Created customer user",
            "Wrong user type: 'guest'",
        ],
    );
}

#[test]
fn test_factory_method_transcript_per_platform() {
    assert_eq!(
        transcript("factory-method", &config_for("windows")),
        ["Drawing button. Height: 10, Weight: 20, Color: Blue"]
    );
    assert_eq!(
        transcript("factory-method", &config_for("linux")),
        ["Drawing button. Height: 15, Weight: 25, Color: Grey"]
    );
}

#[test]
fn test_factory_method_reports_mac_as_unsupported() {
    assert_eq!(
        transcript("factory-method", &config_for("macos")),
        ["Unsupported platform: 'MacOS'"]
    );
}

#[test]
fn test_abstract_factory_transcript() {
    assert_transcript(
        "abstract-factory",
        &[
            "Creating linux button",
            "Creating linux text area element",
            "Here are some instructions of how to draw linux button",
            "Here are some instructions of how to draw linux text area",
        ],
    );
}

#[test]
fn test_singleton_transcript() {
    assert_transcript(
        "singleton",
        &[
            "DB params: Connection(host='localhost', port=3306, password='123')",
            "DB params: Connection(host='localhost', port=3306, password='123')",
            "true",
        ],
    );
}

#[test]
fn test_borg_transcript() {
    assert_transcript(
        "borg",
        &[
            "db1: connected, db2: connected",
            "false",
            "db1: not connected, db2: not connected, db3: not connected",
        ],
    );
}

#[test]
fn test_adapter_transcript() {
    assert_transcript(
        "adapter",
        &[
            "the Fender guitar is playing a Jazz song",
            "the left ear is listening",
        ],
    );
}

#[test]
fn test_bridge_transcript() {
    assert_transcript(
        "bridge",
        &[
            "Please turn on the TV first",
            "Turning on TV",
            "Set TV channel: 2",
            "",
            "Please turn on the Radio first",
            "Turning on Radio",
            "Set Radio channel: 99.2",
            "Set Radio volume: 0",
        ],
    );
}

#[test]
fn test_composite_transcript() {
    assert_transcript(
        "composite",
        &[
            "Drew Dot object. X=10, Y=-10",
            "Drew Circle object. X=20, Y=2, Radius=50",
        ],
    );
}

#[test]
fn test_decorator_transcript() {
    assert_transcript(
        "decorator",
        &[
            "Sent through Email: Please fix this bug ASAP",
            "--------------------------------------------------",
            "Sent through Email: Please fix this bug ASAP",
            "Sent through Telegram: Please fix this bug ASAP",
            "Sent through Slack: Please fix this bug ASAP",
        ],
    );
}
