use std::{ fs, process::Command };
use weather_build_tools::{ generate, major_cities, GenerateError, LocationRecord, RawCityRecord };

fn city(name: &str, code: &str, lat: f64, lon: f64, population: Option<u64>) -> RawCityRecord {
    RawCityRecord {
        name: name.to_string(),
        country: format!("{} country", name),
        country_code: code.to_string(),
        lat,
        lon,
        population,
        timezone: "Etc/UTC".to_string(),
        admin1: None,
    }
}

fn read_locations(path: &std::path::Path) -> Vec<LocationRecord> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn ties_keep_input_order_and_ids_follow_rank() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("cities.json");
    let records = vec![
        city("A", "AA", 1.0, 1.0, Some(5)),
        city("B", "BB", 2.0, 2.0, Some(10)),
        city("C", "CC", 3.0, 3.0, Some(5))
    ];

    let count = generate(&records, &path).unwrap();
    assert_eq!(count, 3);

    let locations = read_locations(&path);
    let ranked: Vec<(u32, &str, u64)> = locations
        .iter()
        .map(|l| (l.id, l.name.as_str(), l.population))
        .collect();
    assert_eq!(ranked, [(1, "B", 10), (2, "A", 5), (3, "C", 5)]);
}

#[test]
fn fields_are_renamed_without_precision_loss() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cities.json");
    let records = vec![
        city("Precise", "PR", -33.868_812_345_678_9, 151.209_312_345_678_9, Some(1)),
        city("Sparse", "SP", 89.999_999, -179.999_999, None)
    ];
    generate(&records, &path).unwrap();

    let locations = read_locations(&path);
    assert_eq!(locations.len(), records.len());
    for raw in &records {
        let location = locations
            .iter()
            .find(|l| l.name == raw.name)
            .unwrap();
        assert_eq!(location.country_code, raw.country_code);
        assert_eq!(location.latitude, raw.lat);
        assert_eq!(location.longitude, raw.lon);
        assert_eq!(location.population, raw.population.unwrap_or(0));
        assert_eq!(location.admin1, "");
    }

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json[0]["countryCode"], "PR");
    assert!(json[0].get("country_code").is_none());
    assert!(json[0].get("lat").is_none());
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    generate(&major_cities(), &first).unwrap();
    generate(&major_cities(), &second).unwrap();
    generate(&major_cities(), &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn output_is_indented_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cities.json");
    generate(&[city("Solo", "SO", 10.5, -20.25, Some(42))], &path).unwrap();

    let expected =
        "[\n  {\n    \"id\": 1,\n    \"name\": \"Solo\",\n    \"country\": \"Solo country\",\n    \"countryCode\": \"SO\",\n    \"latitude\": 10.5,\n    \"longitude\": -20.25,\n    \"timezone\": \"Etc/UTC\",\n    \"admin1\": \"\",\n    \"population\": 42\n  }\n]\n";
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn unwritable_destination_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("data");
    fs::write(&blocker, "a file where a directory should be").unwrap();

    let err = generate(&major_cities(), blocker.join("cities.json")).unwrap_err();
    assert!(matches!(err, GenerateError::CreateDir { .. } | GenerateError::Write { .. }));
}

#[test]
fn binary_reports_count_and_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("cities.json");

    let output = Command::new(env!("CARGO_BIN_EXE_generate_city_data"))
        .arg("--output")
        .arg(&path)
        .env_remove("CITY_DATA_INPUT")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("Generated 20 cities to {}", path.display())));
    assert!(output.stderr.is_empty());
    assert_eq!(read_locations(&path).len(), 20);
}

#[test]
fn binary_reads_custom_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.json");
    let output_path = dir.path().join("cities.json");
    fs::write(
        &input,
        r#"[
            {"name": "Oslo", "country": "Norway", "country_code": "NO", "lat": 59.9139, "lon": 10.7522, "timezone": "Europe/Oslo"},
            {"name": "Bergen", "country": "Norway", "country_code": "NO", "lat": 60.3913, "lon": 5.3221, "population": 285000, "timezone": "Europe/Oslo", "admin1": "Vestland"}
        ]"#
    ).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_generate_city_data"))
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let locations = read_locations(&output_path);
    assert_eq!(locations[0].name, "Bergen");
    assert_eq!(locations[0].admin1, "Vestland");
    assert_eq!(locations[1].name, "Oslo");
    assert_eq!(locations[1].population, 0);
}

#[test]
fn binary_exits_non_zero_on_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("data");
    fs::write(&blocker, "not a directory").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_generate_city_data"))
        .arg("--output")
        .arg(blocker.join("cities.json"))
        .env_remove("CITY_DATA_INPUT")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
}
