//! 首次配置与加载流程的集成测试

use geosave::cli::commands::{bootstrap, report};
use geosave::core::Prompt;
use geosave::geocoding::{Candidate, GeocodeRequest, Geocoder, GeocodingError};
use geosave::storage::{ConfigRecord, ConfigStore};
use std::cell::RefCell;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

/// 记录调用的假网关
#[derive(Default)]
struct MockGeocoder {
    candidates: Vec<Candidate>,
    fail: bool,
    calls: RefCell<Vec<(String, String)>>,
}

impl MockGeocoder {
    fn returning(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            ..Default::default()
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Geocoder for MockGeocoder {
    fn geocode(&self, request: &GeocodeRequest<'_>) -> Result<Vec<Candidate>, GeocodingError> {
        self.calls
            .borrow_mut()
            .push((request.address.to_string(), request.api_key.to_string()));
        if self.fail {
            return Err(GeocodingError::Provider {
                status: "REQUEST_DENIED".to_string(),
                message: "The provided API key is invalid.".to_string(),
            });
        }
        Ok(self.candidates.clone())
    }
}

fn temp_store() -> (TempDir, ConfigStore) {
    let temp = TempDir::new().unwrap();
    let store = ConfigStore::new(temp.path().join(".saveConfig.json"));
    (temp, store)
}

/// 运行完整流程，返回结果和 stdout 内容
fn run_once(
    store: &ConfigStore,
    geocoder: &MockGeocoder,
    input: &str,
) -> (anyhow::Result<ConfigRecord>, String) {
    let mut prompt = Prompt::new(Cursor::new(input.to_string()), Vec::new());
    let result = bootstrap(store, geocoder, &mut prompt);
    if let Ok(record) = &result {
        report(prompt.output(), record).unwrap();
    }
    let output = String::from_utf8(prompt.into_output()).unwrap();
    (result, output)
}

#[test]
fn test_first_run_single_candidate() {
    let (_temp, store) = temp_store();
    let geocoder = MockGeocoder::returning(vec![Candidate::new(
        "Monas, Gambir, Jakarta, Indonesia",
        -6.1753924,
        106.8271528,
    )]);

    let (result, output) = run_once(&store, &geocoder, "AIzaSecret\nMonas\n");
    let record = result.unwrap();

    assert_eq!(
        record,
        ConfigRecord::new("Monas, Gambir, Jakarta, Indonesia", -6.1753924, 106.8271528, "AIzaSecret")
    );
    assert_eq!(store.load().unwrap(), record);
    assert_eq!(
        geocoder.calls.borrow().as_slice(),
        &[("Monas".to_string(), "AIzaSecret".to_string())]
    );

    assert!(output.contains("Type your API Key: "));
    assert!(output.contains("Type your location: "));
    assert!(!output.contains("Which is your address?"));
    assert!(output.contains(&format!("Configuration saved to {}", store.path().display())));
    assert!(output.ends_with(
        "Api Key \t: AIzaSecret\n\
         Address \t: Monas, Gambir, Jakarta, Indonesia\n\
         Lat \t\t: -6.175392\n\
         Lng \t\t: 106.827153\n"
    ));
}

#[test]
fn test_only_first_token_is_the_address() {
    let (_temp, store) = temp_store();
    let geocoder = MockGeocoder::returning(vec![Candidate::new("Berlin, Germany", 52.52, 13.405)]);

    let (result, _) = run_once(&store, &geocoder, "key\nBerlin Mitte Alexanderplatz\n");
    result.unwrap();

    assert_eq!(geocoder.calls.borrow()[0].0, "Berlin");
}

#[test]
fn test_existing_config_skips_geocoding() {
    let (_temp, store) = temp_store();
    fs::write(
        store.path(),
        r#"{"Address":"Plaza Mayor, Madrid, Spain","Lat":40.415363,"Lng":-3.707398,"api_key":"stored-key"}"#,
    )
    .unwrap();
    let geocoder = MockGeocoder::failing();

    let (result, output) = run_once(&store, &geocoder, "");
    result.unwrap();

    assert_eq!(geocoder.call_count(), 0);
    assert_eq!(
        output,
        format!(
            "Configuration loaded from {}\n\
             Api Key \t: stored-key\n\
             Address \t: Plaza Mayor, Madrid, Spain\n\
             Lat \t\t: 40.415363\n\
             Lng \t\t: -3.707398\n",
            store.path().display()
        )
    );
}

#[test]
fn test_second_run_is_identical_and_offline() {
    let (_temp, store) = temp_store();
    let geocoder = MockGeocoder::returning(vec![Candidate::new("Kyoto, Japan", 35.0116363, 135.7680294)]);
    run_once(&store, &geocoder, "key\nKyoto\n").0.unwrap();
    assert_eq!(geocoder.call_count(), 1);

    let (first, first_output) = run_once(&store, &geocoder, "");
    let (second, second_output) = run_once(&store, &geocoder, "");

    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(first_output, second_output);
    assert_eq!(geocoder.call_count(), 1);
}

#[test]
fn test_multiple_candidates_retry_then_select() {
    let (_temp, store) = temp_store();
    let geocoder = MockGeocoder::returning(vec![
        Candidate::new("Springfield, IL, USA", 39.7817213, -89.6501481),
        Candidate::new("Springfield, MA, USA", 42.1014831, -72.589811),
        Candidate::new("Springfield, MO, USA", 37.2089572, -93.2922989),
    ]);

    let (result, output) = run_once(&store, &geocoder, "key\nSpringfield\n0\nabc\n7\n2\n");
    let record = result.unwrap();

    assert_eq!(record.address, "Springfield, MA, USA");
    assert_eq!(record.latitude, 42.1014831);
    assert_eq!(record.longitude, -72.589811);
    assert_eq!(store.load().unwrap(), record);

    assert!(output.contains("1) Springfield, IL, USA\n2) Springfield, MA, USA\n3) Springfield, MO, USA\n"));
    assert_eq!(output.matches("Which is your address?").count(), 4);
}

#[test]
fn test_zero_candidates_writes_nothing() {
    let (_temp, store) = temp_store();
    let geocoder = MockGeocoder::returning(Vec::new());

    let (result, output) = run_once(&store, &geocoder, "key\nNowhereville\n");
    let err = result.unwrap_err();

    assert!(format!("{:#}", err).contains("no locations found"));
    assert!(!store.exists().unwrap());
    assert!(!output.contains("Api Key \t:"));
}

#[test]
fn test_geocoding_error_writes_nothing() {
    let (_temp, store) = temp_store();
    let geocoder = MockGeocoder::failing();

    let (result, _) = run_once(&store, &geocoder, "bad-key\nLisbon\n");
    let err = result.unwrap_err();

    assert!(format!("{:#}", err).contains("REQUEST_DENIED"));
    assert!(!store.exists().unwrap());
}

#[test]
fn test_input_closed_during_setup() {
    let (_temp, store) = temp_store();
    let geocoder = MockGeocoder::returning(vec![Candidate::new("Rome, Italy", 41.9, 12.5)]);

    let (result, _) = run_once(&store, &geocoder, "only-a-key\n");
    assert!(result.is_err());
    assert_eq!(geocoder.call_count(), 0);
    assert!(!store.exists().unwrap());
}

#[test]
fn test_corrupted_config_is_fatal() {
    let (_temp, store) = temp_store();
    fs::write(store.path(), r#"{"Address": 42}"#).unwrap();
    let geocoder = MockGeocoder::returning(Vec::new());

    let (result, output) = run_once(&store, &geocoder, "");
    assert!(result.is_err());
    assert_eq!(geocoder.call_count(), 0);
    assert!(output.is_empty());
}
