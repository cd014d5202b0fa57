use super::{
    ConnectionTimes, ConnectionTimesError, Percentiles, Phase, ReportResultSet, RunConfig,
    Statistic, Target,
};
use crate::args::PositiveU64;
use crate::error::ValidationError;
use crate::test_support::{approx_eq, sample_parsed_result, sample_target_result};

#[test]
fn target_accepts_http_and_https() -> Result<(), String> {
    for url in ["http://localhost:5001/api/v1/user", "https://example.com/"] {
        let target = Target::parse(url).map_err(|err| format!("{}: {}", url, err))?;
        if target.as_str() != url {
            return Err(format!("Unexpected target: {}", target));
        }
    }
    Ok(())
}

#[test]
fn target_rejects_other_schemes_and_garbage() -> Result<(), String> {
    match Target::parse("ftp://example.com/file") {
        Err(ValidationError::UnsupportedTargetScheme { scheme, .. }) if scheme == "ftp" => {}
        other => return Err(format!("Expected scheme error, got {:?}", other)),
    }
    match Target::parse("not a url") {
        Err(ValidationError::InvalidTarget { .. }) => Ok(()),
        other => Err(format!("Expected invalid target, got {:?}", other)),
    }
}

#[test]
fn run_config_rejects_concurrency_above_requests() -> Result<(), String> {
    let requests = PositiveU64::try_from(10).map_err(|err| err.to_string())?;
    let concurrency = PositiveU64::try_from(11).map_err(|err| err.to_string())?;
    match RunConfig::new(requests, concurrency) {
        Err(ValidationError::ConcurrencyExceedsRequests {
            concurrency: 11,
            requests: 10,
        }) => Ok(()),
        other => Err(format!("Expected concurrency error, got {:?}", other)),
    }
}

#[test]
fn percentiles_keep_first_position_and_last_value() -> Result<(), String> {
    let percentiles: Percentiles = [(50, 3), (66, 4), (50, 5)].into_iter().collect();
    if percentiles.get(50) != Some(5) {
        return Err(format!("Unexpected p50: {:?}", percentiles.get(50)));
    }
    if percentiles.get(66) != Some(4) {
        return Err(format!("Unexpected p66: {:?}", percentiles.get(66)));
    }
    let order: Vec<u32> = percentiles.iter().map(|(key, _)| key).collect();
    if order != vec![50, 66] {
        return Err(format!("Unexpected order: {:?}", order));
    }
    Ok(())
}

#[test]
fn phase_rows_are_transposed_into_statistic_columns() -> Result<(), String> {
    let times = sample_parsed_result().connection_times;
    let keys: Vec<Statistic> = times.columns().iter().map(|(key, _)| *key).collect();
    if keys != Statistic::ALL.to_vec() {
        return Err(format!("Unexpected keys: {:?}", keys));
    }
    let min = times.get(Statistic::Min).ok_or("Missing min")?;
    if !approx_eq(min, &[0.0, 2.0, 1.0, 2.0]) {
        return Err(format!("Unexpected min: {:?}", min));
    }
    let grid = times.grid().map_err(|err| err.to_string())?;
    if !approx_eq(&grid.phase_values(Phase::Total), &[2.0, 4.0, 1.2, 4.0, 14.0]) {
        return Err("Unexpected total row".to_owned());
    }
    if !approx_eq(&grid.statistic_values(Statistic::Max), &[5.0, 12.0, 10.0, 14.0]) {
        return Err("Unexpected max column".to_owned());
    }
    Ok(())
}

#[test]
fn grid_reports_missing_statistic() -> Result<(), String> {
    let columns = sample_parsed_result()
        .connection_times
        .columns()
        .iter()
        .filter(|(key, _)| *key != Statistic::StdDev)
        .cloned()
        .collect();
    match ConnectionTimes::from_columns(columns).grid() {
        Err(ConnectionTimesError::MissingStatistic {
            statistic: Statistic::StdDev,
        }) => Ok(()),
        other => Err(format!("Expected missing stddev, got {:?}", other)),
    }
}

#[test]
fn grid_reports_wrong_length_and_duplicates() -> Result<(), String> {
    let short = ConnectionTimes::from_columns(vec![(Statistic::Min, vec![1.0, 2.0, 3.0])]);
    match short.grid() {
        Err(ConnectionTimesError::WrongLength {
            statistic: Statistic::Min,
            found: 3,
        }) => {}
        other => return Err(format!("Expected wrong length, got {:?}", other)),
    }

    let doubled = ConnectionTimes::from_columns(vec![
        (Statistic::Max, vec![1.0; 4]),
        (Statistic::Max, vec![2.0; 4]),
    ]);
    match doubled.grid() {
        Err(ConnectionTimesError::DuplicateStatistic {
            statistic: Statistic::Max,
        }) => Ok(()),
        other => Err(format!("Expected duplicate, got {:?}", other)),
    }
}

#[test]
fn result_set_keeps_insertion_order_and_replaces_duplicates() -> Result<(), String> {
    let mut results = ReportResultSet::default();
    results.insert(sample_target_result("http://localhost/b")?);
    results.insert(sample_target_result("http://localhost/a")?);
    let mut again = sample_target_result("http://localhost/b")?;
    again.parsed.complete_requests = 42;
    results.insert(again);

    let targets: Vec<&str> = results.targets().map(Target::as_str).collect();
    if targets != vec!["http://localhost/b", "http://localhost/a"] {
        return Err(format!("Unexpected order: {:?}", targets));
    }
    let first = results.iter().next().ok_or("Missing first result")?;
    if first.parsed.complete_requests != 42 {
        return Err("Duplicate target was not replaced".to_owned());
    }
    Ok(())
}

#[test]
fn percentiles_serialize_as_ordered_entries() -> Result<(), String> {
    let percentiles: Percentiles = [(90, 6), (50, 4)].into_iter().collect();
    let value = serde_json::to_value(&percentiles).map_err(|err| err.to_string())?;
    let expected = serde_json::json!([
        { "percentile": 90, "value_ms": 6 },
        { "percentile": 50, "value_ms": 4 },
    ]);
    if value != expected {
        return Err(format!("Unexpected serialization: {}", value));
    }
    Ok(())
}
