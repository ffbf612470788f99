#![cfg(feature = "serde")]

use attrsort::prelude::*;

#[test]
fn test_request_from_json() {
    let request: SortRequest<WeatherField> = serde_json::from_str(
        r#"{ "field": "wind_speed", "algorithm": "radix", "direction": "descending" }"#,
    )
    .unwrap();

    assert_eq!(
        request,
        SortRequest::new(WeatherField::WindSpeed, Algorithm::Radix, Direction::Descending)
    );
}

#[test]
fn test_request_direction_defaults_to_ascending() {
    let request: SortRequest<WeatherField> =
        serde_json::from_str(r#"{ "field": "summary", "algorithm": "merge" }"#).unwrap();

    assert_eq!(request.direction, Direction::Ascending);
}

#[test]
fn test_records_from_json() {
    let mut records: Vec<WeatherRecord> = serde_json::from_str(
        r#"[
            {
                "formatted_date": "2006-04-01 01:00:00.000 +0200",
                "summary": "Mostly Cloudy",
                "precip_type": "rain",
                "temperature": 9.36,
                "apparent_temperature": 7.23,
                "humidity": 0.86,
                "wind_speed": 14.26,
                "wind_bearing": 259.0,
                "visibility": 15.83,
                "cloud_cover": 0.0,
                "pressure": 1015.63,
                "daily_summary": null
            },
            {
                "formatted_date": "2006-04-01 00:00:00.000 +0200",
                "summary": "Partly Cloudy",
                "precip_type": "rain",
                "temperature": 9.47,
                "apparent_temperature": 7.38,
                "humidity": 0.89,
                "wind_speed": 14.12,
                "wind_bearing": 251.0,
                "visibility": 15.83,
                "cloud_cover": 0.0,
                "pressure": 1015.13,
                "daily_summary": "Partly cloudy throughout the day."
            }
        ]"#,
    )
    .unwrap();

    let request: SortRequest<WeatherField> =
        serde_json::from_str(r#"{ "field": "formatted_date", "algorithm": "quick" }"#).unwrap();
    request.apply(&mut records).unwrap();

    assert_eq!(records[0].formatted_date, "2006-04-01 00:00:00.000 +0200");
}
