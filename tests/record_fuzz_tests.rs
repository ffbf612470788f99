use attrsort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

const SUMMARIES: [Option<&str>; 5] = [
    Some("Clear"),
    Some("Foggy"),
    Some("Mostly Cloudy"),
    Some("Partly Cloudy"),
    None,
];

fn random_records(rng: &mut StdRng, count: usize) -> Vec<WeatherRecord> {
    (0..count)
        .map(|i| WeatherRecord {
            // Unique per record, used to check nothing is lost or duplicated.
            formatted_date: format!("2010-01-01 {:08}", i),
            summary: SUMMARIES[rng.random_range(0..SUMMARIES.len())].map(str::to_string),
            precip_type: if rng.random_bool(0.8) {
                Some("rain".to_string())
            } else {
                None
            },
            temperature: f64::from(rng.random_range(0..400u32)) / 10.0,
            apparent_temperature: f64::from(rng.random_range(-100..400i32)) / 10.0,
            humidity: f64::from(rng.random_range(0..=100u32)) / 100.0,
            wind_speed: rng.random_range(0.0..60.0),
            wind_bearing: f64::from(rng.random_range(0..360u32)),
            visibility: rng.random_range(0.0..16.1),
            cloud_cover: 0.0,
            pressure: rng.random_range(980.0..1040.0),
            daily_summary: None,
        })
        .collect()
}

fn ids(records: &[WeatherRecord]) -> Vec<String> {
    let mut ids: Vec<String> = records.iter().map(|r| r.formatted_date.clone()).collect();
    ids.sort();
    ids
}

#[test]
fn test_comparison_sorts_on_records() {
    let mut rng = StdRng::seed_from_u64(42);

    for _iter in 0..20 {
        let count = rng.random_range(0..400);
        let input = random_records(&mut rng, count);

        for field in WeatherField::ALL {
            let cmp = WeatherRecord::comparator(field);

            for algorithm in Algorithm::COMPARISON {
                for direction in [Direction::Ascending, Direction::Descending] {
                    let mut records = input.clone();
                    sort(&mut records, field, algorithm, direction).unwrap();

                    assert_eq!(records.len(), input.len());
                    assert_eq!(ids(&records), ids(&input), "{field} {algorithm}");

                    for pair in records.windows(2) {
                        assert_ne!(
                            direction.apply(cmp(&pair[0], &pair[1])),
                            Ordering::Greater,
                            "{field} {algorithm} {direction}"
                        );
                    }

                    if algorithm.is_stable() {
                        let mut expected = input.clone();
                        expected.sort_by(|a, b| direction.apply(cmp(a, b)));
                        assert_eq!(records, expected, "{field} {algorithm} {direction}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_radix_sort_on_records() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _iter in 0..20 {
        let count = rng.random_range(0..1000);
        let input = random_records(&mut rng, count);

        for field in WeatherField::ALL {
            let Some(key) = WeatherRecord::radix_key(field) else {
                continue;
            };

            let mut records = input.clone();
            radix_sort_records(&mut records, field).unwrap();

            let mut expected = input.clone();
            expected.sort_by_key(key);
            assert_eq!(records, expected, "{field}");

            let mut records = input.clone();
            sort_by_radix(&mut records, field, Direction::Descending).unwrap();

            let mut expected = input.clone();
            expected.sort_by(|a, b| key(b).cmp(&key(a)));
            assert_eq!(records, expected, "{field} descending");
        }
    }
}

#[test]
fn test_large_shuffled_sort() {
    let mut rng = StdRng::seed_from_u64(99);
    let input = random_records(&mut rng, 20_000);

    for algorithm in [Algorithm::Quick, Algorithm::Merge, Algorithm::Shell, Algorithm::Radix] {
        let mut records = input.clone();
        let report = sort(
            &mut records,
            WeatherField::WindBearing,
            algorithm,
            Direction::Ascending,
        )
        .unwrap();

        assert_eq!(report.len, input.len());
        assert!(
            records
                .windows(2)
                .all(|w| w[0].wind_bearing <= w[1].wind_bearing),
            "{algorithm}"
        );
    }
}
