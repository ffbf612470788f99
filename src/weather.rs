//! Hourly weather observations, the record type the adapter ships with.

use crate::core::{Comparator, KeyExtractor, Record, normalize_name};
use crate::error::{SortError, SortResult};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row of the weather history table.
///
/// `formatted_date` is kept as text in `yyyy-MM-dd HH:mm:ss.SSS Z` form, which
/// already sorts chronologically as a string.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherRecord {
    pub formatted_date: String,
    pub summary: Option<String>,
    pub precip_type: Option<String>,
    pub temperature: f64,
    pub apparent_temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_bearing: f64,
    pub visibility: f64,
    pub cloud_cover: f64,
    pub pressure: f64,
    pub daily_summary: Option<String>,
}

/// The sortable columns of a [`WeatherRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeatherField {
    FormattedDate,
    Summary,
    PrecipType,
    Temperature,
    ApparentTemperature,
    Humidity,
    WindSpeed,
    WindBearing,
    Visibility,
    CloudCover,
    Pressure,
    DailySummary,
}

impl WeatherField {
    pub const ALL: [WeatherField; 12] = [
        WeatherField::FormattedDate,
        WeatherField::Summary,
        WeatherField::PrecipType,
        WeatherField::Temperature,
        WeatherField::ApparentTemperature,
        WeatherField::Humidity,
        WeatherField::WindSpeed,
        WeatherField::WindBearing,
        WeatherField::Visibility,
        WeatherField::CloudCover,
        WeatherField::Pressure,
        WeatherField::DailySummary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WeatherField::FormattedDate => "formatted date",
            WeatherField::Summary => "summary",
            WeatherField::PrecipType => "precip type",
            WeatherField::Temperature => "temperature",
            WeatherField::ApparentTemperature => "apparent temperature",
            WeatherField::Humidity => "humidity",
            WeatherField::WindSpeed => "wind speed",
            WeatherField::WindBearing => "wind bearing",
            WeatherField::Visibility => "visibility",
            WeatherField::CloudCover => "cloud cover",
            WeatherField::Pressure => "pressure",
            WeatherField::DailySummary => "daily summary",
        }
    }
}

impl fmt::Display for WeatherField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeatherField {
    type Err = SortError;

    fn from_str(s: &str) -> SortResult<Self> {
        let field = match normalize_name(s).as_str() {
            "formatteddate" | "date" => WeatherField::FormattedDate,
            "summary" => WeatherField::Summary,
            "preciptype" => WeatherField::PrecipType,
            "temperature" => WeatherField::Temperature,
            "apparenttemperature" => WeatherField::ApparentTemperature,
            "humidity" => WeatherField::Humidity,
            "windspeed" => WeatherField::WindSpeed,
            "windbearing" => WeatherField::WindBearing,
            "visibility" => WeatherField::Visibility,
            // "loudcover" is how the column was spelled in older exports.
            "cloudcover" | "loudcover" => WeatherField::CloudCover,
            "pressure" => WeatherField::Pressure,
            "dailysummary" => WeatherField::DailySummary,
            _ => return Err(SortError::UnknownField(s.to_string())),
        };
        Ok(field)
    }
}

/// Orders present text lexically and missing text after everything else.
fn nulls_last(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Record for WeatherRecord {
    type Field = WeatherField;

    fn comparator(field: WeatherField) -> Comparator<Self> {
        match field {
            WeatherField::FormattedDate => |a, b| a.formatted_date.cmp(&b.formatted_date),
            WeatherField::Summary => |a, b| nulls_last(a.summary.as_deref(), b.summary.as_deref()),
            WeatherField::PrecipType => {
                |a, b| nulls_last(a.precip_type.as_deref(), b.precip_type.as_deref())
            }
            WeatherField::DailySummary => {
                |a, b| nulls_last(a.daily_summary.as_deref(), b.daily_summary.as_deref())
            }
            WeatherField::Temperature => |a, b| a.temperature.total_cmp(&b.temperature),
            WeatherField::ApparentTemperature => {
                |a, b| a.apparent_temperature.total_cmp(&b.apparent_temperature)
            }
            WeatherField::Humidity => |a, b| a.humidity.total_cmp(&b.humidity),
            WeatherField::WindSpeed => |a, b| a.wind_speed.total_cmp(&b.wind_speed),
            WeatherField::WindBearing => |a, b| a.wind_bearing.total_cmp(&b.wind_bearing),
            WeatherField::Visibility => |a, b| a.visibility.total_cmp(&b.visibility),
            WeatherField::CloudCover => |a, b| a.cloud_cover.total_cmp(&b.cloud_cover),
            WeatherField::Pressure => |a, b| a.pressure.total_cmp(&b.pressure),
        }
    }

    /// Keys truncate toward zero, so 20.9 and 20.1 share key 20. Humidity is
    /// a 0..1 fraction and is scaled by 100 before truncating.
    fn radix_key(field: WeatherField) -> Option<KeyExtractor<Self>> {
        let key: KeyExtractor<Self> = match field {
            WeatherField::Temperature => |r| r.temperature as i64,
            WeatherField::Pressure => |r| r.pressure as i64,
            WeatherField::Humidity => |r| (r.humidity * 100.0) as i64,
            WeatherField::WindSpeed => |r| r.wind_speed as i64,
            WeatherField::WindBearing => |r| r.wind_bearing as i64,
            WeatherField::Visibility => |r| r.visibility as i64,
            WeatherField::FormattedDate
            | WeatherField::Summary
            | WeatherField::PrecipType
            | WeatherField::ApparentTemperature
            | WeatherField::CloudCover
            | WeatherField::DailySummary => return None,
        };
        Some(key)
    }
}
