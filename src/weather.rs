use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, ShapeError, Stage};

/// Current conditions pulled out of one API response.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub condition_id: i64,
    pub condition: String,
    pub description: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub pressure_hpa: i64,
    pub humidity_pct: i64,
    pub visibility_m: i64,
    pub wind_speed: f64,
    pub wind_degrees: i64,
    pub wind_gust: f64,
    pub snow_1h_mm: f64,
    pub rain_1h_mm: f64,
    pub location: String,
    pub observed_at: Option<DateTime<Utc>>,
}

/// One JSON object read under a single stage tag, so every failure names
/// the part of the payload it came from.
struct Section<'a> {
    stage: Stage,
    fields: &'a Map<String, Value>,
}

impl<'a> Section<'a> {
    fn new(stage: Stage, value: Option<&'a Value>, what: &str) -> Result<Self, Error> {
        let value = value.ok_or_else(|| Error::field(stage, format!("missing `{what}`")))?;
        let fields = value
            .as_object()
            .ok_or_else(|| Error::field(stage, format!("`{what}` is not an object")))?;
        Ok(Self { stage, fields })
    }

    fn get(&self, key: &str) -> Result<&'a Value, Error> {
        self.fields
            .get(key)
            .ok_or_else(|| Error::field(self.stage, format!("missing key `{key}`")))
    }

    /// Integer or floating point, both read as `f64`.
    fn number(&self, key: &str) -> Result<f64, Error> {
        self.get(key)?
            .as_f64()
            .ok_or_else(|| Error::field(self.stage, format!("`{key}` is not a number")))
    }

    fn integer(&self, key: &str) -> Result<i64, Error> {
        self.get(key)?
            .as_i64()
            .ok_or_else(|| Error::field(self.stage, format!("`{key}` is not an integer")))
    }

    fn string(&self, key: &str) -> Result<String, Error> {
        self.get(key)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Error::field(self.stage, format!("`{key}` is not a string")))
    }
}

/// `1h` of an optional `snow`/`rain` object. Only the outer key may be absent.
fn one_hour(payload: &Map<String, Value>, key: &str, stage: Stage) -> Result<f64, Error> {
    match payload.get(key) {
        None => Ok(0.0),
        Some(value) => Section::new(stage, Some(value), key)?.number("1h"),
    }
}

impl WeatherReport {
    pub fn build(raw: &Value) -> Result<Self, Error> {
        let payload = raw.as_object().ok_or(ShapeError::NotObject)?;
        let conditions = payload
            .get("weather")
            .and_then(Value::as_array)
            .ok_or(ShapeError::NotArray)?;

        let weather = Section::new(Stage::Weather, conditions.first(), "weather[0]")?;
        let condition_id = weather.integer("id")?;
        let condition = weather.string("main")?;
        let description = weather.string("description")?;

        let main = Section::new(Stage::Main, payload.get("main"), "main")?;
        let temperature = main.number("temp")?;
        let feels_like = main.number("feels_like")?;
        let pressure_hpa = main.integer("pressure")?;
        let humidity_pct = main.integer("humidity")?;

        let wind = Section::new(Stage::Wind, payload.get("wind"), "wind")?;
        let wind_speed = wind.number("speed")?;
        let wind_degrees = wind.integer("deg")?;
        let wind_gust = wind.number("gust")?;

        let snow_1h_mm = one_hour(payload, "snow", Stage::Snow)?;
        let rain_1h_mm = one_hour(payload, "rain", Stage::Rain)?;

        let top = Section {
            stage: Stage::TopLevel,
            fields: payload,
        };
        let visibility_m = top.integer("visibility")?;
        let location = top.string("name")?;
        let observed_at = match payload.get("dt") {
            None => None,
            Some(_) => {
                let secs = top.integer("dt")?;
                Some(DateTime::from_timestamp(secs, 0).ok_or_else(|| {
                    Error::field(Stage::TopLevel, format!("`dt` is out of range: {secs}"))
                })?)
            }
        };

        let report = Self {
            condition_id,
            condition,
            description,
            temperature,
            feels_like,
            pressure_hpa,
            humidity_pct,
            visibility_m,
            wind_speed,
            wind_degrees,
            wind_gust,
            snow_1h_mm,
            rain_1h_mm,
            location,
            observed_at,
        };
        debug!("Built report: {:?}", report);
        Ok(report)
    }

    /// Millimetres over the last hour. Snow wins whenever it is positive.
    pub fn precipitation(&self) -> f64 {
        if self.snow_1h_mm > 0.0 {
            self.snow_1h_mm
        } else if self.rain_1h_mm > 0.0 {
            self.rain_1h_mm
        } else {
            0.0
        }
    }

    pub fn visibility_km(&self) -> f64 {
        self.visibility_m as f64 / 1000.0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn clear_sky() -> Value {
        json!({
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky"}],
            "main": {"temp": 20, "feels_like": 19.5, "pressure": 1013, "humidity": 40},
            "wind": {"speed": 3.4, "deg": 80, "gust": 5.0},
            "visibility": 10000,
            "name": "Testville"
        })
    }

    fn report_with(snow: f64, rain: f64) -> WeatherReport {
        WeatherReport {
            snow_1h_mm: snow,
            rain_1h_mm: rain,
            ..WeatherReport::build(&clear_sky()).unwrap()
        }
    }

    fn stage_of(raw: &Value) -> Option<Stage> {
        WeatherReport::build(raw).unwrap_err().stage()
    }

    #[test]
    fn builds_every_field() {
        let report = WeatherReport::build(&clear_sky()).unwrap();
        assert_eq!(report.condition_id, 800);
        assert_eq!(report.condition, "Clear");
        assert_eq!(report.description, "clear sky");
        assert_eq!(report.temperature, 20.0);
        assert_eq!(report.feels_like, 19.5);
        assert_eq!(report.pressure_hpa, 1013);
        assert_eq!(report.humidity_pct, 40);
        assert_eq!(report.wind_speed, 3.4);
        assert_eq!(report.wind_degrees, 80);
        assert_eq!(report.wind_gust, 5.0);
        assert_eq!(report.visibility_m, 10000);
        assert_eq!(report.snow_1h_mm, 0.0);
        assert_eq!(report.rain_1h_mm, 0.0);
        assert_eq!(report.location, "Testville");
        assert_eq!(report.observed_at, None);
        assert_eq!(report.visibility_km(), 10.0);
    }

    #[test]
    fn whole_numbers_are_accepted_where_floats_are_expected() {
        let mut raw = clear_sky();
        raw["main"]["feels_like"] = json!(19);
        raw["wind"]["speed"] = json!(4);
        raw["wind"]["gust"] = json!(7);
        let report = WeatherReport::build(&raw).unwrap();
        assert_eq!(report.feels_like, 19.0);
        assert_eq!(report.wind_speed, 4.0);
        assert_eq!(report.wind_gust, 7.0);
    }

    #[test]
    fn reads_optional_precipitation_and_timestamp() {
        let mut raw = clear_sky();
        raw["snow"] = json!({"1h": 0.25});
        raw["rain"] = json!({"1h": 1});
        raw["dt"] = json!(1_700_000_000);
        let report = WeatherReport::build(&raw).unwrap();
        assert_eq!(report.snow_1h_mm, 0.25);
        assert_eq!(report.rain_1h_mm, 1.0);
        assert_eq!(
            report.observed_at.map(|t| t.timestamp()),
            Some(1_700_000_000)
        );
    }

    #[test]
    fn rejects_non_object_payload() {
        let err = WeatherReport::build(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, Error::Shape(ShapeError::NotObject)));
    }

    #[test]
    fn rejects_weather_that_is_not_an_array() {
        let mut raw = clear_sky();
        raw["weather"] = json!({"id": 800});
        let err = WeatherReport::build(&raw).unwrap_err();
        assert!(matches!(err, Error::Shape(ShapeError::NotArray)));

        raw.as_object_mut().unwrap().remove("weather");
        let err = WeatherReport::build(&raw).unwrap_err();
        assert!(matches!(err, Error::Shape(ShapeError::NotArray)));
    }

    #[test]
    fn empty_weather_array_is_a_weather_error() {
        let mut raw = clear_sky();
        raw["weather"] = json!([]);
        assert_eq!(stage_of(&raw), Some(Stage::Weather));
    }

    #[test]
    fn each_group_reports_its_own_stage() {
        let mut raw = clear_sky();
        raw["weather"][0]["id"] = json!("800");
        assert_eq!(stage_of(&raw), Some(Stage::Weather));

        let mut raw = clear_sky();
        raw["main"].as_object_mut().unwrap().remove("humidity");
        assert_eq!(stage_of(&raw), Some(Stage::Main));

        let mut raw = clear_sky();
        raw["wind"]["deg"] = json!(80.5);
        assert_eq!(stage_of(&raw), Some(Stage::Wind));

        let mut raw = clear_sky();
        raw["rain"] = json!({"1h": "lots"});
        assert_eq!(stage_of(&raw), Some(Stage::Rain));

        let mut raw = clear_sky();
        raw["name"] = json!(null);
        assert_eq!(stage_of(&raw), Some(Stage::TopLevel));

        let mut raw = clear_sky();
        raw.as_object_mut().unwrap().remove("visibility");
        assert_eq!(stage_of(&raw), Some(Stage::TopLevel));
    }

    #[test]
    fn present_snow_without_one_hour_is_an_error() {
        let mut raw = clear_sky();
        raw["snow"] = json!({"3h": 1.0});
        let err = WeatherReport::build(&raw).unwrap_err();
        assert_eq!(err.stage(), Some(Stage::Snow));
        assert_eq!(err.to_string(), "error in snow part: missing key `1h`");
    }

    #[test]
    fn bad_timestamp_is_a_top_level_error() {
        let mut raw = clear_sky();
        raw["dt"] = json!("yesterday");
        assert_eq!(stage_of(&raw), Some(Stage::TopLevel));
    }

    #[test]
    fn snow_takes_priority_over_rain() {
        assert_eq!(report_with(2.0, 5.0).precipitation(), 2.0);
        assert_eq!(report_with(0.0, 5.0).precipitation(), 5.0);
        assert_eq!(report_with(0.0, 0.0).precipitation(), 0.0);
        assert_eq!(report_with(3.0, 0.0).precipitation(), 3.0);
    }
}
