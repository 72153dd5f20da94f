//! Observed and forecast minimum/maximum temperatures
//!
//! Remarks `1sTTT` and `2sTTT` are six-hourly max and min and pair up when
//! adjacent; `4sTTTsTTT` is the 24-hour pair. TAF `TXTT/DDHHZ` and
//! `TNTT/DDHHZ` pair up the same way.

use super::ReportGroup;
use crate::app::models::values::{Temperature, Time};
use crate::app::models::{AppendOutcome, ReportPart};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SIX_HOURLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([12])([01]\d{3}|////)$").expect("valid regex"));
static DAILY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^4([01]\d{3}|////)([01]\d{3}|////)$").expect("valid regex"));
static FORECAST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^T([XN])(M?\d{2})/(\d{4})Z$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MinMaxType {
    Observed6Hourly,
    Observed24Hourly,
    Forecast,
}

/// Which extreme a single token reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extreme {
    Minimum,
    Maximum,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MinMaxTemperatureGroup {
    pub min_max_type: MinMaxType,
    pub minimum: Option<Temperature>,
    pub maximum: Option<Temperature>,
    pub minimum_time: Option<Time>,
    pub maximum_time: Option<Time>,
}

impl MinMaxTemperatureGroup {
    fn new(min_max_type: MinMaxType) -> Self {
        Self {
            min_max_type,
            minimum: None,
            maximum: None,
            minimum_time: None,
            maximum_time: None,
        }
    }

    fn parse_six_hourly(token: &str) -> Option<(Extreme, Temperature)> {
        let caps = SIX_HOURLY.captures(token)?;
        let extreme = if &caps[1] == "1" {
            Extreme::Maximum
        } else {
            Extreme::Minimum
        };
        Some((extreme, Temperature::from_tenths(&caps[2])?))
    }

    fn parse_forecast(token: &str) -> Option<(Extreme, Temperature, Time)> {
        let caps = FORECAST.captures(token)?;
        let extreme = if &caps[1] == "X" {
            Extreme::Maximum
        } else {
            Extreme::Minimum
        };
        Some((
            extreme,
            Temperature::from_whole(&caps[2])?,
            Time::from_ddhh(&caps[3])?,
        ))
    }

    /// Store one extreme unless that slot is already filled
    fn set(&mut self, extreme: Extreme, temperature: Temperature, time: Option<Time>) -> bool {
        let (value, at) = match extreme {
            Extreme::Minimum => (&mut self.minimum, &mut self.minimum_time),
            Extreme::Maximum => (&mut self.maximum, &mut self.maximum_time),
        };
        if value.is_some() {
            return false;
        }
        *value = Some(temperature);
        *at = time;
        true
    }
}

impl ReportGroup for MinMaxTemperatureGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        match part {
            ReportPart::Remarks => {
                if let Some((extreme, temperature)) = Self::parse_six_hourly(token) {
                    let mut group = Self::new(MinMaxType::Observed6Hourly);
                    group.set(extreme, temperature, None);
                    return Some(group);
                }
                let caps = DAILY.captures(token)?;
                let mut group = Self::new(MinMaxType::Observed24Hourly);
                group.maximum = Some(Temperature::from_tenths(&caps[1])?);
                group.minimum = Some(Temperature::from_tenths(&caps[2])?);
                Some(group)
            }
            ReportPart::Taf => {
                let (extreme, temperature, time) = Self::parse_forecast(token)?;
                let mut group = Self::new(MinMaxType::Forecast);
                group.set(extreme, temperature, Some(time));
                Some(group)
            }
            _ => None,
        }
    }

    fn append(&mut self, token: &str, part: ReportPart) -> AppendOutcome {
        let appended = match (self.min_max_type, part) {
            (MinMaxType::Observed6Hourly, ReportPart::Remarks) => Self::parse_six_hourly(token)
                .is_some_and(|(extreme, temperature)| self.set(extreme, temperature, None)),
            (MinMaxType::Forecast, ReportPart::Taf) => Self::parse_forecast(token)
                .is_some_and(|(extreme, temperature, time)| {
                    self.set(extreme, temperature, Some(time))
                }),
            _ => false,
        };
        if appended {
            AppendOutcome::Appended
        } else {
            AppendOutcome::NotAppended
        }
    }

    fn accepts_append(&self) -> bool {
        self.min_max_type != MinMaxType::Observed24Hourly
            && (self.minimum.is_none() || self.maximum.is_none())
    }

    fn is_valid(&self) -> bool {
        let times_valid = [self.minimum_time, self.maximum_time]
            .iter()
            .flatten()
            .all(Time::is_valid);
        let ordered = match (
            self.minimum.and_then(|t| t.value),
            self.maximum.and_then(|t| t.value),
        ) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        };
        times_valid && ordered
    }
}
