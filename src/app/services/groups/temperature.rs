use super::ReportGroup;
use crate::app::models::ReportPart;
use crate::app::models::values::Temperature;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static AIR_AND_DEW_POINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(M?\d{2}|//)/(M?\d{2}|//)?$").expect("valid regex"));
static PRECISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^T([01]\d{3})([01]\d{3})?$").expect("valid regex"));

/// Air temperature and dew point: `33/16`, `M02/M05`, remarks `T03330161`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureGroup {
    pub air: Temperature,
    pub dew_point: Temperature,
}

impl ReportGroup for TemperatureGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        match part {
            ReportPart::Metar => {
                let caps = AIR_AND_DEW_POINT.captures(token)?;
                Some(Self {
                    air: Temperature::from_whole(&caps[1])?,
                    dew_point: match caps.get(2) {
                        Some(dew) => Temperature::from_whole(dew.as_str())?,
                        None => Temperature::not_reported(),
                    },
                })
            }
            ReportPart::Remarks => {
                let caps = PRECISE.captures(token)?;
                Some(Self {
                    air: Temperature::from_tenths(&caps[1])?,
                    dew_point: match caps.get(2) {
                        Some(dew) => Temperature::from_tenths(dew.as_str())?,
                        None => Temperature::not_reported(),
                    },
                })
            }
            _ => None,
        }
    }

    fn is_valid(&self) -> bool {
        match (self.air.value, self.dew_point.value) {
            (Some(air), Some(dew)) => dew <= air,
            _ => true,
        }
    }
}
