use super::ReportGroup;
use crate::app::models::ReportPart;
use crate::app::models::values::{Pressure, PressureUnit};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PressureType {
    /// `Qpppp` / `Apppp`
    ObservedQnh,
    /// TAF `QNHppppINS`
    ForecastLowestQnh,
    /// Remarks `QFEppp[/pppp]`
    ObservedQfe,
    /// Remarks `SLPppp`
    SeaLevel,
    /// Remarks `SLPNO`
    SeaLevelNotAvailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PressureGroup {
    pub pressure_type: PressureType,
    pub pressure: Pressure,
    /// Same QFE in hectopascal when reported alongside millimetres of mercury
    pub secondary: Option<Pressure>,
}

impl PressureGroup {
    fn new(pressure_type: PressureType, pressure: Pressure) -> Self {
        Self {
            pressure_type,
            pressure,
            secondary: None,
        }
    }

    fn parse_remarks(token: &str) -> Option<Self> {
        if token == "SLPNO" {
            return Some(Self::new(
                PressureType::SeaLevelNotAvailable,
                Pressure::not_reported(PressureUnit::Hectopascal),
            ));
        }
        if let Some(digits) = token.strip_prefix("SLP") {
            return Some(Self::new(
                PressureType::SeaLevel,
                Pressure::from_sea_level(digits)?,
            ));
        }
        let rest = token.strip_prefix("QFE")?;
        let (mm_hg, hpa) = match rest.split_once('/') {
            Some((mm_hg, hpa)) => (mm_hg, Some(hpa)),
            None => (rest, None),
        };
        let mut group = Self::new(PressureType::ObservedQfe, Pressure::from_millimeters_hg(mm_hg)?);
        if let Some(hpa) = hpa {
            group.secondary = Some(Pressure::from_hectopascal(hpa)?);
        }
        Some(group)
    }
}

impl ReportGroup for PressureGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        match part {
            ReportPart::Metar => {
                let pressure = if let Some(digits) = token.strip_prefix('Q') {
                    Pressure::from_hectopascal(digits)?
                } else if let Some(digits) = token.strip_prefix('A') {
                    Pressure::from_inches_hg(digits)?
                } else {
                    return None;
                };
                Some(Self::new(PressureType::ObservedQnh, pressure))
            }
            ReportPart::Taf => {
                let rest = token.strip_prefix("QNH")?;
                let pressure = match rest.strip_suffix("INS") {
                    Some(digits) => Pressure::from_inches_hg(digits)?,
                    None => Pressure::from_hectopascal(rest)?,
                };
                Some(Self::new(PressureType::ForecastLowestQnh, pressure))
            }
            ReportPart::Remarks => Self::parse_remarks(token),
            _ => None,
        }
    }
}
