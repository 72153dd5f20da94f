use super::ReportGroup;
use crate::app::models::ReportPart;
use crate::app::models::values::{Temperature, WaveHeight};
use serde::Serialize;

/// Sea surface temperature and state of sea: `W15/S4`, `WM01/H75`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeaSurfaceGroup {
    pub temperature: Temperature,
    pub waves: WaveHeight,
}

impl ReportGroup for SeaSurfaceGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        if !matches!(part, ReportPart::Metar | ReportPart::Remarks) {
            return None;
        }
        let (temperature, waves) = token.strip_prefix('W')?.split_once('/')?;
        let waves = if let Some(code) = waves.strip_prefix('S') {
            WaveHeight::from_state_code(code)?
        } else if let Some(height) = waves.strip_prefix('H') {
            WaveHeight::from_decimeters(height)?
        } else {
            return None;
        };
        Some(Self {
            temperature: Temperature::from_whole(temperature)?,
            waves,
        })
    }
}
