use super::ReportGroup;
use crate::app::models::ReportPart;
use crate::app::models::values::Pressure;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TendencyType {
    IncreasingThenDecreasing,
    IncreasingThenSteady,
    Increasing,
    DecreasingOrSteadyThenIncreasing,
    Steady,
    DecreasingThenIncreasing,
    DecreasingThenSteady,
    Decreasing,
    SteadyOrIncreasingThenDecreasing,
    NotReported,
    /// `PRESRR`
    RisingRapidly,
    /// `PRESFR`
    FallingRapidly,
    /// Code 9 is not assigned
    Reserved,
}

/// Three-hourly pressure tendency `5appp` or `PRESRR` / `PRESFR`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PressureTendencyGroup {
    pub tendency: TendencyType,
    pub change: Option<Pressure>,
}

impl ReportGroup for PressureTendencyGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Remarks {
            return None;
        }
        match token {
            "PRESRR" => {
                return Some(Self {
                    tendency: TendencyType::RisingRapidly,
                    change: None,
                });
            }
            "PRESFR" => {
                return Some(Self {
                    tendency: TendencyType::FallingRapidly,
                    change: None,
                });
            }
            _ => {}
        }

        let rest = token.strip_prefix('5')?;
        if rest.len() != 4 || !rest.is_ascii() {
            return None;
        }
        let tendency = match &rest[0..1] {
            "0" => TendencyType::IncreasingThenDecreasing,
            "1" => TendencyType::IncreasingThenSteady,
            "2" => TendencyType::Increasing,
            "3" => TendencyType::DecreasingOrSteadyThenIncreasing,
            "4" => TendencyType::Steady,
            "5" => TendencyType::DecreasingThenIncreasing,
            "6" => TendencyType::DecreasingThenSteady,
            "7" => TendencyType::Decreasing,
            "8" => TendencyType::SteadyOrIncreasingThenDecreasing,
            "9" => TendencyType::Reserved,
            "/" => TendencyType::NotReported,
            _ => return None,
        };
        Some(Self {
            tendency,
            change: Some(Pressure::from_tenths_hectopascal(&rest[1..])?),
        })
    }

    fn is_valid(&self) -> bool {
        self.tendency != TendencyType::Reserved
    }
}
