use super::ReportGroup;
use crate::app::models::values::{Distance, parse_digits};
use crate::app::models::{AppendOutcome, ReportPart};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MiscType {
    /// `98mmm`: minutes of sunshine on the previous day
    SunshineDuration,
    /// `FROIN`: frost on the instrument
    FrostOnInstrument,
    /// `GR 1 3/4`: largest hailstone, inches
    HailstoneSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Complete,
    Size,
    SizeFraction,
}

/// Remarks groups that fit no broader category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MiscGroup {
    pub misc_type: MiscType,
    /// Minutes for sunshine duration, inches for hailstone size
    pub value: Option<f32>,
    #[serde(skip)]
    stage: Stage,
}

impl MiscGroup {
    fn new(misc_type: MiscType, value: Option<f32>, stage: Stage) -> Self {
        Self {
            misc_type,
            value,
            stage,
        }
    }
}

impl ReportGroup for MiscGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Remarks {
            return None;
        }
        match token {
            "FROIN" => Some(Self::new(MiscType::FrostOnInstrument, None, Stage::Complete)),
            "GR" => Some(Self::new(MiscType::HailstoneSize, None, Stage::Size)),
            _ => {
                let minutes = parse_digits(token.strip_prefix("98")?, 3)?;
                Some(Self::new(
                    MiscType::SunshineDuration,
                    Some(minutes as f32),
                    Stage::Complete,
                ))
            }
        }
    }

    fn append(&mut self, token: &str, _part: ReportPart) -> AppendOutcome {
        let Some(size) = Distance::from_miles_value(token).filter(Distance::is_valid) else {
            return AppendOutcome::NotAppended;
        };
        match self.stage {
            Stage::Size => {
                self.value = size.value();
                self.stage = if size.fraction.is_none() {
                    Stage::SizeFraction
                } else {
                    Stage::Complete
                };
                AppendOutcome::Appended
            }
            Stage::SizeFraction if size.whole.is_none() => {
                self.value = Some(self.value.unwrap_or(0.0) + size.value().unwrap_or(0.0));
                self.stage = Stage::Complete;
                AppendOutcome::Appended
            }
            _ => AppendOutcome::NotAppended,
        }
    }

    fn accepts_append(&self) -> bool {
        self.stage != Stage::Complete
    }

    fn is_valid(&self) -> bool {
        self.misc_type != MiscType::HailstoneSize || self.value.is_some()
    }
}
