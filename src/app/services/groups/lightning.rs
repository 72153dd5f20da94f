//! Remarks lightning: `FRQ LTGICCG DSNT NE-SE AND W`

use super::ReportGroup;
use crate::app::models::values::{Cardinal, Direction};
use crate::app::models::{AppendOutcome, ReportPart};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LightningFrequency {
    #[default]
    Unspecified,
    Occasional,
    Frequent,
    Constant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LightningType {
    InCloud,
    CloudToCloud,
    CloudToGround,
    CloudToAir,
}

impl LightningType {
    fn from_code(s: &str) -> Option<Self> {
        match s {
            "IC" => Some(LightningType::InCloud),
            "CC" => Some(LightningType::CloudToCloud),
            "CG" => Some(LightningType::CloudToGround),
            "CA" => Some(LightningType::CloudToAir),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LightningDistance {
    #[default]
    Unspecified,
    /// `DSNT`: beyond 10 statute miles
    Distant,
    /// `VC`: 5 to 10 statute miles
    Vicinity,
}

/// A direction or a clockwise range of directions (`NE-SE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectionSector {
    pub from: Direction,
    pub to: Option<Direction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Frequency seen; `LTG...` expected
    Lightning,
    /// Distance and directions may follow
    Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightningGroup {
    pub frequency: LightningFrequency,
    pub types: Vec<LightningType>,
    pub distance: LightningDistance,
    pub sectors: Vec<DirectionSector>,
    #[serde(skip)]
    stage: Stage,
}

impl LightningGroup {
    fn new(frequency: LightningFrequency, stage: Stage) -> Self {
        Self {
            frequency,
            types: Vec::new(),
            distance: LightningDistance::Unspecified,
            sectors: Vec::new(),
            stage,
        }
    }

    /// `LTG` followed by any number of two-letter type codes
    fn parse_types(token: &str) -> Option<Vec<LightningType>> {
        let codes = token.strip_prefix("LTG")?;
        if codes.len() % 2 != 0 || !codes.is_ascii() {
            return None;
        }
        (0..codes.len())
            .step_by(2)
            .map(|i| LightningType::from_code(&codes[i..i + 2]))
            .collect()
    }

    fn parse_sector(token: &str) -> Option<DirectionSector> {
        if let Some(direction) = Direction::from_cardinal(token) {
            return Some(DirectionSector {
                from: direction,
                to: None,
            });
        }
        let (from, to) = token.split_once('-')?;
        Some(DirectionSector {
            from: Direction::Cardinal(Cardinal::from_abbreviation(from)?),
            to: Some(Direction::Cardinal(Cardinal::from_abbreviation(to)?)),
        })
    }
}

impl ReportGroup for LightningGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Remarks {
            return None;
        }
        let frequency = match token {
            "OCNL" => LightningFrequency::Occasional,
            "FRQ" => LightningFrequency::Frequent,
            "CONS" => LightningFrequency::Constant,
            _ => {
                let mut group = Self::new(LightningFrequency::Unspecified, Stage::Location);
                group.types = Self::parse_types(token)?;
                return Some(group);
            }
        };
        Some(Self::new(frequency, Stage::Lightning))
    }

    fn append(&mut self, token: &str, _part: ReportPart) -> AppendOutcome {
        match self.stage {
            Stage::Lightning => match Self::parse_types(token) {
                Some(types) => {
                    self.types = types;
                    self.stage = Stage::Location;
                    AppendOutcome::Appended
                }
                None => AppendOutcome::NotAppended,
            },
            Stage::Location => {
                let distance = match token {
                    "DSNT" => Some(LightningDistance::Distant),
                    "VC" => Some(LightningDistance::Vicinity),
                    _ => None,
                };
                if let Some(distance) = distance {
                    if self.distance != LightningDistance::Unspecified || !self.sectors.is_empty() {
                        return AppendOutcome::NotAppended;
                    }
                    self.distance = distance;
                    return AppendOutcome::Appended;
                }
                if token == "AND" && !self.sectors.is_empty() {
                    return AppendOutcome::Appended;
                }
                match Self::parse_sector(token) {
                    Some(sector) => {
                        self.sectors.push(sector);
                        AppendOutcome::Appended
                    }
                    None => AppendOutcome::NotAppended,
                }
            }
        }
    }

    fn accepts_append(&self) -> bool {
        true
    }

    fn is_valid(&self) -> bool {
        self.stage == Stage::Location
    }
}
