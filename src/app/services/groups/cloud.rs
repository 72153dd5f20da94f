//! Cloud layers, vertical visibility, no-cloud codes, and remarks ceilings

use super::ReportGroup;
use crate::app::models::values::{Direction, Distance, DistanceUnit, Runway};
use crate::app::models::{AppendOutcome, ReportPart};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static CLOUD_LAYER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(FEW|SCT|BKN|OVC|///)(\d{3}|///)(CB|TCU|///)?$").expect("valid regex")
});
static VERTICAL_VISIBILITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^VV(\d{3}|///)$").expect("valid regex"));
static REMARKS_COVER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(FEW|SCT|BKN|OVC)(\d{3})?$").expect("valid regex"));
static VARIABLE_CEILING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{3})V(\d{3})$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CloudType {
    NoClouds,
    Layer,
    VerticalVisibility,
    /// `CIG hhh` in remarks
    Ceiling,
    /// `CIG hhhVhhh` in remarks
    VariableCeiling,
    /// `CHINO`: ceiling height indicator not available at a secondary location
    CeilingNotAvailable,
    /// `SCT V BKN` in remarks
    VariableCover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum CloudAmount {
    NotReported,
    /// `SKC`
    SkyClear,
    /// `CLR`: no clouds below automated sensor range
    Clear,
    /// `NCD`: no clouds detected
    NoneDetected,
    /// `NSC`: no significant cloud
    NoneSignificant,
    Few,
    Scattered,
    Broken,
    Overcast,
    Obscured,
}

impl CloudAmount {
    fn from_layer_code(s: &str) -> Option<Self> {
        match s {
            "FEW" => Some(CloudAmount::Few),
            "SCT" => Some(CloudAmount::Scattered),
            "BKN" => Some(CloudAmount::Broken),
            "OVC" => Some(CloudAmount::Overcast),
            "///" => Some(CloudAmount::NotReported),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ConvectiveType {
    #[default]
    None,
    NotReported,
    ToweringCumulus,
    Cumulonimbus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Complete,
    /// `CIG` seen; height expected
    CeilingHeight,
    /// Ceiling height seen; optional runway or direction
    OptionalLocation,
    /// `CHINO` seen; runway or direction required
    RequiredLocation,
    /// First amount seen; `V` expected
    VariableMarker,
    /// `V` seen; second amount expected
    SecondAmount,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CloudGroup {
    pub cloud_type: CloudType,
    pub amount: CloudAmount,
    pub height: Distance,
    /// Upper ceiling of a variable ceiling
    pub max_height: Option<Distance>,
    pub convective: ConvectiveType,
    /// Second amount of a variable cover
    pub variable_amount: Option<CloudAmount>,
    pub runway: Option<Runway>,
    pub direction: Option<Direction>,
    #[serde(skip)]
    stage: Stage,
}

impl CloudGroup {
    fn new(cloud_type: CloudType, amount: CloudAmount) -> Self {
        Self {
            cloud_type,
            amount,
            height: Distance::not_reported(DistanceUnit::Feet),
            max_height: None,
            convective: ConvectiveType::None,
            variable_amount: None,
            runway: None,
            direction: None,
            stage: Stage::Complete,
        }
    }

    fn with_stage(cloud_type: CloudType, amount: CloudAmount, stage: Stage) -> Self {
        Self {
            stage,
            ..Self::new(cloud_type, amount)
        }
    }

    fn parse_body(token: &str) -> Option<Self> {
        let no_clouds = match token {
            "SKC" => Some(CloudAmount::SkyClear),
            "CLR" => Some(CloudAmount::Clear),
            "NCD" => Some(CloudAmount::NoneDetected),
            "NSC" => Some(CloudAmount::NoneSignificant),
            _ => None,
        };
        if let Some(amount) = no_clouds {
            return Some(Self::new(CloudType::NoClouds, amount));
        }

        if let Some(caps) = CLOUD_LAYER.captures(token) {
            let mut group = Self::new(CloudType::Layer, CloudAmount::from_layer_code(&caps[1])?);
            group.height = Distance::from_height(&caps[2])?;
            group.convective = match caps.get(3).map(|m| m.as_str()) {
                Some("CB") => ConvectiveType::Cumulonimbus,
                Some("TCU") => ConvectiveType::ToweringCumulus,
                Some(_) => ConvectiveType::NotReported,
                None => ConvectiveType::None,
            };
            return Some(group);
        }

        let caps = VERTICAL_VISIBILITY.captures(token)?;
        let mut group = Self::new(CloudType::VerticalVisibility, CloudAmount::Obscured);
        group.height = Distance::from_height(&caps[1])?;
        Some(group)
    }

    fn parse_remarks(token: &str) -> Option<Self> {
        match token {
            "CIG" => {
                return Some(Self::with_stage(
                    CloudType::Ceiling,
                    CloudAmount::NotReported,
                    Stage::CeilingHeight,
                ));
            }
            "CHINO" => {
                return Some(Self::with_stage(
                    CloudType::CeilingNotAvailable,
                    CloudAmount::NotReported,
                    Stage::RequiredLocation,
                ));
            }
            _ => {}
        }
        let caps = REMARKS_COVER.captures(token)?;
        let mut group = Self::with_stage(
            CloudType::VariableCover,
            CloudAmount::from_layer_code(&caps[1])?,
            Stage::VariableMarker,
        );
        if let Some(height) = caps.get(2) {
            group.height = Distance::from_height(height.as_str())?;
        }
        Some(group)
    }

    fn append_ceiling_height(&mut self, token: &str) -> AppendOutcome {
        if let Some(height) = Distance::from_height(token).filter(|h| h.is_reported()) {
            self.height = height;
            self.stage = Stage::OptionalLocation;
            return AppendOutcome::Appended;
        }
        if let Some(caps) = VARIABLE_CEILING.captures(token) {
            if let (Some(low), Some(high)) = (
                Distance::from_height(&caps[1]),
                Distance::from_height(&caps[2]),
            ) {
                self.cloud_type = CloudType::VariableCeiling;
                self.height = low;
                self.max_height = Some(high);
                self.stage = Stage::OptionalLocation;
                return AppendOutcome::Appended;
            }
        }
        AppendOutcome::NotAppended
    }

    /// Runway (`RWY36`, `R32L`) or compass direction
    fn append_location(&mut self, token: &str) -> AppendOutcome {
        if let Some(runway) = Runway::from_location(token) {
            self.runway = Some(runway);
            self.stage = Stage::Complete;
            return AppendOutcome::Appended;
        }
        if let Some(direction) = Direction::from_cardinal(token) {
            self.direction = Some(direction);
            self.stage = Stage::Complete;
            return AppendOutcome::Appended;
        }
        if token.starts_with("RWY") {
            self.stage = Stage::Invalid;
            return AppendOutcome::Invalidated;
        }
        AppendOutcome::NotAppended
    }
}

impl ReportGroup for CloudGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        match part {
            ReportPart::Metar | ReportPart::Taf => Self::parse_body(token),
            ReportPart::Remarks => Self::parse_remarks(token),
            _ => None,
        }
    }

    fn append(&mut self, token: &str, _part: ReportPart) -> AppendOutcome {
        match self.stage {
            Stage::CeilingHeight => self.append_ceiling_height(token),
            Stage::OptionalLocation | Stage::RequiredLocation => self.append_location(token),
            Stage::VariableMarker => {
                if token == "V" {
                    self.stage = Stage::SecondAmount;
                    AppendOutcome::Appended
                } else {
                    AppendOutcome::NotAppended
                }
            }
            Stage::SecondAmount => match CloudAmount::from_layer_code(token) {
                Some(amount) if amount != CloudAmount::NotReported => {
                    self.variable_amount = Some(amount);
                    self.stage = Stage::Complete;
                    AppendOutcome::Appended
                }
                _ => {
                    self.stage = Stage::Invalid;
                    AppendOutcome::Invalidated
                }
            },
            Stage::Complete | Stage::Invalid => AppendOutcome::NotAppended,
        }
    }

    fn accepts_append(&self) -> bool {
        !matches!(self.stage, Stage::Complete | Stage::Invalid)
    }

    fn is_valid(&self) -> bool {
        match self.stage {
            Stage::Complete | Stage::OptionalLocation => {}
            _ => return false,
        }
        if let (Some(low), Some(high)) = (
            self.height.value(),
            self.max_height.and_then(|h| h.value()),
        ) {
            if low >= high {
                return false;
            }
        }
        if let Some(second) = self.variable_amount {
            if self.amount >= second {
                return false;
            }
        }
        self.runway.is_none_or(|r| r.is_valid())
    }
}
