//! Prevailing, directional and runway visual range, plus remarks visibility

use super::ReportGroup;
use crate::app::models::values::{
    Cardinal, Direction, Distance, DistanceModifier, DistanceUnit, Runway,
};
use crate::app::models::{AppendOutcome, ReportPart};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static METERS_WITH_DIRECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})(NDV|N|NE|E|SE|S|SW|W|NW)$").expect("valid regex"));
static RUNWAY_VISUAL_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^R(\d{2}[LCR]?)/(?:(////)|([PM]?\d{4})(?:V([PM]?\d{4}))?)(FT)?(?:/?([UDN]))?$")
        .expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VisibilityType {
    Prevailing,
    /// Prevailing visibility, no directional variation (`dddd NDV`)
    PrevailingNoDirectionalVariation,
    Directional,
    RunwayVisualRange,
    /// `VIS 1/2V2`
    VariablePrevailing,
    /// `VIS NE 2`
    Sector,
    /// `VIS NE 1V2`
    VariableSector,
    /// `SFC VIS`
    Surface,
    /// `TWR VIS`
    Tower,
    /// `VISNO`, optionally at a runway or direction
    NotAvailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RvrTrend {
    #[default]
    None,
    Upward,
    Downward,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Complete,
    /// Body: a single-digit whole mile, waiting for `n/dSM`
    BodyFraction,
    /// `SFC` / `TWR` seen; `VIS` expected
    VisKeyword,
    /// `VIS` seen; direction or value expected
    Value,
    /// Whole miles seen in remarks; an optional fraction may follow
    ValueFraction,
    /// Variable maximum given as whole miles; an optional fraction may follow
    MaxFraction,
    /// `VISNO` seen; optional runway or direction
    NotAvailableLocation,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisibilityGroup {
    pub visibility_type: VisibilityType,
    pub visibility: Distance,
    /// Upper bound of variable visibility
    pub max_visibility: Option<Distance>,
    pub direction: Option<Direction>,
    pub runway: Option<Runway>,
    pub trend: RvrTrend,
    #[serde(skip)]
    stage: Stage,
}

impl VisibilityGroup {
    fn new(visibility_type: VisibilityType, visibility: Distance) -> Self {
        Self {
            visibility_type,
            visibility,
            max_visibility: None,
            direction: None,
            runway: None,
            trend: RvrTrend::None,
            stage: Stage::Complete,
        }
    }

    fn pending(visibility_type: VisibilityType, stage: Stage) -> Self {
        Self {
            stage,
            ..Self::new(
                visibility_type,
                Distance::not_reported(DistanceUnit::StatuteMiles),
            )
        }
    }

    fn parse_body(token: &str) -> Option<Self> {
        if let Some(distance) = Distance::from_meters(token) {
            return Some(Self::new(VisibilityType::Prevailing, distance));
        }
        if let Some(caps) = METERS_WITH_DIRECTION.captures(token) {
            let distance = Distance::from_meters(&caps[1])?;
            return Some(match &caps[2] {
                "NDV" => Self::new(VisibilityType::PrevailingNoDirectionalVariation, distance),
                dir => {
                    let mut group = Self::new(VisibilityType::Directional, distance);
                    group.direction = Some(Direction::Cardinal(Cardinal::from_abbreviation(dir)?));
                    group
                }
            });
        }
        if let Some(miles) = token.strip_suffix("SM") {
            return Some(Self::new(VisibilityType::Prevailing, Distance::from_miles(miles)?));
        }
        if token.len() == 1 {
            let mut group = Self::new(
                VisibilityType::Prevailing,
                Distance::from_miles_value(token)?,
            );
            group.stage = Stage::BodyFraction;
            return Some(group);
        }
        None
    }

    fn parse_rvr(token: &str) -> Option<Self> {
        let caps = RUNWAY_VISUAL_RANGE.captures(token)?;
        let feet = caps.get(5).is_some();
        let runway = Runway::from_designation(&caps[1])?;
        let unit = if feet {
            DistanceUnit::Feet
        } else {
            DistanceUnit::Meters
        };

        let mut group = match caps.get(3) {
            Some(value) => Self::new(
                VisibilityType::RunwayVisualRange,
                Distance::from_rvr(value.as_str(), feet)?,
            ),
            None => Self::new(VisibilityType::RunwayVisualRange, Distance::not_reported(unit)),
        };
        group.runway = Some(runway);
        if let Some(max) = caps.get(4) {
            group.max_visibility = Some(Distance::from_rvr(max.as_str(), feet)?);
        }
        group.trend = match caps.get(6).map(|m| m.as_str()) {
            Some("U") => RvrTrend::Upward,
            Some("D") => RvrTrend::Downward,
            Some("N") => RvrTrend::Neutral,
            _ => RvrTrend::None,
        };
        Some(group)
    }

    /// Remarks value: `2`, `1/2`, `1V2`, `1/2V2`
    fn append_value(&mut self, token: &str) -> AppendOutcome {
        let (low, high) = match token.split_once('V') {
            Some((low, high)) => (low, Some(high)),
            None => (token, None),
        };
        let Some(low) = Distance::from_miles(low) else {
            return AppendOutcome::NotAppended;
        };
        self.visibility = low;

        match high.map(Distance::from_miles) {
            Some(Some(high)) => {
                self.set_variable(high);
                AppendOutcome::Appended
            }
            Some(None) => {
                self.stage = Stage::Invalid;
                AppendOutcome::Invalidated
            }
            None => {
                self.stage = if low.fraction.is_none() {
                    Stage::ValueFraction
                } else {
                    Stage::Complete
                };
                AppendOutcome::Appended
            }
        }
    }

    fn set_variable(&mut self, high: Distance) {
        self.visibility_type = match self.visibility_type {
            VisibilityType::Sector => VisibilityType::VariableSector,
            VisibilityType::Prevailing => VisibilityType::VariablePrevailing,
            other => other,
        };
        self.max_visibility = Some(high);
        self.stage = if high.fraction.is_none() {
            Stage::MaxFraction
        } else {
            Stage::Complete
        };
    }

    /// `1/2` or `1/2V2` after a whole-miles remarks value
    fn append_value_fraction(&mut self, token: &str) -> AppendOutcome {
        let (fraction, high) = match token.split_once('V') {
            Some((fraction, high)) => (fraction, Some(high)),
            None => (token, None),
        };
        let combined = Distance::from_miles_value(fraction)
            .and_then(|f| self.visibility.with_fraction(&f));
        let Some(combined) = combined else {
            return AppendOutcome::NotAppended;
        };
        self.visibility = combined;

        match high.map(Distance::from_miles) {
            Some(Some(high)) => {
                self.set_variable(high);
                AppendOutcome::Appended
            }
            Some(None) => {
                self.stage = Stage::Invalid;
                AppendOutcome::Invalidated
            }
            None => {
                self.stage = Stage::Complete;
                AppendOutcome::Appended
            }
        }
    }

    fn append_max_fraction(&mut self, token: &str) -> AppendOutcome {
        let combined = self.max_visibility.and_then(|max| {
            Distance::from_miles_value(token).and_then(|f| max.with_fraction(&f))
        });
        match combined {
            Some(max) => {
                self.max_visibility = Some(max);
                self.stage = Stage::Complete;
                AppendOutcome::Appended
            }
            None => AppendOutcome::NotAppended,
        }
    }
}

impl ReportGroup for VisibilityGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        match part {
            ReportPart::Metar | ReportPart::Taf => {
                if let Some(group) = Self::parse_body(token) {
                    return Some(group);
                }
                if part == ReportPart::Metar {
                    return Self::parse_rvr(token);
                }
                None
            }
            ReportPart::Remarks => match token {
                "VIS" => Some(Self::pending(VisibilityType::Prevailing, Stage::Value)),
                "SFC" => Some(Self::pending(VisibilityType::Surface, Stage::VisKeyword)),
                "TWR" => Some(Self::pending(VisibilityType::Tower, Stage::VisKeyword)),
                "VISNO" => Some(Self::pending(
                    VisibilityType::NotAvailable,
                    Stage::NotAvailableLocation,
                )),
                _ => None,
            },
            _ => None,
        }
    }

    fn append(&mut self, token: &str, part: ReportPart) -> AppendOutcome {
        match self.stage {
            Stage::BodyFraction => {
                let fraction = token
                    .strip_suffix("SM")
                    .and_then(Distance::from_miles_value)
                    .and_then(|f| self.visibility.with_fraction(&f));
                match fraction {
                    Some(combined) if part.is_body() => {
                        self.visibility = combined;
                        self.stage = Stage::Complete;
                        AppendOutcome::Appended
                    }
                    _ => AppendOutcome::NotAppended,
                }
            }
            Stage::VisKeyword => {
                if token == "VIS" {
                    self.stage = Stage::Value;
                    AppendOutcome::Appended
                } else {
                    AppendOutcome::NotAppended
                }
            }
            Stage::Value => {
                let sector_allowed = self.visibility_type == VisibilityType::Prevailing
                    && self.direction.is_none();
                if let Some(cardinal) = Cardinal::from_abbreviation(token).filter(|_| sector_allowed) {
                    self.direction = Some(Direction::Cardinal(cardinal));
                    self.visibility_type = VisibilityType::Sector;
                    return AppendOutcome::Appended;
                }
                self.append_value(token)
            }
            Stage::ValueFraction => self.append_value_fraction(token),
            Stage::MaxFraction => self.append_max_fraction(token),
            Stage::NotAvailableLocation => {
                if let Some(runway) = Runway::from_location(token) {
                    self.runway = Some(runway);
                    self.stage = Stage::Complete;
                    AppendOutcome::Appended
                } else if let Some(cardinal) = Cardinal::from_abbreviation(token) {
                    self.direction = Some(Direction::Cardinal(cardinal));
                    self.stage = Stage::Complete;
                    AppendOutcome::Appended
                } else {
                    AppendOutcome::NotAppended
                }
            }
            Stage::Complete | Stage::Invalid => AppendOutcome::NotAppended,
        }
    }

    fn accepts_append(&self) -> bool {
        !matches!(self.stage, Stage::Complete | Stage::Invalid)
    }

    fn is_valid(&self) -> bool {
        let complete = !matches!(
            self.stage,
            Stage::BodyFraction | Stage::VisKeyword | Stage::Value | Stage::Invalid
        );
        if !complete || !self.visibility.is_valid() {
            return false;
        }
        if let Some(max) = self.max_visibility {
            if !max.is_valid() {
                return false;
            }
            if let (Some(low), Some(high)) = (self.visibility.value(), max.value()) {
                let open_ended = self.visibility.modifier != DistanceModifier::None
                    || max.modifier != DistanceModifier::None;
                if low >= high && !open_ended {
                    return false;
                }
            }
        }
        self.runway.is_none_or(|r| r.is_valid())
    }
}
