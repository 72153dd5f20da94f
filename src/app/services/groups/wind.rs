//! Surface wind, variable wind sector, wind shear, wind shift and peak wind

use super::ReportGroup;
use crate::app::models::values::{Direction, Distance, EventTime, Runway, Speed, SpeedUnit};
use crate::app::models::{AppendOutcome, ReportPart};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SURFACE_WIND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{3}|VRB|///)(\d{2,3}|//)(?:G(\d{2,3}|//))?(KT|MPS|KMH)$").expect("valid regex")
});
static VARIABLE_SECTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{3})V(\d{3})$").expect("valid regex"));
static WIND_SHEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^WS(\d{3})/(\d{3}|VRB)(\d{2,3})(?:G(\d{2,3}))?(KT|MPS|KMH)$").expect("valid regex")
});
static PEAK_WIND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{3})(\d{2,3})/(\d{2}|\d{4})$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WindType {
    SurfaceWind,
    SurfaceWindCalm,
    /// `dddVddd` reported on its own
    VariableSector,
    SurfaceWindWithVariableSector,
    /// `WShhh/dddffKT`
    WindShear,
    /// `WS R32`, `WS ALL RWY`
    WindShearInLowerLayers,
    WindShift,
    WindShiftFrontalPassage,
    PeakWind,
}

/// Progress through a multi-token wind group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Stage {
    #[default]
    Complete,
    /// `WS` seen; runway or `ALL` expected
    ShearLocation,
    /// `WS ALL` seen; `RWY` expected
    ShearAllRunways,
    /// `WSHFT` seen; time expected
    ShiftTime,
    /// `WSHFT hhmm` seen; optional `FROPA`
    ShiftFropa,
    /// `PK` seen; `WND` expected
    PeakKeyword,
    /// `PK WND` seen; value expected
    PeakValue,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindGroup {
    pub wind_type: WindType,
    pub direction: Direction,
    pub speed: Speed,
    pub gust: Speed,
    pub sector_begin: Direction,
    pub sector_end: Direction,
    /// Wind shear height
    pub height: Option<Distance>,
    pub runway: Option<Runway>,
    /// `WS ALL RWY`
    pub all_runways: bool,
    pub event_time: Option<EventTime>,
    #[serde(skip)]
    stage: Stage,
}

impl WindGroup {
    fn new(wind_type: WindType) -> Self {
        Self {
            wind_type,
            direction: Direction::NotReported,
            speed: Speed::not_reported(SpeedUnit::Knots),
            gust: Speed::not_reported(SpeedUnit::Knots),
            sector_begin: Direction::NotReported,
            sector_end: Direction::NotReported,
            height: None,
            runway: None,
            all_runways: false,
            event_time: None,
            stage: Stage::Complete,
        }
    }

    fn with_stage(wind_type: WindType, stage: Stage) -> Self {
        Self {
            stage,
            ..Self::new(wind_type)
        }
    }

    pub fn is_calm(&self) -> bool {
        self.wind_type == WindType::SurfaceWindCalm
    }

    fn parse_surface(token: &str) -> Option<Self> {
        let caps = SURFACE_WIND.captures(token)?;
        let unit = SpeedUnit::from_suffix(&caps[4])?;
        let mut group = Self::new(WindType::SurfaceWind);
        group.direction = Direction::from_degrees(&caps[1])?;
        group.speed = Speed::from_digits(&caps[2], unit)?;
        group.gust = match caps.get(3) {
            Some(gust) => Speed::from_digits(gust.as_str(), unit)?,
            None => Speed::not_reported(unit),
        };
        if group.direction == Direction::Degrees(0)
            && group.speed.value == Some(0)
            && !group.gust.is_reported()
        {
            group.wind_type = WindType::SurfaceWindCalm;
        }
        Some(group)
    }

    fn parse_sector(token: &str) -> Option<(Direction, Direction)> {
        let caps = VARIABLE_SECTOR.captures(token)?;
        Some((
            Direction::from_degrees(&caps[1])?,
            Direction::from_degrees(&caps[2])?,
        ))
    }

    fn parse_shear(token: &str) -> Option<Self> {
        let caps = WIND_SHEAR.captures(token)?;
        let unit = SpeedUnit::from_suffix(&caps[5])?;
        let mut group = Self::new(WindType::WindShear);
        group.height = Some(Distance::from_height(&caps[1])?);
        group.direction = Direction::from_degrees(&caps[2])?;
        group.speed = Speed::from_digits(&caps[3], unit)?;
        group.gust = match caps.get(4) {
            Some(gust) => Speed::from_digits(gust.as_str(), unit)?,
            None => Speed::not_reported(unit),
        };
        Some(group)
    }

    fn append_peak_value(&mut self, token: &str) -> AppendOutcome {
        let parsed = PEAK_WIND.captures(token).and_then(|caps| {
            Some((
                Direction::from_degrees(&caps[1])?,
                Speed::from_digits(&caps[2], SpeedUnit::Knots)?,
                EventTime::from_digits(&caps[3])?,
            ))
        });
        match parsed {
            Some((direction, speed, time)) => {
                self.direction = direction;
                self.speed = speed;
                self.event_time = Some(time);
                self.stage = Stage::Complete;
                AppendOutcome::Appended
            }
            None => {
                self.stage = Stage::Invalid;
                AppendOutcome::Invalidated
            }
        }
    }
}

impl ReportGroup for WindGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        match part {
            ReportPart::Metar | ReportPart::Taf => {
                if part == ReportPart::Metar && token == "WS" {
                    return Some(Self::with_stage(
                        WindType::WindShearInLowerLayers,
                        Stage::ShearLocation,
                    ));
                }
                if let Some(group) = Self::parse_surface(token) {
                    return Some(group);
                }
                if let Some((begin, end)) = Self::parse_sector(token) {
                    let mut group = Self::new(WindType::VariableSector);
                    group.sector_begin = begin;
                    group.sector_end = end;
                    return Some(group);
                }
                Self::parse_shear(token)
            }
            ReportPart::Remarks => match token {
                "WSHFT" => Some(Self::with_stage(WindType::WindShift, Stage::ShiftTime)),
                "PK" => Some(Self::with_stage(WindType::PeakWind, Stage::PeakKeyword)),
                _ => None,
            },
            _ => None,
        }
    }

    fn append(&mut self, token: &str, part: ReportPart) -> AppendOutcome {
        match self.stage {
            Stage::Complete if self.wind_type == WindType::SurfaceWind && part.is_body() => {
                match Self::parse_sector(token) {
                    Some((begin, end)) => {
                        self.sector_begin = begin;
                        self.sector_end = end;
                        self.wind_type = WindType::SurfaceWindWithVariableSector;
                        AppendOutcome::Appended
                    }
                    None => AppendOutcome::NotAppended,
                }
            }
            Stage::ShearLocation => {
                if token == "ALL" {
                    self.stage = Stage::ShearAllRunways;
                    return AppendOutcome::Appended;
                }
                match Runway::from_location(token) {
                    Some(runway) => {
                        self.runway = Some(runway);
                        self.stage = Stage::Complete;
                        AppendOutcome::Appended
                    }
                    None => AppendOutcome::NotAppended,
                }
            }
            Stage::ShearAllRunways => {
                if token == "RWY" {
                    self.all_runways = true;
                    self.stage = Stage::Complete;
                    AppendOutcome::Appended
                } else {
                    self.stage = Stage::Invalid;
                    AppendOutcome::Invalidated
                }
            }
            Stage::ShiftTime => match EventTime::from_digits(token) {
                Some(time) => {
                    self.event_time = Some(time);
                    self.stage = Stage::ShiftFropa;
                    AppendOutcome::Appended
                }
                None => AppendOutcome::NotAppended,
            },
            Stage::ShiftFropa => {
                if token == "FROPA" {
                    self.wind_type = WindType::WindShiftFrontalPassage;
                    self.stage = Stage::Complete;
                    AppendOutcome::Appended
                } else {
                    AppendOutcome::NotAppended
                }
            }
            Stage::PeakKeyword => {
                if token == "WND" {
                    self.stage = Stage::PeakValue;
                    AppendOutcome::Appended
                } else {
                    AppendOutcome::NotAppended
                }
            }
            Stage::PeakValue => self.append_peak_value(token),
            Stage::Complete | Stage::Invalid => AppendOutcome::NotAppended,
        }
    }

    fn accepts_append(&self) -> bool {
        match self.stage {
            Stage::Complete => self.wind_type == WindType::SurfaceWind,
            Stage::Invalid => false,
            _ => true,
        }
    }

    fn is_valid(&self) -> bool {
        let complete = matches!(self.stage, Stage::Complete | Stage::ShiftFropa);
        let gust_above_speed = match (self.speed.value, self.gust.value) {
            (Some(speed), Some(gust)) => gust > speed,
            _ => true,
        };
        complete
            && gust_above_speed
            && self.direction.is_valid()
            && self.sector_begin.is_valid()
            && self.sector_end.is_valid()
            && self.runway.is_none_or(|r| r.is_valid())
            && self.event_time.is_none_or(|t| t.is_valid())
    }
}
