//! State of runway: `R32/290055`, `R24L/CLRD70`, `R/SNOCLO`

use super::ReportGroup;
use crate::app::models::ReportPart;
use crate::app::models::values::{Runway, SurfaceFriction, parse_digits};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static RUNWAY_STATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^R(\d{2}[LCR]?)/(?:([0-9/])([0-9/])(\d{2}|//)|(CLRD))(\d{2}|//)$")
        .expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunwayStateType {
    Normal,
    /// Contamination cleared (`CLRD`)
    Cleared,
    /// Aerodrome closed due to snow (`SNOCLO`)
    SnowClosure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Deposits {
    NotReported,
    ClearAndDry,
    Damp,
    WetAndWaterPatches,
    RimeAndFrostCovered,
    DrySnow,
    WetSnow,
    Slush,
    Ice,
    CompactedOrRolledSnow,
    FrozenRutsOrRidges,
}

impl Deposits {
    fn from_code(c: &str) -> Option<Self> {
        let deposits = match c {
            "/" => Deposits::NotReported,
            "0" => Deposits::ClearAndDry,
            "1" => Deposits::Damp,
            "2" => Deposits::WetAndWaterPatches,
            "3" => Deposits::RimeAndFrostCovered,
            "4" => Deposits::DrySnow,
            "5" => Deposits::WetSnow,
            "6" => Deposits::Slush,
            "7" => Deposits::Ice,
            "8" => Deposits::CompactedOrRolledSnow,
            "9" => Deposits::FrozenRutsOrRidges,
            _ => return None,
        };
        Some(deposits)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContaminationExtent {
    NotReported,
    None,
    UpTo10Percent,
    From11To25Percent,
    From26To50Percent,
    From51To100Percent,
    /// Codes 3, 4, 6, 7, 8 are not assigned
    Reserved(u8),
}

impl ContaminationExtent {
    fn from_code(c: &str) -> Option<Self> {
        if c == "/" {
            return Some(ContaminationExtent::NotReported);
        }
        Some(match parse_digits(c, 1)? {
            0 => ContaminationExtent::None,
            1 => ContaminationExtent::UpTo10Percent,
            2 => ContaminationExtent::From11To25Percent,
            5 => ContaminationExtent::From26To50Percent,
            9 => ContaminationExtent::From51To100Percent,
            code => ContaminationExtent::Reserved(code as u8),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DepositDepth {
    NotReported,
    Millimeters(u16),
    RunwayNotOperational,
    /// Code 91 is not assigned
    Reserved,
}

impl DepositDepth {
    fn from_code(s: &str) -> Option<Self> {
        if s == "//" {
            return Some(DepositDepth::NotReported);
        }
        Some(match parse_digits(s, 2)? {
            code @ 0..=90 => DepositDepth::Millimeters(code as u16),
            91 => DepositDepth::Reserved,
            // 92..=98 encode 10..=40 cm in 5 cm steps
            code @ 92..=98 => DepositDepth::Millimeters(((code - 90) * 50) as u16),
            _ => DepositDepth::RunwayNotOperational,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunwayStateGroup {
    pub state_type: RunwayStateType,
    /// Absent for `R/SNOCLO`, which applies to the whole aerodrome
    pub runway: Option<Runway>,
    pub deposits: Deposits,
    pub extent: ContaminationExtent,
    pub depth: DepositDepth,
    pub friction: SurfaceFriction,
}

impl RunwayStateGroup {
    fn new(state_type: RunwayStateType, runway: Option<Runway>) -> Self {
        Self {
            state_type,
            runway,
            deposits: Deposits::NotReported,
            extent: ContaminationExtent::NotReported,
            depth: DepositDepth::NotReported,
            friction: SurfaceFriction::NotReported,
        }
    }
}

impl ReportGroup for RunwayStateGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Metar {
            return None;
        }
        if token == "R/SNOCLO" {
            return Some(Self::new(RunwayStateType::SnowClosure, None));
        }
        if let Some(designation) = token
            .strip_prefix('R')
            .and_then(|rest| rest.strip_suffix("/SNOCLO"))
        {
            let runway = Runway::from_designation(designation)?;
            return Some(Self::new(RunwayStateType::SnowClosure, Some(runway)));
        }

        let caps = RUNWAY_STATE.captures(token)?;
        let runway = Runway::from_designation(&caps[1])?;
        let friction = SurfaceFriction::from_code(&caps[6])?;
        if caps.get(5).is_some() {
            let mut group = Self::new(RunwayStateType::Cleared, Some(runway));
            group.friction = friction;
            return Some(group);
        }

        let mut group = Self::new(RunwayStateType::Normal, Some(runway));
        group.deposits = Deposits::from_code(&caps[2])?;
        group.extent = ContaminationExtent::from_code(&caps[3])?;
        group.depth = DepositDepth::from_code(&caps[4])?;
        group.friction = friction;
        Some(group)
    }

    fn is_valid(&self) -> bool {
        !matches!(self.extent, ContaminationExtent::Reserved(_))
            && self.depth != DepositDepth::Reserved
            && self.friction.is_valid()
            && self.runway.is_none_or(|r| r.is_valid())
    }
}
