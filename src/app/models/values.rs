//! Unit-tagged measurement values stored inside decoded groups
//!
//! Every value records whether it was actually reported (runs of `/` mean
//! "not reported") and carries its raw value with the unit it was encoded in.
//! No unit conversion happens here.

use crate::constants::NOT_REPORTED_MARKER;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// True when the text is a non-empty run of `/`
pub fn is_not_reported(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c == NOT_REPORTED_MARKER)
}

/// Parse an all-digit string of exactly `len` characters
pub fn parse_digits(s: &str, len: usize) -> Option<u32> {
    if s.len() != len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// =============================================================================
// Time
// =============================================================================

/// Day-of-month/hour/minute as written in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Time {
    pub day: Option<u8>,
    pub hour: u8,
    pub minute: u8,
}

/// How many months back a day-of-month is searched for in [`Time::date_before`]
const MAX_MONTH_LOOKBACK: usize = 3;

impl Time {
    pub fn new(day: Option<u8>, hour: u8, minute: u8) -> Self {
        Self { day, hour, minute }
    }

    /// `DDHHMM`
    pub fn from_ddhhmm(s: &str) -> Option<Self> {
        parse_digits(s, 6)?;
        Some(Self::new(
            Some(s[0..2].parse().ok()?),
            s[2..4].parse().ok()?,
            s[4..6].parse().ok()?,
        ))
    }

    /// `HHMM`
    pub fn from_hhmm(s: &str) -> Option<Self> {
        parse_digits(s, 4)?;
        Some(Self::new(None, s[0..2].parse().ok()?, s[2..4].parse().ok()?))
    }

    /// `DDHH`, used by TAF time spans
    pub fn from_ddhh(s: &str) -> Option<Self> {
        parse_digits(s, 4)?;
        Some(Self::new(Some(s[0..2].parse().ok()?), s[2..4].parse().ok()?, 0))
    }

    pub fn is_valid(&self) -> bool {
        if let Some(day) = self.day {
            if !(1..=31).contains(&day) {
                return false;
            }
        }
        if self.hour == 24 {
            return self.minute == 0;
        }
        self.hour <= 23 && self.minute <= 59
    }

    /// Resolve to the latest date-time whose day is not after `reference`
    ///
    /// Reports only carry the day of month, so the month and year come from the
    /// reference date. Hour 24 rolls over to 00 of the following day.
    pub fn date_before(&self, reference: NaiveDate) -> Option<NaiveDateTime> {
        if !self.is_valid() {
            return None;
        }

        let date = match self.day {
            None => reference,
            Some(day) => {
                let mut year = reference.year();
                let mut month = reference.month();
                if u32::from(day) > reference.day() {
                    step_back_month(&mut year, &mut month);
                }

                let mut found = None;
                for _ in 0..MAX_MONTH_LOOKBACK {
                    if let Some(date) = NaiveDate::from_ymd_opt(year, month, u32::from(day)) {
                        found = Some(date);
                        break;
                    }
                    step_back_month(&mut year, &mut month);
                }
                found?
            }
        };

        let (hour, rollover) = if self.hour == 24 { (0, 1) } else { (self.hour, 0) };
        let time = NaiveTime::from_hms_opt(u32::from(hour), u32::from(self.minute), 0)?;
        date.and_time(time)
            .checked_add_signed(chrono::Duration::days(rollover))
    }
}

fn step_back_month(year: &mut i32, month: &mut u32) {
    if *month == 1 {
        *month = 12;
        *year -= 1;
    } else {
        *month -= 1;
    }
}

/// Time of an event noted in remarks
///
/// The hour is omitted when it matches the hour of the report (`B15`, `WSHFT 30`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTime {
    pub hour: Option<u8>,
    pub minute: u8,
}

impl EventTime {
    /// `mm` or `hhmm`
    pub fn from_digits(s: &str) -> Option<Self> {
        match s.len() {
            2 => Some(Self {
                hour: None,
                minute: parse_digits(s, 2)? as u8,
            }),
            4 => {
                parse_digits(s, 4)?;
                Some(Self {
                    hour: Some(s[0..2].parse().ok()?),
                    minute: s[2..4].parse().ok()?,
                })
            }
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.hour.is_none_or(|h| h <= 23) && self.minute <= 59
    }
}

// =============================================================================
// Distance
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    Meters,
    StatuteMiles,
    Feet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceModifier {
    #[default]
    None,
    LessThan,
    MoreThan,
}

/// Visibility, height or range, optionally with a statute-mile fraction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub modifier: DistanceModifier,
    pub whole: Option<u32>,
    pub fraction: Option<(u32, u32)>,
    pub unit: DistanceUnit,
}

impl Distance {
    pub fn not_reported(unit: DistanceUnit) -> Self {
        Self {
            modifier: DistanceModifier::None,
            whole: None,
            fraction: None,
            unit,
        }
    }

    pub fn new(whole: u32, unit: DistanceUnit) -> Self {
        Self {
            whole: Some(whole),
            ..Self::not_reported(unit)
        }
    }

    pub fn is_reported(&self) -> bool {
        self.whole.is_some() || self.fraction.is_some()
    }

    /// Raw value in [`Self::unit`]
    pub fn value(&self) -> Option<f32> {
        if !self.is_reported() {
            return None;
        }
        let whole = self.whole.unwrap_or(0) as f32;
        let fraction = match self.fraction {
            Some((_, 0)) => return None,
            Some((num, den)) => num as f32 / den as f32,
            None => 0.0,
        };
        Some(whole + fraction)
    }

    pub fn is_valid(&self) -> bool {
        match self.fraction {
            Some((num, den)) => den != 0 && num != 0 && num < den,
            None => true,
        }
    }

    /// Four-digit metres; `9999` means 10 km or more
    pub fn from_meters(s: &str) -> Option<Self> {
        if s == "////" {
            return Some(Self::not_reported(DistanceUnit::Meters));
        }
        let meters = parse_digits(s, 4)?;
        if meters == 9999 {
            return Some(Self {
                modifier: DistanceModifier::MoreThan,
                ..Self::new(10_000, DistanceUnit::Meters)
            });
        }
        Some(Self::new(meters, DistanceUnit::Meters))
    }

    /// Statute miles without the `SM` suffix: `7`, `1/2`, `P6`, `M1/4`, `////`
    pub fn from_miles(s: &str) -> Option<Self> {
        if is_not_reported(s) {
            return Some(Self::not_reported(DistanceUnit::StatuteMiles));
        }
        let (modifier, rest) = match s.as_bytes().first()? {
            b'P' => (DistanceModifier::MoreThan, &s[1..]),
            b'M' => (DistanceModifier::LessThan, &s[1..]),
            _ => (DistanceModifier::None, s),
        };
        let mut distance = Self::from_miles_value(rest)?;
        distance.modifier = modifier;
        Some(distance)
    }

    /// Whole miles (`1`, `12`) or a fraction (`3/4`, `1/16`)
    pub fn from_miles_value(s: &str) -> Option<Self> {
        if let Some((num, den)) = s.split_once('/') {
            let num = parse_digits(num, 1)?;
            let den = if den.len() == 1 || den.len() == 2 {
                parse_digits(den, den.len())?
            } else {
                return None;
            };
            return Some(Self {
                fraction: Some((num, den)),
                ..Self::not_reported(DistanceUnit::StatuteMiles)
            });
        }
        match s.len() {
            1 | 2 => Some(Self::new(
                parse_digits(s, s.len())?,
                DistanceUnit::StatuteMiles,
            )),
            _ => None,
        }
    }

    /// Three digits in hundreds of feet; `///` is not reported
    pub fn from_height(s: &str) -> Option<Self> {
        if s == "///" {
            return Some(Self::not_reported(DistanceUnit::Feet));
        }
        Some(Self::new(parse_digits(s, 3)? * 100, DistanceUnit::Feet))
    }

    /// Runway visual range value: optional `P`/`M` then four digits
    pub fn from_rvr(s: &str, feet: bool) -> Option<Self> {
        let unit = if feet {
            DistanceUnit::Feet
        } else {
            DistanceUnit::Meters
        };
        let (modifier, digits) = match s.as_bytes().first()? {
            b'P' => (DistanceModifier::MoreThan, &s[1..]),
            b'M' => (DistanceModifier::LessThan, &s[1..]),
            _ => (DistanceModifier::None, s),
        };
        Some(Self {
            modifier,
            ..Self::new(parse_digits(digits, 4)?, unit)
        })
    }

    /// Merge a fraction-only distance into a whole-miles distance (`1` + `3/4`)
    pub fn with_fraction(&self, fraction: &Distance) -> Option<Self> {
        if self.unit != DistanceUnit::StatuteMiles
            || self.fraction.is_some()
            || self.whole.is_none()
            || fraction.whole.is_some()
            || fraction.modifier != DistanceModifier::None
        {
            return None;
        }
        Some(Self {
            fraction: Some(fraction.fraction?),
            ..*self
        })
    }
}

// =============================================================================
// Speed
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    Knots,
    MetersPerSecond,
    KilometersPerHour,
}

impl SpeedUnit {
    pub fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "KT" => Some(SpeedUnit::Knots),
            "MPS" => Some(SpeedUnit::MetersPerSecond),
            "KMH" => Some(SpeedUnit::KilometersPerHour),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speed {
    pub value: Option<u32>,
    pub unit: SpeedUnit,
}

impl Speed {
    pub fn not_reported(unit: SpeedUnit) -> Self {
        Self { value: None, unit }
    }

    /// Two or three digits, or a run of `/`
    pub fn from_digits(s: &str, unit: SpeedUnit) -> Option<Self> {
        if is_not_reported(s) {
            return Some(Self::not_reported(unit));
        }
        if !(2..=3).contains(&s.len()) {
            return None;
        }
        Some(Self {
            value: Some(parse_digits(s, s.len())?),
            unit,
        })
    }

    pub fn is_reported(&self) -> bool {
        self.value.is_some()
    }
}

// =============================================================================
// Temperature
// =============================================================================

/// Degrees Celsius; `precise` values carry tenths from remarks groups
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub value: Option<f32>,
    pub precise: bool,
}

impl Temperature {
    pub fn not_reported() -> Self {
        Self {
            value: None,
            precise: false,
        }
    }

    /// `05`, `M05`, `//`
    pub fn from_whole(s: &str) -> Option<Self> {
        if s == "//" {
            return Some(Self::not_reported());
        }
        let (negative, digits) = match s.strip_prefix('M') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let value = parse_digits(digits, 2)? as f32;
        Some(Self {
            value: Some(if negative { -value } else { value }),
            precise: false,
        })
    }

    /// Sign digit then tenths: `1033` is -3.3, `0156` is 15.6; `////` not reported
    pub fn from_tenths(s: &str) -> Option<Self> {
        if s == "////" {
            return Some(Self::not_reported());
        }
        let sign = match s.as_bytes().first()? {
            b'0' => 1.0,
            b'1' => -1.0,
            _ => return None,
        };
        let tenths = parse_digits(&s[1..], 3)? as f32;
        Some(Self {
            value: Some(sign * tenths / 10.0),
            precise: true,
        })
    }

    pub fn is_reported(&self) -> bool {
        self.value.is_some()
    }
}

// =============================================================================
// Pressure
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Hectopascal,
    InchesHg,
    MillimetersHg,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pressure {
    pub value: Option<f32>,
    pub unit: PressureUnit,
}

impl Pressure {
    pub fn not_reported(unit: PressureUnit) -> Self {
        Self { value: None, unit }
    }

    /// Four digits of whole hectopascals
    pub fn from_hectopascal(s: &str) -> Option<Self> {
        if s == "////" {
            return Some(Self::not_reported(PressureUnit::Hectopascal));
        }
        Some(Self {
            value: Some(parse_digits(s, 4)? as f32),
            unit: PressureUnit::Hectopascal,
        })
    }

    /// Four digits of hundredths of inches of mercury
    pub fn from_inches_hg(s: &str) -> Option<Self> {
        if s == "////" {
            return Some(Self::not_reported(PressureUnit::InchesHg));
        }
        Some(Self {
            value: Some(parse_digits(s, 4)? as f32 / 100.0),
            unit: PressureUnit::InchesHg,
        })
    }

    /// `SLPppp` digits: tenths of hPa with the leading 9 or 10 omitted
    pub fn from_sea_level(s: &str) -> Option<Self> {
        let tenths = parse_digits(s, 3)?;
        let base = if tenths < 500 { 10_000 } else { 9_000 };
        Some(Self {
            value: Some((base + tenths) as f32 / 10.0),
            unit: PressureUnit::Hectopascal,
        })
    }

    /// Three digits of whole millimetres of mercury
    pub fn from_millimeters_hg(s: &str) -> Option<Self> {
        Some(Self {
            value: Some(parse_digits(s, 3)? as f32),
            unit: PressureUnit::MillimetersHg,
        })
    }

    /// Three digits of tenths of hectopascal (pressure tendency change)
    pub fn from_tenths_hectopascal(s: &str) -> Option<Self> {
        if s == "///" {
            return Some(Self::not_reported(PressureUnit::Hectopascal));
        }
        Some(Self {
            value: Some(parse_digits(s, 3)? as f32 / 10.0),
            unit: PressureUnit::Hectopascal,
        })
    }

    pub fn is_reported(&self) -> bool {
        self.value.is_some()
    }
}

// =============================================================================
// Precipitation
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrecipitationUnit {
    Millimeters,
    Inches,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Precipitation {
    pub value: Option<f32>,
    pub unit: PrecipitationUnit,
}

impl Precipitation {
    pub fn not_reported(unit: PrecipitationUnit) -> Self {
        Self { value: None, unit }
    }

    pub fn new(value: f32, unit: PrecipitationUnit) -> Self {
        Self {
            value: Some(value),
            unit,
        }
    }

    /// Digits scaled down by `divisor` inches; a run of `/` is not reported
    pub fn from_inches(s: &str, len: usize, divisor: f32) -> Option<Self> {
        if s.len() == len && is_not_reported(s) {
            return Some(Self::not_reported(PrecipitationUnit::Inches));
        }
        Some(Self::new(
            parse_digits(s, len)? as f32 / divisor,
            PrecipitationUnit::Inches,
        ))
    }

    pub fn is_reported(&self) -> bool {
        self.value.is_some()
    }
}

// =============================================================================
// Direction
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinal {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Cardinal {
    pub fn from_abbreviation(s: &str) -> Option<Self> {
        match s {
            "N" => Some(Cardinal::North),
            "NE" => Some(Cardinal::NorthEast),
            "E" => Some(Cardinal::East),
            "SE" => Some(Cardinal::SouthEast),
            "S" => Some(Cardinal::South),
            "SW" => Some(Cardinal::SouthWest),
            "W" => Some(Cardinal::West),
            "NW" => Some(Cardinal::NorthWest),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    NotReported,
    Variable,
    Degrees(u16),
    Cardinal(Cardinal),
    Overhead,
    AllQuadrants,
    NoDirectionalVariation,
}

impl Direction {
    /// Three digits of degrees, `VRB`, or `///`
    pub fn from_degrees(s: &str) -> Option<Self> {
        match s {
            "///" => Some(Direction::NotReported),
            "VRB" => Some(Direction::Variable),
            _ => Some(Direction::Degrees(parse_digits(s, 3)? as u16)),
        }
    }

    /// Compass abbreviation or one of `OHD`, `ALQDS`, `NDV`
    pub fn from_cardinal(s: &str) -> Option<Self> {
        match s {
            "OHD" => Some(Direction::Overhead),
            "ALQDS" => Some(Direction::AllQuadrants),
            "NDV" => Some(Direction::NoDirectionalVariation),
            _ => Cardinal::from_abbreviation(s).map(Direction::Cardinal),
        }
    }

    pub fn is_reported(&self) -> bool {
        !matches!(self, Direction::NotReported)
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Direction::Degrees(deg) => *deg <= 360 && deg % 10 == 0,
            _ => true,
        }
    }
}

// =============================================================================
// Runway
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunwayDesignator {
    #[default]
    None,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runway {
    pub number: u8,
    pub designator: RunwayDesignator,
}

impl Runway {
    /// Two digits with an optional `L`/`C`/`R` designator
    pub fn from_designation(s: &str) -> Option<Self> {
        let number = parse_digits(s.get(0..2)?, 2)? as u8;
        let designator = match &s[2..] {
            "" => RunwayDesignator::None,
            "L" => RunwayDesignator::Left,
            "C" => RunwayDesignator::Center,
            "R" => RunwayDesignator::Right,
            _ => return None,
        };
        Some(Self { number, designator })
    }

    /// `R32L` or `RWY32L` as used by secondary-location remarks
    pub fn from_location(s: &str) -> Option<Self> {
        let rest = s.strip_prefix("RWY").or_else(|| s.strip_prefix('R'))?;
        Self::from_designation(rest)
    }

    /// Code 88 reports a state for all runways
    pub fn is_all_runways(&self) -> bool {
        self.number == 88
    }

    /// Code 99 repeats the previous runway message
    pub fn is_message_repetition(&self) -> bool {
        self.number == 99
    }

    pub fn is_valid(&self) -> bool {
        self.number <= 36 || self.is_all_runways() || self.is_message_repetition()
    }
}

// =============================================================================
// Surface friction
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrakingAction {
    Poor,
    MediumPoor,
    Medium,
    MediumGood,
    Good,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceFriction {
    NotReported,
    /// Friction coefficient in hundredths
    Coefficient(u8),
    BrakingAction(BrakingAction),
    Unreliable,
    /// Codes 96-98 are reserved; kept so the group round-trips
    Reserved(u8),
}

impl SurfaceFriction {
    pub fn from_code(s: &str) -> Option<Self> {
        if s == "//" {
            return Some(SurfaceFriction::NotReported);
        }
        let code = parse_digits(s, 2)? as u8;
        Some(match code {
            0..=90 => SurfaceFriction::Coefficient(code),
            91 => SurfaceFriction::BrakingAction(BrakingAction::Poor),
            92 => SurfaceFriction::BrakingAction(BrakingAction::MediumPoor),
            93 => SurfaceFriction::BrakingAction(BrakingAction::Medium),
            94 => SurfaceFriction::BrakingAction(BrakingAction::MediumGood),
            95 => SurfaceFriction::BrakingAction(BrakingAction::Good),
            99 => SurfaceFriction::Unreliable,
            _ => SurfaceFriction::Reserved(code),
        })
    }

    pub fn is_reported(&self) -> bool {
        !matches!(self, SurfaceFriction::NotReported)
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, SurfaceFriction::Reserved(_))
    }
}

// =============================================================================
// Wave height
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateOfSurface {
    CalmGlassy,
    CalmRippled,
    Smooth,
    Slight,
    Moderate,
    Rough,
    VeryRough,
    High,
    VeryHigh,
    Phenomenal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveHeight {
    NotReported,
    StateOfSurface(StateOfSurface),
    /// Significant wave height in decimetres
    Height(u16),
}

impl WaveHeight {
    pub fn from_state_code(s: &str) -> Option<Self> {
        if s == "/" {
            return Some(WaveHeight::NotReported);
        }
        let state = match parse_digits(s, 1)? {
            0 => StateOfSurface::CalmGlassy,
            1 => StateOfSurface::CalmRippled,
            2 => StateOfSurface::Smooth,
            3 => StateOfSurface::Slight,
            4 => StateOfSurface::Moderate,
            5 => StateOfSurface::Rough,
            6 => StateOfSurface::VeryRough,
            7 => StateOfSurface::High,
            8 => StateOfSurface::VeryHigh,
            _ => StateOfSurface::Phenomenal,
        };
        Some(WaveHeight::StateOfSurface(state))
    }

    pub fn from_decimeters(s: &str) -> Option<Self> {
        if is_not_reported(s) {
            return Some(WaveHeight::NotReported);
        }
        if !(1..=3).contains(&s.len()) {
            return None;
        }
        Some(WaveHeight::Height(parse_digits(s, s.len())? as u16))
    }

    pub fn is_reported(&self) -> bool {
        !matches!(self, WaveHeight::NotReported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_parsing_and_validity() {
        let time = Time::from_ddhhmm("112052").unwrap();
        assert_eq!(time, Time::new(Some(11), 20, 52));
        assert!(time.is_valid());

        assert!(!Time::from_ddhhmm("322052").unwrap().is_valid());
        assert!(!Time::from_hhmm("2460").unwrap().is_valid());
        assert!(Time::from_hhmm("2400").unwrap().is_valid());
        assert!(Time::from_ddhhmm("11205").is_none());
    }

    #[test]
    fn test_time_date_before_reference() {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        let same_month = Time::new(Some(4), 18, 30).date_before(reference).unwrap();
        assert_eq!(same_month.to_string(), "2024-03-04 18:30:00");

        // Day after the reference day belongs to the previous month
        let previous = Time::new(Some(29), 12, 0).date_before(reference).unwrap();
        assert_eq!(previous.to_string(), "2024-02-29 12:00:00");

        // February has no 31st; search continues to January
        let skipped = Time::new(Some(31), 6, 0).date_before(reference).unwrap();
        assert_eq!(skipped.to_string(), "2024-01-31 06:00:00");

        let rollover = Time::new(Some(4), 24, 0).date_before(reference).unwrap();
        assert_eq!(rollover.to_string(), "2024-03-05 00:00:00");
    }

    #[test]
    fn test_event_time_forms() {
        let minutes = EventTime::from_digits("15").unwrap();
        assert_eq!(minutes.hour, None);
        assert_eq!(minutes.minute, 15);

        let full = EventTime::from_digits("1530").unwrap();
        assert_eq!(full.hour, Some(15));
        assert!(full.is_valid());

        assert!(!EventTime::from_digits("2575").unwrap().is_valid());
        assert!(EventTime::from_digits("153").is_none());
    }

    #[test]
    fn test_distance_forms() {
        let ten_km = Distance::from_meters("9999").unwrap();
        assert_eq!(ten_km.modifier, DistanceModifier::MoreThan);
        assert_eq!(ten_km.value(), Some(10_000.0));

        assert!(!Distance::from_meters("////").unwrap().is_reported());

        let half = Distance::from_miles("1/2").unwrap();
        assert_eq!(half.value(), Some(0.5));

        let p6 = Distance::from_miles("P6").unwrap();
        assert_eq!(p6.modifier, DistanceModifier::MoreThan);
        assert_eq!(p6.value(), Some(6.0));

        let ceiling = Distance::from_height("025").unwrap();
        assert_eq!(ceiling.value(), Some(2500.0));
        assert_eq!(ceiling.unit, DistanceUnit::Feet);
    }

    #[test]
    fn test_distance_whole_and_fraction() {
        let whole = Distance::from_miles_value("1").unwrap();
        let fraction = Distance::from_miles_value("3/4").unwrap();
        let combined = whole.with_fraction(&fraction).unwrap();
        assert_eq!(combined.value(), Some(1.75));
        assert!(combined.is_valid());

        assert!(!Distance::from_miles_value("5/4").unwrap().is_valid());
        assert!(fraction.with_fraction(&fraction).is_none());
    }

    #[test]
    fn test_temperature_encodings() {
        assert_eq!(Temperature::from_whole("M05").unwrap().value, Some(-5.0));
        assert_eq!(Temperature::from_whole("33").unwrap().value, Some(33.0));
        assert!(!Temperature::from_whole("//").unwrap().is_reported());

        let precise = Temperature::from_tenths("1033").unwrap();
        assert_eq!(precise.value, Some(-3.3));
        assert!(precise.precise);
        assert!(Temperature::from_tenths("2033").is_none());
    }

    #[test]
    fn test_pressure_encodings() {
        assert_eq!(Pressure::from_inches_hg("2992").unwrap().value, Some(29.92));
        assert_eq!(Pressure::from_hectopascal("1013").unwrap().value, Some(1013.0));
        assert_eq!(Pressure::from_sea_level("096").unwrap().value, Some(1009.6));
        assert_eq!(Pressure::from_sea_level("982").unwrap().value, Some(998.2));
    }

    #[test]
    fn test_surface_friction_reserved_codes() {
        assert_eq!(
            SurfaceFriction::from_code("55"),
            Some(SurfaceFriction::Coefficient(55))
        );
        let reserved = SurfaceFriction::from_code("97").unwrap();
        assert_eq!(reserved, SurfaceFriction::Reserved(97));
        assert!(!reserved.is_valid());
        assert!(!SurfaceFriction::from_code("//").unwrap().is_reported());
    }

    #[test]
    fn test_runway_designations() {
        let runway = Runway::from_location("RWY36").unwrap();
        assert_eq!(runway.number, 36);
        assert_eq!(runway.designator, RunwayDesignator::None);

        let left = Runway::from_location("R32L").unwrap();
        assert_eq!(left.designator, RunwayDesignator::Left);

        assert!(Runway::from_location("RWY3").is_none());
        assert!(Runway::from_designation("88").unwrap().is_all_runways());
        assert!(!Runway::from_designation("45").unwrap().is_valid());
    }

    #[test]
    fn test_direction_validity() {
        assert!(Direction::from_degrees("190").unwrap().is_valid());
        assert!(!Direction::from_degrees("365").unwrap().is_valid());
        assert!(!Direction::from_degrees("///").unwrap().is_reported());
        assert_eq!(
            Direction::from_cardinal("NE"),
            Some(Direction::Cardinal(Cardinal::NorthEast))
        );
    }
}
