//! Present, recent and remarks-event weather phenomena
//!
//! A phenomenon group is an optional qualifier (`+`, `-`, `VC`, `RE`), an
//! optional descriptor (`SH`, `TS`, `FZ`, ...) and up to three two-letter
//! phenomenon codes. Remarks append begin/end times: `RAB15E30SNB30`.

use super::ReportGroup;
use crate::app::models::ReportPart;
use crate::app::models::values::EventTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// One phenomenon followed by its begin/end times
static WEATHER_EVENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?(?:[A-Z]{2}){1,4}?)((?:[BE](?:\d{4}|\d{2}))+)").expect("valid regex")
});
static EVENT_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([BE])(\d{4}|\d{2})").expect("valid regex"));

const MAX_PHENOMENA: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeatherType {
    Current,
    Recent,
    /// Begin/end times in remarks
    Events,
    /// `NSW`
    NoSignificantWeather,
    /// `//`
    NotReported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Qualifier {
    #[default]
    None,
    Light,
    Heavy,
    Vicinity,
    Recent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Descriptor {
    #[default]
    None,
    Shallow,
    Partial,
    Patches,
    LowDrifting,
    Blowing,
    Showers,
    Thunderstorm,
    Freezing,
}

impl Descriptor {
    fn from_code(s: &str) -> Option<Self> {
        match s {
            "MI" => Some(Descriptor::Shallow),
            "PR" => Some(Descriptor::Partial),
            "BC" => Some(Descriptor::Patches),
            "DR" => Some(Descriptor::LowDrifting),
            "BL" => Some(Descriptor::Blowing),
            "SH" => Some(Descriptor::Showers),
            "TS" => Some(Descriptor::Thunderstorm),
            "FZ" => Some(Descriptor::Freezing),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phenomenon {
    Drizzle,
    Rain,
    Snow,
    SnowGrains,
    IceCrystals,
    IcePellets,
    Hail,
    SmallHail,
    UnknownPrecipitation,
    Mist,
    Fog,
    Smoke,
    VolcanicAsh,
    Dust,
    Sand,
    Haze,
    Spray,
    DustWhirls,
    Squalls,
    FunnelCloud,
    Sandstorm,
    Duststorm,
}

impl Phenomenon {
    fn from_code(s: &str) -> Option<Self> {
        let phenomenon = match s {
            "DZ" => Phenomenon::Drizzle,
            "RA" => Phenomenon::Rain,
            "SN" => Phenomenon::Snow,
            "SG" => Phenomenon::SnowGrains,
            "IC" => Phenomenon::IceCrystals,
            "PL" => Phenomenon::IcePellets,
            "GR" => Phenomenon::Hail,
            "GS" => Phenomenon::SmallHail,
            "UP" => Phenomenon::UnknownPrecipitation,
            "BR" => Phenomenon::Mist,
            "FG" => Phenomenon::Fog,
            "FU" => Phenomenon::Smoke,
            "VA" => Phenomenon::VolcanicAsh,
            "DU" => Phenomenon::Dust,
            "SA" => Phenomenon::Sand,
            "HZ" => Phenomenon::Haze,
            "PY" => Phenomenon::Spray,
            "PO" => Phenomenon::DustWhirls,
            "SQ" => Phenomenon::Squalls,
            "FC" => Phenomenon::FunnelCloud,
            "SS" => Phenomenon::Sandstorm,
            "DS" => Phenomenon::Duststorm,
            _ => return None,
        };
        Some(phenomenon)
    }

    pub fn is_precipitation(&self) -> bool {
        matches!(
            self,
            Phenomenon::Drizzle
                | Phenomenon::Rain
                | Phenomenon::Snow
                | Phenomenon::SnowGrains
                | Phenomenon::IceCrystals
                | Phenomenon::IcePellets
                | Phenomenon::Hail
                | Phenomenon::SmallHail
                | Phenomenon::UnknownPrecipitation
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventKind {
    Began,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherEvent {
    pub kind: EventKind,
    pub time: EventTime,
}

/// Qualifier, descriptor and phenomena of one weather entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct WeatherPhenomena {
    pub qualifier: Qualifier,
    pub descriptor: Descriptor,
    pub phenomena: Vec<Phenomenon>,
    pub events: Vec<WeatherEvent>,
}

impl WeatherPhenomena {
    fn parse(s: &str, allow_recent: bool) -> Option<Self> {
        let (qualifier, rest) = if let Some(rest) = s.strip_prefix('+') {
            (Qualifier::Heavy, rest)
        } else if let Some(rest) = s.strip_prefix('-') {
            (Qualifier::Light, rest)
        } else if let Some(rest) = s.strip_prefix("VC") {
            (Qualifier::Vicinity, rest)
        } else if let Some(rest) = s.strip_prefix("RE").filter(|_| allow_recent) {
            (Qualifier::Recent, rest)
        } else {
            (Qualifier::None, s)
        };

        if rest.len() % 2 != 0 || !rest.is_ascii() {
            return None;
        }

        let mut codes = (0..rest.len()).step_by(2).map(|i| &rest[i..i + 2]).peekable();
        let descriptor = match codes.peek().and_then(|code| Descriptor::from_code(code)) {
            Some(descriptor) => {
                codes.next();
                descriptor
            }
            None => Descriptor::None,
        };
        let phenomena = codes
            .map(Phenomenon::from_code)
            .collect::<Option<Vec<_>>>()?;

        if phenomena.len() > MAX_PHENOMENA {
            return None;
        }
        if descriptor == Descriptor::None && phenomena.is_empty() {
            return None;
        }
        Some(Self {
            qualifier,
            descriptor,
            phenomena,
            events: Vec::new(),
        })
    }

    pub fn is_valid(&self) -> bool {
        match self.qualifier {
            Qualifier::Light | Qualifier::Heavy => self.phenomena.iter().any(|p| {
                p.is_precipitation()
                    || matches!(
                        p,
                        Phenomenon::Sandstorm | Phenomenon::Duststorm | Phenomenon::FunnelCloud
                    )
            }),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherGroup {
    pub weather_type: WeatherType,
    pub entries: Vec<WeatherPhenomena>,
}

impl WeatherGroup {
    fn new(weather_type: WeatherType, entries: Vec<WeatherPhenomena>) -> Self {
        Self {
            weather_type,
            entries,
        }
    }

    fn parse_events(token: &str) -> Option<Self> {
        let mut entries = Vec::new();
        let mut rest = token;
        while !rest.is_empty() {
            let caps = WEATHER_EVENT.captures(rest)?;
            let mut entry = WeatherPhenomena::parse(&caps[1], false)?;
            entry.events = EVENT_TIME
                .captures_iter(&caps[2])
                .map(|ev| {
                    Some(WeatherEvent {
                        kind: if &ev[1] == "B" {
                            EventKind::Began
                        } else {
                            EventKind::Ended
                        },
                        time: EventTime::from_digits(&ev[2])?,
                    })
                })
                .collect::<Option<Vec<_>>>()?;
            entries.push(entry);
            rest = &rest[caps.get(0)?.end()..];
        }
        if entries.is_empty() {
            return None;
        }
        Some(Self::new(WeatherType::Events, entries))
    }
}

impl ReportGroup for WeatherGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        match part {
            ReportPart::Metar | ReportPart::Taf => {
                if token == "NSW" {
                    return Some(Self::new(WeatherType::NoSignificantWeather, Vec::new()));
                }
                if token == "//" && part == ReportPart::Metar {
                    return Some(Self::new(WeatherType::NotReported, Vec::new()));
                }
                let allow_recent = part == ReportPart::Metar;
                let entry = WeatherPhenomena::parse(token, allow_recent)?;
                let weather_type = if entry.qualifier == Qualifier::Recent {
                    WeatherType::Recent
                } else {
                    WeatherType::Current
                };
                Some(Self::new(weather_type, vec![entry]))
            }
            ReportPart::Remarks => Self::parse_events(token),
            _ => None,
        }
    }

    fn is_valid(&self) -> bool {
        self.entries.iter().all(|entry| {
            entry.is_valid() && entry.events.iter().all(|event| event.time.is_valid())
        })
    }
}
