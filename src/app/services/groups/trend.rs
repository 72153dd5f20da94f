//! Trends and forecast change periods
//!
//! A trend may span several tokens: `PROB30 TEMPO 1218/1222`, `TEMPO 1218/1222`,
//! `BECMG FM1100 TL1200`. A bare `DDHH/DDHH` time span is itself a trend group;
//! the grammar treats it specially as the TAF validity period.

use super::ReportGroup;
use crate::app::models::values::Time;
use crate::app::models::{AppendOutcome, ReportPart};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendType {
    NoSignificantChange,
    Becoming,
    Temporary,
    Intermittent,
    /// `FMddhhmm` / `FMhhmm` on its own
    From,
    /// `TLhhmm` on its own
    Until,
    /// `AThhmm` on its own
    At,
    /// `DDHH/DDHH`, optionally preceded by a probability
    TimeSpan,
    /// `PROB30` / `PROB40` still waiting for what it qualifies
    Probability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendGroup {
    pub trend: TrendType,
    pub probability: Option<u8>,
    pub time_from: Option<Time>,
    pub time_until: Option<Time>,
    pub time_at: Option<Time>,
}

/// Change time prefixes usable after a trend keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimePrefix {
    From,
    Until,
    At,
}

impl TrendGroup {
    fn new(trend: TrendType) -> Self {
        Self {
            trend,
            probability: None,
            time_from: None,
            time_until: None,
            time_at: None,
        }
    }

    /// Time span without a probability: the TAF validity period or a new
    /// forecast period inside the TAF body
    pub fn is_time_span(&self) -> bool {
        self.trend == TrendType::TimeSpan && self.probability.is_none()
    }

    fn has_time(&self) -> bool {
        self.time_from.is_some() || self.time_until.is_some() || self.time_at.is_some()
    }

    fn is_complete(&self) -> bool {
        self.time_at.is_some() || (self.time_from.is_some() && self.time_until.is_some())
    }

    fn set_span(&mut self, (from, until): (Time, Time)) {
        self.time_from = Some(from);
        self.time_until = Some(until);
    }

    /// Attach an `FM`/`TL`/`AT` time if that slot is still free
    fn set_prefixed_time(&mut self, prefix: TimePrefix, time: Time) -> bool {
        if self.time_at.is_some() {
            return false;
        }
        match prefix {
            TimePrefix::From if self.time_from.is_none() => self.time_from = Some(time),
            TimePrefix::Until if self.time_until.is_none() => self.time_until = Some(time),
            TimePrefix::At if !self.has_time() => self.time_at = Some(time),
            _ => return false,
        }
        true
    }
}

/// `DDHH/DDHH`
fn parse_time_span(token: &str) -> Option<(Time, Time)> {
    let (from, until) = token.split_once('/')?;
    Some((Time::from_ddhh(from)?, Time::from_ddhh(until)?))
}

/// `FM`/`TL`/`AT` followed by `hhmm` in METAR trends or `ddhhmm` in TAF
fn parse_prefixed_time(token: &str, part: ReportPart) -> Option<(TimePrefix, Time)> {
    let prefix = match token.get(0..2)? {
        "FM" => TimePrefix::From,
        "TL" => TimePrefix::Until,
        "AT" => TimePrefix::At,
        _ => return None,
    };
    let digits = &token[2..];
    let time = match part {
        ReportPart::Metar => Time::from_hhmm(digits)?,
        ReportPart::Taf => Time::from_ddhhmm(digits)?,
        _ => return None,
    };
    Some((prefix, time))
}

impl ReportGroup for TrendGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        match (token, part) {
            ("NOSIG", ReportPart::Metar) => return Some(Self::new(TrendType::NoSignificantChange)),
            ("BECMG", p) if p.is_body() => return Some(Self::new(TrendType::Becoming)),
            ("TEMPO", p) if p.is_body() => return Some(Self::new(TrendType::Temporary)),
            ("INTER", p) if p.is_body() => return Some(Self::new(TrendType::Intermittent)),
            ("PROB30", ReportPart::Taf) | ("PROB40", ReportPart::Taf) => {
                let mut group = Self::new(TrendType::Probability);
                group.probability = token[4..].parse().ok();
                return Some(group);
            }
            _ => {}
        }

        if matches!(part, ReportPart::Header | ReportPart::Taf) {
            if let Some(span) = parse_time_span(token) {
                let mut group = Self::new(TrendType::TimeSpan);
                group.set_span(span);
                return Some(group);
            }
        }

        let (prefix, time) = parse_prefixed_time(token, part)?;
        let mut group = Self::new(match prefix {
            TimePrefix::From => TrendType::From,
            TimePrefix::Until => TrendType::Until,
            TimePrefix::At => TrendType::At,
        });
        group.set_prefixed_time(prefix, time);
        Some(group)
    }

    fn append(&mut self, token: &str, part: ReportPart) -> AppendOutcome {
        if !self.accepts_append() {
            return AppendOutcome::NotAppended;
        }

        if self.trend == TrendType::Probability {
            match token {
                "TEMPO" => self.trend = TrendType::Temporary,
                "INTER" => self.trend = TrendType::Intermittent,
                _ => match parse_time_span(token) {
                    Some(span) => {
                        self.trend = TrendType::TimeSpan;
                        self.set_span(span);
                    }
                    None => return AppendOutcome::NotAppended,
                },
            }
            return AppendOutcome::Appended;
        }

        if part == ReportPart::Taf && !self.has_time() {
            if let Some(span) = parse_time_span(token) {
                self.set_span(span);
                return AppendOutcome::Appended;
            }
        }

        match parse_prefixed_time(token, part) {
            Some((prefix, time)) if self.set_prefixed_time(prefix, time) => {
                AppendOutcome::Appended
            }
            _ => AppendOutcome::NotAppended,
        }
    }

    fn accepts_append(&self) -> bool {
        match self.trend {
            TrendType::Probability => true,
            TrendType::Becoming | TrendType::Temporary | TrendType::Intermittent => {
                !self.is_complete()
            }
            TrendType::From => self.time_until.is_none(),
            _ => false,
        }
    }

    fn is_valid(&self) -> bool {
        if self.trend == TrendType::Probability {
            return false;
        }
        [self.time_from, self.time_until, self.time_at]
            .iter()
            .flatten()
            .all(Time::is_valid)
    }
}
