use super::ReportGroup;
use crate::app::models::values::{Precipitation, PrecipitationUnit, parse_digits};
use crate::app::models::{AppendOutcome, ReportPart};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrecipitationType {
    /// `Prrrr`, hundredths of inch
    TotalLastHour,
    /// `6rrrr`, 3- or 6-hourly total
    FrozenOrTotal3Or6Hourly,
    /// `7rrrr`
    Total24Hourly,
    /// `4/sss`, whole inches
    SnowDepthOnGround,
    /// `931sss`, tenths of inch
    Snow6Hourly,
    /// `933sss`, tenths of inch
    WaterEquivalentOfSnow,
    /// `SNINCR i/t`: increase in the last hour over total depth
    SnowIncreasingRapidly,
}

/// Precipitation and snow amounts reported in remarks
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrecipitationGroup {
    pub precipitation_type: PrecipitationType,
    pub amount: Precipitation,
    /// Total snow depth, `SNINCR` only
    pub total: Option<Precipitation>,
    #[serde(skip)]
    incomplete: bool,
}

impl PrecipitationGroup {
    fn new(precipitation_type: PrecipitationType, amount: Precipitation) -> Self {
        Self {
            precipitation_type,
            amount,
            total: None,
            incomplete: false,
        }
    }
}

/// One to three digits of whole inches
fn whole_inches(s: &str) -> Option<Precipitation> {
    if !(1..=3).contains(&s.len()) {
        return None;
    }
    Some(Precipitation::new(
        parse_digits(s, s.len())? as f32,
        PrecipitationUnit::Inches,
    ))
}

impl ReportGroup for PrecipitationGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Remarks {
            return None;
        }
        if token == "SNINCR" {
            let mut group = Self::new(
                PrecipitationType::SnowIncreasingRapidly,
                Precipitation::not_reported(PrecipitationUnit::Inches),
            );
            group.incomplete = true;
            return Some(group);
        }

        let (precipitation_type, amount) = if let Some(digits) = token.strip_prefix("931") {
            (PrecipitationType::Snow6Hourly, Precipitation::from_inches(digits, 3, 10.0)?)
        } else if let Some(digits) = token.strip_prefix("933") {
            (PrecipitationType::WaterEquivalentOfSnow, Precipitation::from_inches(digits, 3, 10.0)?)
        } else if let Some(digits) = token.strip_prefix("4/") {
            (PrecipitationType::SnowDepthOnGround, Precipitation::from_inches(digits, 3, 1.0)?)
        } else if let Some(digits) = token.strip_prefix('P') {
            (PrecipitationType::TotalLastHour, Precipitation::from_inches(digits, 4, 100.0)?)
        } else if let Some(digits) = token.strip_prefix('6') {
            (PrecipitationType::FrozenOrTotal3Or6Hourly, Precipitation::from_inches(digits, 4, 100.0)?)
        } else if let Some(digits) = token.strip_prefix('7') {
            (PrecipitationType::Total24Hourly, Precipitation::from_inches(digits, 4, 100.0)?)
        } else {
            return None;
        };
        Some(Self::new(precipitation_type, amount))
    }

    fn append(&mut self, token: &str, _part: ReportPart) -> AppendOutcome {
        if !self.incomplete {
            return AppendOutcome::NotAppended;
        }
        let parsed = token
            .split_once('/')
            .and_then(|(increase, total)| Some((whole_inches(increase)?, whole_inches(total)?)));
        match parsed {
            Some((increase, total)) => {
                self.amount = increase;
                self.total = Some(total);
                self.incomplete = false;
                AppendOutcome::Appended
            }
            None => AppendOutcome::NotAppended,
        }
    }

    fn accepts_append(&self) -> bool {
        self.incomplete
    }

    fn is_valid(&self) -> bool {
        !self.incomplete
    }
}
