use super::ReportGroup;
use crate::app::models::ReportPart;
use crate::app::models::values::Time;
use serde::Serialize;

/// Report release time `DDHHMMZ`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportTimeGroup {
    pub time: Time,
}

impl ReportGroup for ReportTimeGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Header {
            return None;
        }
        let digits = token.strip_suffix('Z')?;
        Some(Self {
            time: Time::from_ddhhmm(digits)?,
        })
    }

    fn is_valid(&self) -> bool {
        self.time.is_valid()
    }
}
