//! Group types recognized in METAR and TAF reports
//!
//! Every group type implements [`ReportGroup`]: a pure `parse` that looks at one
//! token in one [`ReportPart`], plus an `append` that lets an open group absorb
//! the following token when its format spans several tokens (`CIG 025 RWY36`,
//! `1 3/4SM`, `PK WND 28045/15`).
//!
//! ## Organization
//!
//! - [`keyword`], [`location`], [`report_time`], [`trend`] - header and grammar keywords
//! - [`wind`], [`visibility`], [`cloud`], [`weather`], [`temperature`], [`pressure`] - body
//! - [`runway_state`], [`sea_surface`], [`layer_forecast`] - body, METAR or TAF only
//! - [`min_max_temperature`], [`precipitation`], [`pressure_tendency`],
//!   [`low_mid_high_cloud`], [`lightning`], [`misc`] - mostly remarks
//!
//! [`Group`] is the closed sum of all of them; adding a variant forces every
//! `match` over groups (classifier, visitor, recognizer table) to be updated.

pub mod cloud;
pub mod keyword;
pub mod layer_forecast;
pub mod lightning;
pub mod location;
pub mod low_mid_high_cloud;
pub mod min_max_temperature;
pub mod misc;
pub mod precipitation;
pub mod pressure;
pub mod pressure_tendency;
pub mod report_time;
pub mod runway_state;
pub mod sea_surface;
pub mod temperature;
pub mod trend;
pub mod unknown;
pub mod visibility;
pub mod weather;
pub mod wind;

#[cfg(test)]
pub mod tests;

pub use cloud::CloudGroup;
pub use keyword::KeywordGroup;
pub use layer_forecast::LayerForecastGroup;
pub use lightning::LightningGroup;
pub use location::LocationGroup;
pub use low_mid_high_cloud::LowMidHighCloudGroup;
pub use min_max_temperature::MinMaxTemperatureGroup;
pub use misc::MiscGroup;
pub use precipitation::PrecipitationGroup;
pub use pressure::PressureGroup;
pub use pressure_tendency::PressureTendencyGroup;
pub use report_time::ReportTimeGroup;
pub use runway_state::RunwayStateGroup;
pub use sea_surface::SeaSurfaceGroup;
pub use temperature::TemperatureGroup;
pub use trend::TrendGroup;
pub use unknown::UnknownGroup;
pub use visibility::VisibilityGroup;
pub use weather::WeatherGroup;
pub use wind::WindGroup;

use crate::app::models::{AppendOutcome, ReportPart};
use serde::Serialize;
use std::fmt;

/// Behaviour shared by every group type
pub trait ReportGroup: Sized {
    /// Recognize a single token; must not look at any other token
    fn parse(token: &str, part: ReportPart) -> Option<Self>;

    /// Offer the next token to this (still open) group
    fn append(&mut self, _token: &str, _part: ReportPart) -> AppendOutcome {
        AppendOutcome::NotAppended
    }

    /// Whether another token could possibly extend this group
    fn accepts_append(&self) -> bool {
        false
    }

    /// Semantic validity; incomplete or invalidated groups report false
    fn is_valid(&self) -> bool {
        true
    }
}

/// Type tag for each [`Group`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GroupKind {
    Keyword,
    Location,
    ReportTime,
    Trend,
    Wind,
    Visibility,
    Cloud,
    Weather,
    Temperature,
    Pressure,
    RunwayState,
    SeaSurface,
    MinMaxTemperature,
    Precipitation,
    LayerForecast,
    PressureTendency,
    LowMidHighCloud,
    Lightning,
    Misc,
    Unknown,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GroupKind::Keyword => "keyword",
            GroupKind::Location => "location",
            GroupKind::ReportTime => "report-time",
            GroupKind::Trend => "trend",
            GroupKind::Wind => "wind",
            GroupKind::Visibility => "visibility",
            GroupKind::Cloud => "cloud",
            GroupKind::Weather => "weather",
            GroupKind::Temperature => "temperature",
            GroupKind::Pressure => "pressure",
            GroupKind::RunwayState => "runway-state",
            GroupKind::SeaSurface => "sea-surface",
            GroupKind::MinMaxTemperature => "min-max-temperature",
            GroupKind::Precipitation => "precipitation",
            GroupKind::LayerForecast => "layer-forecast",
            GroupKind::PressureTendency => "pressure-tendency",
            GroupKind::LowMidHighCloud => "low-mid-high-cloud",
            GroupKind::Lightning => "lightning",
            GroupKind::Misc => "misc",
            GroupKind::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// One recognized semantic unit of a report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Group {
    Keyword(KeywordGroup),
    Location(LocationGroup),
    ReportTime(ReportTimeGroup),
    Trend(TrendGroup),
    Wind(WindGroup),
    Visibility(VisibilityGroup),
    Cloud(CloudGroup),
    Weather(WeatherGroup),
    Temperature(TemperatureGroup),
    Pressure(PressureGroup),
    RunwayState(RunwayStateGroup),
    SeaSurface(SeaSurfaceGroup),
    MinMaxTemperature(MinMaxTemperatureGroup),
    Precipitation(PrecipitationGroup),
    LayerForecast(LayerForecastGroup),
    PressureTendency(PressureTendencyGroup),
    LowMidHighCloud(LowMidHighCloudGroup),
    Lightning(LightningGroup),
    Misc(MiscGroup),
    Unknown(UnknownGroup),
}

/// Expand `$body` once per variant with `$g` bound to the inner group
macro_rules! for_each_variant {
    ($group:expr, $g:ident => $body:expr) => {
        match $group {
            Group::Keyword($g) => $body,
            Group::Location($g) => $body,
            Group::ReportTime($g) => $body,
            Group::Trend($g) => $body,
            Group::Wind($g) => $body,
            Group::Visibility($g) => $body,
            Group::Cloud($g) => $body,
            Group::Weather($g) => $body,
            Group::Temperature($g) => $body,
            Group::Pressure($g) => $body,
            Group::RunwayState($g) => $body,
            Group::SeaSurface($g) => $body,
            Group::MinMaxTemperature($g) => $body,
            Group::Precipitation($g) => $body,
            Group::LayerForecast($g) => $body,
            Group::PressureTendency($g) => $body,
            Group::LowMidHighCloud($g) => $body,
            Group::Lightning($g) => $body,
            Group::Misc($g) => $body,
            Group::Unknown($g) => $body,
        }
    };
}

impl Group {
    pub fn kind(&self) -> GroupKind {
        match self {
            Group::Keyword(_) => GroupKind::Keyword,
            Group::Location(_) => GroupKind::Location,
            Group::ReportTime(_) => GroupKind::ReportTime,
            Group::Trend(_) => GroupKind::Trend,
            Group::Wind(_) => GroupKind::Wind,
            Group::Visibility(_) => GroupKind::Visibility,
            Group::Cloud(_) => GroupKind::Cloud,
            Group::Weather(_) => GroupKind::Weather,
            Group::Temperature(_) => GroupKind::Temperature,
            Group::Pressure(_) => GroupKind::Pressure,
            Group::RunwayState(_) => GroupKind::RunwayState,
            Group::SeaSurface(_) => GroupKind::SeaSurface,
            Group::MinMaxTemperature(_) => GroupKind::MinMaxTemperature,
            Group::Precipitation(_) => GroupKind::Precipitation,
            Group::LayerForecast(_) => GroupKind::LayerForecast,
            Group::PressureTendency(_) => GroupKind::PressureTendency,
            Group::LowMidHighCloud(_) => GroupKind::LowMidHighCloud,
            Group::Lightning(_) => GroupKind::Lightning,
            Group::Misc(_) => GroupKind::Misc,
            Group::Unknown(_) => GroupKind::Unknown,
        }
    }

    pub fn append(&mut self, token: &str, part: ReportPart) -> AppendOutcome {
        for_each_variant!(self, g => g.append(token, part))
    }

    pub fn accepts_append(&self) -> bool {
        for_each_variant!(self, g => g.accepts_append())
    }

    pub fn is_valid(&self) -> bool {
        for_each_variant!(self, g => g.is_valid())
    }
}

macro_rules! impl_from_group {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Group {
                fn from(group: $ty) -> Self {
                    Group::$variant(group)
                }
            }
        )*
    };
}

impl_from_group!(
    Keyword(KeywordGroup),
    Location(LocationGroup),
    ReportTime(ReportTimeGroup),
    Trend(TrendGroup),
    Wind(WindGroup),
    Visibility(VisibilityGroup),
    Cloud(CloudGroup),
    Weather(WeatherGroup),
    Temperature(TemperatureGroup),
    Pressure(PressureGroup),
    RunwayState(RunwayStateGroup),
    SeaSurface(SeaSurfaceGroup),
    MinMaxTemperature(MinMaxTemperatureGroup),
    Precipitation(PrecipitationGroup),
    LayerForecast(LayerForecastGroup),
    PressureTendency(PressureTendencyGroup),
    LowMidHighCloud(LowMidHighCloudGroup),
    Lightning(LightningGroup),
    Misc(MiscGroup),
    Unknown(UnknownGroup),
);
