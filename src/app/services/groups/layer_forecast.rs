use super::ReportGroup;
use crate::app::models::ReportPart;
use crate::app::models::values::{Distance, DistanceUnit, parse_digits};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IcingIntensity {
    TraceOrNone,
    LightMixed,
    LightRimeInCloud,
    LightClearInPrecipitation,
    ModerateMixed,
    ModerateRimeInCloud,
    ModerateClearInPrecipitation,
    SevereMixed,
    SevereRimeInCloud,
    SevereClearInPrecipitation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TurbulenceIntensity {
    None,
    Light,
    ModerateInClearAirOccasional,
    ModerateInClearAirFrequent,
    ModerateInCloudOccasional,
    ModerateInCloudFrequent,
    SevereInClearAirOccasional,
    SevereInClearAirFrequent,
    SevereInCloudOccasional,
    SevereInCloudFrequent,
    Extreme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayerHazard {
    Icing(IcingIntensity),
    Turbulence(TurbulenceIntensity),
}

/// TAF icing `6Ihhht` and turbulence `5Bhhht` layer forecasts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerForecastGroup {
    pub hazard: LayerHazard,
    pub base_height: Distance,
    pub top_height: Distance,
}

fn icing(code: char) -> Option<IcingIntensity> {
    use IcingIntensity::*;
    let intensity = match code {
        '0' => TraceOrNone,
        '1' => LightMixed,
        '2' => LightRimeInCloud,
        '3' => LightClearInPrecipitation,
        '4' => ModerateMixed,
        '5' => ModerateRimeInCloud,
        '6' => ModerateClearInPrecipitation,
        '7' => SevereMixed,
        '8' => SevereRimeInCloud,
        '9' => SevereClearInPrecipitation,
        _ => return None,
    };
    Some(intensity)
}

fn turbulence(code: char) -> Option<TurbulenceIntensity> {
    use TurbulenceIntensity::*;
    let intensity = match code {
        '0' => None,
        '1' => Light,
        '2' => ModerateInClearAirOccasional,
        '3' => ModerateInClearAirFrequent,
        '4' => ModerateInCloudOccasional,
        '5' => ModerateInCloudFrequent,
        '6' => SevereInClearAirOccasional,
        '7' => SevereInClearAirFrequent,
        '8' => SevereInCloudOccasional,
        '9' => SevereInCloudFrequent,
        'X' => Extreme,
        _ => return Option::None,
    };
    Some(intensity)
}

impl ReportGroup for LayerForecastGroup {
    fn parse(token: &str, part: ReportPart) -> Option<Self> {
        if part != ReportPart::Taf || token.len() != 6 || !token.is_ascii() {
            return None;
        }
        let mut chars = token.chars();
        let hazard = match (chars.next()?, chars.next()?) {
            ('6', code) => LayerHazard::Icing(icing(code)?),
            ('5', code) => LayerHazard::Turbulence(turbulence(code)?),
            _ => return None,
        };
        let base = parse_digits(&token[2..5], 3)? * 100;
        let thickness = parse_digits(&token[5..6], 1)? * 1000;
        Some(Self {
            hazard,
            base_height: Distance::new(base, DistanceUnit::Feet),
            top_height: Distance::new(base + thickness, DistanceUnit::Feet),
        })
    }
}
