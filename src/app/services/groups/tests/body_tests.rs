//! Single-token recognition in the header and report bodies

use super::*;
use crate::app::models::values::{
    Direction, DistanceModifier, DistanceUnit, RunwayDesignator, SpeedUnit, SurfaceFriction,
    WaveHeight,
};
use crate::app::services::groups::cloud::{CloudAmount, CloudGroup, CloudType, ConvectiveType};
use crate::app::services::groups::keyword::{Keyword, KeywordGroup};
use crate::app::services::groups::layer_forecast::{LayerForecastGroup, LayerHazard, TurbulenceIntensity};
use crate::app::services::groups::location::LocationGroup;
use crate::app::services::groups::pressure::{PressureGroup, PressureType};
use crate::app::services::groups::report_time::ReportTimeGroup;
use crate::app::services::groups::runway_state::{
    ContaminationExtent, DepositDepth, Deposits, RunwayStateGroup, RunwayStateType,
};
use crate::app::services::groups::sea_surface::SeaSurfaceGroup;
use crate::app::services::groups::temperature::TemperatureGroup;
use crate::app::services::groups::trend::{TrendGroup, TrendType};
use crate::app::services::groups::visibility::{RvrTrend, VisibilityGroup, VisibilityType};
use crate::app::services::groups::weather::{Descriptor, Phenomenon, Qualifier, WeatherGroup, WeatherType};
use crate::app::services::groups::wind::{WindGroup, WindType};

#[test]
fn test_keywords_respect_report_part() {
    let metar: KeywordGroup = parse_as("METAR", ReportPart::Header);
    assert_eq!(metar.keyword, Keyword::Metar);

    assert!(KeywordGroup::parse("METAR", ReportPart::Metar).is_none());
    assert!(KeywordGroup::parse("AUTO", ReportPart::Taf).is_none());
    assert!(KeywordGroup::parse("AO2", ReportPart::Metar).is_none());
    assert!(KeywordGroup::parse("$", ReportPart::Header).is_none());

    // Grammar keywords must reach the grammar from the body too
    assert!(KeywordGroup::parse("NIL", ReportPart::Metar).is_some());
    assert!(KeywordGroup::parse("RMK", ReportPart::Taf).is_some());
}

#[test]
fn test_location_and_report_time() {
    let location: LocationGroup = parse_as("KDDC", ReportPart::Header);
    assert_eq!(location.icao, "KDDC");
    assert!(LocationGroup::parse("K1DC", ReportPart::Header).is_some());
    assert!(LocationGroup::parse("1KDC", ReportPart::Header).is_none());
    assert!(LocationGroup::parse("KDDC", ReportPart::Metar).is_none());

    let time: ReportTimeGroup = parse_as("112052Z", ReportPart::Header);
    assert_eq!(time.time.day, Some(11));
    assert_eq!(time.time.hour, 20);
    assert_eq!(time.time.minute, 52);
    assert!(time.is_valid());

    let bad: ReportTimeGroup = parse_as("112572Z", ReportPart::Header);
    assert!(!bad.is_valid());
}

#[test]
fn test_time_span_recognized_in_header_and_taf_only() {
    let span: TrendGroup = parse_as("1118/1224", ReportPart::Header);
    assert!(span.is_time_span());
    assert_eq!(span.time_from.unwrap().day, Some(11));
    assert_eq!(span.time_until.unwrap().hour, 24);
    assert!(span.is_valid());

    assert!(TrendGroup::parse("1118/1224", ReportPart::Metar).is_none());
    assert!(TrendGroup::parse("NOSIG", ReportPart::Taf).is_none());
}

#[test]
fn test_surface_wind_forms() {
    let wind: WindGroup = parse_as("19023G34KT", ReportPart::Metar);
    assert_eq!(wind.wind_type, WindType::SurfaceWind);
    assert_eq!(wind.direction, Direction::Degrees(190));
    assert_eq!(wind.speed.value, Some(23));
    assert_eq!(wind.gust.value, Some(34));
    assert_eq!(wind.speed.unit, SpeedUnit::Knots);
    assert!(wind.is_valid());

    let calm: WindGroup = parse_as("00000KT", ReportPart::Metar);
    assert!(calm.is_calm());

    let variable: WindGroup = parse_as("VRB03MPS", ReportPart::Taf);
    assert_eq!(variable.direction, Direction::Variable);
    assert_eq!(variable.speed.unit, SpeedUnit::MetersPerSecond);

    let missing: WindGroup = parse_as("/////KT", ReportPart::Metar);
    assert!(!missing.direction.is_reported());
    assert!(!missing.speed.is_reported());

    // Gust must exceed the mean speed
    let bad_gust: WindGroup = parse_as("19023G20KT", ReportPart::Metar);
    assert!(!bad_gust.is_valid());
}

#[test]
fn test_wind_shear_at_height() {
    let shear: WindGroup = parse_as("WS020/05065KT", ReportPart::Taf);
    assert_eq!(shear.wind_type, WindType::WindShear);
    assert_eq!(shear.height.unwrap().value(), Some(2000.0));
    assert_eq!(shear.speed.value, Some(65));
}

#[test]
fn test_visibility_body_forms() {
    let meters: VisibilityGroup = parse_as("9999", ReportPart::Metar);
    assert_eq!(meters.visibility.modifier, DistanceModifier::MoreThan);
    assert_eq!(meters.visibility_type, VisibilityType::Prevailing);

    let directional: VisibilityGroup = parse_as("1500SW", ReportPart::Metar);
    assert_eq!(directional.visibility_type, VisibilityType::Directional);
    assert!(directional.direction.is_some());

    let ndv: VisibilityGroup = parse_as("4000NDV", ReportPart::Metar);
    assert_eq!(
        ndv.visibility_type,
        VisibilityType::PrevailingNoDirectionalVariation
    );

    let miles: VisibilityGroup = parse_as("7SM", ReportPart::Metar);
    assert_eq!(miles.visibility.value(), Some(7.0));
    assert_eq!(miles.visibility.unit, DistanceUnit::StatuteMiles);
    assert!(miles.is_valid());

    let less_than: VisibilityGroup = parse_as("M1/4SM", ReportPart::Metar);
    assert_eq!(less_than.visibility.modifier, DistanceModifier::LessThan);
    assert_eq!(less_than.visibility.value(), Some(0.25));
}

#[test]
fn test_lone_integer_visibility_is_incomplete() {
    let whole: VisibilityGroup = parse_as("1", ReportPart::Metar);
    assert!(whole.accepts_append());
    assert!(!whole.is_valid());
}

#[test]
fn test_runway_visual_range() {
    let rvr: VisibilityGroup = parse_as("R32L/1200V1800FT/U", ReportPart::Metar);
    assert_eq!(rvr.visibility_type, VisibilityType::RunwayVisualRange);
    let runway = rvr.runway.unwrap();
    assert_eq!(runway.number, 32);
    assert_eq!(runway.designator, RunwayDesignator::Left);
    assert_eq!(rvr.visibility.unit, DistanceUnit::Feet);
    assert_eq!(rvr.max_visibility.unwrap().value(), Some(1800.0));
    assert_eq!(rvr.trend, RvrTrend::Upward);
    assert!(rvr.is_valid());

    let more: VisibilityGroup = parse_as("R06/P2000N", ReportPart::Metar);
    assert_eq!(more.visibility.modifier, DistanceModifier::MoreThan);
    assert_eq!(more.trend, RvrTrend::Neutral);

    let missing: VisibilityGroup = parse_as("R06/////", ReportPart::Metar);
    assert!(!missing.visibility.is_reported());

    assert!(VisibilityGroup::parse("R32L/1200", ReportPart::Taf).is_none());
}

#[test]
fn test_cloud_layers_and_no_cloud_codes() {
    let layer: CloudGroup = parse_as("BKN025CB", ReportPart::Metar);
    assert_eq!(layer.cloud_type, CloudType::Layer);
    assert_eq!(layer.amount, CloudAmount::Broken);
    assert_eq!(layer.height.value(), Some(2500.0));
    assert_eq!(layer.convective, ConvectiveType::Cumulonimbus);

    let unknown_amount: CloudGroup = parse_as("//////TCU", ReportPart::Metar);
    assert_eq!(unknown_amount.amount, CloudAmount::NotReported);
    assert!(!unknown_amount.height.is_reported());
    assert_eq!(unknown_amount.convective, ConvectiveType::ToweringCumulus);

    let clear: CloudGroup = parse_as("CLR", ReportPart::Metar);
    assert_eq!(clear.cloud_type, CloudType::NoClouds);
    assert_eq!(clear.amount, CloudAmount::Clear);

    let vv: CloudGroup = parse_as("VV002", ReportPart::Taf);
    assert_eq!(vv.cloud_type, CloudType::VerticalVisibility);
    assert_eq!(vv.amount, CloudAmount::Obscured);

    // Same text means nothing in remarks, and a bare amount is only a remarks form
    assert!(CloudGroup::parse("CLR", ReportPart::Remarks).is_none());
    assert!(CloudGroup::parse("FEW", ReportPart::Metar).is_none());
    assert!(CloudGroup::parse("FEW", ReportPart::Remarks).is_some());
}

#[test]
fn test_weather_phenomena() {
    let rain: WeatherGroup = parse_as("+TSRA", ReportPart::Metar);
    assert_eq!(rain.weather_type, WeatherType::Current);
    let entry = &rain.entries[0];
    assert_eq!(entry.qualifier, Qualifier::Heavy);
    assert_eq!(entry.descriptor, Descriptor::Thunderstorm);
    assert_eq!(entry.phenomena, vec![Phenomenon::Rain]);
    assert!(rain.is_valid());

    let mixed: WeatherGroup = parse_as("-SHRASN", ReportPart::Taf);
    assert_eq!(
        mixed.entries[0].phenomena,
        vec![Phenomenon::Rain, Phenomenon::Snow]
    );

    let vicinity: WeatherGroup = parse_as("VCSH", ReportPart::Metar);
    assert_eq!(vicinity.entries[0].qualifier, Qualifier::Vicinity);
    assert!(vicinity.entries[0].phenomena.is_empty());

    let recent: WeatherGroup = parse_as("RETS", ReportPart::Metar);
    assert_eq!(recent.weather_type, WeatherType::Recent);
    assert!(WeatherGroup::parse("RETS", ReportPart::Taf).is_none());

    let nsw: WeatherGroup = parse_as("NSW", ReportPart::Taf);
    assert_eq!(nsw.weather_type, WeatherType::NoSignificantWeather);

    assert!(WeatherGroup::parse("RAXX", ReportPart::Metar).is_none());
    assert!(WeatherGroup::parse("RAS", ReportPart::Metar).is_none());
}

#[test]
fn test_weather_intensity_requires_precipitation() {
    let heavy_fog: WeatherGroup = parse_as("+FG", ReportPart::Metar);
    assert!(!heavy_fog.is_valid());

    let heavy_sandstorm: WeatherGroup = parse_as("+SS", ReportPart::Metar);
    assert!(heavy_sandstorm.is_valid());
}

#[test]
fn test_temperature_and_dew_point() {
    let temperature: TemperatureGroup = parse_as("33/16", ReportPart::Metar);
    assert_eq!(temperature.air.value, Some(33.0));
    assert_eq!(temperature.dew_point.value, Some(16.0));
    assert!(temperature.is_valid());

    let below_zero: TemperatureGroup = parse_as("M02/M05", ReportPart::Metar);
    assert_eq!(below_zero.dew_point.value, Some(-5.0));

    let no_dew: TemperatureGroup = parse_as("05/", ReportPart::Metar);
    assert!(!no_dew.dew_point.is_reported());

    let inverted: TemperatureGroup = parse_as("10/12", ReportPart::Metar);
    assert!(!inverted.is_valid());

    assert!(TemperatureGroup::parse("33/16", ReportPart::Taf).is_none());
}

#[test]
fn test_pressure_forms() {
    let altimeter: PressureGroup = parse_as("A2992", ReportPart::Metar);
    assert_eq!(altimeter.pressure_type, PressureType::ObservedQnh);
    assert_eq!(altimeter.pressure.value, Some(29.92));

    let qnh: PressureGroup = parse_as("Q1013", ReportPart::Metar);
    assert_eq!(qnh.pressure.value, Some(1013.0));

    let forecast: PressureGroup = parse_as("QNH2979INS", ReportPart::Taf);
    assert_eq!(forecast.pressure_type, PressureType::ForecastLowestQnh);
    assert_eq!(forecast.pressure.value, Some(29.79));

    assert!(PressureGroup::parse("A2992", ReportPart::Taf).is_none());
}

#[test]
fn test_runway_state_forms() {
    let state: RunwayStateGroup = parse_as("R32/290055", ReportPart::Metar);
    assert_eq!(state.state_type, RunwayStateType::Normal);
    assert_eq!(state.deposits, Deposits::WetAndWaterPatches);
    assert_eq!(state.extent, ContaminationExtent::From51To100Percent);
    assert_eq!(state.depth, DepositDepth::Millimeters(0));
    assert_eq!(state.friction, SurfaceFriction::Coefficient(55));
    assert!(state.is_valid());

    let deep: RunwayStateGroup = parse_as("R88/459295", ReportPart::Metar);
    assert_eq!(deep.depth, DepositDepth::Millimeters(100));
    assert!(deep.runway.unwrap().is_all_runways());

    let cleared: RunwayStateGroup = parse_as("R24L/CLRD70", ReportPart::Metar);
    assert_eq!(cleared.state_type, RunwayStateType::Cleared);
    assert_eq!(cleared.friction, SurfaceFriction::Coefficient(70));

    let closed: RunwayStateGroup = parse_as("R/SNOCLO", ReportPart::Metar);
    assert_eq!(closed.state_type, RunwayStateType::SnowClosure);
    assert!(closed.runway.is_none());
}

#[test]
fn test_runway_state_reserved_codes_round_trip_but_are_invalid() {
    let reserved_extent: RunwayStateGroup = parse_as("R32/230055", ReportPart::Metar);
    assert_eq!(reserved_extent.extent, ContaminationExtent::Reserved(3));
    assert!(!reserved_extent.is_valid());

    let reserved_depth: RunwayStateGroup = parse_as("R32/299155", ReportPart::Metar);
    assert_eq!(reserved_depth.depth, DepositDepth::Reserved);
    assert!(!reserved_depth.is_valid());

    let reserved_friction: RunwayStateGroup = parse_as("R32/290097", ReportPart::Metar);
    assert_eq!(reserved_friction.friction, SurfaceFriction::Reserved(97));
    assert!(!reserved_friction.is_valid());
}

#[test]
fn test_sea_surface() {
    let state: SeaSurfaceGroup = parse_as("W15/S4", ReportPart::Metar);
    assert_eq!(state.temperature.value, Some(15.0));
    assert!(matches!(state.waves, WaveHeight::StateOfSurface(_)));

    let height: SeaSurfaceGroup = parse_as("WM01/H75", ReportPart::Metar);
    assert_eq!(height.temperature.value, Some(-1.0));
    assert_eq!(height.waves, WaveHeight::Height(75));

    assert!(SeaSurfaceGroup::parse("W15/S4", ReportPart::Taf).is_none());
}

#[test]
fn test_layer_forecast() {
    let turbulence: LayerForecastGroup = parse_as("520004", ReportPart::Taf);
    assert_eq!(
        turbulence.hazard,
        LayerHazard::Turbulence(TurbulenceIntensity::ModerateInClearAirOccasional)
    );
    assert_eq!(turbulence.base_height.value(), Some(0.0));
    assert_eq!(turbulence.top_height.value(), Some(4000.0));

    let icing: LayerForecastGroup = parse_as("620304", ReportPart::Taf);
    assert!(matches!(icing.hazard, LayerHazard::Icing(_)));
    assert_eq!(icing.base_height.value(), Some(3000.0));

    assert!(LayerForecastGroup::parse("520004", ReportPart::Metar).is_none());
    assert!(LayerForecastGroup::parse("6X0304", ReportPart::Taf).is_none());
}
