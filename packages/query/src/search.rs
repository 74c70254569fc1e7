//! Free-text query parsing.
//!
//! Converts text like "Brooklyn 2021 pedestrian crashes" into a partial
//! [`FilterSelection`]. Keyword tables are ordered so longer, more specific
//! phrases match before generic fallbacks. Parsed values only fill filter
//! fields the user left unset.

use std::sync::OnceLock;

use regex::Regex;

use crate::{FilterSelection, InjuryFilter};

const BOROUGHS: &[(&str, &str)] = &[
    ("brooklyn", "Brooklyn"),
    ("queens", "Queens"),
    ("manhattan", "Manhattan"),
    ("bronx", "Bronx"),
    ("staten island", "Staten Island"),
];

/// Vehicle keyword table. Order matters: longer phrases first, generic
/// fallbacks ("car", "vehicle") last.
const VEHICLE_KEYWORDS: &[(&str, &str)] = &[
    ("station wagon", "Station Wagon/Sport Utility Vehicle"),
    ("pickup truck", "Pick-up Truck"),
    ("sport utility", "Station Wagon/Sport Utility Vehicle"),
    ("pickup", "Pick-up Truck"),
    ("sedan", "Sedan"),
    ("suv", "Station Wagon/Sport Utility Vehicle"),
    ("van", "Van"),
    ("taxi", "Taxi"),
    ("motorcycle", "Motorcycle"),
    ("ambulance", "Ambulance"),
    ("bus", "Bus"),
    ("truck", "Truck"),
    ("car", "Sedan"),
    ("vehicle", "Sedan"),
];

const FACTOR_KEYWORDS: &[(&str, &str)] = &[
    ("unsafe speed", "Unsafe Speed"),
    ("failure to yield", "Failure To Yield Right-Of-Way"),
    ("driver inattention", "Driver Inattention/Distraction"),
    ("following too closely", "Following Too Closely"),
    ("backing unsafely", "Backing Unsafely"),
];

fn year_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"20\d{2}").expect("valid year pattern"))
}

/// Parses free text into a partial filter selection. Unrecognized text
/// yields an empty selection; the raw text is still usable for substring
/// search.
#[must_use]
pub fn parse(text: &str) -> FilterSelection {
    let text = text.to_lowercase();
    let mut parsed = FilterSelection::default();
    if text.trim().is_empty() {
        return parsed;
    }

    for (keyword, canonical) in BOROUGHS {
        if text.contains(keyword) {
            parsed.borough = Some((*canonical).to_string());
            break;
        }
    }

    if let Some(m) = year_regex().find(&text) {
        parsed.year = m.as_str().parse().ok();
    }

    if text.contains("injured") || text.contains("injury") {
        parsed.injury_type = Some(InjuryFilter::Injured);
    } else if text.contains("killed") || text.contains("fatal") || text.contains("death") {
        parsed.injury_type = Some(InjuryFilter::Killed);
    } else if text.contains("no injury") || text.contains("no injuries") {
        parsed.injury_type = Some(InjuryFilter::NoInjury);
    }

    for (keyword, canonical) in VEHICLE_KEYWORDS {
        if text.contains(keyword) {
            parsed.vehicle_type = Some((*canonical).to_string());
            break;
        }
    }

    for (keyword, canonical) in FACTOR_KEYWORDS {
        if text.contains(keyword) {
            parsed.contributing_factor = Some((*canonical).to_string());
            break;
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_borough_year_and_vehicle() {
        let parsed = parse("Brooklyn 2021 pedestrian crashes");
        assert_eq!(parsed.borough.as_deref(), Some("Brooklyn"));
        assert_eq!(parsed.year, Some(2021));
        assert_eq!(parsed.vehicle_type, None);
    }

    #[test]
    fn injury_keywords_map_to_classes() {
        assert_eq!(
            parse("Queens injuries").injury_type,
            Some(InjuryFilter::Injured)
        );
        assert_eq!(
            parse("fatal crashes in the bronx").injury_type,
            Some(InjuryFilter::Killed)
        );
        assert_eq!(
            parse("no injuries reported").injury_type,
            Some(InjuryFilter::NoInjury)
        );
    }

    #[test]
    fn longer_vehicle_phrases_win() {
        assert_eq!(
            parse("station wagon crashes").vehicle_type.as_deref(),
            Some("Station Wagon/Sport Utility Vehicle")
        );
        // "pickup truck" must match before the bare "truck" entry.
        assert_eq!(
            parse("pickup truck collisions").vehicle_type.as_deref(),
            Some("Pick-up Truck")
        );
    }

    #[test]
    fn generic_car_falls_back_to_sedan() {
        assert_eq!(parse("car crashes 2022").vehicle_type.as_deref(), Some("Sedan"));
    }

    #[test]
    fn parses_contributing_factors() {
        assert_eq!(
            parse("crashes from driver inattention")
                .contributing_factor
                .as_deref(),
            Some("Driver Inattention/Distraction")
        );
    }

    #[test]
    fn unrecognized_text_yields_empty_selection() {
        assert!(parse("completely unrelated words").is_empty());
        assert!(parse("").is_empty());
    }
}
