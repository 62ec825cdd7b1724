//! Common aircraft type names for standardized flight entries.

/// Maximum number of typeahead suggestions for the aircraft field.
pub const AIRCRAFT_SUGGESTION_LIMIT: usize = 10;

/// Aircraft catalog, sorted by name.
pub const AIRCRAFT_CATALOG: &[&str] = &[
    "ATR 72",
    "Airbus A319",
    "Airbus A320",
    "Airbus A320neo",
    "Airbus A321",
    "Airbus A321neo",
    "Airbus A330-200",
    "Airbus A330-300",
    "Airbus A330-900neo",
    "Airbus A340-300",
    "Airbus A340-600",
    "Airbus A350-1000",
    "Airbus A350-900",
    "Airbus A380",
    "Airbus H125",
    "Airbus H145",
    "Antonov An-124",
    "Antonov An-225",
    "Beechcraft Bonanza",
    "Beechcraft King Air",
    "Bell 206",
    "Bell 407",
    "Bell 429",
    "Boeing 737 MAX 8",
    "Boeing 737 MAX 9",
    "Boeing 737-800",
    "Boeing 737-900",
    "Boeing 747-400",
    "Boeing 747-8",
    "Boeing 757-200",
    "Boeing 757-300",
    "Boeing 767-300",
    "Boeing 767-400",
    "Boeing 777-200",
    "Boeing 777-300",
    "Boeing 777-300ER",
    "Boeing 777-9",
    "Boeing 787-10",
    "Boeing 787-8",
    "Boeing 787-9",
    "Bombardier CRJ-200",
    "Bombardier CRJ-700",
    "Bombardier CRJ-900",
    "Bombardier Challenger 350",
    "Bombardier Global 7500",
    "Bombardier Q400",
    "C-130 Hercules",
    "C-17 Globemaster",
    "Cessna 172",
    "Cessna 182",
    "Cessna 206",
    "Cessna Citation",
    "Cessna Citation X",
    "Cirrus SR22",
    "Dassault Falcon 7X",
    "Dassault Falcon 8X",
    "De Havilland Dash 8",
    "Diamond DA40",
    "Diamond DA42",
    "Embraer E-Jet E2",
    "Embraer E170",
    "Embraer E175",
    "Embraer E190",
    "Embraer E195",
    "F-16 Fighting Falcon",
    "F-18 Hornet",
    "F-22 Raptor",
    "F-35 Lightning II",
    "Gulfstream G650",
    "Gulfstream G700",
    "KC-135 Stratotanker",
    "Leonardo AW139",
    "Piper PA-28",
    "Sikorsky S-76",
    "Sikorsky S-92",
];

/// Case-insensitive substring search over the catalog.
///
/// An empty query returns the whole catalog.
pub fn search_aircraft(query: &str) -> Vec<&'static str> {
    if query.is_empty() {
        return AIRCRAFT_CATALOG.to_vec();
    }
    let lower = query.to_lowercase();
    AIRCRAFT_CATALOG
        .iter()
        .copied()
        .filter(|name| name.to_lowercase().contains(&lower))
        .collect()
}

/// Typeahead suggestions for the aircraft field: nothing for an empty query,
/// otherwise the first [`AIRCRAFT_SUGGESTION_LIMIT`] matches.
pub fn suggest_aircraft(query: &str) -> Vec<&'static str> {
    if query.is_empty() {
        return Vec::new();
    }
    let mut matches = search_aircraft(query);
    matches.truncate(AIRCRAFT_SUGGESTION_LIMIT);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_sorted() {
        assert!(AIRCRAFT_CATALOG.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_query_returns_everything() {
        assert_eq!(search_aircraft("").len(), AIRCRAFT_CATALOG.len());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let results = search_aircraft("a320");
        assert_eq!(results, vec!["Airbus A320", "Airbus A320neo"]);
        assert_eq!(search_aircraft("HORNET"), vec!["F-18 Hornet"]);
        assert!(search_aircraft("concorde").is_empty());
    }

    #[test]
    fn suggestions_are_capped() {
        assert!(suggest_aircraft("").is_empty());
        assert_eq!(suggest_aircraft("boeing").len(), AIRCRAFT_SUGGESTION_LIMIT);
        assert_eq!(suggest_aircraft("boeing")[0], "Boeing 737 MAX 8");
    }
}
