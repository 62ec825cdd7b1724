use flightlog_lib::{AirportDirectory, CoordinateTable, Coordinates, Error, RoutePlot};

#[test]
fn resolves_known_code() {
    let table = CoordinateTable::builtin();
    assert_eq!(
        table.resolve("KJFK"),
        Some(Coordinates::new(40.6413, -73.7781))
    );
}

#[test]
fn unknown_code_is_absent() {
    let table = CoordinateTable::builtin();
    assert_eq!(table.resolve("ZZZZ"), None);
    assert!(matches!(
        table.lookup("ZZZZ"),
        Err(Error::CoordinatesNotFound { .. })
    ));
}

#[test]
fn lookup_is_case_insensitive() {
    let table = CoordinateTable::builtin();
    assert_eq!(table.resolve(" kjfk "), table.resolve("KJFK"));
    assert_eq!(table.lookup("egll").ok(), table.resolve("EGLL"));
}

#[test]
fn coordinate_table_is_independent_of_directory() {
    // The directory knows no airports, yet coordinates still resolve.
    let directory = AirportDirectory::from_records(Vec::new());
    let table = CoordinateTable::builtin();
    assert!(directory.get("KJFK").is_none());
    assert!(table.resolve("KJFK").is_some());
}

#[test]
fn route_between_builtin_airports() {
    let table = CoordinateTable::builtin();
    let plot = RoutePlot::resolve(&table, "KLAX", "KJFK").expect("both resolve");
    assert!(plot.distance_nm > 2000.0 && plot.distance_nm < 2300.0);
    assert!(plot.bounds.south_west.lat <= plot.bounds.north_east.lat);

    let geojson = plot.to_geojson(16);
    assert_eq!(
        geojson["geometry"]["coordinates"]
            .as_array()
            .map(Vec::len),
        Some(16)
    );
}

#[test]
fn route_with_unknown_endpoint_is_unplottable() {
    let table = CoordinateTable::builtin();
    let err = RoutePlot::resolve(&table, "KJFK", "zzzz").unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot plot route; no coordinates for ZZZZ"
    );
}
