use transport_catalogue::prelude::*;

const BASE_REQUESTS: &str = "\
13
Stop Tolstopaltsevo: 55.611087, 37.20829, 3900m to Marushkino
Stop Marushkino: 55.595884, 37.209755, 9900m to Rasskazovka, 100m to Marushkino
Bus 256: Biryulyovo Zapadnoye > Biryusinka > Universam > Biryulyovo Tovarnaya > Biryulyovo Passazhirskaya > Biryulyovo Zapadnoye
Bus 750: Tolstopaltsevo - Marushkino - Marushkino - Rasskazovka
Stop Rasskazovka: 55.632761, 37.333324, 9500m to Marushkino
Stop Biryulyovo Zapadnoye: 55.574371, 37.6517, 7500m to Rossoshanskaya ulitsa, 1800m to Biryusinka, 2400m to Universam
Stop Biryusinka: 55.581065, 37.64839, 750m to Universam
Stop Universam: 55.587655, 37.645687, 5600m to Rossoshanskaya ulitsa, 900m to Biryulyovo Tovarnaya
Stop Biryulyovo Tovarnaya: 55.592028, 37.653656, 1300m to Biryulyovo Passazhirskaya
Stop Biryulyovo Passazhirskaya: 55.580999, 37.659164, 1200m to Biryulyovo Zapadnoye
Bus 828: Biryulyovo Zapadnoye > Universam > Rossoshanskaya ulitsa > Biryulyovo Zapadnoye
Stop Rossoshanskaya ulitsa: 55.595579, 37.605757
Stop Prazhskaya: 55.611678, 37.603831
";

const STAT_REQUESTS: &str = "\
6
Bus 256
Bus 750
Bus 751
Stop Samara
Stop Prazhskaya
Stop Biryulyovo Zapadnoye
";

fn load() -> TransportCatalogue {
    let mut catalogue = TransportCatalogue::new();
    read_base_requests(&mut BASE_REQUESTS.as_bytes(), &mut catalogue).unwrap();
    catalogue
}

#[test]
fn catalogue_is_populated() {
    let catalogue = load();

    assert_eq!(catalogue.stop_count(), 10);
    assert_eq!(catalogue.bus_count(), 3);
    assert!(catalogue.buses().iter().all(|bus| bus.unresolved_count() == 0));
}

#[test]
fn route_statistics() {
    let catalogue = load();

    let info = catalogue.route_info(catalogue.find_bus("256").unwrap());
    assert_eq!(info.stop_count, 6);
    assert_eq!(info.unique_stop_count, 5);
    assert_eq!(info.route_length, 5950);
    assert!((info.curvature - 1.36124).abs() < 1e-4);

    let info = catalogue.route_info(catalogue.find_bus("750").unwrap());
    assert_eq!(info.stop_count, 7);
    assert_eq!(info.unique_stop_count, 3);
    assert_eq!(info.route_length, 27400);
    assert!((info.curvature - 1.30853).abs() < 1e-4);
}

#[test]
fn full_transcript() {
    let catalogue = load();
    let mut out = Vec::new();

    process_stat_requests(&mut STAT_REQUESTS.as_bytes(), &catalogue, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\
Bus 256: 6 stops on route, 5 unique stops, 5950 route length, 1.36124 curvature
Bus 750: 7 stops on route, 3 unique stops, 27400 route length, 1.30853 curvature
Bus 751: not found
Stop Samara: not found
Stop Prazhskaya: no buses
Stop Biryulyovo Zapadnoye: buses 256 828
"
    );
}
