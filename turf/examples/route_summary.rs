//! Prints measurements of every feature of a GeoJSON feature collection.
//!
//! Run with `cargo run --example route_summary -- path/to/collection.geojson`. Without an argument a small built-in
//! collection is used.

use std::error::Error;

use turf::conversion::combine;
use turf::measurement::{area, bbox, center, length};
use turf::misc::line_slice_along;
use turf::turf_types::{Feature, FeatureCollection, Geometry};
use turf::Unit;

const ROUTE: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {"name": "route"},
            "geometry": {
                "type": "LineString",
                "coordinates": [
                    [-77.0316696166992, 38.878605901789236],
                    [-77.02960968017578, 38.88194668656296],
                    [-77.02033996582031, 38.88408470638821],
                    [-77.02566146850586, 38.885821800123196],
                    [-77.02188491821289, 38.88956308852534],
                    [-77.01982498168944, 38.89236892551996],
                    [-77.02291488647461, 38.89370499941828],
                    [-77.02703475952148, 38.89596877223328]
                ]
            }
        },
        {
            "type": "Feature",
            "properties": {"name": "mall"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[
                    [-77.0502, 38.8863],
                    [-77.0091, 38.8863],
                    [-77.0091, 38.8913],
                    [-77.0502, 38.8913],
                    [-77.0502, 38.8863]
                ]]
            }
        }
    ]
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let collection: FeatureCollection = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading features from {path}");
            serde_json::from_str(&std::fs::read_to_string(path)?)?
        }
        None => serde_json::from_str(ROUTE)?,
    };

    log::info!("Loaded {} features", collection.len());

    for (index, feature) in collection.features().iter().enumerate() {
        summarize(index, feature)?;
    }

    if let Some(bbox) = bbox(&collection) {
        log::info!("Collection bounding box: {:?}", bbox.to_array());
    }

    let combined = combine(&collection)?;
    log::info!("Combined into {} multi-geometries", combined.len());

    let center = center(&collection, None, None)?;
    println!("center: {}", serde_json::to_string(&center)?);

    Ok(())
}

fn summarize(index: usize, feature: &Feature) -> Result<(), Box<dyn Error>> {
    let name = feature.string_property("name").unwrap_or("unnamed");
    let Some(geometry) = feature.geometry() else {
        log::warn!("Feature {index} ({name}) has no geometry");
        return Ok(());
    };

    println!("{name}: {}", geometry.geometry_type());
    println!("  length: {:.3} km", length(feature, Unit::Kilometers));
    println!("  area: {:.1} m2", area(feature));

    if let Geometry::LineString(line) = geometry {
        let total = length(line, Unit::Kilometers);
        if total > 1.0 {
            let first_km = line_slice_along(line, 0.0, 1.0, Unit::Kilometers)?;
            println!(
                "  first kilometer: {}",
                serde_json::to_string(&Geometry::from(first_km))?
            );
        }
    }

    Ok(())
}
