use turf_types::{BoundingBox, CoordEach, Feature, Point, Polygon, Properties};

use crate::error::{Result, TurfError};
use crate::measurement::distance;
use crate::units::Unit;

/// Bounding box of all positions of the value, or `None` if it has no positions.
///
/// Geometry collections are visited recursively. Longitudes are taken as is, so geometries crossing the antimeridian
/// get a box spanning the whole globe in the other direction.
pub fn bbox(value: &impl CoordEach) -> Option<BoundingBox> {
    BoundingBox::from_positions(value.coord_all(false).iter())
}

/// Feature with a rectangular polygon covering the bounding box.
pub fn bbox_polygon(
    bbox: &BoundingBox,
    properties: Option<Properties>,
    id: Option<String>,
) -> Feature {
    Feature {
        id,
        properties,
        ..Feature::new(Polygon::from_bounding_box(bbox))
    }
}

/// Rectangular polygon covering all positions of the value.
///
/// Fails with [`TurfError::EmptyCollection`] if the value has no positions.
pub fn envelope(value: &impl CoordEach) -> Result<Polygon> {
    let bbox = bbox(value).ok_or(TurfError::EmptyCollection)?;
    Ok(Polygon::from_bounding_box(&bbox))
}

/// Expands the shorter side of the box around its center, so that the box becomes a square in degrees.
///
/// Which side is shorter is decided by great-circle lengths of the southern and western edges.
pub fn square(bbox: &BoundingBox) -> BoundingBox {
    let southwest = bbox.southwest();
    let southeast = Point::from_lng_lat(bbox.east(), bbox.south());
    let northwest = Point::from_lng_lat(bbox.west(), bbox.north());
    let horizontal = distance(&southwest, &southeast, Unit::Kilometers);
    let vertical = distance(&southwest, &northwest, Unit::Kilometers);

    if horizontal >= vertical {
        let middle = (bbox.south() + bbox.north()) / 2.0;
        let half = bbox.width() / 2.0;
        BoundingBox::from_lng_lats(bbox.west(), middle - half, bbox.east(), middle + half)
    } else {
        let middle = (bbox.west() + bbox.east()) / 2.0;
        let half = bbox.height() / 2.0;
        BoundingBox::from_lng_lats(middle - half, bbox.south(), middle + half, bbox.north())
    }
}

/// Point feature at the center of the bounding box of the value.
///
/// This is not a centroid: only the extreme positions matter. Fails with [`TurfError::EmptyCollection`] if the value
/// has no positions.
pub fn center(
    value: &impl CoordEach,
    properties: Option<Properties>,
    id: Option<String>,
) -> Result<Feature> {
    let bbox = bbox(value).ok_or(TurfError::EmptyCollection)?;
    Ok(Feature {
        id,
        properties,
        ..Feature::new(Point::new(bbox.center()))
    })
}
