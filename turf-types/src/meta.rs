//! Traversal of coordinates, lines and polygons of any geometry-bearing value.
//!
//! The traits are implemented for every geometry type, for [`Geometry`], [`Feature`] and [`FeatureCollection`].
//! Geometry collections are visited recursively, features without a geometry are skipped.

use crate::contour::Contour;
use crate::feature::{Feature, FeatureCollection};
use crate::geometry::{Geometry, GeometryCollection};
use crate::line_string::{LineString, MultiLineString};
use crate::point::{MultiPoint, Point};
use crate::polygon::{MultiPolygon, Polygon};
use crate::position::Position;

/// Visits every position of a value in encounter order.
pub trait CoordEach {
    /// Calls `f` for every position.
    ///
    /// If `exclude_wrap_coord` is set, the closing position of polygon rings is not visited, so every ring vertex is
    /// reported exactly once.
    fn coord_each<F: FnMut(&Position)>(&self, exclude_wrap_coord: bool, f: &mut F);

    /// Collects all positions visited by [`CoordEach::coord_each`].
    fn coord_all(&self, exclude_wrap_coord: bool) -> Vec<Position> {
        let mut positions = vec![];
        self.coord_each(exclude_wrap_coord, &mut |p| positions.push(*p));
        positions
    }
}

/// Visits every run of connected positions: line strings and polygon rings.
pub trait LineEach {
    /// Calls `f` for every line string and every polygon ring.
    fn line_each<F: FnMut(&[Position])>(&self, f: &mut F);
}

/// Visits every polygon of a value.
pub trait PolygonEach {
    /// Calls `f` for every polygon, including members of multipolygons.
    fn polygon_each<F: FnMut(&Polygon)>(&self, f: &mut F);
}

impl CoordEach for Position {
    fn coord_each<F: FnMut(&Position)>(&self, _exclude_wrap_coord: bool, f: &mut F) {
        f(self)
    }
}

impl CoordEach for Point {
    fn coord_each<F: FnMut(&Position)>(&self, _exclude_wrap_coord: bool, f: &mut F) {
        f(self.coordinates())
    }
}

impl CoordEach for MultiPoint {
    fn coord_each<F: FnMut(&Position)>(&self, _exclude_wrap_coord: bool, f: &mut F) {
        self.coordinates().iter().for_each(f)
    }
}

impl CoordEach for LineString {
    fn coord_each<F: FnMut(&Position)>(&self, _exclude_wrap_coord: bool, f: &mut F) {
        self.coordinates().iter().for_each(f)
    }
}

impl CoordEach for MultiLineString {
    fn coord_each<F: FnMut(&Position)>(&self, exclude_wrap_coord: bool, f: &mut F) {
        for line in self.lines() {
            line.coord_each(exclude_wrap_coord, f);
        }
    }
}

impl CoordEach for Polygon {
    fn coord_each<F: FnMut(&Position)>(&self, exclude_wrap_coord: bool, f: &mut F) {
        for ring in self.rings() {
            let positions = if exclude_wrap_coord {
                ring.distinct_positions()
            } else {
                ring.positions()
            };
            positions.iter().for_each(&mut *f);
        }
    }
}

impl CoordEach for MultiPolygon {
    fn coord_each<F: FnMut(&Position)>(&self, exclude_wrap_coord: bool, f: &mut F) {
        for polygon in self.polygons() {
            polygon.coord_each(exclude_wrap_coord, f);
        }
    }
}

impl CoordEach for GeometryCollection {
    fn coord_each<F: FnMut(&Position)>(&self, exclude_wrap_coord: bool, f: &mut F) {
        for geometry in self.geometries() {
            geometry.coord_each(exclude_wrap_coord, f);
        }
    }
}

impl CoordEach for Geometry {
    fn coord_each<F: FnMut(&Position)>(&self, exclude_wrap_coord: bool, f: &mut F) {
        match self {
            Geometry::Point(v) => v.coord_each(exclude_wrap_coord, f),
            Geometry::MultiPoint(v) => v.coord_each(exclude_wrap_coord, f),
            Geometry::LineString(v) => v.coord_each(exclude_wrap_coord, f),
            Geometry::MultiLineString(v) => v.coord_each(exclude_wrap_coord, f),
            Geometry::Polygon(v) => v.coord_each(exclude_wrap_coord, f),
            Geometry::MultiPolygon(v) => v.coord_each(exclude_wrap_coord, f),
            Geometry::GeometryCollection(v) => v.coord_each(exclude_wrap_coord, f),
        }
    }
}

impl CoordEach for Feature {
    fn coord_each<F: FnMut(&Position)>(&self, exclude_wrap_coord: bool, f: &mut F) {
        if let Some(geometry) = self.geometry() {
            geometry.coord_each(exclude_wrap_coord, f);
        }
    }
}

impl CoordEach for FeatureCollection {
    fn coord_each<F: FnMut(&Position)>(&self, exclude_wrap_coord: bool, f: &mut F) {
        for feature in self.features() {
            feature.coord_each(exclude_wrap_coord, f);
        }
    }
}

impl LineEach for Point {
    fn line_each<F: FnMut(&[Position])>(&self, _f: &mut F) {}
}

impl LineEach for MultiPoint {
    fn line_each<F: FnMut(&[Position])>(&self, _f: &mut F) {}
}

impl LineEach for LineString {
    fn line_each<F: FnMut(&[Position])>(&self, f: &mut F) {
        f(self.coordinates())
    }
}

impl LineEach for MultiLineString {
    fn line_each<F: FnMut(&[Position])>(&self, f: &mut F) {
        for line in self.lines() {
            f(line.coordinates());
        }
    }
}

impl LineEach for Polygon {
    fn line_each<F: FnMut(&[Position])>(&self, f: &mut F) {
        for ring in self.rings() {
            f(ring.positions());
        }
    }
}

impl LineEach for MultiPolygon {
    fn line_each<F: FnMut(&[Position])>(&self, f: &mut F) {
        for polygon in self.polygons() {
            polygon.line_each(f);
        }
    }
}

impl LineEach for GeometryCollection {
    fn line_each<F: FnMut(&[Position])>(&self, f: &mut F) {
        for geometry in self.geometries() {
            geometry.line_each(f);
        }
    }
}

impl LineEach for Geometry {
    fn line_each<F: FnMut(&[Position])>(&self, f: &mut F) {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => {}
            Geometry::LineString(v) => v.line_each(f),
            Geometry::MultiLineString(v) => v.line_each(f),
            Geometry::Polygon(v) => v.line_each(f),
            Geometry::MultiPolygon(v) => v.line_each(f),
            Geometry::GeometryCollection(v) => v.line_each(f),
        }
    }
}

impl LineEach for Feature {
    fn line_each<F: FnMut(&[Position])>(&self, f: &mut F) {
        if let Some(geometry) = self.geometry() {
            geometry.line_each(f);
        }
    }
}

impl LineEach for FeatureCollection {
    fn line_each<F: FnMut(&[Position])>(&self, f: &mut F) {
        for feature in self.features() {
            feature.line_each(f);
        }
    }
}

impl PolygonEach for Polygon {
    fn polygon_each<F: FnMut(&Polygon)>(&self, f: &mut F) {
        f(self)
    }
}

impl PolygonEach for MultiPolygon {
    fn polygon_each<F: FnMut(&Polygon)>(&self, f: &mut F) {
        self.polygons().iter().for_each(f)
    }
}

impl PolygonEach for GeometryCollection {
    fn polygon_each<F: FnMut(&Polygon)>(&self, f: &mut F) {
        for geometry in self.geometries() {
            geometry.polygon_each(f);
        }
    }
}

impl PolygonEach for Geometry {
    fn polygon_each<F: FnMut(&Polygon)>(&self, f: &mut F) {
        match self {
            Geometry::Polygon(v) => v.polygon_each(f),
            Geometry::MultiPolygon(v) => v.polygon_each(f),
            Geometry::GeometryCollection(v) => v.polygon_each(f),
            Geometry::Point(_)
            | Geometry::MultiPoint(_)
            | Geometry::LineString(_)
            | Geometry::MultiLineString(_) => {}
        }
    }
}

impl PolygonEach for Feature {
    fn polygon_each<F: FnMut(&Polygon)>(&self, f: &mut F) {
        if let Some(geometry) = self.geometry() {
            geometry.polygon_each(f);
        }
    }
}

impl PolygonEach for FeatureCollection {
    fn polygon_each<F: FnMut(&Polygon)>(&self, f: &mut F) {
        for feature in self.features() {
            feature.polygon_each(f);
        }
    }
}

impl<T: CoordEach + ?Sized> CoordEach for &T {
    fn coord_each<F: FnMut(&Position)>(&self, exclude_wrap_coord: bool, f: &mut F) {
        (**self).coord_each(exclude_wrap_coord, f)
    }
}

impl<T: LineEach + ?Sized> LineEach for &T {
    fn line_each<F: FnMut(&[Position])>(&self, f: &mut F) {
        (**self).line_each(f)
    }
}

impl<T: PolygonEach + ?Sized> PolygonEach for &T {
    fn polygon_each<F: FnMut(&Polygon)>(&self, f: &mut F) {
        (**self).polygon_each(f)
    }
}
