use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bounding_box::BoundingBox;
use crate::geometry::Geometry;

/// Free-form properties of a feature.
pub type Properties = serde_json::Map<String, Value>;

/// Geometry with properties.
///
/// Both the geometry and the properties are optional, as allowed by GeoJSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    /// Feature identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Bounding box of the feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    /// Geometry of the feature.
    #[serde(default)]
    pub geometry: Option<Geometry>,
    /// Properties of the feature.
    #[serde(default)]
    pub properties: Option<Properties>,
}

impl Feature {
    /// Creates a feature with the given geometry and no properties.
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        Self {
            geometry: Some(geometry.into()),
            ..Default::default()
        }
    }

    /// Creates a feature without a geometry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replaces the properties of the feature.
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Sets a single property, creating the property map if needed.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties
            .get_or_insert_with(Properties::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the feature id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the bounding box of the feature.
    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// Geometry of the feature.
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Raw property value.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(key)
    }

    /// String property value. `None` if the property is missing or is not a string.
    pub fn string_property(&self, key: &str) -> Option<&str> {
        self.property(key)?.as_str()
    }

    /// Numeric property value.
    pub fn f64_property(&self, key: &str) -> Option<f64> {
        self.property(key)?.as_f64()
    }

    /// Integer property value.
    pub fn i64_property(&self, key: &str) -> Option<i64> {
        self.property(key)?.as_i64()
    }

    /// Boolean property value.
    pub fn bool_property(&self, key: &str) -> Option<bool> {
        self.property(key)?.as_bool()
    }
}

/// Ordered list of features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    /// Bounding box of the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    /// Features of the collection.
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Creates a new collection.
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            bbox: None,
            features,
        }
    }

    /// Sets the bounding box of the collection.
    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// Features of the collection.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if the collection has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry_type::GeometryType;
    use crate::point::Point;

    #[test]
    fn parse_feature() {
        let json = r#"{
            "type": "Feature",
            "id": "start",
            "properties": {"name": "Dinagat Islands", "population": 127152, "capital": false},
            "geometry": {"type": "Point", "coordinates": [125.6, 10.1]}
        }"#;
        let feature: Feature = serde_json::from_str(json).expect("valid feature");

        assert_eq!(feature.id.as_deref(), Some("start"));
        assert_eq!(
            feature.geometry().map(Geometry::geometry_type),
            Some(GeometryType::Point)
        );
        assert_eq!(feature.string_property("name"), Some("Dinagat Islands"));
        assert_eq!(feature.i64_property("population"), Some(127152));
        assert_eq!(feature.f64_property("population"), Some(127152.0));
        assert_eq!(feature.bool_property("capital"), Some(false));
        assert_eq!(feature.string_property("population"), None);
        assert_eq!(feature.property("missing"), None);
    }

    #[test]
    fn null_geometry_and_properties() {
        let json = r#"{"type": "Feature", "geometry": null, "properties": null}"#;
        let feature: Feature = serde_json::from_str(json).expect("valid feature");
        assert_eq!(feature, Feature::empty());
    }

    #[test]
    fn serialize_feature() {
        let feature = Feature::new(Point::from_lng_lat(1.0, 2.0)).with_property("dist", 3.5);
        let value = serde_json::to_value(&feature).expect("serializable");
        assert_eq!(
            value,
            serde_json::json!({
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
                "properties": {"dist": 3.5}
            })
        );
    }

    #[test]
    fn parse_collection() {
        let json = r#"{
            "type": "FeatureCollection",
            "bbox": [0.0, 0.0, 1.0, 1.0],
            "features": [
                {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}},
                {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [1.0, 1.0]}}
            ]
        }"#;
        let collection: FeatureCollection = serde_json::from_str(json).expect("valid collection");
        assert_eq!(collection.len(), 2);
        assert_eq!(
            collection.bbox.map(|b| b.to_array()),
            Some([0.0, 0.0, 1.0, 1.0])
        );
    }
}
