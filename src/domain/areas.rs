//! Delivery-area geometry: GeoJSON features grouped by configured area and the
//! framing used to draw them.

use indexmap::IndexMap;
use serde::Deserialize;

use super::pricing::{Area, AreaKey};

/// Map centre used when no feature carries coordinates (Rostock).
pub const DEFAULT_CENTER: [f64; 2] = [12.13, 54.09];

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: FeatureProperties,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FeatureProperties {
    #[serde(default)]
    pub delivery_area: Option<String>,
}

/// Raw GeoJSON geometry; only polygons are drawn.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

pub type Ring = Vec<[f64; 2]>;

impl Geometry {
    /// Outer rings of a `Polygon` or every part of a `MultiPolygon`; empty otherwise.
    pub fn outer_rings(&self) -> Vec<Ring> {
        match self.kind.as_str() {
            "Polygon" => serde_json::from_value::<Vec<Vec<Vec<f64>>>>(self.coordinates.clone())
                .ok()
                .and_then(|rings| rings.into_iter().next())
                .map(|ring| vec![to_ring(ring)])
                .unwrap_or_default(),
            "MultiPolygon" => {
                serde_json::from_value::<Vec<Vec<Vec<Vec<f64>>>>>(self.coordinates.clone())
                    .map(|polygons| {
                        polygons
                            .into_iter()
                            .filter_map(|rings| rings.into_iter().next())
                            .map(to_ring)
                            .collect()
                    })
                    .unwrap_or_default()
            }
            _ => Vec::new(),
        }
    }
}

fn to_ring(positions: Vec<Vec<f64>>) -> Ring {
    positions
        .into_iter()
        .filter_map(|position| match position.as_slice() {
            [lng, lat, ..] if lng.is_finite() && lat.is_finite() => Some([*lng, *lat]),
            _ => None,
        })
        .collect()
}

/// Features grouped per configured area, in configuration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaIndex {
    pub areas: Vec<AreaShapes>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AreaShapes {
    pub key: AreaKey,
    pub label: String,
    pub rings: Vec<Ring>,
}

impl AreaShapes {
    /// Mean of the first ring's vertices; where a popup for this area is pinned.
    pub fn label_anchor(&self) -> Option<[f64; 2]> {
        let ring = self.rings.iter().find(|ring| !ring.is_empty())?;
        let count = ring.len() as f64;
        let [lng, lat] = ring
            .iter()
            .fold([0.0, 0.0], |[lng, lat], point| [lng + point[0], lat + point[1]]);
        Some([lng / count, lat / count])
    }
}

impl AreaIndex {
    pub fn get(&self, key: &str) -> Option<&AreaShapes> {
        self.areas.iter().find(|shapes| shapes.key == key)
    }

    /// Box around every drawn coordinate, `None` if nothing has coordinates.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for point in self
            .areas
            .iter()
            .flat_map(|shapes| shapes.rings.iter())
            .flatten()
        {
            match bounds.as_mut() {
                Some(existing) => existing.extend(*point),
                None => bounds = Some(Bounds::from_point(*point)),
            }
        }
        bounds
    }
}

fn same_label(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

/// Configured area key whose label matches `label`, ignoring case.
pub fn area_key_for_label<'a>(
    areas: &'a IndexMap<AreaKey, Area>,
    label: &str,
) -> Option<&'a str> {
    areas
        .iter()
        .find(|(_, area)| same_label(&area.label, label))
        .map(|(key, _)| key.as_str())
}

pub fn classify_features(
    areas: &IndexMap<AreaKey, Area>,
    collection: &FeatureCollection,
) -> AreaIndex {
    let mut index = AreaIndex {
        areas: areas
            .iter()
            .map(|(key, area)| AreaShapes {
                key: key.to_string(),
                label: area.label.clone(),
                rings: Vec::new(),
            })
            .collect(),
    };

    let mut unmatched = 0_usize;
    for feature in &collection.features {
        let key = feature
            .properties
            .delivery_area
            .as_deref()
            .and_then(|label| area_key_for_label(areas, label));
        let Some(shapes) = key.and_then(|key| index.areas.iter_mut().find(|s| s.key == key))
        else {
            unmatched += 1;
            continue;
        };
        if let Some(geometry) = &feature.geometry {
            shapes.rings.extend(geometry.outer_rings());
        }
    }

    for shapes in &index.areas {
        tracing::debug!(area = %shapes.key, label = %shapes.label, rings = shapes.rings.len(), "classified delivery area");
    }
    if unmatched > 0 {
        tracing::debug!(unmatched, "features without a configured delivery area");
    }

    index
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Bounds {
    pub fn from_point(point: [f64; 2]) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    pub fn extend(&mut self, [lng, lat]: [f64; 2]) {
        self.min[0] = self.min[0].min(lng);
        self.min[1] = self.min[1].min(lat);
        self.max[0] = self.max[0].max(lng);
        self.max[1] = self.max[1].max(lat);
    }

    pub fn center(&self) -> [f64; 2] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
        ]
    }
}

/// Projects lng/lat into an SVG viewport so that `bounds` fits inside `padding`.
///
/// Longitude is scaled by the cosine of the centre latitude so shapes keep their
/// proportions at this city scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapFrame {
    pub width: f64,
    pub height: f64,
    origin: [f64; 2],
    scale: f64,
    lng_factor: f64,
    offset: [f64; 2],
}

/// Degrees shown around the centre when there is nothing to frame.
const FALLBACK_SPAN: f64 = 0.1;

impl MapFrame {
    pub fn fit(bounds: Option<Bounds>, width: f64, height: f64, padding: f64) -> Self {
        let bounds = bounds.unwrap_or_else(|| {
            let [lng, lat] = DEFAULT_CENTER;
            let half = FALLBACK_SPAN / 2.0;
            Bounds {
                min: [lng - half, lat - half],
                max: [lng + half, lat + half],
            }
        });
        let lng_factor = bounds.center()[1].to_radians().cos().abs().max(f64::EPSILON);
        let span_x = ((bounds.max[0] - bounds.min[0]) * lng_factor).max(f64::EPSILON);
        let span_y = (bounds.max[1] - bounds.min[1]).max(f64::EPSILON);
        let inner_w = (width - 2.0 * padding).max(1.0);
        let inner_h = (height - 2.0 * padding).max(1.0);
        let scale = (inner_w / span_x).min(inner_h / span_y);
        let offset = [
            (width - span_x * scale) / 2.0,
            (height - span_y * scale) / 2.0,
        ];
        Self {
            width,
            height,
            origin: [bounds.min[0], bounds.max[1]],
            scale,
            lng_factor,
            offset,
        }
    }

    pub fn project(&self, [lng, lat]: [f64; 2]) -> [f64; 2] {
        [
            self.offset[0] + (lng - self.origin[0]) * self.lng_factor * self.scale,
            self.offset[1] + (self.origin[1] - lat) * self.scale,
        ]
    }

    /// SVG `points` attribute for a ring.
    pub fn svg_points(&self, ring: &Ring) -> String {
        ring.iter()
            .map(|point| {
                let [x, y] = self.project(*point);
                format!("{x:.1},{y:.1}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}
