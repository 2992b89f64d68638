// src/snow/collider.rs

use bevy::prelude::{Component, Transform, Vec2};

use crate::math::predicates::{point_in_circle, point_in_column, point_in_path};

/// Achsenparalleler Box-Collider, `half_extents` im lokalen Raum.
#[derive(Component, Debug, Clone, Copy)]
pub struct BoxCollider2D {
    pub half_extents: Vec2,
}

/// Kreis-Collider mit lokalem Radius und Mittelpunkt-Versatz.
#[derive(Component, Debug, Clone, Copy)]
pub struct CircleCollider2D {
    pub radius: f32,
    pub offset: Vec2,
}

/// Polygon-Collider aus einem oder mehreren geschlossenen Pfaden
/// im lokalen Raum (Multi-Path, Löcher werden nicht unterschieden).
#[derive(Component, Debug, Clone, Default)]
pub struct PolygonCollider2D {
    pub paths: Vec<Vec<Vec2>>,
}

/// Kollisionssäule einer Box in Weltkoordinaten: x-Ausdehnung
/// plus Unterkante.
#[derive(Debug, Clone, Copy)]
pub struct BoxColumn {
    pub min_x: f32,
    pub max_x: f32,
    pub floor_y: f32,
}

impl BoxColumn {
    pub fn contains_x(&self, x: f32) -> bool {
        point_in_column(x, self.min_x, self.max_x)
    }
}

/// In der Welt platzierte Box.
#[derive(Debug, Clone)]
pub struct WorldBox {
    pub transform: Transform,
    pub shape: BoxCollider2D,
}

impl WorldBox {
    /// Löst die Kollisionssäule der Box auf: die vier lokalen Ecken werden
    /// transformiert, die Säule ist die achsenparallele Hülle (entspricht
    /// den Welt-Bounds einer eventuell rotierten Box).
    pub fn column(&self) -> BoxColumn {
        let matrix = self.transform.compute_matrix();
        let he = self.shape.half_extents;
        let corners = [
            Vec2::new(-he.x, -he.y),
            Vec2::new(he.x, -he.y),
            Vec2::new(he.x, he.y),
            Vec2::new(-he.x, he.y),
        ];

        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut floor_y = f32::INFINITY;
        for corner in corners {
            let world = matrix.transform_point3(corner.extend(0.0));
            min_x = min_x.min(world.x);
            max_x = max_x.max(world.x);
            floor_y = floor_y.min(world.y);
        }

        BoxColumn {
            min_x,
            max_x,
            floor_y,
        }
    }
}

/// In der Welt platzierter Kreis.
#[derive(Debug, Clone)]
pub struct WorldCircle {
    pub transform: Transform,
    pub shape: CircleCollider2D,
}

impl WorldCircle {
    /// Punkt-im-Kreis-Test in Weltkoordinaten. Der Offset wird wie im
    /// Ursprungsverhalten weder rotiert noch skaliert, der Radius
    /// skaliert mit `scale.x`.
    pub fn contains(&self, point: Vec2) -> bool {
        let center = self.transform.translation.truncate() + self.shape.offset;
        let radius = self.shape.radius * self.transform.scale.x;
        point_in_circle(point, center, radius)
    }
}

/// In der Welt platziertes Polygon.
#[derive(Debug, Clone)]
pub struct WorldPolygon {
    pub transform: Transform,
    pub shape: PolygonCollider2D,
}

impl WorldPolygon {
    /// Punkt-im-Polygon-Test in Weltkoordinaten. Jeder Pfad wird durch
    /// die TRS-Matrix transformiert; ein Punkt gilt als innen sobald
    /// irgendein Pfad ihn enthält.
    pub fn contains(&self, point: Vec2) -> bool {
        let matrix = self.transform.compute_matrix();
        let mut world_path = Vec::new();

        for path in &self.shape.paths {
            world_path.clear();
            world_path.extend(
                path.iter()
                    .map(|p| matrix.transform_point3(p.extend(0.0)).truncate()),
            );
            if point_in_path(point, &world_path) {
                return true;
            }
        }

        false
    }
}

/// Ein Szenenobjekt das gleichzeitig mehrere Collider-Formen tragen kann.
/// Die Fähigkeiten werden einmal beim Registry-Aufbau aufgelöst, nicht
/// pro Tick neu abgefragt.
#[derive(Debug, Clone, Default)]
pub struct ColliderSource {
    pub transform: Transform,
    pub box_shape: Option<BoxCollider2D>,
    pub circle_shape: Option<CircleCollider2D>,
    pub polygon_shape: Option<PolygonCollider2D>,
}

/// Registry der aktiven Collider, gruppiert nach Form.
///
/// Die Gruppierung hält die feste Verarbeitungsreihenfolge
/// Box → Polygon → Kreis fest: Boxen dürfen einen Vertex im selben Tick
/// wieder anheben bevor Polygon/Kreis ihn weiter absenken.
#[derive(Debug, Clone, Default)]
pub struct ColliderSet {
    boxes: Vec<WorldBox>,
    polygons: Vec<WorldPolygon>,
    circles: Vec<WorldCircle>,
}

impl ColliderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_box(&mut self, transform: Transform, shape: BoxCollider2D) {
        self.boxes.push(WorldBox { transform, shape });
    }

    pub fn add_circle(&mut self, transform: Transform, shape: CircleCollider2D) {
        self.circles.push(WorldCircle { transform, shape });
    }

    pub fn add_polygon(&mut self, transform: Transform, shape: PolygonCollider2D) {
        self.polygons.push(WorldPolygon { transform, shape });
    }

    /// Registriert alle Formen eines Szenenobjekts. Ein Objekt mit Box
    /// und Kreis landet in beiden Gruppen.
    pub fn register(&mut self, source: ColliderSource) {
        if let Some(shape) = source.box_shape {
            self.add_box(source.transform, shape);
        }
        if let Some(shape) = source.circle_shape {
            self.add_circle(source.transform, shape);
        }
        if let Some(shape) = source.polygon_shape {
            self.add_polygon(source.transform, shape);
        }
    }

    pub fn from_sources<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = ColliderSource>,
    {
        let mut set = Self::new();
        for source in sources {
            set.register(source);
        }
        set
    }

    pub fn boxes(&self) -> &[WorldBox] {
        &self.boxes
    }

    pub fn polygons(&self) -> &[WorldPolygon] {
        &self.polygons
    }

    pub fn circles(&self) -> &[WorldCircle] {
        &self.circles
    }

    pub fn len(&self) -> usize {
        self.boxes.len() + self.polygons.len() + self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
