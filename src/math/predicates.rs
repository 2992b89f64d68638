// src/math/predicates.rs

use bevy::math::Vec2;

/// Prüft ob ein Punkt innerhalb eines Kreises liegt.
///
/// `radius` ist bereits in Weltkoordinaten skaliert, der Aufrufer
/// löst die Collider-Transformation vorher auf.
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance(center) <= radius
}

/// Prüft ob ein Punkt innerhalb eines geschlossenen Pfades liegt (Ray-Casting).
///
/// Even-Odd-Regel: ein horizontaler Strahl ab `point` wechselt die
/// Innen/Außen-Zugehörigkeit bei jeder gekreuzten Kante. Eine Kante zählt,
/// wenn ein Endpunkt strikt unterhalb von `point.y` liegt und der andere
/// auf/oberhalb, und der x-Schnittpunkt auf der Strahlseite liegt.
pub fn point_in_path(point: Vec2, path: &[Vec2]) -> bool {
    if path.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = path.len() - 1;

    for i in 0..path.len() {
        let a = path[i];
        let b = path[j];

        if (a.y < point.y && b.y >= point.y) || (b.y < point.y && a.y >= point.y) {
            let intercept_x = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if intercept_x < point.x {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

/// Prüft ob eine x-Koordinate strikt innerhalb einer Kollisionssäule liegt.
///
/// Degenerierte Säulen (`min_x >= max_x`) enthalten keinen Punkt.
pub fn point_in_column(x: f32, min_x: f32, max_x: f32) -> bool {
    x > min_x && x < max_x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_containment() {
        let center = Vec2::new(1.0, 2.0);
        assert!(point_in_circle(Vec2::new(1.0, 2.0), center, 0.5));
        assert!(point_in_circle(Vec2::new(1.5, 2.0), center, 0.5)); // Rand zählt als innen
        assert!(!point_in_circle(Vec2::new(1.6, 2.0), center, 0.5));
    }

    #[test]
    fn test_circle_degenerate_radius() {
        let center = Vec2::ZERO;
        assert!(!point_in_circle(Vec2::new(0.1, 0.0), center, 0.0));
        assert!(!point_in_circle(Vec2::ZERO, center, -1.0));
    }

    #[test]
    fn test_path_square() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(0.0, 4.0),
        ];
        assert!(point_in_path(Vec2::new(2.0, 2.0), &square));
        assert!(!point_in_path(Vec2::new(5.0, 2.0), &square));
        assert!(!point_in_path(Vec2::new(-1.0, 2.0), &square));
        assert!(!point_in_path(Vec2::new(2.0, 5.0), &square));
    }

    #[test]
    fn test_path_concave() {
        // L-förmiges Polygon, die Einkerbung liegt außen
        let shape = [
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 2.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(2.0, 4.0),
            Vec2::new(0.0, 4.0),
        ];
        assert!(point_in_path(Vec2::new(1.0, 3.0), &shape));
        assert!(point_in_path(Vec2::new(3.0, 1.0), &shape));
        assert!(!point_in_path(Vec2::new(3.0, 3.0), &shape));
    }

    #[test]
    fn test_path_too_few_points() {
        assert!(!point_in_path(Vec2::ZERO, &[]));
        assert!(!point_in_path(
            Vec2::ZERO,
            &[Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0)]
        ));
    }

    #[test]
    fn test_column_bounds_strict() {
        assert!(point_in_column(0.5, 0.0, 1.0));
        assert!(!point_in_column(0.0, 0.0, 1.0));
        assert!(!point_in_column(1.0, 0.0, 1.0));
        // degenerierte Säule
        assert!(!point_in_column(0.0, 0.0, 0.0));
        assert!(!point_in_column(0.5, 1.0, 0.0));
    }
}
