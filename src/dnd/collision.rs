use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// A registered drop region and where it currently sits.
#[derive(Debug, Clone, PartialEq)]
pub struct Droppable {
    pub id: String,
    pub rect: Rect,
}

impl Droppable {
    pub fn new(id: impl Into<String>, rect: Rect) -> Self {
        Self { id: id.into(), rect }
    }
}

/// How the current drop target is picked among overlapping regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionStrategy {
    /// Smallest mean distance between corresponding corners.
    #[default]
    ClosestCorners,
    /// Smallest distance between centers.
    ClosestCenter,
    /// Largest overlap relative to the combined area. Needs actual overlap.
    RectIntersection,
}

impl CollisionStrategy {
    /// Returns the winning droppable id for the dragged rect, if any.
    /// Equal scores resolve to the droppable registered first.
    pub fn detect(self, collision_rect: &Rect, droppables: &[Droppable]) -> Option<String> {
        let scored = droppables.iter().filter_map(|d| {
            let score = match self {
                CollisionStrategy::ClosestCorners => corner_distance(collision_rect, &d.rect),
                CollisionStrategy::ClosestCenter => collision_rect.center().distance(d.rect.center()),
                CollisionStrategy::RectIntersection => {
                    let overlap = collision_rect.intersection_area(&d.rect);
                    if overlap <= 0.0 {
                        return None;
                    }
                    let union = collision_rect.area() + d.rect.area() - overlap;
                    // lower is better for every strategy
                    -(overlap / union)
                }
            };
            Some((score, d))
        });

        let mut best: Option<(f64, &Droppable)> = None;
        for (score, droppable) in scored {
            match best {
                Some((best_score, _)) if score >= best_score => {}
                _ => best = Some((score, droppable)),
            }
        }
        best.map(|(_, d)| d.id.clone())
    }
}

fn corner_distance(a: &Rect, b: &Rect) -> f64 {
    let total: f64 = a
        .corners()
        .iter()
        .zip(b.corners().iter())
        .map(|(p, q)| p.distance(*q))
        .sum();
    total / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column() -> Vec<Droppable> {
        vec![
            Droppable::new("container-1", Rect::new(0.0, 0.0, 200.0, 400.0)),
            Droppable::new("item-a", Rect::new(10.0, 50.0, 180.0, 40.0)),
            Droppable::new("item-b", Rect::new(10.0, 100.0, 180.0, 40.0)),
        ]
    }

    #[test]
    fn closest_corners_prefers_the_matching_item() {
        let dragged = Rect::new(12.0, 95.0, 180.0, 40.0);
        assert_eq!(
            CollisionStrategy::ClosestCorners.detect(&dragged, &column()),
            Some("item-b".to_string())
        );
    }

    #[test]
    fn closest_corners_picks_container_when_far_from_items() {
        let dragged = Rect::new(0.0, 350.0, 200.0, 400.0);
        assert_eq!(
            CollisionStrategy::ClosestCorners.detect(&dragged, &column()),
            Some("container-1".to_string())
        );
    }

    #[test]
    fn closest_center_uses_centers() {
        let dragged = Rect::new(10.0, 55.0, 180.0, 40.0);
        assert_eq!(
            CollisionStrategy::ClosestCenter.detect(&dragged, &column()),
            Some("item-a".to_string())
        );
    }

    #[test]
    fn rect_intersection_requires_overlap() {
        let far = Rect::new(1000.0, 1000.0, 10.0, 10.0);
        assert_eq!(CollisionStrategy::RectIntersection.detect(&far, &column()), None);

        let on_b = Rect::new(10.0, 105.0, 180.0, 40.0);
        assert_eq!(
            CollisionStrategy::RectIntersection.detect(&on_b, &column()),
            Some("item-b".to_string())
        );
    }

    #[test]
    fn ties_keep_registration_order_and_empty_input_yields_none() {
        let twins = vec![
            Droppable::new("item-x", Rect::new(0.0, 0.0, 10.0, 10.0)),
            Droppable::new("item-y", Rect::new(0.0, 0.0, 10.0, 10.0)),
        ];
        let dragged = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(CollisionStrategy::ClosestCorners.detect(&dragged, &twins), Some("item-x".to_string()));
        assert_eq!(CollisionStrategy::ClosestCorners.detect(&dragged, &[]), None);
    }
}
