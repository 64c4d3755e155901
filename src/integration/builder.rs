//! Builder for creating Observation objects from various input formats.

use crate::integration::Observation;

/// Builder for creating `Observation` objects from various box formats.
#[derive(Debug, Clone, Default)]
pub struct ObservationBuilder {
    id: u64,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl ObservationBuilder {
    /// Create a new observation builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the upstream identity.
    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.x1 = x1;
        self.y1 = y1;
        self.x2 = x2;
        self.y2 = y2;
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.x1 = cx - w / 2.0;
        self.y1 = cy - h / 2.0;
        self.x2 = cx + w / 2.0;
        self.y2 = cy + h / 2.0;
        self
    }

    /// Set bounding box in TLWH format (top, left, width, height).
    pub fn tlwh(mut self, t: f32, l: f32, w: f32, h: f32) -> Self {
        self.x1 = l;
        self.y1 = t;
        self.x2 = l + w;
        self.y2 = t + h;
        self
    }

    /// Build the final `Observation`.
    pub fn build(self) -> Observation {
        Observation::new(self.id, self.x1, self.y1, self.x2, self.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_builder() {
        let obs = ObservationBuilder::new()
            .id(7)
            .tlbr(10.0, 20.0, 50.0, 80.0)
            .build();

        assert_eq!(obs.id, 7);
        assert_eq!(obs.bbox.to_tlbr(), [10.0, 20.0, 50.0, 80.0]);
    }

    #[test]
    fn test_xywh_matches_tlbr() {
        let a = ObservationBuilder::new().xywh(30.0, 50.0, 40.0, 60.0).build();
        let b = ObservationBuilder::new().tlbr(10.0, 20.0, 50.0, 80.0).build();
        assert_eq!(a.bbox, b.bbox);
    }
}
