use shared_types::GeoPoint;

/// A closed rectangular polygon derived from two opposite corners,
/// used as a geospatial containment filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    /// Ring vertices in order, with the first vertex repeated last.
    vertices: [GeoPoint; 5],
}

/// Derive the bounding rectangle from a top-right and a bottom-left
/// corner. Corners are normalized, so swapped inputs still produce a
/// well-formed rectangle.
pub fn rectangle_bounds(top_right: GeoPoint, bottom_left: GeoPoint) -> Rectangle {
    let min_lat = bottom_left.lat.min(top_right.lat);
    let max_lat = bottom_left.lat.max(top_right.lat);
    let min_lng = bottom_left.lng.min(top_right.lng);
    let max_lng = bottom_left.lng.max(top_right.lng);

    let bl = GeoPoint { lat: min_lat, lng: min_lng };
    let br = GeoPoint { lat: min_lat, lng: max_lng };
    let tr = GeoPoint { lat: max_lat, lng: max_lng };
    let tl = GeoPoint { lat: max_lat, lng: min_lng };

    Rectangle {
        vertices: [bl, br, tr, tl, bl],
    }
}

impl Rectangle {
    /// Boundary-inclusive containment test: points exactly on an edge
    /// are inside.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let bl = self.vertices[0];
        let tr = self.vertices[2];
        point.lat >= bl.lat && point.lat <= tr.lat && point.lng >= bl.lng && point.lng <= tr.lng
    }

    /// Render as a Postgres `polygon` literal, `(lng,lat)` per vertex.
    /// Postgres closes the ring implicitly, so the repeated vertex is
    /// dropped.
    pub fn to_pg_polygon(&self) -> String {
        let corners: Vec<String> = self.vertices[..4]
            .iter()
            .map(|p| format!("({},{})", p.lng, p.lat))
            .collect();
        format!("({})", corners.join(","))
    }
}
