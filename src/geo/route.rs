use crate::domain::{Distance, GeoPoint};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

/// A straight line between the user and a selected point.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Route {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub distance: Distance,
    pub midpoint: GeoPoint,
    pub bounds: Bounds,
}

impl Route {
    pub fn between(from: GeoPoint, to: GeoPoint) -> Self {
        Route {
            from,
            to,
            distance: from.distance_to(&to),
            // Plain coordinate mean, this is where the distance label goes
            midpoint: GeoPoint::new((from.latitude + to.latitude) / 2.0, (from.longitude + to.longitude) / 2.0),
            bounds: Bounds {
                south_west: GeoPoint::new(from.latitude.min(to.latitude), from.longitude.min(to.longitude)),
                north_east: GeoPoint::new(from.latitude.max(to.latitude), from.longitude.max(to.longitude)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn between_computes_distance_midpoint_and_bounds() {
        let from = GeoPoint::new(19.4426, -99.1332);
        let to = GeoPoint::new(19.4326, -99.1232);

        let route = Route::between(from, to);

        assert_eq!(route.distance, from.distance_to(&to));
        assert_eq!(route.midpoint, GeoPoint::new((19.4426 + 19.4326) / 2.0, (-99.1332 + -99.1232) / 2.0));
        assert_eq!(
            route.bounds,
            Bounds {
                south_west: GeoPoint::new(19.4326, -99.1332),
                north_east: GeoPoint::new(19.4426, -99.1232),
            }
        );
    }

    #[test]
    fn between_the_same_point_is_empty() {
        let point = GeoPoint::new(19.4326, -99.1332);

        let route = Route::between(point, point);

        assert_eq!(route.distance.to_string(), "0 m");
        assert_eq!(route.midpoint, point);
    }
}
