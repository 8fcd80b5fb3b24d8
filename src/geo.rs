//! Coordinates & Distance
//!
//! Static geocoded coordinates per location plus haversine distance,
//! and a thin wrapper over the browser geolocation API.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Map centre for the Milwaukee metro area.
pub const MKE_CENTER: (f64, f64) = (43.02, -88.05);

/// Geocoded (lat, lon) keyed by location id.
/// IDs 14 and 22 are approximate town-centre fallbacks.
pub fn coords_for(location_id: u32) -> Option<(f64, f64)> {
    let coords = match location_id {
        1 => (43.10487, -87.89639),  // Holy Family Parish
        2 => (43.01875, -88.05779),  // Mother of Perpetual Help Parish
        3 => (43.01870, -87.97015),  // Notre Dame School of Milwaukee
        4 => (42.77620, -87.80240),  // Northwest Parishes of Racine
        5 => (42.91921, -88.00076),  // Polish Center of Wisconsin
        6 => (43.03931, -87.95178),  // Pompeii Men's Club
        7 => (43.08413, -88.21275),  // Queen of Apostles Parish
        8 => (42.99848, -87.90464),  // St. Augustine of Hippo Parish
        9 => (43.00764, -87.99712),  // St. Barnabas
        10 => (43.14413, -88.01328), // St. Bernadette Parish
        11 => (43.23507, -88.16217), // St. Boniface Parish
        12 => (43.08915, -88.13889), // St. Dominic Parish
        13 => (42.98718, -87.98965), // St. Gregory the Great
        14 => (42.87591, -88.35588), // St. James the Less (approx, Mukwonago area)
        15 => (42.96731, -88.02006), // St. John the Evangelist
        16 => (42.88273, -88.20311), // St. Joseph Parish Big Bend
        17 => (42.69650, -87.81258), // St. Lucy Parish
        18 => (42.97506, -88.37829), // St. Paul Catholic Church
        19 => (43.05354, -87.98106), // St. Sebastian Parish
        20 => (42.85719, -87.93554), // St. Stephen Parish
        21 => (42.87994, -88.47559), // St. Theresa of Avila Church
        22 => (42.80583, -88.20726), // St. Thomas Aquinas Parish (approx, Waterford area)
        _ => return None,
    };
    Some(coords)
}

/// Haversine distance in miles between two lat/lon points (degrees).
pub fn distance_mi(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const EARTH_RADIUS_MI: f64 = 3958.8;
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    EARTH_RADIUS_MI * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// One-shot device position request. Exactly one of the callbacks fires;
/// there is no retry and no cancellation.
pub fn request_position(
    on_success: impl FnOnce(f64, f64) + 'static,
    on_error: impl FnOnce(String) + 'static,
) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let geolocation = match window.navigator().geolocation() {
        Ok(g) => g,
        Err(_) => {
            on_error("Geolocation is not available in this browser.".to_string());
            return;
        }
    };

    let success = Closure::once_into_js(move |position: web_sys::Position| {
        let coords = position.coords();
        on_success(coords.latitude(), coords.longitude());
    });
    let error = Closure::once_into_js(move |err: web_sys::PositionError| {
        on_error(err.message());
    });

    if geolocation
        .get_current_position_with_error_callback(
            success.unchecked_ref(),
            Some(error.unchecked_ref()),
        )
        .is_err()
    {
        web_sys::console::warn_1(&"geolocation request rejected".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MKE: (f64, f64) = (43.0389, -87.9065);
    const CHI: (f64, f64) = (41.8781, -87.6298);

    #[test]
    fn test_distance_symmetric() {
        let there = distance_mi(MKE.0, MKE.1, CHI.0, CHI.1);
        let back = distance_mi(CHI.0, CHI.1, MKE.0, MKE.1);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_distance_zero_at_identity() {
        assert_eq!(distance_mi(MKE.0, MKE.1, MKE.0, MKE.1), 0.0);
    }

    #[test]
    fn test_distance_milwaukee_chicago() {
        // Roughly 80 miles as the crow flies.
        let d = distance_mi(MKE.0, MKE.1, CHI.0, CHI.1);
        assert!(d > 75.0 && d < 85.0, "got {d}");
    }

    #[test]
    fn test_coords_lookup() {
        assert!(coords_for(1).is_some());
        assert!(coords_for(22).is_some());
        assert!(coords_for(99).is_none());
    }
}
