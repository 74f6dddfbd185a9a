use reqwest::Url;

pub const GOOGLE_MAPS_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/";

/// Link that opens Google Maps with driving directions between two addresses.
pub fn google_maps_directions_url(origin: &str, destination: &str) -> String {
    let params = [
        ("api", "1"),
        ("origin", origin),
        ("destination", destination),
        ("travelmode", "driving"),
    ];

    match Url::parse_with_params(GOOGLE_MAPS_DIRECTIONS_URL, &params) {
        Ok(url) => url.into(),
        // The base is a constant, parsing cannot fail.
        Err(_) => GOOGLE_MAPS_DIRECTIONS_URL.to_owned(),
    }
}
