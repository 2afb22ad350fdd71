use std::fmt;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Locations in the western hemisphere have a negative longitude.
///
/// # Examples
///
/// ```
/// use shorecast::LatLon;
///
/// let wrightsville_beach = LatLon(34.2085, -77.7964);
/// assert_eq!(wrightsville_beach.to_string(), "34.2085,-77.7964");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// Reference location used when no coordinates are given: Wrightsville Beach, NC.
pub const DEFAULT_LOCATION: LatLon = LatLon(34.2085, -77.7964);

/// Formats as `lat,long`, the form the forecast API expects in its path.
impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}
