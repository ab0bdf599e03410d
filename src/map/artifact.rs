// map/artifact.rs

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// What a marker is, which decides how it is drawn: listings are colored
/// circles (color from the price tier), amenities are fixed glyph pins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerKind {
    Listing { color: &'static str },
    Railway,
    School,
    Grocery,
}

impl MarkerKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            MarkerKind::Listing { .. } => "",
            MarkerKind::Railway => "🚉",
            MarkerKind::School => "🏫",
            MarkerKind::Grocery => "🛒",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub kind: MarkerKind,
    /// Hover text; plain.
    pub tooltip: String,
    /// Click content; already-escaped HTML.
    pub popup: String,
}

/// The finished map, rebuilt from scratch on every request. `to_html`
/// serializes it into the self-contained Leaflet page the `/map`
/// endpoint serves.
#[derive(Debug, Clone, PartialEq)]
pub struct MapArtifact {
    pub center: (f64, f64),
    pub zoom: u8,
    pub markers: Vec<Marker>,
    /// Listing positions the viewport is fitted to; empty means the
    /// fallback center stays as-is.
    pub bounds: Vec<(f64, f64)>,
}

impl MapArtifact {
    pub fn to_html(&self) -> String {
        let mut script = String::new();

        let (lat, lon) = self.center;
        script.push_str(&format!(
            "var map = L.map('map').setView([{lat}, {lon}], {});\n",
            self.zoom
        ));
        script.push_str(&format!(
            "L.tileLayer({}, {{ maxZoom: 19, attribution: {} }}).addTo(map);\n",
            js_str(TILE_URL),
            js_str(TILE_ATTRIBUTION)
        ));

        for marker in &self.markers {
            script.push_str(&marker_js(marker));
        }

        if !self.bounds.is_empty() {
            let points: Vec<String> = self
                .bounds
                .iter()
                .map(|(lat, lon)| format!("[{lat}, {lon}]"))
                .collect();
            script.push_str(&format!(
                "map.fitBounds([{}], {{ padding: [30, 30] }});\n",
                points.join(", ")
            ));
        }

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Property Map</title>
  <link rel="stylesheet" href="{LEAFLET_CSS}">
  <script src="{LEAFLET_JS}"></script>
  <style>
    html, body, #map {{ height: 100%; margin: 0; }}
    .amenity-pin {{ font-size: 20px; text-align: center; }}
  </style>
</head>
<body>
  <div id="map"></div>
  <script>
{script}  </script>
</body>
</html>"#
        )
    }
}

fn marker_js(marker: &Marker) -> String {
    let Marker { lat, lon, .. } = marker;

    let constructor = match &marker.kind {
        MarkerKind::Listing { color } => format!(
            "L.circleMarker([{lat}, {lon}], {{ radius: 9, color: {c}, fillColor: {c}, fillOpacity: 0.85 }})",
            c = js_str(color)
        ),
        kind => format!(
            "L.marker([{lat}, {lon}], {{ icon: L.divIcon({{ className: 'amenity-pin', html: {}, iconSize: [24, 24] }}) }})",
            js_str(kind.glyph())
        ),
    };

    format!(
        "{constructor}.bindPopup({}).bindTooltip({}).addTo(map);\n",
        js_str(&marker.popup),
        js_str(&marker.tooltip)
    )
}

/// Quote a string as a JS literal. JSON string syntax is valid JS.
fn js_str(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}
