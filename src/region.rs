/// Colocation codes with a known city name.
pub const COLO_NAMES: [(&str, &str); 36] = [
    ("YUL", "Montreal"),
    ("LAX", "Los Angeles"),
    ("PEK", "Beijing Capital"),
    ("HKG", "Hong Kong"),
    ("SJC", "San Jose"),
    ("IAD", "Washington"),
    ("NRT", "Tokyo"),
    ("ORD", "Chicago"),
    ("JFK", "New York"),
    ("CDG", "Paris"),
    ("LHR", "London"),
    ("SIN", "Singapore"),
    ("FRA", "Frankfurt"),
    ("DXB", "Dubai"),
    ("SYD", "Sydney"),
    ("AMS", "Amsterdam"),
    ("KIX", "Osaka"),
    ("ICN", "Seoul"),
    ("BKK", "Bangkok"),
    ("IST", "Istanbul"),
    ("SEA", "Seattle"),
    ("MUC", "Munich"),
    ("ZRH", "Zurich"),
    ("MAD", "Madrid"),
    ("SFO", "San Francisco"),
    ("YVR", "Vancouver"),
    ("BOM", "Mumbai"),
    ("DEL", "New Delhi"),
    ("PVG", "Shanghai"),
    ("TPE", "Taipei"),
    ("YYZ", "Toronto"),
    ("CGK", "Jakarta"),
    ("AKL", "Auckland"),
    ("KUL", "Kuala Lumpur"),
    ("CPT", "Cape Town"),
    ("PEM", "Phuket"),
];

/// Human readable name for a colocation code, or the code itself when unknown.
pub fn display_name(colo: &str) -> &str {
    COLO_NAMES
        .iter()
        .find(|(code, _)| *code == colo)
        .map(|(_, name)| *name)
        .unwrap_or(colo)
}
