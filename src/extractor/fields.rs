//! Symbolic field names for the supported sentence families.
//!
//! Receivers emit the same GGA-style fix sentence under different talker
//! prefixes depending on the constellation in use. The field layout does
//! not change with the prefix, so one table serves every supported talker.

use crate::common::sentence::{FieldIndex, SentenceId};

/// Talker prefixes the dispatch table accepts.
///
/// `GP` (GPS), `GN` (multi-constellation), `GL` (GLONASS), `GA` (Galileo)
/// and `BD` (BeiDou) cover the common receiver variants.
pub const SUPPORTED_TALKERS: [&str; 5] = ["GP", "GN", "GL", "GA", "BD"];

/// Resolves a symbolic field name to its [`FieldIndex`] for the given
/// sentence identifier.
///
/// The identifier must be a five-character talker+type tag with a
/// supported talker prefix; the type selects the table. Supported types
/// and names:
///
/// - `GGA`: `time`, `latitude`, `latitude_hemisphere`, `longitude`,
///   `longitude_hemisphere`, `fix_quality`, `satellites_in_use`, `hdop`,
///   `altitude`, `altitude_unit`, `geoid_separation`,
///   `geoid_separation_unit`, `dgps_age`, `dgps_station_id`
/// - `RMC`: `time`, `status`, `latitude`, `latitude_hemisphere`,
///   `longitude`, `longitude_hemisphere`, `speed_knots`, `course`,
///   `date`, `magnetic_variation`, `magnetic_variation_hemisphere`
/// - `VTG`: `course_true`, `course_magnetic`, `speed_knots`, `speed_kmh`
///
/// Returns `None` for an unsupported identifier or an unknown name.
pub fn resolve_field_name(id: SentenceId<'_>, name: &str) -> Option<FieldIndex> {
    let tag = id.as_str();
    if tag.len() != 5 {
        return None;
    }
    let (talker, kind) = tag.split_at(2);
    if !SUPPORTED_TALKERS.contains(&talker) {
        return None;
    }

    let index = match kind {
        "GGA" => match name {
            "time" => 1,
            "latitude" => 2,
            "latitude_hemisphere" => 3,
            "longitude" => 4,
            "longitude_hemisphere" => 5,
            "fix_quality" => 6,
            "satellites_in_use" => 7,
            "hdop" => 8,
            "altitude" => 9,
            "altitude_unit" => 10,
            "geoid_separation" => 11,
            "geoid_separation_unit" => 12,
            "dgps_age" => 13,
            "dgps_station_id" => 14,
            _ => return None,
        },
        "RMC" => match name {
            "time" => 1,
            "status" => 2,
            "latitude" => 3,
            "latitude_hemisphere" => 4,
            "longitude" => 5,
            "longitude_hemisphere" => 6,
            "speed_knots" => 7,
            "course" => 8,
            "date" => 9,
            "magnetic_variation" => 10,
            "magnetic_variation_hemisphere" => 11,
            _ => return None,
        },
        "VTG" => match name {
            "course_true" => 1,
            "course_magnetic" => 3,
            "speed_knots" => 5,
            "speed_kmh" => 7,
            _ => return None,
        },
        _ => return None,
    };

    Some(FieldIndex::new(index))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract_field;

    fn id(tag: &str) -> SentenceId<'_> {
        SentenceId::new(tag).unwrap()
    }

    #[test]
    fn test_gga_names() {
        assert_eq!(resolve_field_name(id("GPGGA"), "time"), Some(FieldIndex::new(1)));
        assert_eq!(resolve_field_name(id("GPGGA"), "latitude"), Some(FieldIndex::new(2)));
        assert_eq!(resolve_field_name(id("GPGGA"), "altitude"), Some(FieldIndex::new(9)));
        assert_eq!(resolve_field_name(id("GPGGA"), "dgps_station_id"), Some(FieldIndex::new(14)));
    }

    #[test]
    fn test_talker_variants_share_one_table() {
        for talker in SUPPORTED_TALKERS {
            let mut tag: heapless::String<5> = heapless::String::new();
            tag.push_str(talker).unwrap();
            tag.push_str("GGA").unwrap();
            let sid = SentenceId::new(&tag).unwrap();
            assert_eq!(resolve_field_name(sid, "latitude"), Some(FieldIndex::new(2)));
        }
    }

    #[test]
    fn test_rmc_and_vtg_names() {
        assert_eq!(resolve_field_name(id("GNRMC"), "speed_knots"), Some(FieldIndex::new(7)));
        assert_eq!(resolve_field_name(id("GNRMC"), "date"), Some(FieldIndex::new(9)));
        assert_eq!(resolve_field_name(id("GPVTG"), "course_true"), Some(FieldIndex::new(1)));
        assert_eq!(resolve_field_name(id("GPVTG"), "speed_kmh"), Some(FieldIndex::new(7)));
    }

    #[test]
    fn test_unknown_name_or_sentence() {
        assert_eq!(resolve_field_name(id("GPGGA"), "speed_kmh"), None);
        assert_eq!(resolve_field_name(id("GPGGA"), "latitud"), None);
        assert_eq!(resolve_field_name(id("GPGSV"), "latitude"), None); // unsupported type
        assert_eq!(resolve_field_name(id("XXGGA"), "latitude"), None); // unsupported talker
        assert_eq!(resolve_field_name(id("GGA"), "latitude"), None); // bare type tag
        assert_eq!(resolve_field_name(id("PMTK001"), "latitude"), None);
    }

    #[test]
    fn test_resolve_then_extract() {
        let gga = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";
        let index = resolve_field_name(id("GPGGA"), "satellites_in_use").unwrap();
        let mut out = [0u8; 8];
        assert_eq!(extract_field(gga, id("GPGGA"), index, &mut out), Some(2));
        assert_eq!(&out[..2], b"08");
    }
}
