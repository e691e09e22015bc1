//! The hierarchy of US reporting locations, FluView perspective.
//!
//! The national region ("nat") covers everything. It can be subdivided two
//! ways — ten HHS regions or nine Census divisions — and each subdivision
//! fully covers the nation with no gaps. The leaves are "atoms": mostly
//! whole states, plus a state fragment (`ny_minus_jfk`), territories
//! (dc, pr, vi), and one city (jfk). New York state is the composition of
//! its fragment with jfk.
//!
//! Ordering here is canonical and load-bearing: `ATOMS` fixes weight-matrix
//! column order, `REGIONS` fixes output-row order.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Atomic reporting locations (regions containing only themselves).
pub const ATOMS: &[&str] = &[
    // entire states
    "ak", "al", "ar", "az", "ca", "co", "ct", "de", "fl", "ga", "hi", "ia", "id", "il", "in",
    "ks", "ky", "la", "ma", "md", "me", "mi", "mn", "mo", "ms", "mt", "nc", "nd", "ne", "nh",
    "nj", "nm", "nv", "oh", "ok", "or", "pa", "ri", "sc", "sd", "tn", "tx", "ut", "va", "vt",
    "wa", "wi", "wv", "wy",
    // state fragments
    "ny_minus_jfk",
    // territories
    "dc", "pr", "vi",
    // cities
    "jfk",
];

/// The national region.
pub const NAT: &[&str] = &["nat"];

/// The ten HHS regions.
pub const HHS: &[&str] = &[
    "hhs1", "hhs2", "hhs3", "hhs4", "hhs5", "hhs6", "hhs7", "hhs8", "hhs9", "hhs10",
];

const HHS_MEMBERS: &[&[&str]] = &[
    &["ct", "ma", "me", "nh", "ri", "vt"],
    &["jfk", "nj", "ny_minus_jfk", "pr", "vi"],
    &["dc", "de", "md", "pa", "va", "wv"],
    &["al", "fl", "ga", "ky", "ms", "nc", "sc", "tn"],
    &["il", "in", "mi", "mn", "oh", "wi"],
    &["ar", "la", "nm", "ok", "tx"],
    &["ia", "ks", "mo", "ne"],
    &["co", "mt", "nd", "sd", "ut", "wy"],
    &["az", "ca", "hi", "nv"],
    &["ak", "id", "or", "wa"],
];

/// The nine Census divisions.
pub const CEN: &[&str] = &[
    "cen1", "cen2", "cen3", "cen4", "cen5", "cen6", "cen7", "cen8", "cen9",
];

const CEN_MEMBERS: &[&[&str]] = &[
    &["ct", "ma", "me", "nh", "ri", "vt"],
    &["jfk", "nj", "ny_minus_jfk", "pa", "pr", "vi"],
    &["il", "in", "mi", "oh", "wi"],
    &["ia", "ks", "mn", "mo", "nd", "ne", "sd"],
    &["dc", "de", "fl", "ga", "md", "nc", "sc", "va", "wv"],
    &["al", "ky", "ms", "tn"],
    &["ar", "la", "ok", "tx"],
    &["az", "co", "id", "mt", "nm", "nv", "ut", "wy"],
    &["ak", "ca", "hi", "or", "wa"],
];

/// New York state combines the fragment with the jfk city atom.
pub const NY_STATE: &[&str] = &["ny"];

const NY_STATE_MEMBERS: &[&str] = &["jfk", "ny_minus_jfk"];

/// Every known location, canonical order: nat, HHS, Census, ny, atoms.
pub static REGIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut all = Vec::with_capacity(NAT.len() + HHS.len() + CEN.len() + NY_STATE.len() + ATOMS.len());
    all.extend_from_slice(NAT);
    all.extend_from_slice(HHS);
    all.extend_from_slice(CEN);
    all.extend_from_slice(NY_STATE);
    all.extend_from_slice(ATOMS);
    all
});

/// Location → constituent atoms.
static MEMBERSHIP: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    map.insert("nat", ATOMS);
    for (&region, &members) in HHS.iter().zip(HHS_MEMBERS) {
        map.insert(region, members);
    }
    for (&region, &members) in CEN.iter().zip(CEN_MEMBERS) {
        map.insert(region, members);
    }
    map.insert("ny", NY_STATE_MEMBERS);
    for atom in ATOMS {
        // an atom contains only itself
        map.insert(atom, std::slice::from_ref(atom));
    }
    map
});

/// Constituent atoms of a location, or `None` for unknown identifiers.
pub fn members(location: &str) -> Option<&'static [&'static str]> {
    MEMBERSHIP.get(location).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_count() {
        assert_eq!(ATOMS.len(), 54);
    }

    #[test]
    fn test_every_region_resolves_to_known_atoms() {
        for region in REGIONS.iter() {
            let members = members(region).expect("known region");
            assert!(!members.is_empty(), "{region} has no members");
            for atom in members {
                assert!(ATOMS.contains(atom), "{region} member {atom} is not an atom");
            }
        }
    }

    #[test]
    fn test_subdivisions_cover_the_nation_without_gaps() {
        for (label, regions) in [("hhs", HHS), ("cen", CEN)] {
            let mut covered: Vec<&str> = regions
                .iter()
                .flat_map(|r| members(r).unwrap().iter().copied())
                .collect();
            covered.sort_unstable();
            let mut atoms: Vec<&str> = ATOMS.to_vec();
            atoms.sort_unstable();
            assert_eq!(covered, atoms, "{label} subdivision must cover all atoms exactly once");
        }
    }

    #[test]
    fn test_ny_is_fragment_plus_city() {
        assert_eq!(members("ny").unwrap().to_vec(), vec!["jfk", "ny_minus_jfk"]);
    }

    #[test]
    fn test_unknown_location() {
        assert!(members("narnia").is_none());
    }

    #[test]
    fn test_canonical_ordering() {
        assert_eq!(REGIONS[0], "nat");
        assert_eq!(REGIONS[1], "hhs1");
        assert_eq!(REGIONS[11], "cen1");
        assert_eq!(REGIONS[20], "ny");
        assert_eq!(REGIONS[21], "ak");
        assert_eq!(REGIONS.len(), 1 + 10 + 9 + 1 + 54);
    }
}
