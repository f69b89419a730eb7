//! Static lookup tables for countries and indicators.
//!
//! The ingestion table (`INGEST_COUNTRY_CODES`) and the display table
//! (`COUNTRY_TABLE`) are kept separate: the wide survey files only ever name
//! a subset of the countries that the long-format table carries codes for.
//! Likewise `INDICATOR_LABELS` and `INDICATOR_DESCRIPTIONS` have different
//! key sets; lookups into either may miss.

use super::types::Country;

/// Shown when an indicator has no description entry.
pub const NO_DESCRIPTION: &str = "No description available for this indicator.";

/// Indicator codes that are dropped from the unified table.
pub const EXCLUDED_INDICATORS: &[&str] = &["AG_PRD_FIESMS", "ER_GRF_PLNTSTOR"];

/// Prefix given to indicator columns of the wide survey files.
pub const MARINE_POLLUTION_PREFIX: &str = "MARINE_POLLUTION_";

/// Country display name -> short code, as spelled in the wide survey files.
pub static INGEST_COUNTRY_CODES: &[(&str, &str)] = &[
    ("American Samoa", "AS"),
    ("Cook Islands", "CK"),
    ("Fiji", "FJ"),
    ("French Polynesia", "PF"),
    ("International Waters", "IW"),
    ("Niue", "NU"),
    ("Papua New Guinea", "PG"),
    ("Samoa", "WS"),
    ("Solomon Islands", "SB"),
    ("Tokelau", "TK"),
    ("Tonga", "TO"),
    ("Tuvalu", "TV"),
    ("Vanuatu", "VU"),
];

/// Short code -> display name and map position.
pub static COUNTRY_TABLE: &[Country] = &[
    Country { code: "CK", name: "Cook Islands", latitude: -21.2367, longitude: -159.7777 },
    Country { code: "WS", name: "Samoa", latitude: -13.7590, longitude: -172.1046 },
    Country { code: "PF", name: "French Polynesia", latitude: -17.6797, longitude: -149.4068 },
    Country { code: "PG", name: "Papua New Guinea", latitude: -6.314993, longitude: 143.95555 },
    Country { code: "MH", name: "Marshall Islands", latitude: 7.1315, longitude: 171.1845 },
    Country { code: "FJ", name: "Fiji", latitude: -17.7134, longitude: 178.0650 },
    Country { code: "VU", name: "Vanuatu", latitude: -15.3767, longitude: 166.9592 },
    Country {
        code: "FM",
        name: "Micronesia (Federated States of)",
        latitude: 7.4256,
        longitude: 150.5508,
    },
    Country { code: "KI", name: "Kiribati", latitude: 1.8709, longitude: -157.3630 },
    Country { code: "NR", name: "Nauru", latitude: -0.5228, longitude: 166.9315 },
    Country { code: "PW", name: "Palau", latitude: 7.5150, longitude: 134.5825 },
    Country { code: "NU", name: "Niue", latitude: -19.0544, longitude: -169.8672 },
    Country { code: "TV", name: "Tuvalu", latitude: -7.1095, longitude: 177.6493 },
    Country { code: "TO", name: "Tonga", latitude: -21.1789, longitude: -175.1982 },
    Country { code: "AS", name: "American Samoa", latitude: -14.2710, longitude: -170.1322 },
    Country { code: "IW", name: "International Waters", latitude: -10.0, longitude: 160.0 },
    Country { code: "SB", name: "Solomon Islands", latitude: -9.6457, longitude: 160.1562 },
    Country { code: "TK", name: "Tokelau", latitude: -9.2002, longitude: -171.8484 },
];

/// Indicator code -> display label.
pub static INDICATOR_LABELS: &[(&str, &str)] = &[
    ("MARINE_POLLUTION_ABANDONED", "Abandoned Waste"),
    ("MARINE_POLLUTION_CHEMICALS", "Chemical Pollution"),
    ("MARINE_POLLUTION_DUMPED", "Dumped Waste"),
    ("MARINE_POLLUTION_GENERAL_GARBAGE", "General Garbage"),
    ("MARINE_POLLUTION_LAND_BASED_SOURCE", "Land-based Sources"),
    ("MARINE_POLLUTION_LOST_DURING_FISHING", "Lost During Fishing"),
    ("MARINE_POLLUTION_METALS", "Metal Waste"),
    ("MARINE_POLLUTION_OIL_SPLILLAGES_AND_LEAKAGES", "Oil Spillages & Leakages"),
    ("MARINE_POLLUTION_OLD_FISHING_GEAR", "Old Fishing Gear"),
    ("MARINE_POLLUTION_PLASTICS", "Plastic Waste"),
    ("MARINE_POLLUTION_WASTE_OILS", "Waste Oils"),
    ("EN_MAR_BEALITSQ", "Mangrove Area (sq km)"),
    ("ER_H2O_FWTL", "Freshwater Levels"),
    ("ER_MRN_MARINKBA", "Marine Protected Area Coverage"),
    ("ER_PTD_TOT", "Total Protected Land Area"),
    ("ER_RSK_LST", "Species at Risk"),
    ("SPC_12_4_2", "Hazardous Waste Management"),
    ("SPC_12_5_1", "Recycling Rate"),
    ("SPC_14_2_1", "Sustainable Marine Management"),
    (
        "SPC_14_6_1",
        "Combatting Illegal, Unreported and Unregulated (IUU) Fishing",
    ),
    ("SPC_14_b_1", "Small-scale Fisheries Access"),
    ("SPC_15_8_1", "Control of Invasive Non-native Species"),
    ("SPC_2_4_1", "Sustainable Agriculture Practices"),
];

/// Indicator code -> long description.
pub static INDICATOR_DESCRIPTIONS: &[(&str, &str)] = &[
    ("MARINE_POLLUTION_ABANDONED", "Marine pollution caused by abandoned waste left in the ocean environment."),
    ("MARINE_POLLUTION_CHEMICALS", "Pollution resulting from chemical substances entering marine ecosystems."),
    ("MARINE_POLLUTION_DUMPED", "Waste materials dumped intentionally into the sea, contributing to pollution."),
    ("MARINE_POLLUTION_GENERAL_GARBAGE", "General solid waste found in the marine environment."),
    ("MARINE_POLLUTION_LAND_BASED_SOURCE", "Pollution originating from land-based sources such as rivers, industrial outflow, and sewage."),
    ("MARINE_POLLUTION_LOST_DURING_FISHING", "Fishing gear and materials unintentionally lost in the ocean during fishing activities."),
    ("MARINE_POLLUTION_METALS", "Marine pollution involving heavy metals and other metallic waste."),
    ("MARINE_POLLUTION_OIL_SPLILLAGES_AND_LEAKAGES", "Oil spills and leakages contaminating marine waters."),
    ("MARINE_POLLUTION_OLD_FISHING_GEAR", "Discarded or lost fishing gear that contributes to marine debris and ghost fishing."),
    ("MARINE_POLLUTION_PLASTICS", "Plastic waste found in marine environments, including microplastics."),
    ("MARINE_POLLUTION_WASTE_OILS", "Waste oils discarded into marine environments, contributing to water contamination."),
    ("AG_PRD_FIESMS", "Prevalence of moderate or severe food insecurity in the population."),
    ("EN_MAR_BEALITSQ", "Beach litter per square kilometer (Number)."),
    ("ER_GRF_PLNTSTOR", "Plant genetic resources accessions stored ex situ (number)."),
    ("ER_H2O_FWTL", "Proportion of fish stocks within biologically sustainable levels (not overexploited)."),
    ("ER_MRN_MARINKBA", "Protected area coverage for marine Key Biodiversity Areas (KBAs)."),
    ("ER_PTD_TOT", "Average proportion of Freshwater and Terrestrial KBAs covered by protected areas."),
    ("ER_RSK_LST", "Red List Index, a measure of species extinction risk."),
    ("SPC_12_4_2", "Hazardous waste generated, per capita (kg)."),
    ("SPC_12_5_1", "Municipal waste recycled (Tonnes)."),
    ("SPC_14_2_1", "Proportion of national exclusive economic zones managed using ecosystem-based approaches."),
    ("SPC_14_6_1", "Progress by countries in implementing international instruments to combat illegal, unreported, and unregulated fishing (1 = lowest, 5 = highest)."),
    ("SPC_14_b_1", "Degree of implementation of legal/policy frameworks recognizing and protecting access rights for small-scale fisheries (1 = lowest, 5 = highest)."),
    ("SPC_15_8_1", "Countries adopting legislation to prevent or control invasive alien species."),
    ("SPC_2_4_1", "Proportion of agricultural area under productive and sustainable agriculture."),
];

/// Label of the plastic pollution indicator, used by the risk view.
pub const PLASTIC_WASTE_LABEL: &str = "Plastic Waste";

/// Label of the marine protected area indicator, used by the risk view.
pub const MARINE_PROTECTION_LABEL: &str = "Marine Protected Area Coverage";

fn find(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Look up the short code for a country name as written in the survey files
pub fn country_code_for_name(name: &str) -> Option<&'static str> {
    find(INGEST_COUNTRY_CODES, name)
}

/// Look up a country by its short code
pub fn country_for_code(code: &str) -> Option<&'static Country> {
    COUNTRY_TABLE.iter().find(|c| c.code == code)
}

/// Look up a country by its display name
pub fn country_for_name(name: &str) -> Option<&'static Country> {
    COUNTRY_TABLE.iter().find(|c| c.name == name)
}

pub fn indicator_label(code: &str) -> Option<&'static str> {
    find(INDICATOR_LABELS, code)
}

pub fn indicator_description(code: &str) -> Option<&'static str> {
    find(INDICATOR_DESCRIPTIONS, code)
}

/// Description for display, falling back to [`NO_DESCRIPTION`]
pub fn describe(code: &str) -> &'static str {
    indicator_description(code).unwrap_or(NO_DESCRIPTION)
}
