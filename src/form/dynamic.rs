//! Dynamic field interactions.
//!
//! Lookup tables driving the priority colour, the case-type description
//! placeholder, and the country-dependent state selector.

use super::field::SelectOption;

pub const DEFAULT_DESCRIPTION_PLACEHOLDER: &str = "Please provide detailed information about your issue, including steps to reproduce, error messages, or any relevant details...";

pub const STATE_PLACEHOLDER: &str = "Select state";

pub const COUNTRIES: &[(&str, &str)] = &[
    ("ID", "Indonesia"),
    ("MY", "Malaysia"),
    ("SG", "Singapore"),
    ("TH", "Thailand"),
    ("PH", "Philippines"),
    ("VN", "Vietnam"),
    ("OTHER", "Other"),
];

const INDONESIA: &[(&str, &str)] = &[
    ("AC", "Aceh"),
    ("SU", "Sumatera Utara"),
    ("SB", "Sumatera Barat"),
    ("RI", "Riau"),
    ("KR", "Kepulauan Riau"),
    ("JA", "Jambi"),
    ("SS", "Sumatera Selatan"),
    ("BB", "Bangka Belitung"),
    ("BE", "Bengkulu"),
    ("LA", "Lampung"),
    ("JK", "DKI Jakarta"),
    ("JB", "Jawa Barat"),
    ("BT", "Banten"),
    ("JT", "Jawa Tengah"),
    ("YO", "DI Yogyakarta"),
    ("JI", "Jawa Timur"),
    ("BA", "Bali"),
    ("NB", "Nusa Tenggara Barat"),
    ("NT", "Nusa Tenggara Timur"),
    ("KB", "Kalimantan Barat"),
    ("KT", "Kalimantan Tengah"),
    ("KS", "Kalimantan Selatan"),
    ("KI", "Kalimantan Timur"),
    ("KU", "Kalimantan Utara"),
    ("SA", "Sulawesi Utara"),
    ("SR", "Sulawesi Barat"),
    ("ST", "Sulawesi Tengah"),
    ("SN", "Sulawesi Selatan"),
    ("SG", "Sulawesi Tenggara"),
    ("GO", "Gorontalo"),
    ("MA", "Maluku"),
    ("MU", "Maluku Utara"),
    ("PA", "Papua"),
    ("PB", "Papua Barat"),
    ("PS", "Papua Selatan"),
    ("PT", "Papua Tengah"),
    ("PP", "Papua Pegunungan"),
    ("PW", "Papua Barat Daya"),
];

const MALAYSIA: &[(&str, &str)] = &[
    ("KL", "Kuala Lumpur"),
    ("SL", "Selangor"),
    ("JH", "Johor"),
    ("PG", "Penang"),
];

const SINGAPORE: &[(&str, &str)] = &[("SG", "Singapore")];

const THAILAND: &[(&str, &str)] = &[
    ("BK", "Bangkok"),
    ("CM", "Chiang Mai"),
    ("PK", "Phuket"),
];

/// Return the border colour for a priority value.
///
pub fn priority_color(value: &str) -> Option<&'static str> {
    match value {
        "High" => Some("#ef4444"),
        "Medium" => Some("#f59e0b"),
        "Low" => Some("#10b981"),
        _ => None,
    }
}

/// Return the description placeholder suggested for a case type.
///
pub fn case_type_placeholder(case_type: &str) -> &'static str {
    match case_type {
        "Technical Support" => "Please describe the technical issue you're experiencing, including error messages, steps you've already tried, and your system information...",
        "Bug Report" => "Please describe the bug, what you expected to happen vs. what actually happened, and steps to reproduce the issue...",
        "Feature Request" => "Please describe the feature you'd like to see, how it would help you, and any specific requirements...",
        "Order Issue" => "Please provide your order number and describe the issue you're experiencing...",
        _ => DEFAULT_DESCRIPTION_PLACEHOLDER,
    }
}

/// Return the states or provinces known for a country code.
///
pub fn states_for(country_code: &str) -> &'static [(&'static str, &'static str)] {
    match country_code {
        "ID" => INDONESIA,
        "MY" => MALAYSIA,
        "SG" => SINGAPORE,
        "TH" => THAILAND,
        _ => &[],
    }
}

pub fn state_options(country_code: &str) -> Vec<SelectOption> {
    states_for(country_code)
        .iter()
        .map(|(value, text)| SelectOption::new(value, text))
        .collect()
}
