//! Fixed reference tables backing value synthesis.
//!
//! These are the realistic-but-fictitious pools the synthesizer draws from.
//! They are immutable: construct one [`ReferenceData`] at startup and share
//! it by reference.

const COMPANY_NAMES: &[&str] = &[
    "TechGlobal Solutions Pvt Ltd",
    "InnovateCorp International",
    "GlobalVentures Technologies",
    "NextGen Business Solutions",
    "Digital Dynamics Ltd",
    "Future Enterprises Inc",
    "Strategic Holdings Company",
    "Advanced Systems Corp",
];

const COUNTRIES: &[&str] = &[
    "India",
    "USA",
    "Singapore",
    "UK",
    "Canada",
    "Australia",
    "Germany",
    "Japan",
];

const CITIES: &[(&str, &[&str])] = &[
    (
        "India",
        &["Mumbai", "Delhi", "Bangalore", "Chennai", "Hyderabad", "Pune"],
    ),
    (
        "USA",
        &["New York", "San Francisco", "Los Angeles", "Chicago", "Boston"],
    ),
    ("Singapore", &["Singapore"]),
    ("UK", &["London", "Manchester", "Birmingham"]),
    ("Canada", &["Toronto", "Vancouver", "Montreal"]),
    ("Australia", &["Sydney", "Melbourne", "Brisbane"]),
    ("Germany", &["Berlin", "Munich", "Frankfurt"]),
    ("Japan", &["Tokyo", "Osaka", "Yokohama"]),
];

const ACTIVITY_CODES_1987: &[&str] = &["892", "893", "851", "852", "853", "859"];

const ACTIVITY_CODES_2008: &[&str] =
    &["62099", "62091", "62092", "72100", "72200", "63099"];

const PERSON_NAMES: &[&str] = &[
    "Rajesh Kumar",
    "Priya Sharma",
    "Amit Patel",
    "Sneha Gupta",
    "Vikram Singh",
    "Kavya Reddy",
    "Arjun Mehta",
    "Pooja Agarwal",
];

const DESIGNATIONS: &[&str] = &[
    "Managing Director",
    "Chief Executive Officer",
    "Chief Financial Officer",
    "Director",
    "Partner",
    "General Manager",
    "Vice President",
];

const STREET_NAMES: &[&str] = &[
    "Business Park",
    "Tech Plaza",
    "Corporate Avenue",
    "Industrial Estate",
    "Commerce Street",
];

const AREA_NAMES: &[&str] = &["Sector 15", "Block A", "Phase II", "Zone 3", "District Center"];

const EMAIL_USERNAMES: &[&str] = &[
    "contact",
    "info",
    "admin",
    "finance",
    "corporate",
    "director",
];

const EMAIL_DOMAINS: &[&str] = &[
    "company.com",
    "business.in",
    "corp.com",
    "enterprises.net",
    "solutions.org",
];

const AUDIT_FIRM_SUFFIXES: &[&str] = &[
    "Associates & Co",
    "Partners LLP",
    "Chartered Accountants",
    "Audit Services",
];

const AUDIT_FIRM_CITIES: &[&str] = &["Mumbai", "Delhi", "Bangalore"];

const CURRENCIES: &[&str] = &["USD", "INR", "SGD", "GBP"];

const COMMON_PERCENTAGES: &[f64] = &[100.00, 92.85, 51.00, 49.00, 75.00, 25.00, 60.00, 40.00];

#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub company_names: &'static [&'static str],
    pub countries: &'static [&'static str],
    cities: &'static [(&'static str, &'static [&'static str])],
    pub activity_codes_1987: &'static [&'static str],
    pub activity_codes_2008: &'static [&'static str],
    pub person_names: &'static [&'static str],
    pub designations: &'static [&'static str],
    pub street_names: &'static [&'static str],
    pub area_names: &'static [&'static str],
    pub email_usernames: &'static [&'static str],
    pub email_domains: &'static [&'static str],
    pub audit_firm_suffixes: &'static [&'static str],
    pub audit_firm_cities: &'static [&'static str],
    pub currencies: &'static [&'static str],
    pub common_percentages: &'static [f64],
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            company_names: COMPANY_NAMES,
            countries: COUNTRIES,
            cities: CITIES,
            activity_codes_1987: ACTIVITY_CODES_1987,
            activity_codes_2008: ACTIVITY_CODES_2008,
            person_names: PERSON_NAMES,
            designations: DESIGNATIONS,
            street_names: STREET_NAMES,
            area_names: AREA_NAMES,
            email_usernames: EMAIL_USERNAMES,
            email_domains: EMAIL_DOMAINS,
            audit_firm_suffixes: AUDIT_FIRM_SUFFIXES,
            audit_firm_cities: AUDIT_FIRM_CITIES,
            currencies: CURRENCIES,
            common_percentages: COMMON_PERCENTAGES,
        }
    }
}

impl ReferenceData {
    /// Cities known for a country, or `None` for countries outside the table.
    pub fn cities_for(&self, country: &str) -> Option<&'static [&'static str]> {
        self.cities
            .iter()
            .find(|(name, _)| *name == country)
            .map(|(_, cities)| *cities)
    }
}
