use crate::reference::ReferenceData;
use crate::schema::{ActivityCodeStandard, DatePart, FieldCategory};
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const MONTH_NAMES: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Magnitude bands observed on real filings: small investments, mid-size
// flows, and large capital positions.
const AMOUNT_BANDS: &[(i64, i64)] = &[(50, 10_000), (10_000, 100_000), (100_000, 1_000_000)];

/// Produces a formatted value for a classified field.
///
/// Total over all categories: every call yields a value, so filling never
/// fails for a well-formed field name. Randomness comes from an owned
/// seedable generator; construct with [`with_seed`](Self::with_seed) for
/// reproducible output.
pub struct ValueSynthesizer {
    reference: ReferenceData,
    rng: StdRng,
}

impl ValueSynthesizer {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            reference: ReferenceData::default(),
            rng,
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Generates a value for `field_name` according to its category.
    ///
    /// Callers invoke this only for fields whose current value is empty or
    /// whitespace; pre-existing values are never regenerated.
    pub fn synthesize(&mut self, category: FieldCategory, field_name: &str) -> String {
        match category {
            FieldCategory::Date => self.random_date(field_name),
            FieldCategory::Uin => self.random_uin(),
            FieldCategory::MonetaryAmount => self.random_amount(),
            FieldCategory::Percentage => self.random_percentage(),
            FieldCategory::OrganizationName => self.choose(self.reference.company_names),
            FieldCategory::Country => self.choose(self.reference.countries),
            FieldCategory::Address => self.random_address(),
            FieldCategory::PhoneNumber => self.random_phone(),
            FieldCategory::Email => self.random_email(),
            FieldCategory::ActivityCode(standard) => self.random_activity_code(standard),
            FieldCategory::PersonName => self.choose(self.reference.person_names),
            FieldCategory::Designation => self.choose(self.reference.designations),
            FieldCategory::RegistrationNumber => self.random_registration_number(),
            FieldCategory::Currency => self.choose(self.reference.currencies),
            FieldCategory::Level => format!("Level-{}", self.rng.gen_range(1..=3)),
            FieldCategory::Signature => {
                format!("[Signature of {}]", self.choose(self.reference.person_names))
            }
            FieldCategory::AuditFirmName => self.random_audit_firm(),
            FieldCategory::Boolean => self.random_boolean(field_name),
            FieldCategory::DateComponent(part) => self.random_date_component(part),
            FieldCategory::FreeTextSpecify => "Professional Services".to_string(),
            FieldCategory::NilableFinancial => self.nil_or_amount(),
            FieldCategory::Unrecognized => fallback_value(field_name),
        }
    }

    fn choose(&mut self, pool: &[&str]) -> String {
        pool.choose(&mut self.rng)
            .copied()
            .unwrap_or_default()
            .to_string()
    }

    fn random_date(&mut self, field_name: &str) -> String {
        let lower = field_name.to_lowercase();
        // Period boundaries are pinned to the 2023 reporting year.
        if lower.contains("from") {
            return "01-01-2023".to_string();
        }
        if lower.contains("to") {
            return "31-12-2023".to_string();
        }

        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let date = start
            .checked_add_days(Days::new(self.rng.gen_range(0..365)))
            .unwrap();
        date.format("%d-%m-%Y").to_string()
    }

    // 5 letters, then the reporting year and a 4-digit sequence, all 13
    // characters space separated: "B Y W A Z 2 0 2 3 0 0 6 3".
    fn random_uin(&mut self) -> String {
        const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

        let mut characters: Vec<char> = (0..5)
            .map(|_| ALPHABET[self.rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        characters.extend("2023".chars());
        characters.extend(format!("{:04}", self.rng.gen_range(0..10_000)).chars());

        characters
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn random_amount(&mut self) -> String {
        let (min, max) = *AMOUNT_BANDS.choose(&mut self.rng).unwrap();

        // 30% of amounts carry cents; 15% are losses.
        if self.rng.gen_bool(0.3) {
            let mut amount =
                (self.rng.gen_range(min as f64..=max as f64) * 100.0).round() / 100.0;
            if self.rng.gen_bool(0.15) {
                amount = -amount;
            }
            format!("USD {}", format_decimal_amount(amount))
        } else {
            let mut amount = self.rng.gen_range(min..=max);
            if self.rng.gen_bool(0.15) {
                amount = -amount;
            }
            format!("USD {}", format_integer_amount(amount))
        }
    }

    fn random_percentage(&mut self) -> String {
        // Shareholding splits cluster on a handful of canonical values.
        let value = if self.rng.gen_bool(0.6) {
            *self
                .reference
                .common_percentages
                .choose(&mut self.rng)
                .unwrap()
        } else {
            (self.rng.gen_range(1.0f64..=100.0) * 100.0).round() / 100.0
        };

        if value.fract() == 0.0 {
            format!("{}%", value as i64)
        } else {
            format!("{:.2}%", value)
        }
    }

    fn random_address(&mut self) -> String {
        let number = self.rng.gen_range(1..=999);
        let street = self.choose(self.reference.street_names);
        let area = self.choose(self.reference.area_names);
        let country = self.choose(self.reference.countries);
        let city = match self.reference.cities_for(&country) {
            Some(cities) => self.choose(cities),
            None => "Metropolitan City".to_string(),
        };

        format!("{} {}, {}, {}, {}", number, street, area, city, country)
    }

    fn random_phone(&mut self) -> String {
        format!(
            "+91 {} {}",
            self.rng.gen_range(70_000..=99_999),
            self.rng.gen_range(10_000..=99_999)
        )
    }

    fn random_email(&mut self) -> String {
        let username = self.choose(self.reference.email_usernames);
        let company = self.choose(self.reference.company_names);
        let mailbox = strip_company_tokens(&company, &[" ", "ltd", "pvt", "inc"]);
        let domain = self.choose(self.reference.email_domains);
        let suffix = domain.split('.').nth(1).unwrap_or("com").to_string();

        format!("{}@{}.{}", username, mailbox, suffix)
    }

    fn random_activity_code(&mut self, standard: ActivityCodeStandard) -> String {
        match standard {
            ActivityCodeStandard::Nsic1987 => self.choose(self.reference.activity_codes_1987),
            ActivityCodeStandard::Nic2008 => self.choose(self.reference.activity_codes_2008),
        }
    }

    fn random_registration_number(&mut self) -> String {
        match self.rng.gen_range(0..4) {
            0 => format!("{}S", self.rng.gen_range(100_000..=999_999)),
            1 => self
                .rng
                .gen_range(10_000_000_000_000u64..=99_999_999_999_999)
                .to_string(),
            2 => self
                .rng
                .gen_range(1_000_000_000_000_000u64..=9_999_999_999_999_999)
                .to_string(),
            _ => format!("UDIN{}", self.rng.gen_range(10_000_000..=99_999_999)),
        }
    }

    fn random_audit_firm(&mut self) -> String {
        format!(
            "{} - {}",
            self.choose(self.reference.audit_firm_suffixes),
            self.choose(self.reference.audit_firm_cities)
        )
    }

    fn random_boolean(&mut self, field_name: &str) -> String {
        // Checkbox pairs render as a tick or stay blank; a blank box is a
        // populated answer, not a missing one.
        if field_name.ends_with("_yes") || field_name.ends_with("_no") {
            if self.rng.gen_bool(0.5) {
                "\u{2713}".to_string()
            } else {
                String::new()
            }
        } else if self.rng.gen_bool(0.5) {
            "Yes".to_string()
        } else {
            "No".to_string()
        }
    }

    fn random_date_component(&mut self, part: DatePart) -> String {
        match part {
            DatePart::Day => self.rng.gen_range(1..=28).to_string(),
            DatePart::Month => self.choose(MONTH_NAMES),
            DatePart::Year => "2023".to_string(),
        }
    }

    fn nil_or_amount(&mut self) -> String {
        if self.rng.gen_bool(0.7) {
            "Nil".to_string()
        } else {
            self.random_amount()
        }
    }
}

impl Default for ValueSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercases `name` and removes each token in order. Shared by email
/// synthesis and the contact-derivation consistency step, which strip
/// slightly different suffix sets.
pub(crate) fn strip_company_tokens(name: &str, tokens: &[&str]) -> String {
    let mut result = name.to_lowercase();
    for token in tokens {
        result = result.replace(token, "");
    }
    result
}

fn fallback_value(field_name: &str) -> String {
    let lower = field_name.to_lowercase();
    if matches!(lower.as_str(), "nil" | "n/a" | "na" | "not applicable") {
        return "Nil".to_string();
    }
    if ["amount", "usd", "profit", "dividend", "worth"]
        .iter()
        .any(|term| lower.contains(term))
    {
        "Nil".to_string()
    } else {
        "N/A".to_string()
    }
}

fn format_integer_amount(value: i64) -> String {
    if value.abs() >= 1000 {
        group_thousands(value.abs().to_string(), value < 0)
    } else {
        value.to_string()
    }
}

fn format_decimal_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, cents) = formatted.split_once('.').unwrap();
    let whole = if value.abs() >= 1000.0 {
        group_thousands(whole.to_string(), value < 0.0)
    } else if value < 0.0 {
        format!("-{}", whole)
    } else {
        whole.to_string()
    };
    format!("{}.{}", whole, cents)
}

fn group_thousands(digits: String, negative: bool) -> String {
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
