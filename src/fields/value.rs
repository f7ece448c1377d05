//! Structured values behind each condominium field and the rules that reduce
//! them to the one-line display string kept in the [`FieldStore`].
//!
//! Reduction is one-way: the display string is a projection of the structured
//! value and is never parsed back into it.
//!
//! [`FieldStore`]: super::store::FieldStore

use std::fmt;

use serde::{Deserialize, Serialize};

use super::amenities::CommunityAmenity;
use super::registry::{
    ABOUT_PROPERTY, APPLICATION_AGREEMENT, CHARGES, COMMUNITY_AMENITY, LEASING_INFO,
    NEAREST_EDUCATION, NEAREST_LANDMARK, NEAREST_STATIONS, PARKING, PET_FEES, PROPERTY_ADDRESS,
    RENT_REMINDER, UTILITIES_PROVIDER,
};
use crate::media::Attachment;

/// Closed set of field shapes. Every key maps to exactly one kind; keys
/// without a dedicated shape fall back to [`FieldKind::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    PropertyAddress,
    LeasingInfo,
    Charges,
    RentReminder,
    ApplicationAgreement,
    AboutProperty,
    CommunityAmenity,
    PetFees,
    Parking,
    NearestEducation,
    NearestStations,
    NearestLandmark,
    UtilitiesProvider,
    Text,
}

impl FieldKind {
    pub fn for_key(key: &str) -> Self {
        match key {
            PROPERTY_ADDRESS => FieldKind::PropertyAddress,
            LEASING_INFO => FieldKind::LeasingInfo,
            CHARGES => FieldKind::Charges,
            RENT_REMINDER => FieldKind::RentReminder,
            APPLICATION_AGREEMENT => FieldKind::ApplicationAgreement,
            ABOUT_PROPERTY => FieldKind::AboutProperty,
            COMMUNITY_AMENITY => FieldKind::CommunityAmenity,
            PET_FEES => FieldKind::PetFees,
            PARKING => FieldKind::Parking,
            NEAREST_EDUCATION => FieldKind::NearestEducation,
            NEAREST_STATIONS => FieldKind::NearestStations,
            NEAREST_LANDMARK => FieldKind::NearestLandmark,
            UTILITIES_PROVIDER => FieldKind::UtilitiesProvider,
            _ => FieldKind::Text,
        }
    }

    /// Allowed values for select-style attributes, `None` for free text.
    pub fn choices(&self, attr: &str) -> Option<&'static [&'static str]> {
        let options: &'static [&'static str] = match (self, attr) {
            (FieldKind::PropertyAddress, "country") => &["", "US", "CA"],
            (FieldKind::PropertyAddress, "state") => &["", "TX", "CA", "NY"],
            (FieldKind::LeasingInfo, "phoneCountry") => &["BD", "US", "IN"],
            (FieldKind::Charges, "applicantType") => {
                &["All 18+ applicant", "All applicants", "Other"]
            }
            (FieldKind::RentReminder, "frequency") => &["Monthly", "Weekly", "Biweekly"],
            (FieldKind::PetFees, "petType") => &["", "Dog", "Cat", "Other"],
            (FieldKind::Parking, "time") => &["", "1H", "2H", "4H", "24H"],
            (FieldKind::NearestEducation, "type") => {
                &["", "High school", "College", "University", "Other"]
            }
            (FieldKind::NearestStations, "type") => &["", "Bus", "Train", "Metro", "Other"],
            (FieldKind::NearestLandmark, "type") => &["", "Museum", "Park", "Mall", "Other"],
            (FieldKind::UtilitiesProvider, "type") => {
                &["", "Electricity", "Water", "Gas", "Internet", "Other"]
            }
            (
                FieldKind::NearestEducation | FieldKind::NearestStations | FieldKind::NearestLandmark,
                "unit",
            ) => &["Mile", "Km"],
            _ => return None,
        };
        Some(options)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAddress {
    pub property_name: String,
    pub total_units: String,
    pub website: String,
    pub country: String,
    pub street: String,
    pub apt: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeasingInfo {
    pub manager_name: String,
    pub phone_country: String,
    pub phone: String,
    pub email: String,
    pub same_address: bool,
}

impl Default for LeasingInfo {
    fn default() -> Self {
        Self {
            manager_name: String::new(),
            phone_country: "BD".into(),
            phone: String::new(),
            email: String::new(),
            same_address: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charges {
    pub application_fee: String,
    pub applicant_type: String,
    pub admin_fee: String,
}

impl Default for Charges {
    fn default() -> Self {
        Self {
            application_fee: String::new(),
            applicant_type: "All 18+ applicant".into(),
            admin_fee: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentReminder {
    pub frequency: String,
    pub reminder_date: String,
    pub due_date: String,
}

impl Default for RentReminder {
    fn default() -> Self {
        Self {
            frequency: "Monthly".into(),
            reminder_date: String::new(),
            due_date: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationAgreement {
    pub file: Option<Attachment>,
    pub accept_immigrant: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetFees {
    pub pet_type: String,
    pub max_weight: String,
    pub one_time_fee: String,
    pub security_deposit: String,
    pub monthly_rent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parking {
    pub time: String,
    pub overview: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    Mile,
    Km,
}

impl DistanceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Mile => "Mile",
            DistanceUnit::Km => "Km",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Mile" => Some(DistanceUnit::Mile),
            "Km" => Some(DistanceUnit::Km),
            _ => None,
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nearest education institution, station or landmark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proximity {
    pub kind: String,
    pub distance: String,
    pub unit: DistanceUnit,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilitiesProvider {
    pub kind: String,
    pub company: String,
}

/// Structured value of one field, the editable source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    PropertyAddress(PropertyAddress),
    LeasingInfo(LeasingInfo),
    Charges(Charges),
    RentReminder(RentReminder),
    ApplicationAgreement(ApplicationAgreement),
    AboutProperty { message: String },
    CommunityAmenity(CommunityAmenity),
    PetFees(PetFees),
    Parking(Parking),
    NearestEducation(Proximity),
    NearestStations(Proximity),
    NearestLandmark(Proximity),
    UtilitiesProvider(UtilitiesProvider),
    Text(String),
}

impl FieldValue {
    /// Type-specific empty value an editor opens with when nothing was
    /// committed yet.
    pub fn default_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::PropertyAddress => FieldValue::PropertyAddress(PropertyAddress::default()),
            FieldKind::LeasingInfo => FieldValue::LeasingInfo(LeasingInfo::default()),
            FieldKind::Charges => FieldValue::Charges(Charges::default()),
            FieldKind::RentReminder => FieldValue::RentReminder(RentReminder::default()),
            FieldKind::ApplicationAgreement => {
                FieldValue::ApplicationAgreement(ApplicationAgreement::default())
            }
            FieldKind::AboutProperty => FieldValue::AboutProperty {
                message: String::new(),
            },
            FieldKind::CommunityAmenity => FieldValue::CommunityAmenity(CommunityAmenity::default()),
            FieldKind::PetFees => FieldValue::PetFees(PetFees::default()),
            FieldKind::Parking => FieldValue::Parking(Parking::default()),
            FieldKind::NearestEducation => FieldValue::NearestEducation(Proximity::default()),
            FieldKind::NearestStations => FieldValue::NearestStations(Proximity::default()),
            FieldKind::NearestLandmark => FieldValue::NearestLandmark(Proximity::default()),
            FieldKind::UtilitiesProvider => {
                FieldValue::UtilitiesProvider(UtilitiesProvider::default())
            }
            FieldKind::Text => FieldValue::Text(String::new()),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::PropertyAddress(_) => FieldKind::PropertyAddress,
            FieldValue::LeasingInfo(_) => FieldKind::LeasingInfo,
            FieldValue::Charges(_) => FieldKind::Charges,
            FieldValue::RentReminder(_) => FieldKind::RentReminder,
            FieldValue::ApplicationAgreement(_) => FieldKind::ApplicationAgreement,
            FieldValue::AboutProperty { .. } => FieldKind::AboutProperty,
            FieldValue::CommunityAmenity(_) => FieldKind::CommunityAmenity,
            FieldValue::PetFees(_) => FieldKind::PetFees,
            FieldValue::Parking(_) => FieldKind::Parking,
            FieldValue::NearestEducation(_) => FieldKind::NearestEducation,
            FieldValue::NearestStations(_) => FieldKind::NearestStations,
            FieldValue::NearestLandmark(_) => FieldKind::NearestLandmark,
            FieldValue::UtilitiesProvider(_) => FieldKind::UtilitiesProvider,
            FieldValue::Text(_) => FieldKind::Text,
        }
    }

    /// Reduces the structured value to its display string. Never fails;
    /// empty sub-parts are left out.
    pub fn display(&self) -> String {
        match self {
            FieldValue::PropertyAddress(value) => {
                let mut out = value.property_name.clone();
                push_prefixed(&mut out, ", ", &value.street);
                out
            }
            FieldValue::LeasingInfo(value) => {
                let mut out = value.manager_name.clone();
                if !value.phone.is_empty() {
                    out.push_str(&format!(" ({})", value.phone));
                }
                out
            }
            FieldValue::Charges(value) => format!(
                "App: ${}, Admin: ${}",
                or_zero(&value.application_fee),
                or_zero(&value.admin_fee)
            ),
            FieldValue::RentReminder(value) => {
                let mut out = value.frequency.clone();
                push_prefixed(&mut out, ", Due: ", &value.due_date);
                out
            }
            FieldValue::ApplicationAgreement(value) => {
                let mut out = value
                    .file
                    .as_ref()
                    .map(|file| file.name.clone())
                    .unwrap_or_else(|| "No file".to_string());
                if value.accept_immigrant {
                    out.push_str(" (Accepts immigrant)");
                }
                out
            }
            FieldValue::AboutProperty { message } => message.clone(),
            FieldValue::CommunityAmenity(value) => value.selected.join(", "),
            FieldValue::PetFees(value) => {
                let mut out = value.pet_type.clone();
                if !value.one_time_fee.is_empty() {
                    out.push_str(&format!(", Fee: ${}", value.one_time_fee));
                }
                out
            }
            FieldValue::Parking(value) => {
                let mut out = value.time.clone();
                push_prefixed(&mut out, ", ", &value.overview);
                out
            }
            FieldValue::NearestEducation(value)
            | FieldValue::NearestStations(value)
            | FieldValue::NearestLandmark(value) => {
                let mut out = value.kind.clone();
                push_prefixed(&mut out, ": ", &value.name);
                if !value.distance.is_empty() {
                    out.push_str(&format!(" ({} {})", value.distance, value.unit));
                }
                out
            }
            FieldValue::UtilitiesProvider(value) => {
                let mut out = value.kind.clone();
                push_prefixed(&mut out, ": ", &value.company);
                out
            }
            FieldValue::Text(raw) => raw.clone(),
        }
    }

    /// Sets a text attribute by its form input name (`propertyName`,
    /// `phone`, `dueDate`, ...). Unknown attributes and values outside a
    /// select's options are ignored and reported as `false`.
    pub fn set_text(&mut self, attr: &str, input: &str) -> bool {
        if let Some(options) = self.kind().choices(attr) {
            if !options.contains(&input) {
                tracing::debug!(attr, input, "ignoring value outside select options");
                return false;
            }
        }

        let slot: &mut String = match (self, attr) {
            (FieldValue::PropertyAddress(v), "propertyName") => &mut v.property_name,
            (FieldValue::PropertyAddress(v), "totalUnits") => &mut v.total_units,
            (FieldValue::PropertyAddress(v), "website") => &mut v.website,
            (FieldValue::PropertyAddress(v), "country") => &mut v.country,
            (FieldValue::PropertyAddress(v), "street") => &mut v.street,
            (FieldValue::PropertyAddress(v), "apt") => &mut v.apt,
            (FieldValue::PropertyAddress(v), "city") => &mut v.city,
            (FieldValue::PropertyAddress(v), "state") => &mut v.state,
            (FieldValue::PropertyAddress(v), "zip") => &mut v.zip,
            (FieldValue::LeasingInfo(v), "managerName") => &mut v.manager_name,
            (FieldValue::LeasingInfo(v), "phoneCountry") => &mut v.phone_country,
            (FieldValue::LeasingInfo(v), "phone") => &mut v.phone,
            (FieldValue::LeasingInfo(v), "email") => &mut v.email,
            (FieldValue::Charges(v), "applicationFee") => &mut v.application_fee,
            (FieldValue::Charges(v), "applicantType") => &mut v.applicant_type,
            (FieldValue::Charges(v), "adminFee") => &mut v.admin_fee,
            (FieldValue::RentReminder(v), "frequency") => &mut v.frequency,
            (FieldValue::RentReminder(v), "reminderDate") => &mut v.reminder_date,
            (FieldValue::RentReminder(v), "dueDate") => &mut v.due_date,
            (FieldValue::AboutProperty { message }, "message") => message,
            (FieldValue::CommunityAmenity(v), "search") => &mut v.search,
            (FieldValue::PetFees(v), "petType") => &mut v.pet_type,
            (FieldValue::PetFees(v), "maxWeight") => &mut v.max_weight,
            (FieldValue::PetFees(v), "oneTimeFee") => &mut v.one_time_fee,
            (FieldValue::PetFees(v), "securityDeposit") => &mut v.security_deposit,
            (FieldValue::PetFees(v), "monthlyRent") => &mut v.monthly_rent,
            (FieldValue::Parking(v), "time") => &mut v.time,
            (FieldValue::Parking(v), "overview") => &mut v.overview,
            (
                FieldValue::NearestEducation(v)
                | FieldValue::NearestStations(v)
                | FieldValue::NearestLandmark(v),
                "unit",
            ) => {
                return match DistanceUnit::parse(input) {
                    Some(unit) => {
                        v.unit = unit;
                        true
                    }
                    None => false,
                };
            }
            (
                FieldValue::NearestEducation(v)
                | FieldValue::NearestStations(v)
                | FieldValue::NearestLandmark(v),
                "type",
            ) => &mut v.kind,
            (
                FieldValue::NearestEducation(v)
                | FieldValue::NearestStations(v)
                | FieldValue::NearestLandmark(v),
                "distance",
            ) => &mut v.distance,
            (
                FieldValue::NearestEducation(v)
                | FieldValue::NearestStations(v)
                | FieldValue::NearestLandmark(v),
                "name",
            ) => &mut v.name,
            (FieldValue::UtilitiesProvider(v), "type") => &mut v.kind,
            (FieldValue::UtilitiesProvider(v), "company") => &mut v.company,
            (FieldValue::Text(raw), "value") => raw,
            (value, attr) => {
                tracing::debug!(kind = ?value.kind(), attr, "ignoring unknown attribute");
                return false;
            }
        };
        *slot = input.to_string();
        true
    }

    /// Sets a checkbox attribute (`sameAddress`, `acceptImmigrant`).
    pub fn set_flag(&mut self, attr: &str, checked: bool) -> bool {
        match (self, attr) {
            (FieldValue::LeasingInfo(v), "sameAddress") => v.same_address = checked,
            (FieldValue::ApplicationAgreement(v), "acceptImmigrant") => {
                v.accept_immigrant = checked
            }
            _ => return false,
        }
        true
    }
}

/// Reduces `value` for `key`. A value whose shape does not belong to the
/// key is rendered with its own rule; the key only selects the editor.
pub fn reduce(key: &str, value: &FieldValue) -> String {
    if FieldKind::for_key(key) != value.kind() {
        tracing::debug!(key, kind = ?value.kind(), "reducing value of foreign shape");
    }
    value.display()
}

fn push_prefixed(out: &mut String, prefix: &str, part: &str) {
    if !part.is_empty() {
        out.push_str(prefix);
        out.push_str(part);
    }
}

fn or_zero(amount: &str) -> &str {
    if amount.is_empty() {
        "0"
    } else {
        amount
    }
}
