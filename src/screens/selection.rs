//! Property type and role selection, with the role-specific verification
//! form whose required set depends on the chosen role.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Screen;
use crate::media::{AcceptFilter, Attachment};
use crate::navigation::{Handoff, HandoffPayload, Route, SelectionContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    SingleHouse,
    Apartments,
    Condominiums,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [
        PropertyType::SingleHouse,
        PropertyType::Apartments,
        PropertyType::Condominiums,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PropertyType::SingleHouse => "single-house",
            PropertyType::Apartments => "apartments",
            PropertyType::Condominiums => "condominiums",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PropertyType::SingleHouse => "Single House Property",
            PropertyType::Apartments => "Apartments complex",
            PropertyType::Condominiums => "Condominiums",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PropertyType::SingleHouse => "Single unit house for single family",
            PropertyType::Apartments | PropertyType::Condominiums => {
                "Multiple unit house for families"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Landlord,
    Realtor,
    Management,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Landlord, Role::Realtor, Role::Management];

    pub fn id(&self) -> &'static str {
        match self {
            Role::Landlord => "landlord",
            Role::Realtor => "realtor",
            Role::Management => "management",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Role::Landlord => "Landlord",
            Role::Realtor => "Realtor",
            Role::Management => "Property management company",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Landlord => "Owner of the property",
            Role::Realtor => "Manage property on behalf on owner",
            Role::Management => "For management company",
        }
    }

    /// Requirements for this role, in the order they are reported.
    pub fn required_fields(&self) -> &'static [RoleField] {
        match self {
            Role::Landlord => &[RoleField::OwnershipDocument],
            Role::Realtor => &[
                RoleField::LicenseNumber,
                RoleField::RealtorDocument,
                RoleField::RealtorAgreement,
            ],
            Role::Management => &[
                RoleField::CompanyName,
                RoleField::CompanyIdentifier,
                RoleField::JobTitle,
                RoleField::ManagementAgreement,
                RoleField::Country,
                RoleField::StreetAddress,
                RoleField::PhoneNumber,
                RoleField::ContactEmail,
                RoleField::City,
                RoleField::State,
                RoleField::ZipCode,
            ],
        }
    }
}

/// Inputs of the role-specific verification form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoleField {
    OwnershipDocument,
    LicenseNumber,
    RealtorDocument,
    RealtorAgreement,
    CompanyName,
    CompanyIdentifier,
    JobTitle,
    ManagementAgreement,
    Country,
    StreetAddress,
    AptUnit,
    PhoneNumber,
    ContactEmail,
    City,
    State,
    ZipCode,
}

impl RoleField {
    pub fn label(&self) -> &'static str {
        match self {
            RoleField::OwnershipDocument => "Ownership document",
            RoleField::LicenseNumber => "License number",
            RoleField::RealtorDocument => "Additional documents for realtor",
            RoleField::RealtorAgreement => "Agreement with landlord",
            RoleField::CompanyName => "Company name",
            RoleField::CompanyIdentifier => "Company identifier (EIN/TIN)",
            RoleField::JobTitle => "Job title",
            RoleField::ManagementAgreement => "Management agreement",
            RoleField::Country => "Country/Region",
            RoleField::StreetAddress => "Street address",
            RoleField::AptUnit => "Apt, suite, unit",
            RoleField::PhoneNumber => "Phone number",
            RoleField::ContactEmail => "Contact email",
            RoleField::City => "City/Town",
            RoleField::State => "State/Territory",
            RoleField::ZipCode => "Zip code",
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(
            self,
            RoleField::OwnershipDocument
                | RoleField::RealtorDocument
                | RoleField::RealtorAgreement
                | RoleField::ManagementAgreement
        )
    }

    fn choices(&self) -> Option<&'static [&'static str]> {
        match self {
            RoleField::Country => Some(&["", "US", "CA", "UK"]),
            RoleField::State => Some(&["", "TX", "CA", "NY"]),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PropertySelection {
    property_type: Option<PropertyType>,
    role: Option<Role>,
    terms_accepted: bool,
    text: BTreeMap<RoleField, String>,
    documents: BTreeMap<RoleField, Attachment>,
    document_filter: AcceptFilter,
}

impl PropertySelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document_filter(document_filter: AcceptFilter) -> Self {
        Self {
            document_filter,
            ..Self::default()
        }
    }

    pub fn property_type(&self) -> Option<PropertyType> {
        self.property_type
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    pub fn select_property_type(&mut self, property_type: PropertyType) {
        self.property_type = Some(property_type);
    }

    /// Switches role. Inputs entered for other roles are kept but no longer
    /// count towards the gate.
    pub fn select_role(&mut self, role: Role) {
        tracing::debug!(role = role.id(), "role selected");
        self.role = Some(role);
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    pub fn text(&self, field: RoleField) -> &str {
        self.text.get(&field).map(String::as_str).unwrap_or_default()
    }

    /// Sets a text input. Document fields and values outside a select's
    /// options are ignored.
    pub fn set_text(&mut self, field: RoleField, value: &str) -> bool {
        if field.is_document() {
            return false;
        }
        if field.choices().is_some_and(|options| !options.contains(&value)) {
            tracing::debug!(?field, value, "ignoring value outside select options");
            return false;
        }
        self.text.insert(field, value.to_string());
        true
    }

    pub fn document(&self, field: RoleField) -> Option<&Attachment> {
        self.documents.get(&field)
    }

    pub fn attach(&mut self, field: RoleField, attachment: Attachment) -> bool {
        if !field.is_document() || !self.document_filter.accepts(&attachment) {
            tracing::warn!(?field, mime = %attachment.mime, "ignoring document");
            return false;
        }
        self.documents.insert(field, attachment);
        true
    }

    pub fn detach(&mut self, field: RoleField) -> Option<Attachment> {
        self.documents.remove(&field)
    }

    fn is_present(&self, field: RoleField) -> bool {
        if field.is_document() {
            self.documents.contains_key(&field)
        } else {
            !self.text(field).trim().is_empty()
        }
    }

    /// Labels of unmet requirements, for the missing-fields notice.
    pub fn missing_requirements(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.property_type.is_none() {
            missing.push("Property type selection");
        }
        if self.role.is_none() {
            missing.push("Role selection");
        }
        if !self.terms_accepted {
            missing.push("Terms and conditions acceptance");
        }
        if let Some(role) = self.role {
            missing.extend(
                role.required_fields()
                    .iter()
                    .filter(|field| !self.is_present(**field))
                    .map(RoleField::label),
            );
        }
        missing
    }

    pub fn context(&self) -> Option<SelectionContext> {
        Some(SelectionContext {
            property_type: self.property_type?,
            role: self.role?,
        })
    }
}

impl Screen for PropertySelection {
    const ROUTE: Route = Route::PropertySelection;

    fn is_valid(&self) -> bool {
        let Some(role) = self.role else {
            return false;
        };
        self.property_type.is_some()
            && self.terms_accepted
            && role
                .required_fields()
                .iter()
                .all(|field| self.is_present(*field))
    }

    fn next(&self) -> Option<Handoff> {
        if !self.is_valid() {
            return None;
        }
        let context = self.context()?;
        Some(Handoff::new(
            Route::CondominiumInfo,
            HandoffPayload::Selection(context),
        ))
    }
}
