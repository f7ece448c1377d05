use once_cell::sync::Lazy;

/// Declarative description of a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub help: Option<&'static str>,
}

impl FieldDescriptor {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            required: true,
            help: None,
        }
    }

    pub fn with_optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }

    /// Marker shown next to the label: `(Required)`, `(Optional but
    /// recommended)` or `(Optional)`.
    pub fn requirement_label(&self) -> &'static str {
        if self.required {
            "(Required)"
        } else if self.help.is_some_and(|help| help.contains("recommended")) {
            "(Optional but recommended)"
        } else {
            "(Optional)"
        }
    }
}

/// Ordered, immutable list of field descriptors for one screen.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    pub name: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl FieldRegistry {
    /// Builds a registry. Later descriptors reusing an earlier key are dropped
    /// so keys stay unique.
    pub fn new(name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        let mut unique: Vec<FieldDescriptor> = Vec::with_capacity(fields.len());
        for field in fields {
            if unique.iter().any(|existing| existing.key == field.key) {
                tracing::warn!(registry = name, key = field.key, "duplicate field key dropped");
                continue;
            }
            unique.push(field);
        }
        Self {
            name,
            fields: unique,
        }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.key)
    }

    pub fn required(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter().filter(|field| field.required)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

pub const PROPERTY_ADDRESS: &str = "propertyAddress";
pub const PET_FEES: &str = "petFees";
pub const LEASING_INFO: &str = "leasingInfo";
pub const PARKING: &str = "parking";
pub const CHARGES: &str = "charges";
pub const NEAREST_EDUCATION: &str = "nearestEducation";
pub const RENT_REMINDER: &str = "rentReminder";
pub const NEAREST_STATIONS: &str = "nearestStations";
pub const APPLICATION_AGREEMENT: &str = "applicationAgreement";
pub const NEAREST_LANDMARK: &str = "nearestLandmark";
pub const ABOUT_PROPERTY: &str = "aboutProperty";
pub const UTILITIES_PROVIDER: &str = "utilitiesProvider";
pub const COMMUNITY_AMENITY: &str = "communityAmenity";

const RECOMMENDED: &str = "Optional but recommended";

static CONDOMINIUM_FIELDS: Lazy<FieldRegistry> = Lazy::new(|| {
    FieldRegistry::new(
        "condominium",
        vec![
            FieldDescriptor::new(PROPERTY_ADDRESS, "Property address"),
            FieldDescriptor::new(PET_FEES, "Pet fees")
                .with_optional()
                .with_help("Optional, add fees if you allow pet"),
            FieldDescriptor::new(LEASING_INFO, "Leasing info"),
            FieldDescriptor::new(PARKING, "Parking")
                .with_optional()
                .with_help("Optional"),
            FieldDescriptor::new(CHARGES, "Charges"),
            FieldDescriptor::new(NEAREST_EDUCATION, "Nearest educational institution")
                .with_optional()
                .with_help(RECOMMENDED),
            FieldDescriptor::new(RENT_REMINDER, "Rent frequency & payment reminder"),
            FieldDescriptor::new(NEAREST_STATIONS, "Nearest stations")
                .with_optional()
                .with_help(RECOMMENDED),
            FieldDescriptor::new(APPLICATION_AGREEMENT, "Application agreement")
                .with_optional()
                .with_help("Optional"),
            FieldDescriptor::new(NEAREST_LANDMARK, "Nearest landmark")
                .with_optional()
                .with_help(RECOMMENDED),
            FieldDescriptor::new(ABOUT_PROPERTY, "About the property")
                .with_optional()
                .with_help("Optional"),
            FieldDescriptor::new(UTILITIES_PROVIDER, "Utilities provider")
                .with_optional()
                .with_help(RECOMMENDED),
            FieldDescriptor::new(COMMUNITY_AMENITY, "Community's amenity/features")
                .with_optional()
                .with_help(RECOMMENDED),
        ],
    )
});

/// The condominium-information registry, in on-screen order.
pub fn condominium_fields() -> &'static FieldRegistry {
    &CONDOMINIUM_FIELDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condominium_registry_has_thirteen_fields_with_four_required() {
        let registry = condominium_fields();
        assert_eq!(registry.len(), 13);
        let required: Vec<_> = registry.required().map(|f| f.key).collect();
        assert_eq!(
            required,
            vec![PROPERTY_ADDRESS, LEASING_INFO, CHARGES, RENT_REMINDER]
        );
    }

    #[test]
    fn duplicate_keys_are_dropped() {
        let registry = FieldRegistry::new(
            "dupes",
            vec![
                FieldDescriptor::new("name", "Name"),
                FieldDescriptor::new("name", "Other name").with_optional(),
            ],
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("name").map(|f| f.label), Some("Name"));
        assert!(registry.get("name").is_some_and(|f| f.required));
    }

    #[test]
    fn requirement_labels_follow_help_text() {
        let registry = condominium_fields();
        let label = |key: &str| registry.get(key).map(|f| f.requirement_label());
        assert_eq!(label(CHARGES), Some("(Required)"));
        assert_eq!(label(NEAREST_STATIONS), Some("(Optional but recommended)"));
        assert_eq!(label(PARKING), Some("(Optional)"));
        assert_eq!(label(PET_FEES), Some("(Optional)"));
    }
}
