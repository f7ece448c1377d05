use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amenity {
    pub key: &'static str,
    pub label: &'static str,
}

impl Amenity {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

pub static AMENITIES: [Amenity; 15] = [
    Amenity::new("air", "Air conditioning"),
    Amenity::new("cable", "Cable ready"),
    Amenity::new("ceilingFan", "Ceiling fan"),
    Amenity::new("highCeilings", "High ceilings"),
    Amenity::new("privateBalcony", "Private balcony"),
    Amenity::new("refrigerator", "Refrigerator"),
    Amenity::new("woodedViews", "Wooded views"),
    Amenity::new("wdHookup", "W/D hookup"),
    Amenity::new("hardwood", "Hardwood Floor (home)"),
    Amenity::new("fireplace", "Fireplace (home)"),
    Amenity::new("firstAid", "First aid kit"),
    Amenity::new("carbonMonoxide", "Carbon monoxide alarm"),
    Amenity::new("expandedPatios", "Expanded patios (home)"),
    Amenity::new("freeParking", "Free parking on premises"),
    Amenity::new("fireExtinguisher", "Fire extinguisher"),
];

/// Amenity multi-select: selected labels in selection order plus the
/// current search text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityAmenity {
    pub selected: Vec<String>,
    pub search: String,
}

impl CommunityAmenity {
    /// Catalogue entries whose label contains the search text, ignoring case.
    pub fn visible(&self) -> Vec<&'static Amenity> {
        let needle = self.search.to_lowercase();
        AMENITIES
            .iter()
            .filter(|amenity| amenity.label.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.iter().any(|selected| selected == label)
    }

    /// Removes `label` when selected, appends it otherwise. Only entries
    /// visible under the current search can be toggled.
    pub fn toggle(&mut self, label: &str) -> bool {
        if !self.visible().iter().any(|amenity| amenity.label == label) {
            tracing::debug!(
                label,
                search = %self.search,
                "ignoring amenity outside search results"
            );
            return false;
        }
        if self.is_selected(label) {
            self.selected.retain(|selected| selected != label);
        } else {
            self.selected.push(label.to_string());
        }
        true
    }
}
