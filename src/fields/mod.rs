pub mod amenities;
pub mod registry;
pub mod store;
pub mod value;

pub use amenities::{Amenity, CommunityAmenity, AMENITIES};
pub use registry::{condominium_fields, FieldDescriptor, FieldRegistry};
pub use store::FieldStore;
pub use value::{
    reduce, ApplicationAgreement, Charges, DistanceUnit, FieldKind, FieldValue, LeasingInfo,
    Parking, PetFees, PropertyAddress, Proximity, RentReminder, UtilitiesProvider,
};
