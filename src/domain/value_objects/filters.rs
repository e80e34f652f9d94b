use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::cities::City;

/// Constraints for the visible-listing query. Absent fields leave that
/// dimension unrestricted; supplied fields are combined with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListingFilter {
    /// Case-insensitive substring match against title and description.
    pub term: Option<String>,
    pub location: Option<City>,
    pub neighborhood: Option<String>,
    pub category: Option<String>,
}
