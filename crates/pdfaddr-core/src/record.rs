//! Address record types.
//!
//! An [`AddressRecord`] holds the seven string fields produced for one
//! document. Two distinct sentinels are in play: the empty string, which
//! marks a field the heuristic did not populate, and [`NOT_FOUND`], which
//! marks every field of a document that could not be read at all.

use std::fmt;

/// Sentinel written into every field of an unreadable document.
pub const NOT_FOUND: &str = "NOT FOUND";

/// One column of an [`AddressRecord`].
///
/// The declaration order is the export column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// Person the document is addressed to.
    Name,
    /// Street number and street name.
    AddressLine1,
    /// Apartment, unit or space designation.
    AddressLine2,
    /// City name.
    City,
    /// Two-letter state code.
    State,
    /// Five-digit ZIP, optionally with a four-digit extension.
    ZipCode,
    /// Identifier of the originating document (its path).
    SourceId,
}

impl Field {
    /// All fields in export column order.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::AddressLine1,
        Field::AddressLine2,
        Field::City,
        Field::State,
        Field::ZipCode,
        Field::SourceId,
    ];

    /// Column header used in tabular exports.
    pub fn header(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::AddressLine1 => "Address Line 1",
            Field::AddressLine2 => "Address Line 2",
            Field::City => "City",
            Field::State => "State",
            Field::ZipCode => "ZIP Code",
            Field::SourceId => "File Name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Address fields extracted from a single document.
///
/// `Default` gives the parse-initialized record where every field is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressRecord {
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub source_id: String,
}

impl AddressRecord {
    /// Record for a document that could not be read: every field, the
    /// source identifier included, is [`NOT_FOUND`].
    pub fn not_found() -> Self {
        Self {
            name: NOT_FOUND.to_string(),
            address_line1: NOT_FOUND.to_string(),
            address_line2: NOT_FOUND.to_string(),
            city: NOT_FOUND.to_string(),
            state: NOT_FOUND.to_string(),
            zip_code: NOT_FOUND.to_string(),
            source_id: NOT_FOUND.to_string(),
        }
    }

    /// Attach the originating document identifier.
    pub fn with_source(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = source_id.into();
        self
    }

    /// Value of a single field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::AddressLine1 => &self.address_line1,
            Field::AddressLine2 => &self.address_line2,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::ZipCode => &self.zip_code,
            Field::SourceId => &self.source_id,
        }
    }

    /// Field values in export column order.
    pub fn values(&self) -> [&str; 7] {
        Field::ALL.map(|field| self.get(field))
    }

    /// Whether this is the unreadable-document record.
    ///
    /// The source identifier is ignored so the check still holds after the
    /// batch layer has attached a path.
    pub fn is_not_found(&self) -> bool {
        Field::ALL
            .iter()
            .filter(|f| **f != Field::SourceId)
            .all(|f| self.get(*f) == NOT_FOUND)
    }

    /// Whether the heuristic located an address.
    ///
    /// A qualifying match always populates the state code, so an empty
    /// state means no qualifying line was found.
    pub fn has_address(&self) -> bool {
        !self.state.is_empty() && !self.is_not_found()
    }
}
