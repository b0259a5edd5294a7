//! Closed value sets accepted by the Products API.

use std::fmt;
use std::str::FromStr;

use crate::error::MwsError;

/// Product identifier type accepted by `GetMatchingProductForId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum IdType {
    /// Amazon Standard Identification Number.
    #[serde(rename = "ASIN")]
    Asin,
    /// Global Catalog Identifier.
    #[serde(rename = "GCID")]
    Gcid,
    /// Seller stock keeping unit.
    SellerSKU,
    /// Universal Product Code.
    #[serde(rename = "UPC")]
    Upc,
    /// European Article Number.
    #[serde(rename = "EAN")]
    Ean,
    /// International Standard Book Number.
    #[serde(rename = "ISBN")]
    Isbn,
    /// Japanese Article Number.
    #[serde(rename = "JAN")]
    Jan,
}

impl IdType {
    /// Every accepted identifier type.
    pub const ALL: [Self; 7] = [
        Self::Asin,
        Self::Gcid,
        Self::SellerSKU,
        Self::Upc,
        Self::Ean,
        Self::Isbn,
        Self::Jan,
    ];

    /// Returns the wire value of the `IdType` parameter.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asin => "ASIN",
            Self::Gcid => "GCID",
            Self::SellerSKU => "SellerSKU",
            Self::Upc => "UPC",
            Self::Ean => "EAN",
            Self::Isbn => "ISBN",
            Self::Jan => "JAN",
        }
    }
}

impl FromStr for IdType {
    type Err = MwsError;

    /// Matching is exact; `asin` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| MwsError::UnknownIdType(s.to_owned()))
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item condition filter for offer lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ItemCondition {
    /// Brand new.
    New,
    /// Used.
    Used,
    /// Collectible.
    Collectible,
    /// Refurbished.
    Refurbished,
    /// Club.
    Club,
}

impl ItemCondition {
    /// Every accepted item condition.
    pub const ALL: [Self; 5] = [
        Self::New,
        Self::Used,
        Self::Collectible,
        Self::Refurbished,
        Self::Club,
    ];

    /// Returns the wire value of the `ItemCondition` parameter.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Used => "Used",
            Self::Collectible => "Collectible",
            Self::Refurbished => "Refurbished",
            Self::Club => "Club",
        }
    }
}

impl FromStr for ItemCondition {
    type Err = MwsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| MwsError::UnknownItemCondition(s.to_owned()))
    }
}

impl fmt::Display for ItemCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
