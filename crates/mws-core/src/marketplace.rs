//! Regional marketplaces and the MWS endpoints serving them.

use std::fmt;
use std::str::FromStr;

use crate::error::MwsError;

/// A regional Amazon storefront.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub enum Marketplace {
    /// Brazil (`BR`).
    Brazil,
    /// Canada (`CA`).
    Canada,
    /// Mexico (`MX`).
    Mexico,
    /// United States (`US`).
    #[default]
    UnitedStates,
    /// United Arab Emirates (`AE`).
    UnitedArabEmirates,
    /// Germany (`DE`).
    Germany,
    /// Spain (`ES`).
    Spain,
    /// France (`FR`).
    France,
    /// United Kingdom (`UK`).
    UnitedKingdom,
    /// India (`IN`).
    India,
    /// Italy (`IT`).
    Italy,
    /// Turkey (`TR`).
    Turkey,
    /// Australia (`AU`).
    Australia,
    /// Japan (`JP`).
    Japan,
    /// China (`CN`).
    China,
}

impl Marketplace {
    /// Every known marketplace.
    pub const ALL: [Self; 15] = [
        Self::Brazil,
        Self::Canada,
        Self::Mexico,
        Self::UnitedStates,
        Self::UnitedArabEmirates,
        Self::Germany,
        Self::Spain,
        Self::France,
        Self::UnitedKingdom,
        Self::India,
        Self::Italy,
        Self::Turkey,
        Self::Australia,
        Self::Japan,
        Self::China,
    ];

    /// The `MarketplaceId` value for this storefront.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Self::Brazil => "A2Q3Y263D00KWC",
            Self::Canada => "A2EUQ1WTGCTBG2",
            Self::Mexico => "A1AM78C64UM0Y8",
            Self::UnitedStates => "ATVPDKIKX0DER",
            Self::UnitedArabEmirates => "A2VIGQ35RCS4UG",
            Self::Germany => "A1PA6795UKMFR9",
            Self::Spain => "A1RKKUPIHCS9HS",
            Self::France => "A13V1IB3VIYZZH",
            Self::UnitedKingdom => "A1F83G8C2ARO7P",
            Self::India => "A21TJRUUN4KGV",
            Self::Italy => "APJ6JRA9NG5V4",
            Self::Turkey => "A33AVAJ2PDY3EV",
            Self::Australia => "A39IBJ37TRP1C6",
            Self::Japan => "A1VC38T7YXB528",
            Self::China => "AAHKV2X7AFYLW",
        }
    }

    /// The MWS host serving this storefront.
    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        match self {
            // Brazil is served from the North America endpoint.
            Self::Brazil | Self::UnitedStates => "mws.amazonservices.com",
            Self::Canada => "mws.amazonservices.ca",
            Self::Mexico => "mws.amazonservices.com.mx",
            Self::UnitedArabEmirates => "mws.amazonservices.ae",
            Self::Germany
            | Self::Spain
            | Self::France
            | Self::UnitedKingdom
            | Self::Italy
            | Self::Turkey => "mws-eu.amazonservices.com",
            Self::India => "mws.amazonservices.in",
            Self::Australia => "mws.amazonservices.com.au",
            Self::Japan => "mws.amazonservices.jp",
            Self::China => "mws.amazonservices.com.cn",
        }
    }

    /// Two-letter region code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Brazil => "BR",
            Self::Canada => "CA",
            Self::Mexico => "MX",
            Self::UnitedStates => "US",
            Self::UnitedArabEmirates => "AE",
            Self::Germany => "DE",
            Self::Spain => "ES",
            Self::France => "FR",
            Self::UnitedKingdom => "UK",
            Self::India => "IN",
            Self::Italy => "IT",
            Self::Turkey => "TR",
            Self::Australia => "AU",
            Self::Japan => "JP",
            Self::China => "CN",
        }
    }

    /// Look up a marketplace by its `MarketplaceId`.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }

    /// Look up a marketplace by region code, case-insensitively. `GB` is
    /// accepted as an alias for `UK`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        if code.eq_ignore_ascii_case("GB") {
            return Some(Self::UnitedKingdom);
        }
        Self::ALL
            .into_iter()
            .find(|m| m.code().eq_ignore_ascii_case(code))
    }
}

impl FromStr for Marketplace {
    type Err = MwsError;

    /// Accepts either a region code (`DE`) or a marketplace id (`A1PA6795UKMFR9`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_code(s)
            .or_else(|| Self::from_id(s))
            .ok_or_else(|| MwsError::UnknownMarketplace(s.to_owned()))
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
