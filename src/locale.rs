//! Locale selection for multi-locale register records
//!
//! The register publishes target details in up to three locales. Display
//! always prefers Finnish, then Swedish, then English; a record with no
//! populated locale yields `None` and the caller decides the fallback.

use crate::models::TargetInfo;
use serde::{Deserialize, Serialize};

/// Locales the register publishes, in display preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Fi,
    Sv,
    En,
}

/// Fixed preference order: fi, then sv, then en.
pub const LOCALE_PREFERENCE: [Locale; 3] = [Locale::Fi, Locale::Sv, Locale::En];

/// Per-locale variants of a target's details, any of which may be absent.
///
/// On the wire these appear as sibling `fi` / `sv` / `en` keys, so this is
/// flattened into the structs that carry it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalizedInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fi: Option<TargetInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sv: Option<TargetInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<TargetInfo>,
}

impl LocalizedInfo {
    /// The variant for a specific locale, if populated.
    pub fn get(&self, locale: Locale) -> Option<&TargetInfo> {
        match locale {
            Locale::Fi => self.fi.as_ref(),
            Locale::Sv => self.sv.as_ref(),
            Locale::En => self.en.as_ref(),
        }
    }

    /// Best available variant by fixed preference order.
    ///
    /// Returns `None` only when every locale is absent; full absence is not
    /// an error here, callers handle it explicitly.
    pub fn select(&self) -> Option<&TargetInfo> {
        LOCALE_PREFERENCE.iter().find_map(|l| self.get(*l))
    }

    pub fn is_empty(&self) -> bool {
        self.fi.is_none() && self.sv.is_none() && self.en.is_none()
    }
}
