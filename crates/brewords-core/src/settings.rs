//! Account settings: the language pair, password changes and profile edits.
//!
//! Everything here is checked locally; callers only persist or send values
//! that passed these checks.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::model::{User, UserPatch};

/// Shortest password any form accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A language the app can translate from or to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "uk")]
    Ukrainian,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    /// Languages offered as the translation language.
    pub const NATIVE: [Language; 5] = [
        Language::Ukrainian,
        Language::English,
        Language::Russian,
        Language::Polish,
        Language::German,
    ];

    /// Languages offered for study.
    pub const LEARNING: [Language; 10] = [
        Language::English,
        Language::German,
        Language::French,
        Language::Spanish,
        Language::Italian,
        Language::Polish,
        Language::Portuguese,
        Language::Japanese,
        Language::Korean,
        Language::Chinese,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Ukrainian => "uk",
            Language::Russian => "ru",
            Language::Polish => "pl",
            Language::German => "de",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Chinese => "zh",
        }
    }

    /// The language's name in itself.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Ukrainian => "Українська",
            Language::Russian => "Русский",
            Language::Polish => "Polski",
            Language::German => "Deutsch",
            Language::French => "Français",
            Language::Spanish => "Español",
            Language::Italian => "Italiano",
            Language::Portuguese => "Português",
            Language::Japanese => "日本語",
            Language::Korean => "한국어",
            Language::Chinese => "中文",
        }
    }

    /// The backend's numeric language id.
    pub fn wire_id(self) -> u8 {
        match self {
            Language::English => 0,
            Language::Ukrainian => 1,
            Language::Russian => 2,
            Language::Polish => 3,
            Language::German => 4,
            Language::French => 5,
            Language::Spanish => 6,
            Language::Italian => 7,
            Language::Portuguese => 8,
            Language::Japanese => 9,
            Language::Korean => 10,
            Language::Chinese => 11,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Language::NATIVE
            .iter()
            .chain(Language::LEARNING.iter())
            .copied()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| SettingsError::UnknownLanguage(s.trim().to_string()))
    }
}

/// Which language translations are shown in, and which one is studied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguagePair {
    pub native: Language,
    pub learning: Language,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            native: Language::Ukrainian,
            learning: Language::English,
        }
    }
}

impl LanguagePair {
    pub fn new(native: Language, learning: Language) -> Result<Self, SettingsError> {
        let pair = Self { native, learning };
        pair.validate()?;
        Ok(pair)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !Language::NATIVE.contains(&self.native) {
            return Err(SettingsError::NotANativeLanguage(self.native.name().into()));
        }
        if !Language::LEARNING.contains(&self.learning) {
            return Err(SettingsError::NotALearningLanguage(
                self.learning.name().into(),
            ));
        }
        if self.native == self.learning {
            return Err(SettingsError::SameLanguage);
        }
        Ok(())
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.learning.name(), self.native.name())
    }
}

/// The password change form.
#[derive(Clone)]
pub struct PasswordChange {
    pub current: String,
    pub new_password: String,
    pub confirm: String,
}

impl fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChange").finish_non_exhaustive()
    }
}

impl PasswordChange {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.current.is_empty() {
            return Err(SettingsError::Required("current password"));
        }
        if self.new_password != self.confirm {
            return Err(SettingsError::PasswordMismatch);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SettingsError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        Ok(())
    }
}

/// Name and email as saved to the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEdit {
    pub name: String,
    pub email: String,
}

impl ProfileEdit {
    /// Apply the fields the user gave on top of `current` and check them.
    pub fn merged(
        current: &User,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Self, SettingsError> {
        let name = name.unwrap_or_else(|| current.name.clone()).trim().to_string();
        let email = email.unwrap_or_else(|| current.email.clone()).trim().to_string();
        if name.is_empty() {
            return Err(SettingsError::Required("name"));
        }
        if email.is_empty() {
            return Err(SettingsError::Required("email"));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(SettingsError::InvalidEmail(email)),
        }
        Ok(Self { name, email })
    }

    /// The session update matching this edit.
    pub fn patch(&self) -> UserPatch {
        UserPatch {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            avatar: None,
        }
    }
}

/// Normalise a phone number: separators are dropped, a leading `+` kept.
pub fn normalize_phone(input: &str) -> Result<String, SettingsError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SettingsError::Required("phone number"));
    }

    let (plus, rest) = match trimmed.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", trimmed),
    };
    let mut digits = String::with_capacity(rest.len());
    for c in rest.chars() {
        match c {
            '0'..='9' => digits.push(c),
            ' ' | '-' | '(' | ')' => {}
            _ => return Err(SettingsError::InvalidPhone(trimmed.to_string())),
        }
    }
    if !(7..=15).contains(&digits.len()) {
        return Err(SettingsError::InvalidPhone(trimmed.to_string()));
    }
    Ok(format!("{plus}{digits}"))
}

/// Parse a `YYYY-MM-DD` birthdate that is not after `today`.
pub fn parse_birthdate(input: &str, today: NaiveDate) -> Result<NaiveDate, SettingsError> {
    let trimmed = input.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| SettingsError::InvalidBirthdate(trimmed.to_string()))?;
    if date > today {
        return Err(SettingsError::InvalidBirthdate(format!(
            "{trimmed} is in the future"
        )));
    }
    Ok(date)
}
