use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use loadout_core::{DomainError, DomainResult, Entity, ValueObject};

/// Longest accepted item name, in characters.
pub const MAX_NAME_CHARS: usize = 29;

/// Longest accepted item type, in characters.
pub const MAX_KIND_CHARS: usize = 19;

/// Inclusive priority range.
pub const PRIORITY_RANGE: core::ops::RangeInclusive<u8> = 1..=5;

macro_rules! impl_bounded_text {
    ($t:ident, $field:literal, $max:expr) => {
        #[doc = concat!("Non-empty ", $field, " of at most `", stringify!($max), "` characters.")]
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $t(String);

        impl $t {
            pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::invalid_field($field, "cannot be empty"));
                }
                let chars = value.chars().count();
                if chars > $max {
                    return Err(DomainError::invalid_field(
                        $field,
                        format!("must be at most {} characters (got {chars})", $max),
                    ));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ValueObject for $t {}

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_bounded_text!(ItemName, "name", MAX_NAME_CHARS);
impl_bounded_text!(ItemKind, "type", MAX_KIND_CHARS);

/// Number of units held; always at least one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    pub fn parse(value: i64) -> DomainResult<Self> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| {
                DomainError::invalid_field(
                    "quantity",
                    format!("must be between 1 and {} (got {value})", u32::MAX),
                )
            })
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Item priority, 1 (lowest) through 5 (highest).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub fn parse(value: i64) -> DomainResult<Self> {
        u8::try_from(value)
            .ok()
            .filter(|p| PRIORITY_RANGE.contains(p))
            .map(Self)
            .ok_or_else(|| {
                DomainError::invalid_field(
                    "priority",
                    format!(
                        "must be between {} and {} (got {value})",
                        PRIORITY_RANGE.start(),
                        PRIORITY_RANGE.end()
                    ),
                )
            })
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl ValueObject for Priority {}

impl core::fmt::Display for Priority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for Priority {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Priority> for u8 {
    fn from(value: Priority) -> Self {
        value.0
    }
}

/// Candidate item as handed over by the presentation layer.
///
/// Nothing is checked until [`ItemDraft::validate`] runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: i64,
    pub priority: i64,
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        quantity: i64,
        priority: i64,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            quantity,
            priority,
        }
    }

    /// Check every field and build the immutable [`Item`].
    ///
    /// Fields are checked in order (name, type, quantity, priority); the first
    /// failure is reported.
    pub fn validate(self) -> DomainResult<Item> {
        Ok(Item {
            name: ItemName::parse(self.name)?,
            kind: ItemKind::parse(self.kind)?,
            quantity: Quantity::parse(self.quantity)?,
            priority: Priority::parse(self.priority)?,
        })
    }
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.as_str().to_owned(),
            kind: item.kind.as_str().to_owned(),
            quantity: i64::from(item.quantity.get()),
            priority: i64::from(item.priority.get()),
        }
    }
}

/// A validated inventory entry. Replaced or removed wholesale, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: ItemName,
    #[serde(rename = "type")]
    kind: ItemKind,
    quantity: Quantity,
    priority: Priority,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        quantity: i64,
        priority: i64,
    ) -> DomainResult<Self> {
        ItemDraft::new(name, kind, quantity, priority).validate()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn kind(&self) -> &str {
        self.kind.as_str()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    pub fn priority(&self) -> u8 {
        self.priority.get()
    }
}

impl Entity for Item {
    type Id = ItemName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
