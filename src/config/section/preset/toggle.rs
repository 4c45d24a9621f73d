//! `false`-or-table option values.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A feature that is either switched off (`blog = false`) or configured
/// with a table of options. `true` enables the feature with its defaults.
///
/// Tables are deserialized in a streaming fashion, so unknown keys inside
/// them are still reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle<T> {
    Disabled,
    Enabled(T),
}

impl<T: Default> Default for Toggle<T> {
    fn default() -> Self {
        Self::Enabled(T::default())
    }
}

impl<T> Toggle<T> {
    /// Options of the enabled feature.
    pub const fn enabled(&self) -> Option<&T> {
        match self {
            Self::Enabled(options) => Some(options),
            Self::Disabled => None,
        }
    }
}

impl<T: Serialize> Serialize for Toggle<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Enabled(options) => options.serialize(serializer),
        }
    }
}

impl<'de, T> Deserialize<'de> for Toggle<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ToggleVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for ToggleVisitor<T>
        where
            T: Deserialize<'de> + Default,
        {
            type Value = Toggle<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("`false`, `true`, or a table of options")
            }

            fn visit_bool<E: de::Error>(self, enabled: bool) -> Result<Self::Value, E> {
                Ok(if enabled {
                    Toggle::Enabled(T::default())
                } else {
                    Toggle::Disabled
                })
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                T::deserialize(de::value::MapAccessDeserializer::new(map)).map(Toggle::Enabled)
            }
        }

        deserializer.deserialize_any(ToggleVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Options {
        level: u32,
    }

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        feature: Toggle<Options>,
    }

    #[test]
    fn test_bool_and_table() {
        let off: Wrapper = toml::from_str("feature = false").unwrap();
        assert_eq!(off.feature, Toggle::Disabled);
        assert!(off.feature.enabled().is_none());

        let on: Wrapper = toml::from_str("feature = true").unwrap();
        assert_eq!(on.feature, Toggle::Enabled(Options::default()));

        let table: Wrapper = toml::from_str("[feature]\nlevel = 3").unwrap();
        assert_eq!(table.feature.enabled(), Some(&Options { level: 3 }));
    }

    #[test]
    fn test_other_types_rejected() {
        let result: Result<Wrapper, _> = toml::from_str("feature = \"yes\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_disabled_as_false() {
        let value = toml::Value::try_from(Toggle::<u32>::Disabled).unwrap();
        assert_eq!(value, toml::Value::Boolean(false));
    }
}
