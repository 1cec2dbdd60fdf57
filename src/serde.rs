use std::fmt;

use accept_parse::Preference;
use serde1::de::{self, Deserialize, Deserializer};
use serde1::ser::{Serialize, Serializer};

use crate::Preferences;

impl Serialize for Preferences {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Preferences {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = Preferences;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of media type patterns to qualities")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Preferences, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut entries: Vec<Preference> = Vec::new();

                while let Some((pattern, quality)) = map.next_entry::<String, f64>()? {
                    if !(0.0..=1.0).contains(&quality) {
                        return Err(de::Error::custom(format_args!(
                            "quality {} out of range",
                            quality
                        )));
                    }
                    match entries.iter_mut().find(|p| p.pattern == pattern) {
                        Some(existing) => existing.quality = quality,
                        None => entries.push(Preference { pattern, quality }),
                    }
                }

                Ok(Preferences { entries })
            }
        }

        deserializer.deserialize_map(Visitor)
    }
}
