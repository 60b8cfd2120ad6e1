//! Contains custom serialization and deserialization functions.

use std::collections::HashMap;
use std::str::FromStr;
use std::marker::PhantomData;
use std::fmt::{self, Display};
use serde::Deserialize;
use serde::de::{self, DeserializeOwned, MapAccess, Visitor, SeqAccess, Deserializer, IgnoredAny, Unexpected};

pub fn string_or_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64> + TryFrom<i64>,
    <T as FromStr>::Err: Display,
{
    struct NumericVisitor<T> {
        marker: PhantomData<T>,
    }

    impl<'de, T> Visitor<'de> for NumericVisitor<T>
    where
        T: FromStr + TryFrom<u64> + TryFrom<i64>,
        <T as FromStr>::Err: Display,
    {
        type Value = T;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            <T as TryFrom<u64>>::try_from(v)
                .map_err(|_e| de::Error::custom("Number too large to fit in target type"))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            <T as TryFrom<i64>>::try_from(v)
                .map_err(|_e| de::Error::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.parse::<T>().map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_any(NumericVisitor { marker: PhantomData })
}

pub fn option_string_or_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64> + TryFrom<i64>,
    <T as FromStr>::Err: Display,
{
    #[derive(Deserialize)]
    struct Wrapper<T>(
        #[serde(deserialize_with = "string_or_number")]
        T,
    )
    where
        T: FromStr + TryFrom<u64> + TryFrom<i64>,
        <T as FromStr>::Err: Display;

    let wrapper = Option::<Wrapper<T>>::deserialize(deserializer)?;

    Ok(wrapper.map(|Wrapper(value)| value))
}

/// Reads a number encoded as either a JSON number or a decimal string. Anything else,
/// including numbers that do not fit into `T`, is `None` rather than an error.
pub fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let number = match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| T::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse::<T>().ok(),
        _ => None,
    };

    Ok(number)
}

/// Steam marks successful responses with either `true` or `"true"`. Any other value, of any
/// type, is `false`.
pub fn true_value<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(is_true_value(&value))
}

/// A value that is `None` when the JSON does not have the shape of `T`, instead of failing the
/// whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct Lenient<T>(pub Option<T>);

impl<'de, T> Deserialize<'de> for Lenient<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;

        Ok(Self(serde_json::from_value(value).ok()))
    }
}

pub fn is_true_value(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::String(s) => s == "true",
        _ => false,
    }
}

pub fn into_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct DeserializeBoolVisitor;

    impl<'de> Visitor<'de> for DeserializeBoolVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer, a string or a boolean")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(de::Error::invalid_value(
                    Unexpected::Unsigned(other),
                    &"zero or one",
                )),
            }
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match v {
                "0" | "false" => Ok(false),
                "1" | "true" => Ok(true),
                other => Err(de::Error::invalid_value(
                    Unexpected::Str(other),
                    &"zero or one",
                )),
            }
        }

        fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }
    }

    deserializer.deserialize_any(DeserializeBoolVisitor)
}

/// Steam sends lists either as arrays or as objects keyed by index (`{"0": .., "1": ..}`).
/// Objects are ordered by their numeric keys.
pub fn hashmap_or_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct HashMapVisitor<T> {
        marker: PhantomData<Vec<T>>,
    }

    impl<'de, T> Visitor<'de> for HashMapVisitor<T>
    where
        T: Deserialize<'de>,
    {
        type Value = Vec<T>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map or seq")
        }

        fn visit_seq<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
        where
            V: SeqAccess<'de>,
        {
            let mut vec = Vec::with_capacity(visitor.size_hint().unwrap_or(0));

            while let Some(v) = visitor.next_element::<T>()? {
                vec.push(v);
            }

            Ok(vec)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut items = Vec::new();

            while let Some((key, v)) = access.next_entry::<String, T>()? {
                items.push((key.parse::<u64>().unwrap_or(u64::MAX), v));
            }

            items.sort_by_key(|(index, _)| *index);

            Ok(items.into_iter().map(|(_, v)| v).collect())
        }
    }

    deserializer.deserialize_any(HashMapVisitor { marker: PhantomData })
}

/// Reads a map keyed by strings. Steam sends `[]` in place of an empty map, which is read as
/// an empty map. Any other array or a scalar (`false`, `0`, `""`) is also an empty map.
pub fn map_or_empty_seq<'de, D, T>(deserializer: D) -> Result<HashMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct MapVisitor<T> {
        marker: PhantomData<HashMap<String, T>>,
    }

    impl<'de, T> Visitor<'de> for MapVisitor<T>
    where
        T: Deserialize<'de>,
    {
        type Value = HashMap<String, T>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map or seq")
        }

        fn visit_seq<M>(self, mut seq: M) -> Result<Self::Value, M::Error>
        where
            M: SeqAccess<'de>,
        {
            while seq.next_element::<IgnoredAny>()?.is_some() {}

            Ok(Self::Value::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Self::Value::new())
        }

        fn visit_bool<E>(self, _v: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Self::Value::new())
        }

        fn visit_u64<E>(self, _v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Self::Value::new())
        }

        fn visit_i64<E>(self, _v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Self::Value::new())
        }

        fn visit_f64<E>(self, _v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Self::Value::new())
        }

        fn visit_str<E>(self, _v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Self::Value::new())
        }

        fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut map = Self::Value::with_capacity(access.size_hint().unwrap_or(0));

            while let Some((key, value)) = access.next_entry::<String, T>()? {
                map.insert(key, value);
            }

            Ok(map)
        }
    }

    deserializer.deserialize_any(MapVisitor { marker: PhantomData })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug)]
    struct Numbers {
        #[serde(deserialize_with = "string_or_number")]
        a: u32,
        #[serde(default, deserialize_with = "option_string_or_number")]
        b: Option<u64>,
        #[serde(default, deserialize_with = "lenient_number")]
        c: Option<u16>,
    }

    #[derive(Deserialize, Debug)]
    struct Signed {
        #[serde(deserialize_with = "string_or_number")]
        n: i32,
    }

    #[derive(Deserialize, Debug)]
    struct Flags {
        #[serde(default, deserialize_with = "true_value")]
        success: bool,
        #[serde(default, deserialize_with = "into_bool")]
        ready: bool,
    }

    #[derive(Deserialize, Debug)]
    struct Lists {
        #[serde(default, deserialize_with = "hashmap_or_vec")]
        list: Vec<u32>,
        #[serde(default, deserialize_with = "map_or_empty_seq")]
        map: HashMap<String, u32>,
    }

    #[test]
    fn reads_strings_and_numbers() {
        let numbers: Numbers = serde_json::from_str(r#"{"a":"5","b":6,"c":"7"}"#).unwrap();

        assert_eq!(numbers.a, 5);
        assert_eq!(numbers.b, Some(6));
        assert_eq!(numbers.c, Some(7));
    }

    #[test]
    fn reads_signed_numbers() {
        for body in [r#"{"n":-1}"#, r#"{"n":"-1"}"#] {
            let signed: Signed = serde_json::from_str(body).unwrap();

            assert_eq!(signed.n, -1);
        }

        assert!(serde_json::from_str::<Signed>(r#"{"n":3000000000}"#).is_err());
        assert!(serde_json::from_str::<Numbers>(r#"{"a":-1}"#).is_err());
    }

    #[test]
    fn lenient_number_is_none_on_bad_input() {
        let numbers: Numbers = serde_json::from_str(r#"{"a":1,"c":"abc"}"#).unwrap();

        assert_eq!(numbers.b, None);
        assert_eq!(numbers.c, None);

        let numbers: Numbers = serde_json::from_str(r#"{"a":1,"c":70000}"#).unwrap();

        assert_eq!(numbers.c, None);

        let numbers: Numbers = serde_json::from_str(r#"{"a":1,"c":{"x":1}}"#).unwrap();

        assert_eq!(numbers.c, None);
    }

    #[test]
    fn only_literal_true_is_true() {
        let flags: Flags = serde_json::from_str(r#"{"success":"true","ready":1}"#).unwrap();

        assert!(flags.success);
        assert!(flags.ready);

        let flags: Flags = serde_json::from_str(r#"{"success":true,"ready":false}"#).unwrap();

        assert!(flags.success);
        assert!(!flags.ready);

        for body in [r#"{"success":"false"}"#, r#"{"success":1}"#, r#"{"success":"TRUE"}"#, "{}"] {
            let flags: Flags = serde_json::from_str(body).unwrap();

            assert!(!flags.success, "{body} should not be successful");
        }
    }

    #[test]
    fn reads_indexed_maps_in_order() {
        let lists: Lists = serde_json::from_str(r#"{"list":{"10":3,"2":2,"0":1}}"#).unwrap();

        assert_eq!(lists.list, vec![1, 2, 3]);

        let lists: Lists = serde_json::from_str(r#"{"list":[4,5]}"#).unwrap();

        assert_eq!(lists.list, vec![4, 5]);
    }

    #[test]
    fn empty_seq_is_empty_map() {
        let lists: Lists = serde_json::from_str(r#"{"map":[]}"#).unwrap();

        assert!(lists.map.is_empty());

        let lists: Lists = serde_json::from_str(r#"{"map":{"a":1}}"#).unwrap();

        assert_eq!(lists.map.get("a"), Some(&1));
    }

    #[test]
    fn scalar_is_empty_map() {
        for body in [r#"{"map":false}"#, r#"{"map":0}"#, r#"{"map":-1}"#, r#"{"map":1.5}"#, r#"{"map":""}"#, r#"{"map":null}"#] {
            let lists: Lists = serde_json::from_str(body).unwrap();

            assert!(lists.map.is_empty(), "{body} should be an empty map");
        }
    }
}
