#![cfg(test)]

use std::fmt::Debug;

use serde::{
    Serialize,
    de::DeserializeOwned,
};

#[track_caller]
pub fn test_string_deserialization<T>(s: &str, expected: T)
where
    T: Debug + PartialEq + DeserializeOwned,
{
    let got = serde_json::from_str::<T>(&format!("\"{s}\"")).unwrap();
    assert_eq!(got, expected);
}

#[track_caller]
pub fn test_string_serialization<T>(v: T, expected: &str)
where
    T: Debug + PartialEq + Serialize + DeserializeOwned,
{
    let got = serde_json::to_string(&v).unwrap();
    assert_eq!(got, format!("\"{expected}\""));
    test_string_deserialization(expected, v);
}
