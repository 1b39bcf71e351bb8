//! Lenient checkbox values: form hosts post `true`, `1`, `"1"` or `"on"` for a ticked box.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Int(i64),
    Text(String),
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<FlagRepr>::deserialize(deserializer)? {
        None => Ok(false),
        Some(FlagRepr::Bool(b)) => Ok(b),
        Some(FlagRepr::Int(n)) => Ok(n != 0),
        Some(FlagRepr::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "false" | "off" => Ok(false),
            "1" | "true" | "on" => Ok(true),
            other => Err(<D::Error as Error>::custom(format!("invalid checkbox value {other:?}"))),
        },
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::deserialize")]
        link: bool,
    }

    fn parse(json: &str) -> Result<bool, serde_json::Error> {
        serde_json::from_str::<Probe>(json).map(|p| p.link)
    }

    #[test]
    fn accepts_common_checkbox_shapes() {
        assert!(parse(r#"{"link": true}"#).unwrap());
        assert!(parse(r#"{"link": 1}"#).unwrap());
        assert!(parse(r#"{"link": "1"}"#).unwrap());
        assert!(parse(r#"{"link": "on"}"#).unwrap());
        assert!(!parse(r#"{"link": false}"#).unwrap());
        assert!(!parse(r#"{"link": 0}"#).unwrap());
        assert!(!parse(r#"{"link": ""}"#).unwrap());
        assert!(!parse(r#"{"link": null}"#).unwrap());
        assert!(!parse(r#"{}"#).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse(r#"{"link": "maybe"}"#).is_err());
    }
}
