use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ModelError;
use crate::section::Section;

/// The whole configuration blob: `{ "sections": [Section, ...] }`, index = id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTitleSettings {
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl SectionTitleSettings {
    /// Decode a stored blob; a missing blob or a `null` one is an empty list.
    pub fn from_blob(blob: Option<Value>) -> Result<Self, ModelError> {
        match blob {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(v) => serde_json::from_value(v).map_err(|e| ModelError::Serialization(e.to_string())),
        }
    }

    pub fn to_blob(&self) -> Result<Value, ModelError> {
        serde_json::to_value(self).map_err(|e| ModelError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_blob_is_empty() {
        assert!(SectionTitleSettings::from_blob(None).unwrap().sections.is_empty());
        assert!(SectionTitleSettings::from_blob(Some(Value::Null)).unwrap().sections.is_empty());
        assert!(SectionTitleSettings::from_blob(Some(json!({}))).unwrap().sections.is_empty());
    }

    #[test]
    fn decodes_stored_layout() {
        let blob = json!({"sections": [
            {"id": 0, "title": "Home", "link": false, "link_path": "", "paths": "<front>"},
            {"id": 1, "title": "News", "link": true, "link_path": "news", "paths": "news\nnews/*"}
        ]});
        let s = SectionTitleSettings::from_blob(Some(blob.clone())).unwrap();
        assert_eq!(s.sections.len(), 2);
        assert_eq!(s.sections[1].title, "News");
        assert_eq!(s.to_blob().unwrap(), blob);
    }

    #[test]
    fn corrupt_blob_is_an_error() {
        let err = SectionTitleSettings::from_blob(Some(json!({"sections": "nope"}))).unwrap_err();
        assert!(matches!(err, ModelError::Serialization(_)));
    }
}
