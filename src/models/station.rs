use serde::{Deserialize, Serialize};

/// A stop in the station directory, loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_directory_row() {
        let station: Station =
            serde_json::from_str(r#"{"id": 3, "name": "Salt River"}"#).expect("should deserialize");
        assert_eq!(station.id, 3);
        assert_eq!(station.name, "Salt River");
    }
}
