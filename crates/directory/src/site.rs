use serde::{Deserialize, Deserializer, Serialize};

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// One directory record, keyed exactly as the spreadsheet export writes it.
///
/// Every field is optional in the source data. A missing (or `null`) field
/// deserializes to an empty string so a sparse record still renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    #[serde(rename = "Sites", default, deserialize_with = "lenient_text")]
    pub identifier: String,
    #[serde(rename = "City", default, deserialize_with = "lenient_text")]
    pub city: String,
    #[serde(rename = "Devices", default, deserialize_with = "lenient_text")]
    pub devices: String,
    #[serde(rename = "Latitude", default, deserialize_with = "lenient_text")]
    pub latitude: String,
    // The export misspells the key; existing data files depend on it.
    #[serde(rename = "Logitude", default, deserialize_with = "lenient_text")]
    pub longitude: String,
    #[serde(rename = "Name", default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(rename = "Address", default, deserialize_with = "lenient_text")]
    pub address: String,
    #[serde(rename = "Other Details", default, deserialize_with = "lenient_text")]
    pub other_details: String,
}

impl Site {
    /// Parses a whole `Sites.json` document.
    pub fn parse_collection(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn has_identifier(&self) -> bool {
        !self.identifier.is_empty()
    }

    /// Map search link for the record's coordinates.
    pub fn map_url(&self) -> String {
        format!("{MAPS_SEARCH_URL}{},{}", self.latitude, self.longitude)
    }

    pub fn coordinates(&self) -> String {
        format!("{}, {}", self.latitude, self.longitude)
    }

    pub fn device_lines(&self) -> Vec<String> {
        split_lines(&self.devices)
    }

    pub fn other_detail_lines(&self) -> Vec<String> {
        split_lines(&self.other_details)
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

// Exports write coordinates (and sometimes identifiers) as bare numbers.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::Site;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"[
        {
            "Sites": "A1",
            "City": "X",
            "Devices": "router\nswitch",
            "Latitude": "1",
            "Logitude": "2",
            "Name": "n",
            "Address": "addr",
            "Other Details": "od"
        },
        {"Sites": "B2", "City": "Y", "Latitude": 51.5, "Logitude": -0.12, "Extra": true}
    ]"#;

    #[test]
    fn parses_export_keys() -> Result<(), serde_json::Error> {
        let sites = Site::parse_collection(SAMPLE)?;

        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].identifier, "A1");
        assert_eq!(sites[0].longitude, "2");
        assert_eq!(sites[0].other_details, "od");
        Ok(())
    }

    #[test]
    fn missing_and_numeric_fields_become_text() -> Result<(), serde_json::Error> {
        let sites = Site::parse_collection(SAMPLE)?;
        let second = &sites[1];

        assert_eq!(second.latitude, "51.5");
        assert_eq!(second.longitude, "-0.12");
        assert_eq!(second.devices, "");
        assert_eq!(second.other_details, "");
        Ok(())
    }

    #[test]
    fn null_field_is_empty() -> Result<(), serde_json::Error> {
        let sites = Site::parse_collection(r#"[{"Sites": null, "City": "Z"}]"#)?;

        assert!(!sites[0].has_identifier());
        assert_eq!(sites[0].city, "Z");
        Ok(())
    }

    #[test]
    fn map_url_uses_latitude_then_longitude() {
        let site = Site {
            latitude: "1".to_string(),
            longitude: "2".to_string(),
            ..Site::default()
        };

        assert_eq!(
            site.map_url(),
            "https://www.google.com/maps/search/?api=1&query=1,2"
        );
        assert_eq!(site.coordinates(), "1, 2");
    }

    #[test]
    fn multiline_fields_split_on_newlines() {
        let site = Site {
            devices: "router\r\nswitch".to_string(),
            other_details: "gate code 1234".to_string(),
            ..Site::default()
        };

        assert_eq!(site.device_lines(), vec!["router", "switch"]);
        assert_eq!(site.other_detail_lines(), vec!["gate code 1234"]);
    }

    #[test]
    fn serializes_back_to_export_keys() -> Result<(), serde_json::Error> {
        let site = Site {
            identifier: "A1".to_string(),
            other_details: "od".to_string(),
            ..Site::default()
        };

        let value = serde_json::to_value(&site)?;
        assert_eq!(value["Sites"], "A1");
        assert_eq!(value["Other Details"], "od");
        assert_eq!(value["Logitude"], "");
        Ok(())
    }
}
