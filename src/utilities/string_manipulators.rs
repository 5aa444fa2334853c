use chrono::{DateTime, Local};

pub fn date_time_as_string(dt: Option<DateTime<Local>>, format: Option<&str>) -> String {
    dt.unwrap_or(Local::now())
        .format(format.unwrap_or("%d_%m_%Y-%H-%M"))
        .to_string()
}

/// Removes the lookup marker and the script punctuation around the value,
/// `PCGDECK.searchItemNameAlt[42]='Pikachu';` becomes `Pikachu`.
pub fn clean_script_value(line: &str, marker: &str) -> String {
    line.replace(marker, "")
        .chars()
        .filter(|c| !matches!(c, '=' | ';' | '\'' | '"' | '\r'))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_clean_script_value() {
        let line = "PCGDECK.searchItemNameAlt[42]='Pikachu';\r";
        assert_eq!(
            clean_script_value(line, "PCGDECK.searchItemNameAlt[42]"),
            "Pikachu"
        );
    }

    #[test]
    fn test_clean_script_value_keeps_path() {
        let line = "\tPCGDECK.searchItemCardPict[42]=\"/assets/SV4a/042.jpg\";";
        assert_eq!(
            clean_script_value(line, "PCGDECK.searchItemCardPict[42]"),
            "/assets/SV4a/042.jpg"
        );
    }

    #[test]
    fn test_date_time_as_string() {
        let dt = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        assert_eq!(date_time_as_string(Some(dt), None), "09_03_2024-14-05");
        assert_eq!(date_time_as_string(Some(dt), Some("%Y")), "2024");
    }
}
