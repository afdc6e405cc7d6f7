use config::{Config, File, FileFormat, Map, Value};

use super::error::ConfigError;
use crate::utils::strings::is_blank;

/// Parses a JSON configuration string into a standalone [`Config`].
///
/// The result is independent of the process-wide configuration; nothing is
/// merged or cached.
pub fn parse_config_string(text: Option<&str>) -> Result<Config, ConfigError> {
    parse_config_string_as(text, FileFormat::Json)
}

/// Parses a configuration string written in `format`.
///
/// # Errors
///
/// - [`ConfigError::EmptyInput`] when `text` is absent or blank
/// - [`ConfigError::ParseError`] when the text is not valid `format`, or its
///   root is not a mapping
/// - [`ConfigError::EmptyResult`] when the text parses to zero keys
pub fn parse_config_string_as(
    text: Option<&str>,
    format: FileFormat,
) -> Result<Config, ConfigError> {
    log::info!("Parsing {format:?} string into a config object");

    let text = match text {
        Some(text) if !is_blank(Some(text)) => text,
        _ => {
            log::error!("Empty string passed for configuration parsing");
            return Err(ConfigError::EmptyInput);
        }
    };

    let config = Config::builder()
        .add_source(File::from_str(text, format))
        .build()
        .map_err(|e| {
            log::error!("Error while parsing string into a config object: {e}");
            ConfigError::ParseError(e)
        })?;

    let keys = config
        .clone()
        .try_deserialize::<Map<String, Value>>()
        .map_err(ConfigError::ParseError)?;
    if keys.is_empty() {
        log::error!("Parsed config object is empty");
        return Err(ConfigError::EmptyResult);
    }

    log::info!("Configuration string parsed into {} top-level keys", keys.len());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_matches, assert_ok};

    #[test]
    fn test_absent_or_blank_text_is_empty_input() {
        for text in [None, Some(""), Some("   "), Some("\n\t")] {
            assert_matches!(parse_config_string(text), Err(ConfigError::EmptyInput));
        }
    }

    #[test]
    fn test_invalid_text_is_parse_error() {
        assert_matches!(
            parse_config_string(Some("not valid {{{")),
            Err(ConfigError::ParseError(_))
        );
    }

    #[test]
    fn test_non_mapping_root_is_parse_error() {
        assert_matches!(
            parse_config_string(Some("[1, 2, 3]")),
            Err(ConfigError::ParseError(_))
        );
    }

    #[test]
    fn test_empty_object_is_empty_result() {
        assert_matches!(parse_config_string(Some("{}")), Err(ConfigError::EmptyResult));
        assert_matches!(
            parse_config_string(Some("  {  }  ")),
            Err(ConfigError::EmptyResult)
        );
    }

    #[test]
    fn test_valid_json_resolves_keys() {
        let config = assert_ok!(parse_config_string(Some(r#"{"a":1}"#)));
        assert_eq!(config.get_int("a").unwrap(), 1);
    }

    #[test]
    fn test_nested_json_is_addressable_by_dotted_key() {
        let config = assert_ok!(parse_config_string(Some(
            r#"{"es": {"host": "localhost", "ports": [9200, 9300]}, "enabled": true}"#
        )));
        assert_eq!(config.get_string("es.host").unwrap(), "localhost");
        assert_eq!(config.get_int("es.ports[1]").unwrap(), 9300);
        assert!(config.get_bool("enabled").unwrap());
    }

    #[test]
    fn test_explicit_toml_format() {
        let config = assert_ok!(parse_config_string_as(
            Some("[cache]\nttl = 30\n"),
            FileFormat::Toml
        ));
        assert_eq!(config.get_int("cache.ttl").unwrap(), 30);
    }

    #[test]
    fn test_empty_toml_document_is_empty_result() {
        assert_matches!(
            parse_config_string_as(Some("# only a comment\n"), FileFormat::Toml),
            Err(ConfigError::EmptyResult)
        );
    }
}
