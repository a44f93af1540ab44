//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod sleeper_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let error = SleeperError::from(reqwest_error);

        match error {
            SleeperError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = SleeperError::from(json_error);

        match error {
            SleeperError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SleeperError::from(io_error);

        match error {
            SleeperError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u64>().unwrap_err();
        let error = SleeperError::from(parse_error);

        match error {
            SleeperError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_missing_league_id_error() {
        let error = SleeperError::MissingLeagueId {
            env_var: "SLEEPER_FFL_LEAGUE_ID".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League ID not provided"));
        assert!(error_string.contains("SLEEPER_FFL_LEAGUE_ID"));
    }

    #[test]
    fn test_no_data_error() {
        let error = SleeperError::NoData {
            resource: "league 42".to_string(),
        };
        assert_eq!(error.to_string(), "Sleeper API returned no data for league 42");
    }

    #[test]
    fn test_validation_error_is_client_error() {
        let error = SleeperError::validation("amount", "must be numeric");

        assert_eq!(
            error.to_string(),
            "Validation failed for `amount`: must be numeric"
        );
        assert!(error.is_client_error());
    }

    #[test]
    fn test_unauthorized_distinct_from_validation() {
        let error = SleeperError::Unauthorized {
            reason: "bad token".to_string(),
        };

        assert!(error.is_client_error());
        assert!(!matches!(error, SleeperError::Validation { .. }));
        assert!(error.to_string().contains("bad token"));
    }

    #[test]
    fn test_upstream_errors_are_not_client_errors() {
        let no_data = SleeperError::NoData {
            resource: "league 4242".to_string(),
        };
        assert!(no_data.to_string().contains("league 4242"));
        assert!(!no_data.is_client_error());

        let io = SleeperError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "cache dir is read-only",
        ));
        assert!(matches!(io, SleeperError::Io(_)));
        assert!(!io.is_client_error());
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let anyhow_error = anyhow::anyhow!("Test anyhow error message");
        let error = SleeperError::from(anyhow_error);

        match error {
            SleeperError::Storage(inner) => {
                assert!(inner.to_string().contains("Test anyhow error message"));
            }
            _ => panic!("Expected Storage error variant"),
        }
    }

    #[test]
    fn test_database_error_conversion() {
        let db_error = rusqlite::Error::InvalidColumnType(
            0,
            "test_column".to_string(),
            rusqlite::types::Type::Null,
        );
        let error = SleeperError::from(db_error);

        match error {
            SleeperError::Database(_) => (),
            _ => panic!("Expected Database error variant"),
        }
    }

    #[test]
    fn test_system_time_error_conversion() {
        use std::time::{Duration, SystemTime, UNIX_EPOCH};

        let future_time = SystemTime::now() + Duration::from_secs(100);
        let system_time_error = UNIX_EPOCH.duration_since(future_time).unwrap_err();
        let error = SleeperError::from(system_time_error);

        match error {
            SleeperError::SystemTime(_) => (),
            _ => panic!("Expected SystemTime error variant"),
        }
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SleeperError::from(io_error);

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }
}
