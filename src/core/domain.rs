use std::env;
use serde::{Deserialize, Serialize};

// longest loan period accepted from the environment, one hundred years
pub const MAX_LOAN_DAYS: i64 = 36_500;

// Identifiable defines common traits that can be shared by stored records
pub trait Identifiable {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum LogFormat {
    Text,
    Json,
}

impl From<String> for LogFormat {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub book_loan_days: i64,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            book_loan_days: 14,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }

    // builds the default configuration and layers CIRCULATION_* environment variables on top
    pub fn from_env() -> Self {
        let vars: Vec<(String, String)> = env::vars().collect();
        Self::from_vars(vars.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    pub(crate) fn from_vars<'a>(vars: impl Iterator<Item=(&'a str, &'a str)>) -> Self {
        let mut config = Configuration::new("main");
        for (key, value) in vars {
            match key {
                "CIRCULATION_BRANCH" => config.branch_id = value.to_string(),
                "CIRCULATION_LOAN_DAYS" => match value.parse::<i64>() {
                    Ok(days) if (1..=MAX_LOAN_DAYS).contains(&days) => config.book_loan_days = days,
                    _ => tracing::warn!(value, "ignoring invalid CIRCULATION_LOAN_DAYS"),
                },
                "CIRCULATION_LOG_LEVEL" => config.log_level = value.to_string(),
                "CIRCULATION_LOG_FORMAT" => config.log_format = LogFormat::from(value.to_string()),
                _ => {}
            }
        }
        config
    }
}
