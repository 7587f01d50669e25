//! Default value functions used by serde for config deserialization.

pub fn default_name() -> String {
    "Iker eta Nerea".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_port() -> u16 {
    3000
}
