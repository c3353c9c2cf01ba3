use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Parse JSON without a nesting limit; the stack grows on demand for deep trees
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

pub fn from_json_str<T: DeserializeOwned>(s: &str) -> Result<T> {
    from_json_slice(s.as_bytes())
}

/// Convert an already-parsed value, with the same unbounded depth
pub fn from_json_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    Ok(T::deserialize(serde_stacker::Deserializer::new(value))?)
}

pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("pocket-links");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/pocket-links");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("pocket-links");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Where exports land when nothing is configured: the user's download folder
pub fn get_default_export_dir() -> PathBuf {
    if let Ok(path) = std::env::var("XDG_DOWNLOAD_DIR") {
        return PathBuf::from(path);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join("Downloads");
    }

    #[cfg(target_os = "windows")]
    if let Ok(profile) = std::env::var("USERPROFILE") {
        return PathBuf::from(profile).join("Downloads");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn nested_arrays(depth: usize) -> String {
        format!("{}{}", "[".repeat(depth), "]".repeat(depth))
    }

    #[test]
    fn test_deep_json_parses() {
        let value: Value = from_json_str(&nested_arrays(1000)).unwrap();
        assert!(value.is_array());
        assert!(serde_json::from_str::<Value>(&nested_arrays(1000)).is_err());
    }

    #[test]
    fn test_trailing_garbage_is_rejected() {
        assert!(from_json_str::<Value>("[] x").is_err());
    }

    #[test]
    fn test_from_value() {
        let pair: (String, u32) = from_json_value(json!(["a", 1])).unwrap();
        assert_eq!(pair, ("a".to_string(), 1));
    }
}
