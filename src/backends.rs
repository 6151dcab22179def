//! Backend registration and dispatch
//!
//! This module provides a centralized registry for all GPIO backends,
//! with support for feature-gated inclusion and dynamic help text
//! generation, plus the backend-string parser used by the CLI.

use rgpio_core::bank::Bank;

/// Information about a backend
pub struct BackendInfo {
    /// Primary name (used for matching)
    pub name: &'static str,
    /// Alternative names/aliases
    pub aliases: &'static [&'static str],
    /// Short description
    pub description: &'static str,
}

/// Get information about all available backends (enabled at compile time)
#[allow(unused_mut, clippy::vec_init_then_push)]
pub fn available_backends() -> Vec<BackendInfo> {
    let mut backends = Vec::new();

    #[cfg(feature = "dummy")]
    backends.push(BackendInfo {
        name: "dummy",
        aliases: &[],
        description: "In-memory simulated pins for testing (pins=<N>,high)",
    });

    #[cfg(feature = "linux-gpio")]
    backends.push(BackendInfo {
        name: "linux",
        aliases: &["linux_gpio", "linux-gpio"],
        description:
            "Linux GPIO character device (dev=/dev/gpiochipN,pins=<off>[;<off>...],bias=<b>)",
    });

    backends
}

/// Generate help text listing all available backends
pub fn backend_help() -> String {
    let backends = available_backends();

    if backends.is_empty() {
        return "No backends available (recompile with backend features enabled)".to_string();
    }

    let mut help = String::from("Available backends:\n");

    for b in &backends {
        help.push_str(&format!("  {:12} - {}\n", b.name, b.description));
    }

    help
}

/// Generate a short list of backend names for CLI help
pub fn backend_names_short() -> String {
    let backends = available_backends();
    let names: Vec<&str> = backends.iter().map(|b| b.name).collect();
    names.join(", ")
}

/// Parsed backend string
pub struct BackendParams {
    /// Backend name
    pub name: String,
    /// Key-value options, in order of appearance
    pub options: Vec<(String, String)>,
}

/// Parse a backend string into name and options
///
/// Format: "name" or "name:key1=value1,key2=value2". Flag options may
/// omit the value ("dummy:pins=4,high").
pub fn parse_backend_params(s: &str) -> Result<BackendParams, Box<dyn std::error::Error>> {
    let (name, opts_str) = s.split_once(':').unwrap_or((s, ""));

    if name.is_empty() {
        return Err("Empty backend name".into());
    }

    let mut options = Vec::new();
    for part in opts_str.split(',').filter(|p| !p.is_empty()) {
        let (key, value) = part.split_once('=').unwrap_or((part, ""));
        options.push((key.to_string(), value.to_string()));
    }

    Ok(BackendParams {
        name: name.to_string(),
        options,
    })
}

/// Open a bank by backend string
///
/// Dispatches on the backend name, hands the remaining options to the
/// backend's own option parser, and returns the resulting pin bank.
pub fn open_bank(spec: &str) -> Result<Bank, Box<dyn std::error::Error>> {
    let params = parse_backend_params(spec)?;
    let options: Vec<(&str, &str)> = params
        .options
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    match params.name.as_str() {
        #[cfg(feature = "dummy")]
        "dummy" => {
            let config = rgpio_dummy::parse_options(&options)?;
            Ok(rgpio_dummy::DummyBank::new(&config).to_bank())
        }

        #[cfg(feature = "linux-gpio")]
        "linux" | "linux_gpio" | "linux-gpio" => rgpio_linux::open_linux_gpio(&options),

        name => Err(format!(
            "Unknown backend '{}' [available: {}]",
            name,
            backend_names_short()
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_name_only() {
        let params = parse_backend_params("dummy").unwrap();
        assert_eq!(params.name, "dummy");
        assert!(params.options.is_empty());
    }

    #[test]
    fn parse_name_with_options() {
        let params = parse_backend_params("linux:dev=/dev/gpiochip0,pins=9;10").unwrap();
        assert_eq!(params.name, "linux");
        assert_eq!(
            params.options,
            vec![
                ("dev".to_string(), "/dev/gpiochip0".to_string()),
                ("pins".to_string(), "9;10".to_string()),
            ]
        );
    }

    #[test]
    fn parse_flag_option_without_value() {
        let params = parse_backend_params("dummy:pins=4,high").unwrap();
        assert_eq!(params.options[1], ("high".to_string(), String::new()));
    }

    #[test]
    fn parse_rejects_empty_name() {
        assert!(parse_backend_params(":pins=4").is_err());
    }

    #[cfg(feature = "dummy")]
    #[test]
    fn open_dummy_bank() {
        let mut bank = open_bank("dummy:pins=4,high").unwrap();
        assert_eq!(bank.len(), 4);
        assert_eq!(bank.read_raw(0), 1);
    }

    #[test]
    fn open_unknown_backend_fails() {
        assert!(open_bank("parport").is_err());
    }
}
