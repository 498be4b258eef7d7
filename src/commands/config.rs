//! Config command implementation.
//!
//! Generates configuration files in various formats.

use anyhow::Context;
use std::fs;
use std::path::PathBuf;

use swapview::cli::ConfigFormat;
use swapview::config::{render_config, Config};

/// Generates configuration files.
pub fn command_config(output: Option<PathBuf>, format: ConfigFormat) -> anyhow::Result<()> {
    let output = output.unwrap_or_else(|| PathBuf::from(default_file_name(&format)));

    let mut content = render_config(&Config::default(), &format)?;
    if matches!(format, ConfigFormat::Yaml) {
        content = add_config_comments(content);
    }

    if output.to_string_lossy() == "-" {
        print!("{}", content);
    } else {
        fs::write(&output, content)
            .with_context(|| format!("failed to write {}", output.display()))?;
        println!("Configuration written to: {}", output.display());
    }

    Ok(())
}

fn default_file_name(format: &ConfigFormat) -> &'static str {
    match format {
        ConfigFormat::Yaml => "swapview.yaml",
        ConfigFormat::Json => "swapview.json",
        ConfigFormat::Toml => "swapview.toml",
    }
}

/// Adds comments to YAML configuration.
fn add_config_comments(yaml: String) -> String {
    let comments = r#"# swapview configuration
#
# proc_root: /proc             # Directory with one entry per process
# parallelism: 0               # Probe worker threads (0 = one per CPU, max 1024)
# log_level: warn              # off, error, warn, info, debug, trace (logs go to stderr)
# output: table                # table or json
"#;

    format!("{comments}\n{yaml}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commented_yaml_still_parses() {
        let yaml = render_config(&Config::default(), &ConfigFormat::Yaml).unwrap();
        let commented = add_config_comments(yaml);
        let parsed: Config = serde_yaml::from_str(&commented).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_command_config_writes_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.json");
        command_config(Some(path.clone()), ConfigFormat::Json).unwrap();

        let parsed: Config = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(parsed, Config::default());
    }
}
