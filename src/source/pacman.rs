//! pacman-backed package source.

use std::process::Command;

use tracing::debug;

use crate::error::{PacsortError, Result};
use crate::package::{parse_size, InstallReason, Package, Snapshot};

use super::PackageSource;

/// Queries the local pacman database through `pacman -Qi`.
#[derive(Debug, Clone)]
pub struct PacmanSource {
    program: String,
}

impl PacmanSource {
    /// Create a source that runs the given pacman executable.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The executable this source runs.
    pub fn program(&self) -> &str {
        &self.program
    }

    fn command_line(&self) -> String {
        format!("{} -Qi", self.program)
    }

    fn query(&self) -> Result<String> {
        debug!("Running {}", self.command_line());

        let output = Command::new(&self.program)
            .arg("-Qi")
            .env("LC_ALL", "C")
            .output()
            .map_err(|e| PacsortError::PackageQuery {
                command: self.command_line(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                match output.status.code() {
                    Some(code) => format!("exited with code {}", code),
                    None => "terminated by signal".to_string(),
                }
            } else {
                stderr
            };
            return Err(PacsortError::PackageQuery {
                command: self.command_line(),
                message,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for PacmanSource {
    fn default() -> Self {
        Self::new("pacman")
    }
}

impl PackageSource for PacmanSource {
    fn name(&self) -> &str {
        "pacman"
    }

    fn installed(&self) -> Result<Snapshot> {
        let stdout = self.query()?;
        let packages = parse_query_output(&stdout)?;
        debug!("pacman reported {} installed packages", packages.len());
        Ok(Snapshot::new(packages))
    }
}

/// Parse the output of `pacman -Qi` into package records.
///
/// Records are separated by blank lines. Each line is `Key : value`; lines
/// that start with whitespace continue the previous field.
pub fn parse_query_output(output: &str) -> Result<Vec<Package>> {
    let mut packages = Vec::new();
    let mut fields: Vec<(String, String)> = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            if let Some(pkg) = build_package(&fields)? {
                packages.push(pkg);
            }
            fields.clear();
            continue;
        }

        if line.starts_with(char::is_whitespace) {
            if let Some((_, value)) = fields.last_mut() {
                value.push(' ');
                value.push_str(line.trim());
            }
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            fields.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    if let Some(pkg) = build_package(&fields)? {
        packages.push(pkg);
    }

    Ok(packages)
}

fn build_package(fields: &[(String, String)]) -> Result<Option<Package>> {
    if fields.is_empty() {
        return Ok(None);
    }

    let field = |key: &str| {
        fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    let Some(name) = field("Name").filter(|n| !n.is_empty()) else {
        debug!("Skipping package record without a name");
        return Ok(None);
    };

    let installed_size = match field("Installed Size") {
        Some(size) => parse_size(size).map_err(|e| PacsortError::InvalidQueryOutput {
            package: name.to_string(),
            message: e.to_string(),
        })?,
        None => 0,
    };

    let reason = match field("Install Reason") {
        Some(r) if r.contains("Explicitly installed") => InstallReason::Explicit,
        _ => InstallReason::Dependency,
    };

    Ok(Some(Package {
        name: name.to_string(),
        version: field("Version").unwrap_or_default().to_string(),
        description: field("Description").unwrap_or_default().to_string(),
        installed_size,
        reason,
        depends_on: parse_list(field("Depends On")),
        required_by: parse_list(field("Required By")),
        optional_for: parse_list(field("Optional For")),
        provides: parse_list(field("Provides")),
    }))
}

fn parse_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split_whitespace()
        .filter(|item| *item != "None")
        .map(String::from)
        .collect()
}
