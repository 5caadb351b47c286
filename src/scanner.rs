//! Scanning of Secrets and ConfigMaps for a search pattern

use std::fmt;

use k8s_openapi::api::core::v1::{ConfigMap, Secret};
use k8s_openapi::ByteString;
use kube::ResourceExt;
use tracing::{debug, info};

use crate::matcher::{decode, Matcher, MAX_DATA_SIZE};

/// Kind of resource a finding was made in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Secret,
    ConfigMap,
}

impl ResourceKind {
    /// Short lower-case label used in finding lines
    fn label(self) -> &'static str {
        match self {
            ResourceKind::Secret => "secret",
            ResourceKind::ConfigMap => "config",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Secret => write!(f, "Secret"),
            ResourceKind::ConfigMap => write!(f, "ConfigMap"),
        }
    }
}

/// Part of a key-value entry the pattern was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTarget {
    Key,
    Value,
    KeyAndValue,
}

impl fmt::Display for MatchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchTarget::Key => write!(f, "key"),
            MatchTarget::Value => write!(f, "value"),
            MatchTarget::KeyAndValue => write!(f, "key and value"),
        }
    }
}

/// Where inside a resource the pattern was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// The resource name itself
    Name,
    /// A data entry. `value` is `None` when the stored bytes could not be decoded.
    Entry {
        key: String,
        value: Option<String>,
        target: MatchTarget,
    },
}

/// A single match of the pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub kind: ResourceKind,
    pub namespace: String,
    pub name: String,
    pub location: Location,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Location::Name => write!(
                f,
                "Found {} with name: {} in namespace {}",
                self.kind.label(),
                self.name,
                self.namespace
            ),
            Location::Entry { key, value, target } => write!(
                f,
                "Found {} in namespace: {}; {}: {} - {} : {} (matched {})",
                self.kind.label(),
                self.namespace,
                self.kind,
                self.name,
                key,
                value.as_deref().unwrap_or("<undecodable>"),
                target
            ),
        }
    }
}

/// Accumulated result of a scan run
#[derive(Debug, Default)]
pub struct ScanReport {
    pub findings: Vec<Finding>,
    pub secrets_scanned: usize,
    pub config_maps_scanned: usize,
    /// Binary values that were skipped because they could not be decoded
    pub skipped_values: usize,
}

impl ScanReport {
    /// Whether anything matched
    pub fn found_any(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Number of findings in resources of `kind`
    pub fn count(&self, kind: ResourceKind) -> usize {
        self.findings.iter().filter(|f| f.kind == kind).count()
    }

    /// One-line summary of the run
    pub fn summary(&self) -> String {
        format!(
            "Found {} match(es): {} in {} secrets, {} in {} config maps ({} undecodable values skipped)",
            self.findings.len(),
            self.count(ResourceKind::Secret),
            self.secrets_scanned,
            self.count(ResourceKind::ConfigMap),
            self.config_maps_scanned,
            self.skipped_values
        )
    }

    fn record(&mut self, finding: Finding) {
        info!("{}", finding);
        self.findings.push(finding);
    }
}

/// Exit status when nothing matched
pub const EXIT_NO_MATCH: u8 = 0;

/// Exit status when at least one match was found
pub const EXIT_FOUND: u8 = 1;

/// Exit status on a fatal error
pub const EXIT_FATAL: u8 = 2;

/// Process exit status for the outcome of a run
pub fn exit_status(outcome: &anyhow::Result<ScanReport>) -> u8 {
    match outcome {
        Ok(report) if report.found_any() => EXIT_FOUND,
        Ok(_) => EXIT_NO_MATCH,
        Err(_) => EXIT_FATAL,
    }
}

/// Identity of the resource being scanned
struct Scope<'a> {
    kind: ResourceKind,
    namespace: &'a str,
    name: &'a str,
}

impl Scope<'_> {
    fn finding(&self, location: Location) -> Finding {
        Finding {
            kind: self.kind,
            namespace: self.namespace.to_string(),
            name: self.name.to_string(),
            location,
        }
    }
}

/// Scan every Secret in `secrets`
pub fn scan_secrets(secrets: &[Secret], matcher: &Matcher, report: &mut ScanReport) {
    for secret in secrets {
        scan_secret(secret, matcher, report);
    }
}

/// Scan every ConfigMap in `config_maps`
pub fn scan_config_maps(config_maps: &[ConfigMap], matcher: &Matcher, report: &mut ScanReport) {
    for config_map in config_maps {
        scan_config_map(config_map, matcher, report);
    }
}

/// Scan a Secret's name, `stringData` and `data` entries
pub fn scan_secret(secret: &Secret, matcher: &Matcher, report: &mut ScanReport) {
    let namespace = secret.namespace().unwrap_or_default();
    let name = secret.name_any();
    let scope = Scope {
        kind: ResourceKind::Secret,
        namespace: &namespace,
        name: &name,
    };

    report.secrets_scanned += 1;
    scan_name(&scope, matcher, report);

    for (key, value) in secret.string_data.iter().flatten() {
        scan_entry(&scope, key, value, matcher, report);
    }
    for (key, value) in secret.data.iter().flatten() {
        scan_binary_entry(&scope, key, value, matcher, report);
    }
}

/// Scan a ConfigMap's name, `data` and `binaryData` entries
pub fn scan_config_map(config_map: &ConfigMap, matcher: &Matcher, report: &mut ScanReport) {
    let namespace = config_map.namespace().unwrap_or_default();
    let name = config_map.name_any();
    let scope = Scope {
        kind: ResourceKind::ConfigMap,
        namespace: &namespace,
        name: &name,
    };

    report.config_maps_scanned += 1;
    scan_name(&scope, matcher, report);

    for (key, value) in config_map.data.iter().flatten() {
        scan_entry(&scope, key, value, matcher, report);
    }
    for (key, value) in config_map.binary_data.iter().flatten() {
        scan_binary_entry(&scope, key, value, matcher, report);
    }
}

fn scan_name(scope: &Scope<'_>, matcher: &Matcher, report: &mut ScanReport) {
    if matcher.is_match(scope.name) {
        report.record(scope.finding(Location::Name));
    }
}

fn scan_entry(
    scope: &Scope<'_>,
    key: &str,
    value: &str,
    matcher: &Matcher,
    report: &mut ScanReport,
) {
    let target = match (matcher.is_match(key), matcher.is_match(value)) {
        (true, true) => MatchTarget::KeyAndValue,
        (true, false) => MatchTarget::Key,
        (false, true) => MatchTarget::Value,
        (false, false) => return,
    };

    report.record(scope.finding(Location::Entry {
        key: key.to_string(),
        value: Some(value.to_string()),
        target,
    }));
}

fn scan_binary_entry(
    scope: &Scope<'_>,
    key: &str,
    value: &ByteString,
    matcher: &Matcher,
    report: &mut ScanReport,
) {
    match decode(&value.0, MAX_DATA_SIZE) {
        Ok(text) => scan_entry(scope, key, text, matcher, report),
        Err(reason) => {
            report.skipped_values += 1;
            debug!(
                "Value could not be decoded: {}; {}: {} - {}: {}",
                scope.namespace, scope.kind, scope.name, key, reason
            );

            // The key is plain text even when the value is not
            if matcher.is_match(key) {
                report.record(scope.finding(Location::Entry {
                    key: key.to_string(),
                    value: None,
                    target: MatchTarget::Key,
                }));
            }
        }
    }
}
