use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use fatar_core::dedup::Fingerprint;
use serde::Serialize;

/// One row of `list` output: an object member and its content fingerprint.
#[derive(Debug, Clone, Serialize)]
pub struct MemberInfo {
    pub name: String,
    pub size: usize,
    pub fingerprint: String,
}

/// List the object members of a single archive, with sizes and fingerprints.
///
/// Diagnostic aid for working out why two archives did (or did not)
/// deduplicate against each other.
pub fn list_command(archive: &str, json: bool) -> Result<()> {
    let path = Path::new(archive);
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read archive {}", path.display()))?;
    let members = fatar_core::format::parse(&bytes)
        .with_context(|| format!("Failed to parse archive {}", path.display()))?;

    let mut infos = Vec::new();
    for member in members {
        let member = member
            .with_context(|| format!("Failed to parse archive {}", path.display()))?;
        infos.push(MemberInfo {
            name: member.name,
            size: member.content.len(),
            fingerprint: Fingerprint::of(&member.content).to_string(),
        });
    }

    if json {
        let serialized = serde_json::to_string_pretty(&infos)
            .context("Failed to serialize member list to JSON")?;
        println!("{}", serialized);
    } else {
        println!("Members ({}):", infos.len());
        if infos.is_empty() {
            println!("  (none)");
            return Ok(());
        }
        for info in infos {
            println!("  - {} size={} sha256={}", info.name, info.size, info.fingerprint);
        }
    }

    Ok(())
}
