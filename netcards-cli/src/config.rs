//! CLI Configuration

use std::path::PathBuf;

/// File name used when exporting every contact.
const ALL_CONTACTS_FILE: &str = "all-contacts.vcf";

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory exported .vcf files are written to.
    pub output_dir: PathBuf,
}

impl CliConfig {
    /// Returns the export path for all contacts or for one event.
    pub fn export_path(&self, event: Option<&str>) -> PathBuf {
        self.output_dir.join(export_file_name(event))
    }
}

/// `all-contacts.vcf`, or the event name lowercased with every
/// non-alphanumeric character replaced by `_`.
pub fn export_file_name(event: Option<&str>) -> String {
    match event {
        None => ALL_CONTACTS_FILE.to_string(),
        Some(event) => {
            let slug: String = event
                .chars()
                .map(|c| {
                    if c.is_ascii_alphanumeric() {
                        c.to_ascii_lowercase()
                    } else {
                        '_'
                    }
                })
                .collect();
            format!("{}.vcf", slug)
        }
    }
}
