//! Static dork catalogue and the category-driven generator.

use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error_handling::InvalidSelectionError;

/// Token replaced by the target in every template.
pub const TARGET_TOKEN: &str = "{target}";

/// Catalogue categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, EnumString, IntoStaticStr)]
pub enum DorkCategory {
    #[strum(serialize = "Admin Panels")]
    AdminPanels,
    #[strum(serialize = "Open Directories")]
    OpenDirectories,
    #[strum(serialize = "Exposed Configs / Secrets")]
    ExposedConfigs,
    #[strum(serialize = "Backup Files")]
    BackupFiles,
    #[strum(serialize = "Leaked Credentials")]
    LeakedCredentials,
    #[strum(serialize = "PDF / Books / Research")]
    Documents,
    #[strum(serialize = "Logs & Error Pages")]
    LogsAndErrors,
}

/// Templates of one category.
#[derive(Debug)]
pub struct DorkTemplate {
    pub category: DorkCategory,
    pub templates: &'static [&'static str],
}

/// The catalogue, indexed by `DorkCategory as usize`.
pub static CATALOGUE: [DorkTemplate; 7] = [
    DorkTemplate {
        category: DorkCategory::AdminPanels,
        templates: &[
            "site:{target} inurl:admin",
            "site:{target} inurl:administrator",
            "site:{target} inurl:login",
            "site:{target} intitle:\"admin panel\"",
            "site:{target} intitle:\"administrator login\"",
            "site:{target} inurl:wp-admin",
            "site:{target} inurl:cpanel",
            "site:{target} inurl:phpmyadmin",
        ],
    },
    DorkTemplate {
        category: DorkCategory::OpenDirectories,
        templates: &[
            "site:{target} intitle:\"index of\"",
            "site:{target} intitle:\"directory listing\"",
            "site:{target} intitle:\"parent directory\"",
            "site:{target} \"index of /\" inurl:ftp",
            "site:{target} intitle:\"Apache/2.4.1\" \"Index of\"",
            "site:{target} intitle:\"listing generated\"",
        ],
    },
    DorkTemplate {
        category: DorkCategory::ExposedConfigs,
        templates: &[
            "site:{target} filetype:env",
            "site:{target} filetype:config",
            "site:{target} filetype:ini",
            "site:{target} filetype:log",
            "site:{target} intext:\"api_key\"",
            "site:{target} intext:\"password\" filetype:txt",
            "site:{target} filetype:sql",
            "site:{target} intext:\"database_password\"",
        ],
    },
    DorkTemplate {
        category: DorkCategory::BackupFiles,
        templates: &[
            "site:{target} filetype:bak",
            "site:{target} filetype:backup",
            "site:{target} filetype:old",
            "site:{target} filetype:orig",
            "site:{target} inurl:backup",
            "site:{target} intitle:\"backup\"",
            "site:{target} filetype:zip",
            "site:{target} filetype:tar.gz",
        ],
    },
    DorkTemplate {
        category: DorkCategory::LeakedCredentials,
        templates: &[
            "site:{target} intext:\"username\" intext:\"password\"",
            "site:{target} filetype:txt intext:\"password\"",
            "site:{target} intext:\"admin\" intext:\"password\"",
            "site:{target} filetype:log intext:\"login\"",
            "site:{target} intext:\"user\" intext:\"pass\"",
            "site:{target} filetype:csv intext:\"password\"",
        ],
    },
    DorkTemplate {
        category: DorkCategory::Documents,
        templates: &[
            "site:{target} filetype:pdf",
            "site:{target} filetype:doc",
            "site:{target} filetype:docx",
            "site:{target} filetype:ppt",
            "site:{target} filetype:xls",
            "site:{target} intitle:\"research\" filetype:pdf",
            "site:{target} intext:\"confidential\" filetype:pdf",
        ],
    },
    DorkTemplate {
        category: DorkCategory::LogsAndErrors,
        templates: &[
            "site:{target} filetype:log",
            "site:{target} intitle:\"error\"",
            "site:{target} intext:\"warning\"",
            "site:{target} intext:\"fatal error\"",
            "site:{target} intitle:\"404 not found\"",
            "site:{target} intext:\"stack trace\"",
            "site:{target} intext:\"mysql error\"",
        ],
    },
];

impl DorkCategory {
    /// Category display name, which is also its lookup key.
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn templates(self) -> &'static [&'static str] {
        CATALOGUE[self as usize].templates
    }
}

/// Category names in catalogue order.
pub fn categories() -> Vec<&'static str> {
    DorkCategory::iter().map(DorkCategory::name).collect()
}

/// Fills every template of `category` with the trimmed `target`.
///
/// # Errors
///
/// Returns `InvalidSelectionError::BlankTarget` if `target` is empty or
/// whitespace only.
pub fn generate(category: DorkCategory, target: &str) -> Result<Vec<String>, InvalidSelectionError> {
    let target = target.trim();
    if target.is_empty() {
        return Err(InvalidSelectionError::BlankTarget);
    }
    Ok(category
        .templates()
        .iter()
        .map(|template| template.replace(TARGET_TOKEN, target))
        .collect())
}

/// Looks up `category` by name and fills its templates with `target`.
///
/// # Errors
///
/// Returns `InvalidSelectionError::UnknownCategory` for a name that is not in
/// the catalogue, or `BlankTarget` for a blank target.
pub fn generate_from_category(
    category: &str,
    target: &str,
) -> Result<Vec<String>, InvalidSelectionError> {
    let category = DorkCategory::from_str(category)
        .map_err(|_| InvalidSelectionError::UnknownCategory(category.to_string()))?;
    generate(category, target)
}
