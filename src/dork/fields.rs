//! Manual dork builder: six operator fields and the live preview.

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// One operator slot of the manual builder, in preview order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum DorkField {
    Site,
    Title,
    Url,
    Filetype,
    Text,
    Exclusion,
}

/// Whether a field's value is wrapped in double quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quoting {
    Bare,
    Phrase,
}

impl DorkField {
    /// Prefix written before the value (`site:`, `intitle:`, ..., `-`).
    pub const fn prefix(self) -> &'static str {
        match self {
            DorkField::Site => "site:",
            DorkField::Title => "intitle:",
            DorkField::Url => "inurl:",
            DorkField::Filetype => "filetype:",
            DorkField::Text => "intext:",
            DorkField::Exclusion => "-",
        }
    }

    const fn quoting(self) -> Quoting {
        match self {
            DorkField::Title | DorkField::Text => Quoting::Phrase,
            DorkField::Site | DorkField::Url | DorkField::Filetype | DorkField::Exclusion => {
                Quoting::Bare
            }
        }
    }

    /// Formats `value` as this field's query term.
    pub fn format(self, value: &str) -> String {
        match self.quoting() {
            Quoting::Bare => format!("{}{}", self.prefix(), value),
            Quoting::Phrase => format!("{}\"{}\"", self.prefix(), value),
        }
    }

    /// Operator as shown in the reference table.
    pub const fn reference_label(self) -> &'static str {
        match self {
            DorkField::Exclusion => "-term",
            other => other.prefix(),
        }
    }

    /// One-line description for the reference table.
    pub const fn description(self) -> &'static str {
        match self {
            DorkField::Site => "Restrict to specific site",
            DorkField::Title => "Search in page title",
            DorkField::Url => "Search in URL",
            DorkField::Filetype => "Specific file types",
            DorkField::Text => "Search in page content",
            DorkField::Exclusion => "Exclude term",
        }
    }
}

/// Values typed into the manual builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DorkFields {
    site: String,
    title: String,
    url: String,
    filetype: String,
    text: String,
    exclusion: String,
}

impl DorkFields {
    pub fn get(&self, field: DorkField) -> &str {
        match field {
            DorkField::Site => &self.site,
            DorkField::Title => &self.title,
            DorkField::Url => &self.url,
            DorkField::Filetype => &self.filetype,
            DorkField::Text => &self.text,
            DorkField::Exclusion => &self.exclusion,
        }
    }

    pub fn set(&mut self, field: DorkField, value: impl Into<String>) {
        let slot = match field {
            DorkField::Site => &mut self.site,
            DorkField::Title => &mut self.title,
            DorkField::Url => &mut self.url,
            DorkField::Filetype => &mut self.filetype,
            DorkField::Text => &mut self.text,
            DorkField::Exclusion => &mut self.exclusion,
        };
        *slot = value.into();
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: DorkField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Clears all six fields.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        DorkField::iter().all(|field| self.get(field).is_empty())
    }
}

/// Joins the non-empty fields, in [`DorkField`] order, into one query.
///
/// Values are used exactly as typed. Returns an empty string when every field
/// is empty.
pub fn compose_preview(fields: &DorkFields) -> String {
    DorkField::iter()
        .filter_map(|field| {
            let value = fields.get(field);
            (!value.is_empty()).then(|| field.format(value))
        })
        .collect::<Vec<_>>()
        .join(" ")
}
