//! Publication model representing one row of the published feed.

use serde::{Deserialize, Serialize};

/// A field of a [`Publication`], used for header mapping and sort selection.
///
/// The feed publishes exactly six recognized columns. Anything else in the
/// header row is ignored at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationField {
    PublishedDate,
    Title,
    Authors,
    Journal,
    Organization,
    PdfUrl,
}

impl PublicationField {
    /// All fields in the column order the feed publishes them.
    pub const ALL: [PublicationField; 6] = [
        PublicationField::PublishedDate,
        PublicationField::Title,
        PublicationField::Authors,
        PublicationField::Journal,
        PublicationField::Organization,
        PublicationField::PdfUrl,
    ];

    /// Maps a CSV header cell to a field. The mapping is case-sensitive;
    /// unrecognized headers return `None` and their column is dropped.
    pub fn from_header(header: &str) -> Option<Self> {
        match header {
            "PublishedDate" => Some(PublicationField::PublishedDate),
            "Title" => Some(PublicationField::Title),
            "Authors" => Some(PublicationField::Authors),
            "Journal" => Some(PublicationField::Journal),
            "Organization" => Some(PublicationField::Organization),
            "PdfURL" => Some(PublicationField::PdfUrl),
            _ => None,
        }
    }

    /// Returns the CSV header name this field is populated from.
    pub fn header(&self) -> &'static str {
        match self {
            PublicationField::PublishedDate => "PublishedDate",
            PublicationField::Title => "Title",
            PublicationField::Authors => "Authors",
            PublicationField::Journal => "Journal",
            PublicationField::Organization => "Organization",
            PublicationField::PdfUrl => "PdfURL",
        }
    }

    /// Returns the human-readable column label.
    pub fn label(&self) -> &'static str {
        match self {
            PublicationField::PublishedDate => "Published Date",
            PublicationField::Title => "Title",
            PublicationField::Authors => "Authors",
            PublicationField::Journal => "Journal",
            PublicationField::Organization => "Organization",
            PublicationField::PdfUrl => "PDF URL",
        }
    }
}

impl std::fmt::Display for PublicationField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One parsed row of the publication feed.
///
/// All six fields are plain text, defaulted to empty strings so the shape is
/// fixed even when the source row only populated some columns. No date or
/// numeric coercion happens anywhere; values are compared and searched as
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Publication date as published (free text, not parsed)
    pub published_date: String,

    /// Paper title
    pub title: String,

    /// Authors as a single display string
    pub authors: String,

    /// Journal name
    pub journal: String,

    /// Publishing organization
    pub organization: String,

    /// Direct PDF URL
    pub pdf_url: String,
}

impl Publication {
    /// Returns the value stored for `field`.
    pub fn field(&self, field: PublicationField) -> &str {
        match field {
            PublicationField::PublishedDate => &self.published_date,
            PublicationField::Title => &self.title,
            PublicationField::Authors => &self.authors,
            PublicationField::Journal => &self.journal,
            PublicationField::Organization => &self.organization,
            PublicationField::PdfUrl => &self.pdf_url,
        }
    }

    /// Overwrites the value stored for `field`.
    pub fn set_field(&mut self, field: PublicationField, value: impl Into<String>) {
        let slot = match field {
            PublicationField::PublishedDate => &mut self.published_date,
            PublicationField::Title => &mut self.title,
            PublicationField::Authors => &mut self.authors,
            PublicationField::Journal => &mut self.journal,
            PublicationField::Organization => &mut self.organization,
            PublicationField::PdfUrl => &mut self.pdf_url,
        };
        *slot = value.into();
    }

    /// Iterates over all six field values in column order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        PublicationField::ALL.into_iter().map(move |f| self.field(f))
    }
}
