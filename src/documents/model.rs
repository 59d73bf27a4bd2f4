//! Structured document model shared by the contract and the income statement.
//!
//! Assemblers build these values; `render` turns them into markup. Keeping the
//! two apart lets clause selection be checked without parsing HTML.

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(String),
    /// Bulleted items, e.g. the resident list.
    Items(Vec<String>),
    /// Numbered sub-paragraphs (`§1º`, `§2º`, ...).
    Numbered(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub heading: String,
    pub blocks: Vec<Block>,
}

impl Clause {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            blocks: Vec::new(),
        }
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Paragraph(text.into()));
        self
    }

    pub fn items(mut self, items: Vec<String>) -> Self {
        self.blocks.push(Block::Items(items));
        self
    }

    pub fn numbered(mut self, items: Vec<String>) -> Self {
        self.blocks.push(Block::Numbered(items));
        self
    }
}

#[cfg(test)]
impl Clause {
    /// All text in the clause, one block or item per line.
    pub fn text(&self) -> String {
        let mut parts = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Paragraph(text) => parts.push(text.as_str()),
                Block::Items(items) | Block::Numbered(items) => {
                    parts.extend(items.iter().map(String::as_str))
                }
            }
        }
        parts.join("\n")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub caption: String,
    /// Empty for two-column label/value tables.
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Highlighted last row, e.g. totals.
    pub footer: Option<Vec<String>>,
}

impl SummaryTable {
    pub fn key_value(caption: impl Into<String>, rows: Vec<(&str, String)>) -> Self {
        Self {
            caption: caption.into(),
            columns: Vec::new(),
            rows: rows
                .into_iter()
                .map(|(label, value)| vec![label.to_string(), value])
                .collect(),
            footer: None,
        }
    }
}

#[cfg(test)]
impl SummaryTable {
    /// Value cell of the first row whose label matches.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .chain(self.footer.iter())
            .find(|row| row.first().is_some_and(|l| l == label))
            .and_then(|row| row.get(1))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub role: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub subtitle: Option<String>,
    pub tables: Vec<SummaryTable>,
    pub clauses: Vec<Clause>,
    /// Place and date line above the signatures.
    pub closing: Option<String>,
    pub signatures: Vec<Signature>,
}

#[cfg(test)]
impl Document {
    pub fn table(&self, caption: &str) -> Option<&SummaryTable> {
        self.tables.iter().find(|t| t.caption == caption)
    }

    pub fn clause_containing(&self, heading_fragment: &str) -> Option<&Clause> {
        self.clauses
            .iter()
            .find(|c| c.heading.contains(heading_fragment))
    }
}

/// A rendered document ready for one of the delivery modes.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentArtifact {
    pub title: String,
    /// Seed for download file names (tenant or beneficiary name).
    pub file_seed: String,
    pub html: String,
}
