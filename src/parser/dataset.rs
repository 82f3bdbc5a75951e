//! Parsed tabular data
//!
//! Pure data representation. No validation logic lives here.

/// Row number given to the first data row; the header is row 1.
pub const FIRST_DATA_ROW: usize = 2;

/// Rows of string fields, header first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// The header row, if the dataset has any rows at all
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    pub fn column_count(&self) -> usize {
        self.header().map_or(0, <[String]>::len)
    }

    /// Every row after the header
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Number of rows, header included
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Split into the header and the data rows.
    ///
    /// An empty dataset yields an empty header and no rows.
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>) {
        let mut rows = self.rows.into_iter();
        let header = rows.next().unwrap_or_default();
        (header, rows.collect())
    }
}

impl From<Vec<Vec<String>>> for Dataset {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows)
    }
}
