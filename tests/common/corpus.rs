//! CSV fixtures for integration tests
//!
//! Each corpus lives in its own temporary directory, removed on drop.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Header row in the import format's documented column order
pub const CSV_HEADER: &str =
    "name,status,picture,location,relationship_status,age,occupation,astrological_sign,friends";

/// A CSV file on disk plus the directory that owns it
pub struct CsvCorpus {
    dir: TempDir,
    path: PathBuf,
}

impl CsvCorpus {
    /// Write `rows` (without header) to `profiles.csv`
    pub fn with_rows(rows: &[&str]) -> Self {
        let mut text = String::from(CSV_HEADER);
        text.push('\n');
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        Self::with_text(&text)
    }

    /// Write raw CSV text to `profiles.csv`
    pub fn with_text(text: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("profiles.csv");
        std::fs::write(&path, text).expect("write csv fixture");
        Self { dir, path }
    }

    /// A small town: two friend circles joined by Dana, plus a loner
    ///
    /// ```text
    /// Alice - Bob - Carol
    ///   \      |
    ///    \-- Dana -- Eve - Frank
    /// Gus (no friends)
    /// ```
    pub fn small_town() -> Self {
        Self::with_rows(&[
            "Alice,Coffee first,alice.png,Porto,single,29,designer,Aries,Bob|Dana",
            "Bob,,bob.png,Porto,married,34,baker,Taurus,Carol|Dana",
            "Carol,On holiday,,Braga,single,41,librarian,Gemini,",
            "Dana,,,Porto,complicated,not-a-number,nurse,Cancer,Eve",
            "Eve,,,Faro,single,23,student,Leo,Frank|Mallory",
            "Frank,,,Faro,married,,fisher,Virgo,",
            "Gus,Hermit mode,,Évora,single,67,retired,Libra,",
        ])
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The temp directory, for export output
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
