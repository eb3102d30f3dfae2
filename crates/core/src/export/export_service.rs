use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use log::{debug, error};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::export_errors::ExportError;
use super::export_model::ExportRecord;
use crate::accounts::Account;
use crate::constants::EXPORT_FIELD_SEPARATOR;
use crate::errors::Result;

/// Writes and reads the pipe-delimited account export.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Renders one `NUMBER|AMOUNT|CURRENCY` line per account, each newline terminated.
    pub fn render<'a, I>(&self, accounts: I) -> Result<String>
    where
        I: IntoIterator<Item = &'a Account>,
    {
        let mut writer = WriterBuilder::new()
            .delimiter(EXPORT_FIELD_SEPARATOR)
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        for account in accounts {
            writer
                .serialize(ExportRecord::from(account))
                .map_err(ExportError::from)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| {
            ExportError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)).into()
        })
    }

    /// Writes the rendered export to `path` in a single write.
    ///
    /// The file handle is closed on every exit path, including a failed write.
    pub fn write_accounts<'a, I>(&self, path: &Path, accounts: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Account>,
    {
        let content = self.render(accounts)?;
        let lines = content.lines().count();

        let written = File::create(path).and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.flush()
        });

        match written {
            Ok(()) => {
                debug!("Exported {} accounts to {}", lines, path.display());
                Ok(lines)
            }
            Err(e) => {
                error!("Failed to export accounts to {}: {}", path.display(), e);
                Err(ExportError::Io(e).into())
            }
        }
    }

    /// Reads an export file back into records.
    pub fn read_accounts(&self, path: &Path) -> Result<Vec<ExportRecord>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(EXPORT_FIELD_SEPARATOR)
            .has_headers(false)
            .from_path(path)
            .map_err(ExportError::from)?;

        let records = reader
            .deserialize::<ExportRecord>()
            .collect::<std::result::Result<Vec<_>, csv::Error>>()
            .map_err(ExportError::from)?;
        Ok(records)
    }
}
