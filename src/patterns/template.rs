//! Template method as a fixed driver with a pluggable write step

use crate::core::ExportFormat;
use crate::patterns::repository::Post;
use anyhow::Result;
use csv::{Terminator, WriterBuilder};

/// Run the export sequence: open, `write`, close
///
/// Only the write step varies between exporters.
pub fn export<W>(write: W) -> Result<Vec<String>>
where
    W: FnOnce(&mut Vec<String>) -> Result<()>,
{
    let mut lines = vec!["Opening export".to_string()];
    write(&mut lines)?;
    lines.push("Closing export".to_string());
    Ok(lines)
}

/// Encode one CSV record, quoting fields that need it
fn csv_record(fields: &[&str]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(fields)?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;

    let mut record = String::from_utf8(bytes)?;
    if record.ends_with('\n') {
        record.pop();
    }
    Ok(record)
}

/// Write posts as CSV rows with a header
pub fn write_csv(posts: &[Post]) -> impl FnOnce(&mut Vec<String>) -> Result<()> + '_ {
    move |lines: &mut Vec<String>| {
        lines.push(csv_record(&["title", "author"])?);
        for post in posts {
            lines.push(csv_record(&[post.title.as_str(), post.author.as_str()])?);
        }
        Ok(())
    }
}

/// Write posts as one JSON object per line
pub fn write_json(posts: &[Post]) -> impl FnOnce(&mut Vec<String>) -> Result<()> + '_ {
    move |lines: &mut Vec<String>| {
        for post in posts {
            let object = serde_json::json!({
                "title": post.title,
                "author": post.author,
            });
            lines.push(object.to_string());
        }
        Ok(())
    }
}

/// Export posts in the requested format
pub fn export_posts(posts: &[Post], format: ExportFormat) -> Result<Vec<String>> {
    match format {
        ExportFormat::Csv => export(write_csv(posts)),
        ExportFormat::Json => export(write_json(posts)),
    }
}
