use crate::error::{AbookError, Result};
use crate::model::Record;

/// Renders records one per line as `name: phone1, phone2`.
pub fn render_records<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn require_not_blank(values: &[&str], message: &str) -> Result<()> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(AbookError::InvalidArgument(message.to_string()));
    }
    Ok(())
}
