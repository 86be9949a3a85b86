use serde::Serialize;

use crate::dom::ImageData;

/// Shown when the file size lookup fails; failures never propagate further.
pub const SIZE_PLACEHOLDER: &str = "-";

/// One row of the dialog's metadata table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaRow {
    pub label: String,
    pub value: String,
}

fn row(label: &str, value: &str) -> MetaRow {
    MetaRow {
        label: label.to_string(),
        value: value.to_string(),
    }
}

pub fn metadata_rows(data: &ImageData, size_text: &str) -> Vec<MetaRow> {
    let mut rows = vec![
        row("URL", &data.src),
        row("File size", size_text),
        row("Width", &format!("{}px", data.natural_width)),
        row("Height", &format!("{}px", data.natural_height)),
        row("Alt", &data.alt),
    ];
    for candidate in srcset_candidates(&data.srcset) {
        rows.push(row("srcset", &candidate));
    }
    rows
}

/// One entry per comma-separated srcset candidate, whitespace trimmed.
pub fn srcset_candidates(srcset: &str) -> Vec<String> {
    srcset
        .split(',')
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}
