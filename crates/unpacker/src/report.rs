//! Summary of the files left at the top of the output directory.

use crate::error::UnpackError;
use crate::flatten::immediate_children;
use crate::types::OutputFile;
use std::path::Path;

/// List top-level regular files in `dir` whose names end with `suffix`,
/// sorted by name.
pub fn collect_outputs(dir: &Path, suffix: &str) -> Result<Vec<OutputFile>, UnpackError> {
    let mut outputs = Vec::new();

    for entry in immediate_children(dir)? {
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(suffix) {
            continue;
        }

        let size_bytes = entry.metadata()?.len();
        outputs.push(OutputFile { name, size_bytes });
    }

    Ok(outputs)
}

/// Render the operator-facing summary table.
///
/// ```
/// use unpacker::report::render_summary;
/// use unpacker::OutputFile;
///
/// let files = vec![OutputFile { name: "visits.csv".into(), size_bytes: 1_300_000 }];
/// let text = render_summary("CSV", &files);
/// assert!(text.starts_with("Done. 1 CSV files extracted:\n"));
/// assert!(text.contains("visits.csv"));
/// assert!(text.ends_with("    1.3 MB\n"));
/// ```
pub fn render_summary(label: &str, outputs: &[OutputFile]) -> String {
    let mut text = format!("Done. {} {} files extracted:\n", outputs.len(), label);
    for file in outputs {
        text.push_str(&format!("  {:<30}  {:>7.1} MB\n", file.name, file.size_mb()));
    }
    text
}
