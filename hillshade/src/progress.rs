use indicatif::{ProgressBar, ProgressStyle};

/// Returns a row progress bar, hidden unless `visible`.
pub fn bar(header: String, rows: u64, visible: bool) -> ProgressBar {
    let pb = if visible {
        ProgressBar::new(rows)
    } else {
        ProgressBar::hidden()
    };
    pb.set_prefix(header);
    pb.set_length(rows);
    pb.set_style(
        ProgressStyle::with_template("{prefix}...\n[{wide_bar:.cyan/blue}] {pos}/{len} rows")
            .expect("incorrect progress bar format string")
            .progress_chars("#>-"),
    );
    pb
}
