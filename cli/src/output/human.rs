//! Human-readable terminal renderer.

use molecule_common::{STATUS_HEADERS, StatusRecord};
use owo_colors::OwoColorize as _;

use crate::output::{OutputContext, Styles};

/// Layout of the `list` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ListFormat {
    /// Aligned columns under a header row.
    #[default]
    Simple,
    /// Aligned columns, no header, no colors.
    Plain,
}

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render instance status rows.
    pub fn render_status(&self, records: &[StatusRecord], format: ListFormat) {
        if self.ctx.quiet {
            return;
        }
        let text = match format {
            ListFormat::Simple => format_table(records, &self.ctx.styles),
            ListFormat::Plain => format_plain(records),
        };
        print!("{text}");
    }
}

fn column_widths(records: &[StatusRecord], with_headers: bool) -> [usize; 6] {
    let mut widths = [0; 6];
    if with_headers {
        for (w, h) in widths.iter_mut().zip(STATUS_HEADERS) {
            *w = h.len();
        }
    }
    for record in records {
        for (w, cell) in widths.iter_mut().zip(record.columns()) {
            *w = (*w).max(cell.chars().count());
        }
    }
    widths
}

/// Header row, a rule, then one row per record.
///
/// Cells are padded before styling so escape codes never skew alignment.
#[must_use]
pub fn format_table(records: &[StatusRecord], styles: &Styles) -> String {
    let widths = column_widths(records, true);
    let mut out = String::new();

    let header: Vec<String> = STATUS_HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{h:<w$}").style(styles.header).to_string())
        .collect();
    push_row(&mut out, &header);

    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    push_row(&mut out, &rule);

    for record in records {
        let [instance, driver, provisioner, scenario, _, _] = record.columns();
        let cells = vec![
            format!("{instance:<w$}", w = widths[0]).style(styles.bold).to_string(),
            format!("{driver:<w$}", w = widths[1]),
            format!("{provisioner:<w$}", w = widths[2]),
            format!("{scenario:<w$}", w = widths[3]),
            format!("{:<w$}", record.created.as_str(), w = widths[4])
                .style(styles.flag(record.created))
                .to_string(),
            format!("{:<w$}", record.converged.as_str(), w = widths[5])
                .style(styles.flag(record.converged))
                .to_string(),
        ];
        push_row(&mut out, &cells);
    }
    out
}

/// One unstyled row per record, no header.
#[must_use]
pub fn format_plain(records: &[StatusRecord]) -> String {
    let widths = column_widths(records, false);
    let mut out = String::new();
    for record in records {
        let cells: Vec<String> = record
            .columns()
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect();
        push_row(&mut out, &cells);
    }
    out
}

fn push_row(out: &mut String, cells: &[String]) {
    out.push_str(cells.join("  ").trim_end());
    out.push('\n');
}
