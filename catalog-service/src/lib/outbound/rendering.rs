use std::fmt::Write;

use crate::domain::billing::errors::BillingError;
use crate::domain::billing::models::Alignment;
use crate::domain::billing::models::BillDocument;
use crate::domain::billing::models::DocumentBlock;
use crate::domain::billing::ports::DocumentRenderer;

const DEFAULT_WIDTH: usize = 64;

/// Renders bills as fixed-width UTF-8 text.
#[derive(Debug, Clone, Copy)]
pub struct PlainTextRenderer {
    width: usize,
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl PlainTextRenderer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    fn render_text(&self, document: &BillDocument) -> Result<String, std::fmt::Error> {
        let mut out = String::new();

        for block in document.blocks() {
            match block {
                DocumentBlock::Heading(text) => {
                    writeln!(out, "{}", self.align(text, Alignment::Center))?;
                    writeln!(out, "{}", "=".repeat(self.width))?;
                }
                DocumentBlock::Paragraph {
                    text, alignment, ..
                } => {
                    writeln!(out, "{}", self.align(text, *alignment))?;
                }
                DocumentBlock::Table { header, rows } => {
                    self.write_table(&mut out, header.as_ref(), rows)?
                }
                DocumentBlock::Spacer => writeln!(out)?,
            }
        }

        Ok(out)
    }

    fn write_table(
        &self,
        out: &mut String,
        header: Option<&Vec<String>>,
        rows: &[Vec<String>],
    ) -> std::fmt::Result {
        let columns = header
            .map(Vec::len)
            .into_iter()
            .chain(rows.iter().map(Vec::len))
            .max()
            .unwrap_or(0);
        let mut widths = vec![0; columns];
        for row in header.into_iter().chain(rows.iter()) {
            for (index, cell) in row.iter().enumerate() {
                widths[index] = widths[index].max(cell.chars().count());
            }
        }

        let format_row = |row: &Vec<String>| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let cell = row.get(index).map(String::as_str).unwrap_or("");
                    format!("{:<width$}", cell, width = *width)
                })
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        if let Some(header) = header {
            let line = format_row(header);
            writeln!(out, "{}", line)?;
            writeln!(out, "{}", "-".repeat(line.chars().count()))?;
        }
        for row in rows {
            writeln!(out, "{}", format_row(row))?;
        }

        Ok(())
    }

    fn align(&self, text: &str, alignment: Alignment) -> String {
        let length = text.chars().count();
        let padding = self.width.saturating_sub(length);

        match alignment {
            Alignment::Left => text.to_string(),
            Alignment::Center => format!("{}{}", " ".repeat(padding / 2), text),
            Alignment::Right => format!("{}{}", " ".repeat(padding), text),
        }
    }
}

impl DocumentRenderer for PlainTextRenderer {
    fn content_type(&self) -> &str {
        "text/plain; charset=utf-8"
    }

    fn extension(&self) -> &str {
        "txt"
    }

    fn render(&self, document: &BillDocument) -> Result<Vec<u8>, BillingError> {
        self.render_text(document)
            .map(String::into_bytes)
            .map_err(|e| BillingError::RenderingFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(document: &BillDocument) -> String {
        let bytes = PlainTextRenderer::new(20).render(document).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_alignment() {
        let document = BillDocument::new()
            .paragraph("left")
            .aligned("mid", Alignment::Center, false)
            .aligned("right", Alignment::Right, true);

        assert_eq!(render(&document), "left\n        mid\n               right\n");
    }

    #[test]
    fn test_heading_is_underlined() {
        let document = BillDocument::new().heading("RECEIPT").spacer();

        assert_eq!(
            render(&document),
            format!("      RECEIPT\n{}\n\n", "=".repeat(20))
        );
    }

    #[test]
    fn test_table_columns_are_padded() {
        let header = vec!["Item".to_string(), "Price".to_string()];
        let rows = vec![
            vec!["DVD".to_string(), "4.50 PLN".to_string()],
            vec!["Late fee".to_string(), "1.00 PLN".to_string()],
        ];
        let document = BillDocument::new().table(Some(header), rows);

        assert_eq!(
            render(&document),
            "Item     | Price\n\
             ----------------\n\
             DVD      | 4.50 PLN\n\
             Late fee | 1.00 PLN\n"
        );
    }

    #[test]
    fn test_metadata() {
        let renderer = PlainTextRenderer::default();
        assert_eq!(renderer.extension(), "txt");
        assert!(renderer.content_type().starts_with("text/plain"));
    }
}
