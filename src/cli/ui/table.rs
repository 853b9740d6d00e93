use crate::cli::ui::style::UiStyle;

/// Declarative description of a table column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub width: usize,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
        }
    }
}

/// Simple table model used for read-only overviews.
#[derive(Debug, Clone)]
pub struct Table {
    pub title: Option<String>,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<T: Into<String>>(title: Option<T>, columns: Vec<TableColumn>) -> Self {
        Self {
            title: title.map(Into::into),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }
}

/// Renders [`Table`] instances as padded columns.
pub struct TableRenderer;

impl TableRenderer {
    pub fn render(table: &Table, style: &UiStyle) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(title) = &table.title {
            lines.push(style.header(title));
        }

        if !table.columns.is_empty() {
            let header = table
                .columns
                .iter()
                .map(|col| pad(&col.header, col.width))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(header.trim_end().to_string());
            let total = table.columns.iter().map(|col| col.width + 1).sum::<usize>();
            lines.push(style.horizontal.to_string().repeat(total.saturating_sub(1)));
        }

        for row in &table.rows {
            let line = table
                .columns
                .iter()
                .enumerate()
                .map(|(idx, col)| pad(row.get(idx).map(String::as_str).unwrap_or(""), col.width))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(line.trim_end().to_string());
        }
        lines
    }
}

/// Pads by character count so accented and Arabic labels line up.
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_padded_rows() {
        let mut table = Table::new(
            Some("Config"),
            vec![TableColumn::new("Key", 8), TableColumn::new("Value", 6)],
        );
        table.add_row(vec!["language", "fr"]);
        table.add_row(vec!["thème", "plain"]);

        let lines = TableRenderer::render(&table, &UiStyle::plain());
        assert_eq!(lines[0], "> Config");
        assert_eq!(lines[1], "Key      Value");
        assert_eq!(lines[3], "language fr");
        assert_eq!(lines[4], "thème    plain");
    }
}
