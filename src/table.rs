use crate::dataset::Record;
use crate::options::capitalize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub title: String,
    pub key: String,
}

impl Column {
    pub fn new(title: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            key: key.into(),
        }
    }
}

pub fn sample_columns() -> Vec<Column> {
    vec![
        Column::new("Name", "name"),
        Column::new("Age", "age"),
        Column::new("Date", "date"),
        Column::new("Status", "status"),
    ]
}

/// One column per field of the first record, in its field order.
pub fn columns_for(records: &[Record]) -> Vec<Column> {
    records
        .first()
        .map(|first| {
            first
                .fields()
                .map(|field| Column::new(capitalize(field), field))
                .collect()
        })
        .unwrap_or_default()
}

/// Header plus one line per record, each column padded to its widest cell.
pub fn render(records: &[&Record], columns: &[Column]) -> Vec<String> {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|c| record.text(&c.key).unwrap_or_default())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(c.title.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = columns.iter().map(|c| c.title.clone()).collect();

    std::iter::once(header)
        .chain(rows)
        .map(|cells| format_row(&cells, &widths))
        .collect()
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::from_str;

    #[test]
    fn test_render_pads_columns() {
        let records: Vec<Record> =
            from_str("- {name: Grace Harris, age: 29}\n- {name: Liam, age: 30}").unwrap();
        let refs: Vec<&Record> = records.iter().collect();
        let columns = vec![Column::new("Name", "name"), Column::new("Age", "age")];

        let lines = render(&refs, &columns);
        assert_eq!(
            lines,
            vec!["Name          Age", "Grace Harris  29", "Liam          30"]
        );
    }

    #[test]
    fn test_missing_value_renders_empty() {
        let records: Vec<Record> = from_str("- {name: Ada}").unwrap();
        let refs: Vec<&Record> = records.iter().collect();
        let columns = vec![Column::new("Name", "name"), Column::new("Age", "age")];
        assert_eq!(render(&refs, &columns)[1], "Ada");
    }

    #[test]
    fn test_columns_for_first_record() {
        let records: Vec<Record> = from_str("- {name: Ada, joined: 2020-01-01}").unwrap();
        assert_eq!(
            columns_for(&records),
            vec![Column::new("Name", "name"), Column::new("Joined", "joined")]
        );
        assert!(columns_for(&[]).is_empty());
    }
}
