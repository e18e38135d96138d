//! Row materialization

use tracing::debug;

use crate::model::{CellValue, Dataset};

use super::document::{Document, Element};

/// Fill every table of `dataset` with one row per table element instance.
///
/// `dataset` must have been inferred from this same `document`.
pub fn populate_tables(dataset: &mut Dataset, document: &Document, namespace: &str) {
    let root = document.root();

    for table in dataset.tables_mut() {
        let name = table.name.clone();
        let instances: Vec<&Element> = root.children_named(&name, namespace).collect();

        for instance in instances {
            let cells: Vec<CellValue> = table
                .columns
                .iter()
                .map(|column| {
                    instance
                        .child(&column.name, namespace)
                        .map(|element| CellValue::from_raw(document.inner_xml(element)))
                        .unwrap_or(CellValue::Null)
                })
                .collect();

            table.add_row(cells, instance.line);
        }

        debug!(table = %table.name, rows = table.row_count(), "populated table");
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::parser::{infer_schema, LoadOptions};

    fn load(xml: &str) -> Dataset {
        let options = LoadOptions::default();
        let doc = Document::parse(xml).unwrap();
        let mut ds = infer_schema(&doc, Path::new("test.xml"), &options).unwrap();
        populate_tables(&mut ds, &doc, &options.namespace);
        ds
    }

    #[test]
    fn test_rows_in_document_order_with_nulls() {
        let ds = load(
            r#"<root xmlns="http://tempuri.org">
<Item><id>1</id><name>Foo</name></Item>
<Item><id>2</id></Item>
<Item><id>2</id></Item>
</root>"#,
        );

        let item = ds.table("Item").unwrap();
        assert_eq!(item.row_count(), 3);
        assert_eq!(item.rows[0].cells, vec![CellValue::from("1"), CellValue::from("Foo")]);
        assert_eq!(item.rows[1].cells, vec![CellValue::from("2"), CellValue::Null]);
        assert_eq!(item.rows[1].cells, item.rows[2].cells);
        assert_eq!(item.rows.iter().map(|r| r.source_line).collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_values_are_raw_inner_content() {
        let ds = load(
            r#"<root xmlns="http://tempuri.org"><Item><name>Fish &amp; Chips</name><body><p>hi</p></body></Item></root>"#,
        );

        let item = ds.table("Item").unwrap();
        let row = &item.rows[0];
        assert_eq!(item.cell(row, "name").and_then(CellValue::as_str), Some("Fish &amp; Chips"));
        assert_eq!(item.cell(row, "body").and_then(CellValue::as_str), Some("<p>hi</p>"));
    }

    #[test]
    fn test_each_table_gets_its_own_rows() {
        let ds = load(
            r#"<root xmlns="http://tempuri.org">
<Item><id>1</id></Item>
<Order><no>7</no><qty>2</qty></Order>
<Item><id>2</id></Item>
</root>"#,
        );

        let item = ds.table("Item").unwrap();
        let order = ds.table("Order").unwrap();
        assert_eq!(item.rows.iter().map(|r| r.source_line).collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(order.row_count(), 1);
        assert_eq!(order.rows[0].cells, vec![CellValue::from("7"), CellValue::from("2")]);
        assert_eq!(ds.row_count(), 3);
    }

    #[test]
    fn test_first_matching_child_wins() {
        let ds = load(r#"<root xmlns="http://tempuri.org"><Item><id>1</id><id>9</id></Item></root>"#);

        let item = ds.table("Item").unwrap();
        assert_eq!(item.column_count(), 1);
        assert_eq!(item.rows[0].cells, vec![CellValue::from("1")]);
    }
}
