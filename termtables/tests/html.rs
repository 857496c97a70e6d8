use termtables::{cells, Alignment, Cell, CellStyle, Defaults, OutputMode, Table};

fn html_table() -> Table {
    Table::with_defaults(&Defaults::new().mode(OutputMode::Html))
}

fn example_table(headers: bool, title: Option<&str>) -> Table {
    let mut table = html_table();
    if let Some(title) = title {
        table.add_title(title);
    }
    if headers {
        table.add_headers(["Name", "Value"]);
    }
    table.add_row(["hey", "you"]);
    table.add_row(cells!["ken", 1234]);
    table.add_row(cells!["derek", 3.14]);
    table.add_row(cells!["derek too", 3.1456788]);
    table
}

#[test]
fn test_create_table_html() {
    let expected = "<table>\n\
                    <tr><th>Name</th><th>Value</th></tr>\n\
                    <tr><td>hey</td><td>you</td></tr>\n\
                    <tr><td>ken</td><td>1234</td></tr>\n\
                    <tr><td>derek</td><td>3.14</td></tr>\n\
                    <tr><td>derek too</td><td>3.15</td></tr>\n\
                    </table>\n";

    assert_eq!(example_table(true, None).render(), expected);
}

#[test]
fn test_table_with_header_html() {
    let expected = "<table>\n\
                    <caption>Example</caption>\n\
                    <tr><th>Name</th><th>Value</th></tr>\n\
                    <tr><td>hey</td><td>you</td></tr>\n\
                    <tr><td>ken</td><td>1234</td></tr>\n\
                    <tr><td>derek</td><td>3.14</td></tr>\n\
                    <tr><td>derek too</td><td>3.15</td></tr>\n\
                    </table>\n";

    assert_eq!(example_table(true, Some("Example")).render(), expected);
}

#[test]
fn test_long_title_html() {
    let expected = "<table>\n\
                    <caption>Example My Foo Bar&#39;d Test</caption>\n\
                    <tr><th>Name</th><th>Value</th></tr>\n\
                    <tr><td>hey</td><td>you</td></tr>\n\
                    <tr><td>ken</td><td>1234</td></tr>\n\
                    <tr><td>derek</td><td>3.14</td></tr>\n\
                    <tr><td>derek too</td><td>3.15</td></tr>\n\
                    </table>\n";

    let table = example_table(true, Some("Example My Foo Bar'd Test"));
    assert_eq!(table.render(), expected);
}

#[test]
fn test_table_with_no_headers_html() {
    let expected = "<table>\n\
                    <tr><td>hey</td><td>you</td></tr>\n\
                    <tr><td>ken</td><td>1234</td></tr>\n\
                    <tr><td>derek</td><td>3.14</td></tr>\n\
                    <tr><td>derek too</td><td>3.15</td></tr>\n\
                    </table>\n";

    assert_eq!(example_table(false, None).render(), expected);
}

#[test]
fn test_table_unicode_widths_html() {
    let expected = "<table>\n\
                    <tr><th>Name</th><th>Cost</th></tr>\n\
                    <tr><td>Currency</td><td>¤10</td></tr>\n\
                    <tr><td>US Dollar</td><td>$30</td></tr>\n\
                    <tr><td>Euro</td><td>€27</td></tr>\n\
                    <tr><td>Thai</td><td>฿70</td></tr>\n\
                    </table>\n";

    let mut table = html_table();
    table.add_headers(["Name", "Cost"]);
    table.add_row(["Currency", "¤10"]);
    table.add_row(["US Dollar", "$30"]);
    table.add_row(["Euro", "€27"]);
    table.add_row(["Thai", "฿70"]);

    assert_eq!(table.render(), expected);
}

#[test]
fn test_cell_text_is_escaped() {
    let mut table = html_table();
    table.add_row(["it's", "ok"]);
    table.add_row(["x", "y"]);

    assert_eq!(
        table.render(),
        "<table>\n\
         <tr><td>it&#39;s</td><td>ok</td></tr>\n\
         <tr><td>x</td><td>y</td></tr>\n\
         </table>\n"
    );
}

#[test]
fn test_cell_text_is_trimmed() {
    let mut table = html_table();
    table.style_mut().alignment = Alignment::Center;
    table.add_row(["hey", "you"]);
    table.add_row(cells!["derek", 1234]);

    let output = table.render();
    assert!(output.contains("<tr><td>hey</td><td>you</td></tr>\n"), "{output}");
    assert!(output.contains("<tr><td>derek</td><td>1234</td></tr>\n"), "{output}");
}

#[test]
fn test_caption_is_trimmed_and_escaped() {
    let mut table = html_table();
    table.add_title("  <b>  ");

    assert_eq!(table.render(), "<table>\n<caption>&lt;b&gt;</caption>\n</table>\n");
}

#[test]
fn test_explicit_alignment_becomes_attribute() {
    let mut table = html_table();
    table.add_headers(["Name", "Value"]);
    table.add_row(["hey", "you"]);
    table.add_row(cells!["ken", 1234]);
    table.set_column_alignment(Alignment::Right, &[2]);

    assert_eq!(
        table.render(),
        "<table>\n\
         <tr><th>Name</th><th>Value</th></tr>\n\
         <tr><td>hey</td><td align='right'>you</td></tr>\n\
         <tr><td>ken</td><td align='right'>1234</td></tr>\n\
         </table>\n"
    );
}

#[test]
fn test_spanning_cell_gets_colspan() {
    let mut table = html_table();
    table.add_row([Cell::styled("wide", CellStyle::new().span(2))]);
    table.add_row(["ab", "cd"]);

    assert_eq!(
        table.render(),
        "<table>\n\
         <tr><td colspan='2'>wide</td></tr>\n\
         <tr><td>ab</td><td>cd</td></tr>\n\
         </table>\n"
    );
}

#[test]
fn test_separators_are_skipped() {
    let mut table = html_table();
    table.add_row(["a"]);
    table.add_separator();
    table.add_row(["b"]);

    assert_eq!(
        table.render(),
        "<table>\n<tr><td>a</td></tr>\n<tr><td>b</td></tr>\n</table>\n"
    );
}

#[test]
fn test_empty_table_html() {
    assert_eq!(html_table().render(), "<table>\n</table>\n");
}

#[test]
fn test_set_mode_html_after_construction() {
    let mut table = Table::with_defaults(&Defaults::new());
    table.add_row(["a"]);
    table.set_mode_html();

    assert_eq!(table.mode(), OutputMode::Html);
    assert!(table.render().starts_with("<table>\n"));
}
