/// Render `(key, value)` rows as a two-column text table
pub fn render_table(key_header: &str, value_header: &str, rows: &[(String, String)]) -> String {
    let key_width = rows
        .iter()
        .map(|(k, _)| k.chars().count())
        .chain(std::iter::once(key_header.chars().count()))
        .max()
        .unwrap_or_default();
    let value_width = rows
        .iter()
        .map(|(_, v)| v.chars().count())
        .chain(std::iter::once(value_header.chars().count()))
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str(&row(key_header, key_width, value_header, value_width));
    out.push_str(&format!(
        "|-{}-|-{}-|\n",
        "-".repeat(key_width),
        "-".repeat(value_width)
    ));
    for (key, value) in rows {
        out.push_str(&row(key, key_width, value, value_width));
    }
    out
}

fn row(key: &str, key_width: usize, value: &str, value_width: usize) -> String {
    format!(
        "| {}{} | {}{} |\n",
        key,
        " ".repeat(key_width - key.chars().count()),
        value,
        " ".repeat(value_width - value.chars().count())
    )
}
