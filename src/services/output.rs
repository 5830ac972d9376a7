use crate::domain::models::JsonOut;
use serde::Serialize;
use std::io::Write;

/// Either the `{ "ok": true, "data": ... }` envelope or the caller's text.
fn render<T: Serialize + ?Sized>(
    json: bool,
    data: &T,
    text: impl FnOnce(&T) -> String,
) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(&JsonOut { ok: true, data })?)
    } else {
        Ok(text(data))
    }
}

fn emit(rendered: String) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", rendered)?;
    Ok(())
}

/// Prints a list, one text row per element.
pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    emit(render(json, data, |items| {
        items.iter().map(&row).collect::<Vec<_>>().join("\n")
    })?)
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    emit(render(json, &data, row)?)
}
