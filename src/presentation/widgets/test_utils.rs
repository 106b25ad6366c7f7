//! Buffer inspection helpers for widget tests.

use ratatui::buffer::Buffer;

/// Row text plus the byte offset at which each column starts.
fn row_text(buf: &Buffer, y: u16) -> (String, Vec<usize>) {
    let area = buf.area;
    let mut text = String::new();
    let mut offsets = Vec::with_capacity(usize::from(area.width));
    for x in area.left()..area.right() {
        offsets.push(text.len());
        text.push_str(buf[(x, y)].symbol());
    }
    (text, offsets)
}

pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| row_text(buf, y).0)
        .collect()
}

/// Column of the first occurrence of `needle` in row `y`.
pub fn find_text_in_row(buf: &Buffer, y: u16, needle: &str) -> Option<u16> {
    let (text, offsets) = row_text(buf, y);
    let byte = text.find(needle)?;
    let column = offsets.iter().position(|&offset| offset == byte)?;
    u16::try_from(column).ok().map(|c| buf.area.x + c)
}

/// Cell coordinates of the first occurrence of `needle`, scanning top to bottom.
pub fn find_text(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
    let area = buf.area;
    (area.top()..area.bottom())
        .find_map(|y| find_text_in_row(buf, y, needle).map(|x| (x, y)))
}
