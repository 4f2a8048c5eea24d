use core::fmt::{Display, Write};

/// How the sorted line is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Values joined by single spaces.
    #[default]
    Spaced,
    /// Every value followed by a space, the classic `printf("%d ")` loop.
    Trailing,
}

/// Render `values` as one newline-terminated line.
pub fn render<T: Display>(values: &[T], style: OutputStyle) -> String {
    let mut line = String::new();
    for (i, value) in values.iter().enumerate() {
        if style == OutputStyle::Spaced && i > 0 {
            line.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(line, "{value}");
        if style == OutputStyle::Trailing {
            line.push(' ');
        }
    }
    line.push('\n');
    line
}
