#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod resolver;

extern crate regex;

/// A location in a source file. `line` and `column` are 1-based, `offset` is a byte index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(offset: u32, line: u32, column: u32, file: Rc<String>) -> Self {
        Position {
            offset,
            line,
            column,
            file,
        }
    }

    pub fn null() -> Self {
        Position::new(0, 0, 0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // Position at EOF, points just past the last character
    let last = content.split_inclusive('\n').last().unwrap_or("");
    Some((line_number.max(2) - 1, last.to_string(), last.len()))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let content = std::fs::read_to_string("tests/test_file.txt").unwrap();

        let (line_number, line, line_pos) = super::get_line_at_position(&content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(&content, 34).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_caret_width_counts_characters() {
        // `é` is two bytes, the `@` sits at byte 9 and character 8
        let line = "  \"é\" + @;";
        let (_, removed_whitespace) = super::remove_starting_whitespace(line);

        assert_eq!(removed_whitespace, 2);
        assert_eq!(super::caret_width(line, 9, removed_whitespace), 7);
        assert_eq!(super::caret_width("let a = a;", 8, 0), 9);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position("abc", 10).is_none());

        let (line_number, line, line_pos) = super::get_line_at_position("let a;\n", 7).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "let a;\n");
        assert_eq!(line_pos, 7);
    }
}

pub fn display_error(error: &Error, source: &str) {
    /*
        Error: message
        -> main.lox
           |
        20 | let a = a;
           | --------^
    */

    let position = error.get_position();
    let file = Rc::clone(&position.file);

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}:{}:{}", file, position.line, position.column);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.offset) else {
        return;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_str, line_text_removed.trim_end());

    let arrows = caret_width(&line_text, line_pos, removed_whitespace);

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

/// Width of the `---^` marker under a line, in characters.
///
/// `line_pos` is a byte offset into `line_text`; columns are counted in characters.
fn caret_width(line_text: &str, line_pos: usize, removed_whitespace: usize) -> usize {
    let column = line_text
        .get(..line_pos)
        .map_or(line_pos, |prefix| prefix.chars().count());

    column.saturating_sub(removed_whitespace) + 1
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += c.len_utf8();
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
