//! Editable text buffer with a character-indexed cursor.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    content: String,
    /// Cursor position in chars, not bytes.
    cursor: usize,
    max_chars: Option<usize>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_chars(max_chars: usize) -> Self {
        Self {
            max_chars: Some(max_chars),
            ..Self::default()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Replaces the content and parks the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = text.into();
        self.cursor = char_count(&self.content);
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        if self
            .max_chars
            .is_some_and(|max| char_count(&self.content) >= max)
        {
            return false;
        }
        let byte_idx = char_to_byte_index(&self.content, self.cursor);
        self.content.insert(byte_idx, c);
        self.cursor += 1;
        true
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            if !self.insert_char(c) {
                break;
            }
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = char_to_byte_index(&self.content, self.cursor);
            self.content.remove(byte_idx);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < char_count(&self.content) {
            let byte_idx = char_to_byte_index(&self.content, self.cursor);
            self.content.remove(byte_idx);
        }
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        let lines = line_spans(&self.content);
        let total_chars = char_count(&self.content);
        let (line, col) = self.line_col_in(&lines);

        self.cursor = match movement {
            CursorMove::Left => self.cursor.saturating_sub(1),
            CursorMove::Right => (self.cursor + 1).min(total_chars),
            CursorMove::Home => lines.get(line).map_or(0, |(start, _)| *start),
            CursorMove::End => lines
                .get(line)
                .map_or(total_chars, |(start, len)| start + len),
            CursorMove::Up => {
                if line == 0 {
                    self.cursor
                } else {
                    let (prev_start, prev_len) = lines[line - 1];
                    prev_start + col.min(prev_len)
                }
            }
            CursorMove::Down => match lines.get(line + 1) {
                Some((next_start, next_len)) => next_start + col.min(*next_len),
                None => self.cursor,
            },
        };
    }

    /// (line index, display column) of the cursor, for terminal placement.
    pub fn cursor_position(&self) -> (usize, usize) {
        let lines = line_spans(&self.content);
        let (line, col) = self.line_col_in(&lines);
        let line_text = self.content.split('\n').nth(line).unwrap_or("");
        let prefix: String = line_text.chars().take(col).collect();
        (line, prefix.width())
    }

    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    fn line_col_in(&self, lines: &[(usize, usize)]) -> (usize, usize) {
        lines
            .iter()
            .enumerate()
            .find(|(_, (start, len))| self.cursor >= *start && self.cursor <= start + len)
            .map_or((0, self.cursor), |(i, (start, _))| (i, self.cursor - start))
    }
}

/// (start char index, char length) of each `\n`-separated line.
fn line_spans(content: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    for line in content.split('\n') {
        let len = line.chars().count();
        spans.push((start, len));
        start += len + 1;
    }
    spans
}

pub fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(byte_idx, _)| byte_idx)
}

pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn field(text: &str, cursor: usize) -> TextField {
        let mut field = TextField::new();
        field.set_text(text);
        field.cursor = cursor;
        field
    }

    mod editing {
        use super::*;

        #[test]
        fn insert_at_cursor() {
            let mut f = field("ac", 1);

            f.insert_char('b');

            assert_eq!(f.as_str(), "abc");
            assert_eq!(f.cursor(), 2);
        }

        #[test]
        fn insert_handles_multibyte() {
            let mut f = field("ねこ", 1);

            f.insert_char('x');

            assert_eq!(f.as_str(), "ねxこ");
        }

        #[test]
        fn backspace_at_start_is_noop() {
            let mut f = field("abc", 0);

            f.backspace();

            assert_eq!(f.as_str(), "abc");
            assert_eq!(f.cursor(), 0);
        }

        #[test]
        fn delete_at_end_is_noop() {
            let mut f = field("abc", 3);

            f.delete();

            assert_eq!(f.as_str(), "abc");
        }

        #[test]
        fn max_chars_rejects_overflow() {
            let mut f = TextField::with_max_chars(3);

            f.insert_str("12345");

            assert_eq!(f.as_str(), "123");
        }

        #[test]
        fn set_text_moves_cursor_to_end() {
            let mut f = TextField::new();

            f.set_text("a\nbc");

            assert_eq!(f.cursor(), 4);
        }
    }

    mod move_cursor {
        use super::*;

        #[rstest]
        #[case(CursorMove::Left, 3, 2)]
        #[case(CursorMove::Left, 0, 0)]
        #[case(CursorMove::Right, 3, 4)]
        #[case(CursorMove::Right, 7, 7)]
        #[case(CursorMove::Home, 5, 4)]
        #[case(CursorMove::End, 4, 7)]
        #[case(CursorMove::Up, 6, 2)]
        #[case(CursorMove::Up, 1, 1)]
        #[case(CursorMove::Down, 1, 5)]
        #[case(CursorMove::Down, 5, 5)]
        fn moves_within_lines(
            #[case] movement: CursorMove,
            #[case] from: usize,
            #[case] expected: usize,
        ) {
            // "abc" spans 0..=3, "def" spans 4..=7
            let mut f = field("abc\ndef", from);

            f.move_cursor(movement);

            assert_eq!(f.cursor(), expected);
        }

        #[test]
        fn up_clamps_to_shorter_line() {
            let mut f = field("a\nlonger", 6);

            f.move_cursor(CursorMove::Up);

            assert_eq!(f.cursor(), 1);
        }
    }

    mod cursor_position {
        use super::*;

        #[test]
        fn reports_line_and_column() {
            let f = field("abc\nde", 6);

            assert_eq!(f.cursor_position(), (1, 2));
        }

        #[test]
        fn wide_chars_count_double() {
            let f = field("ねこ", 2);

            assert_eq!(f.cursor_position(), (0, 4));
        }
    }
}
