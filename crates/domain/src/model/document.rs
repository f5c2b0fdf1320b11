// crates/domain/src/model/document.rs
use std::fmt;

/// Line terminator style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// Terminator carried by `line`, if any.
    pub fn of(line: &str) -> Option<Self> {
        if line.ends_with("\r\n") {
            Some(Self::CrLf)
        } else if line.ends_with('\n') {
            Some(Self::Lf)
        } else {
            None
        }
    }
}

/// A text file held as an ordered list of lines.
///
/// Each line keeps its own terminator, so rendering a parsed document
/// reproduces the input byte for byte. Only the last line may lack one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    lines: Vec<String>,
}

impl TextDocument {
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(ToOwned::to_owned).collect(),
        }
    }

    pub fn render(&self) -> String {
        self.lines.concat()
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Index of the first line containing `needle`.
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.contains(needle))
    }

    /// Dominant terminator, taken from the first terminated line.
    pub fn line_ending(&self) -> LineEnding {
        self.lines
            .iter()
            .find_map(|line| LineEnding::of(line))
            .unwrap_or_default()
    }

    /// Swap the line at `index` for `line`, returning the previous content.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn replace_line(&mut self, index: usize, line: String) -> String {
        std::mem::replace(&mut self.lines[index], line)
    }

    /// Insert `line` before the line currently at `index`.
    ///
    /// When appending after a last line that has no terminator, that line is
    /// terminated first so the two do not merge.
    ///
    /// # Panics
    /// Panics if `index > line_count()`.
    pub fn insert_line(&mut self, index: usize, line: String) {
        if index == self.lines.len() {
            let ending = self.line_ending();
            if let Some(last) = self.lines.last_mut()
                && LineEnding::of(last).is_none()
            {
                last.push_str(ending.as_str());
            }
        }
        self.lines.insert(index, line);
    }
}

impl fmt::Display for TextDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}
