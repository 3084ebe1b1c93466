use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// A 1-based line/column position within a schema file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct FilePosition {
    pub col: usize,
    pub file: PathBuf,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_offset<P: AsRef<Path>>(
        file: P,
        lines: &LineIndex,
        offset: usize,
    ) -> Self {
        let (line, col) = lines.line_col(offset);
        Self {
            col,
            file: file.as_ref().to_path_buf(),
            line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.col)
    }
}

/// Maps byte offsets within a source string to line/column positions.
///
/// Lines are split on `\n`, `\r\n` and a lone `\r`. Columns count chars, not
/// bytes.
#[derive(Debug)]
pub(crate) struct LineIndex<'src> {
    line_starts: Vec<usize>,
    source: &'src str,
}
impl<'src> LineIndex<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0];
        let mut idx = 0;
        while idx < bytes.len() {
            match bytes[idx] {
                b'\r' if bytes.get(idx + 1) == Some(&b'\n') => {
                    line_starts.push(idx + 2);
                    idx += 2;
                    continue;
                },
                b'\r' | b'\n' => line_starts.push(idx + 1),
                _ => (),
            }
            idx += 1;
        }
        Self {
            line_starts,
            source,
        }
    }

    pub(crate) fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.source.len());
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(line_idx) => line_idx,
            Err(next_line_idx) => next_line_idx - 1,
        };
        let line_start = self.line_starts[line_idx];
        let col = self.source
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.chars().count());
        (line_idx + 1, col + 1)
    }
}

/// Where a directive definition (or a directive usage) came from.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub enum SchemaDefLocation {
    GraphQLBuiltIn,
    Schema(FilePosition),
}
impl std::convert::From<FilePosition> for SchemaDefLocation {
    fn from(value: FilePosition) -> SchemaDefLocation {
        Self::Schema(value)
    }
}
impl std::fmt::Display for SchemaDefLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => f.write_str("<builtin>"),
            Self::Schema(pos) => std::fmt::Display::fmt(pos, f),
        }
    }
}
