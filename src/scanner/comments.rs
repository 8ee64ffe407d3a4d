/// Line-level comment suppression.
///
/// A line containing `//`, `/*` or `*/` anywhere is suppressed whole,
/// with no partial-line tokenization around the marker. The one-bool
/// state tracks whether the scan is currently between a `/*` line and
/// a `*/` line, so the interior lines of a block comment are
/// suppressed as well.
pub struct CommentFilter {
    in_block_comment: bool,
}

impl CommentFilter {
    pub fn new() -> CommentFilter {
        CommentFilter {
            in_block_comment: false,
        }
    }

    /// Returns true when the line must be skipped from tokenization.
    pub fn suppress(&mut self, line: &str) -> bool {
        let opens = line.contains("/*");
        let closes = line.contains("*/");

        if opens {
            self.in_block_comment = true;
        }
        if closes {
            self.in_block_comment = false;
        }

        if opens || closes || line.contains("//") {
            return true;
        }

        self.in_block_comment
    }
}

impl Default for CommentFilter {
    fn default() -> Self {
        CommentFilter::new()
    }
}
