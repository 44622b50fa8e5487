use crate::error::NestingWarning;
use crate::format::BlockFormatter;
use crate::token;

/// A reindented script file.
#[derive(Debug, Clone)]
pub struct Reindented {
    pub text: String,
    pub warnings: Vec<NestingWarning>,
}

impl Reindented {
    pub fn is_balanced(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Re-emit `source` with one tab of indentation per open brace.
///
/// Lines keep their content (trimmed); only leading whitespace changes. A
/// line starting with `}` is placed at the depth it closes to. Stray `}`
/// and `{` left open at the end are reported with their byte offsets in
/// `source`; the text is still produced.
pub fn reindent(source: &str, file_id: usize) -> Reindented {
    let body = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut offset = source.len() - body.len();

    let mut out = BlockFormatter::new();
    // Byte offsets of the `{` still open.
    let mut open: Vec<usize> = Vec::new();
    let mut warnings = Vec::new();

    for raw in body.split_inclusive('\n') {
        let line_start = offset;
        offset += raw.len();

        let line = raw.trim_end_matches(['\n', '\r']);
        let trimmed = line.trim();
        if trimmed.is_empty() {
            out.write_raw_line("");
            continue;
        }
        let content_start = line_start + (line.len() - line.trim_start().len());

        let code = token::strip_comment(trimmed);
        let leading_closes = code
            .chars()
            .take_while(|c| *c == '}' || c.is_whitespace())
            .filter(|c| *c == '}')
            .count();
        out.set_indent(open.len().saturating_sub(leading_closes));
        out.write_raw_line(trimmed);

        for (i, c) in code.char_indices() {
            match c {
                '{' => open.push(content_start + i),
                '}' => {
                    if open.pop().is_none() {
                        let at = content_start + i;
                        warnings.push(NestingWarning::new(
                            "closing brace without a matching block",
                            at..at + 1,
                            file_id,
                        ));
                    }
                }
                _ => {}
            }
        }
    }

    for at in open {
        warnings.push(NestingWarning::new("block is never closed", at..at + 1, file_id));
    }

    let mut text = out.render();
    if body.len() != source.len() {
        text.insert(0, '\u{feff}');
    }

    Reindented { text, warnings }
}
