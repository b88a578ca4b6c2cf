/// Literal prefix a statement must start with (after leading whitespace) to
/// be removed. `console.error`, `console.warn` and spaced-out variants like
/// `console . log(` are deliberately not recognized.
const LOG_PREFIX: &str = "console.log(";

/// Remove all `console.log(...)` statements from `content`, handling calls
/// that span multiple lines by balancing parentheses.
///
/// Works on `split('\n')` segments so the file's trailing-newline shape is
/// preserved for untouched content. A call whose parentheses never balance
/// before end of file absorbs everything through EOF; intent for such
/// malformed input is unspecified, so the behavior is kept as-is rather than
/// guessed at.
///
/// Returns the rewritten content and the number of statements removed.
pub fn remove_console_logs(content: &str) -> (String, usize) {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut result: Vec<&str> = Vec::with_capacity(lines.len());
    let mut removed = 0usize;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if !line.trim_start().starts_with(LOG_PREFIX) {
            result.push(line);
            i += 1;
            continue;
        }

        removed += 1;

        // Balance parentheses starting on this line; the statement ends on
        // the line where the count returns to zero, and that whole span of
        // lines is dropped.
        let mut depth: i64 = 0;
        let mut opened = false;
        let mut closing_line = None;

        'scan: for (j, scan_line) in lines.iter().enumerate().skip(i) {
            for ch in scan_line.chars() {
                match ch {
                    '(' => {
                        depth += 1;
                        opened = true;
                    }
                    ')' => {
                        depth -= 1;
                        if opened && depth == 0 {
                            closing_line = Some(j);
                            break 'scan;
                        }
                    }
                    _ => {}
                }
            }
        }

        i = match closing_line {
            Some(end) => end + 1,
            // Unterminated call: the deletion runs through end of file
            None => lines.len(),
        };
    }

    (result.join("\n"), removed)
}
