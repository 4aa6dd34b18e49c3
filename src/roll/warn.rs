fn sanitize_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_sep = false;
    for ch in value.chars() {
        if ch.is_whitespace() {
            if !out.is_empty() && !prev_sep {
                out.push('_');
                prev_sep = true;
            }
        } else if !ch.is_control() {
            out.push(ch);
            prev_sep = false;
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "na".to_string()
    } else {
        trimmed.to_string()
    }
}

/// One structured line per skipped or failed file, so run logs stay
/// machine-greppable. Fatal errors go through the normal error path
/// instead.
pub fn emit(code: &str, stage: &str, file: &str, reason: &str) {
    eprintln!(
        "ROLL_WARN code={} stage={} file={} reason={}",
        sanitize_value(code),
        sanitize_value(stage),
        sanitize_value(file),
        sanitize_value(reason),
    );
}
