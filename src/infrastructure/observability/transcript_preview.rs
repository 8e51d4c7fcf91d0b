const MAX_VISIBLE_CHARS: usize = 100;
const MIN_MASKED_DIGITS: usize = 6;

/// Shortens a transcript for logging and masks long digit runs (card,
/// account or phone numbers read out on a call).
pub fn preview_transcript(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
    let masked = mask_digit_runs(&visible);

    if total_chars > MAX_VISIBLE_CHARS {
        format!("{}... ({} chars total)", masked, total_chars)
    } else {
        masked
    }
}

fn mask_digit_runs(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut run = String::new();

    let flush = |run: &mut String, out: &mut String| {
        if run.chars().count() >= MIN_MASKED_DIGITS {
            out.push_str("[REDACTED]");
        } else {
            out.push_str(run);
        }
        run.clear();
    };

    for c in text.chars() {
        if c.is_ascii_digit() {
            run.push(c);
        } else {
            flush(&mut run, &mut result);
            result.push(c);
        }
    }
    flush(&mut run, &mut result);

    result
}
