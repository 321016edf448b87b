pub(crate) struct ParseError {
    pub(crate) index: usize,
}

/// Splits on whitespace, keeping quoted runs (`"Tiger Woods"`) together.
pub(crate) fn parse_items(input: &str) -> Result<Vec<String>, ParseError> {
    for (index, ch) in input.char_indices() {
        if ch.is_control() {
            return Err(ParseError { index });
        }
    }

    let mut items = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut open_index = 0usize;
    for (index, ch) in input.char_indices() {
        if let Some(active) = quote {
            if ch == active {
                quote = None;
            } else {
                current.push(ch);
            }
            continue;
        }

        if ch == '"' || ch == '\'' {
            quote = Some(ch);
            open_index = index;
            continue;
        }

        if ch.is_whitespace() {
            if !current.is_empty() {
                items.push(std::mem::take(&mut current));
            }
            continue;
        }

        current.push(ch);
    }

    if quote.is_some() {
        return Err(ParseError { index: open_index });
    }
    if !current.is_empty() {
        items.push(current);
    }
    Ok(items)
}

pub(crate) fn format_parse_error(input: &str, index: usize) -> String {
    let caret_pos = input
        .char_indices()
        .take_while(|(byte_idx, _)| *byte_idx < index)
        .count();
    format!(
        "Invalid character at position {}:\n{}\n{}^",
        caret_pos + 1,
        input,
        " ".repeat(caret_pos)
    )
}

/// One-based position typed by the user to a zero-based index.
pub(crate) fn parse_position(token: Option<&str>, what: &str) -> Result<usize, String> {
    let token = token.ok_or_else(|| format!("missing {what} number"))?;
    match token.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("{what} must be a number starting at 1, got '{token}'")),
    }
}

/// `+`, `up`, `1`, `+1` raise par by one; `-`, `down`, `-1` lower it.
pub(crate) fn parse_delta(token: Option<&str>) -> Result<i32, String> {
    match token {
        Some("+" | "up" | "1" | "+1") => Ok(1),
        Some("-" | "down" | "-1") => Ok(-1),
        Some(other) => Err(format!("par change must be + or -, got '{other}'")),
        None => Err("missing par change (+ or -)".to_string()),
    }
}
