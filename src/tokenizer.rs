// Quote-aware splitting of a single CSV line.
//
// Works strictly on one physical line: a quoted field that continues on the
// next line is not joined back together.

/// Split `line` into its comma-separated fields.
///
/// - `"` toggles quoted mode; inside quotes a doubled `""` yields one literal `"`.
/// - `,` outside quotes ends the current field.
/// - The last field is always pushed, even when empty.
/// - An unterminated quote is tolerated: the rest of the line is field content.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_fields() {
        assert_eq!(split_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn keeps_commas_inside_quotes() {
        assert_eq!(split_line(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn unescapes_doubled_quotes() {
        assert_eq!(split_line(r#"a,"b""c",d"#), vec!["a", "b\"c", "d"]);
    }

    #[test]
    fn empty_line_is_one_empty_field() {
        assert_eq!(split_line(""), vec![""]);
    }

    #[test]
    fn trailing_comma_yields_empty_last_field() {
        assert_eq!(split_line("a,b,"), vec!["a", "b", ""]);
        assert_eq!(split_line(",,"), vec!["", "", ""]);
    }

    #[test]
    fn unterminated_quote_swallows_rest_of_line() {
        assert_eq!(split_line(r#"a,"b,c,d"#), vec!["a", "b,c,d"]);
    }

    #[test]
    fn doubled_quote_outside_quotes_toggles_twice() {
        // Not inside quotes, so `""` opens and closes an empty quoted run.
        assert_eq!(split_line(r#"a""b,c"#), vec!["ab", "c"]);
    }

    #[test]
    fn non_ascii_content_is_preserved() {
        assert_eq!(
            split_line("Año,\"Núñez, José\",ok"),
            vec!["Año", "Núñez, José", "ok"]
        );
    }
}
