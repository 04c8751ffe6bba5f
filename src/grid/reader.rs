/// A parsed sheet: rows of trimmed cell strings
pub type Grid = Vec<Vec<String>>;

/// Split one line into cells.
///
/// Commas inside a double-quoted span are literal. Quote characters only
/// toggle the quoted state and never reach the output, so `""` is not an
/// escaped quote. An unterminated quote swallows the rest of the line into
/// the current cell.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    cells.push(current.trim().to_string());

    cells
}

/// Parse raw delimited text into a grid.
///
/// Lines are split on `\n` only; a trailing `\r` is removed by the cell
/// trim. Every line yields at least one cell, so blank lines come back as
/// `[""]`.
pub fn parse_grid(raw: &str) -> Grid {
    let grid: Grid = raw.split('\n').map(parse_line).collect();
    log::debug!("Parsed {} grid lines", grid.len());
    grid
}

/// 1-based numbers of lines with an odd number of quote characters
pub fn unbalanced_quote_lines(raw: &str) -> Vec<usize> {
    raw.split('\n')
        .enumerate()
        .filter(|(_, line)| line.matches('"').count() % 2 == 1)
        .map(|(idx, _)| idx + 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_comma_is_literal() {
        assert_eq!(parse_line(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_cells_are_trimmed() {
        assert_eq!(parse_line("  a , b ,c  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quotes_are_stripped_not_escaped() {
        assert_eq!(parse_line(r#""say ""hi""",x"#), vec!["say hi", "x"]);
    }

    #[test]
    fn test_unterminated_quote_swallows_rest_of_line() {
        assert_eq!(parse_line(r#"a,"b,c,d"#), vec!["a", "b,c,d"]);
    }

    #[test]
    fn test_empty_line_yields_one_empty_cell() {
        assert_eq!(parse_line(""), vec![""]);
        assert_eq!(parse_line(",,"), vec!["", "", ""]);
    }

    #[test]
    fn test_parse_grid_keeps_blank_and_crlf_lines() {
        let grid = parse_grid("a,b\r\n\nc,\"1,000\"\n");
        assert_eq!(grid.len(), 4);
        assert_eq!(grid[0], vec!["a", "b"]);
        assert_eq!(grid[1], vec![""]);
        assert_eq!(grid[2], vec!["c", "1,000"]);
        assert_eq!(grid[3], vec![""]);
    }

    #[test]
    fn test_unbalanced_quote_lines() {
        let raw = "a,\"b\"\nc,\"d\ne\n\"f";
        assert_eq!(unbalanced_quote_lines(raw), vec![2, 4]);
        assert!(unbalanced_quote_lines("a,b\nc,d").is_empty());
    }
}
