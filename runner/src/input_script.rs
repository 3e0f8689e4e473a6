use snake_engine::snake::Direction;

/// Parses a manual input script, one tick per character: `U`, `D`, `L`, `R`
/// (either case) or `.` for "no input". Whitespace is ignored.
pub fn parse_moves(script: &str) -> Result<Vec<Option<Direction>>, String> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .enumerate()
        .map(|(i, c)| match c.to_ascii_uppercase() {
            'U' => Ok(Some(Direction::Up)),
            'D' => Ok(Some(Direction::Down)),
            'L' => Ok(Some(Direction::Left)),
            'R' => Ok(Some(Direction::Right)),
            '.' => Ok(None),
            other => Err(format!("Unknown move '{}' at position {}", other, i)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        let moves = parse_moves("Ur. d L").unwrap();
        assert_eq!(
            moves,
            vec![
                Some(Direction::Up),
                Some(Direction::Right),
                None,
                Some(Direction::Down),
                Some(Direction::Left),
            ]
        );
    }

    #[test]
    fn test_parse_moves_rejects_unknown() {
        let err = parse_moves("UUX").unwrap_err();
        assert!(err.contains("'X'"));
    }

    #[test]
    fn test_empty_script() {
        assert!(parse_moves("").unwrap().is_empty());
    }
}
