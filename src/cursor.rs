use std::str::FromStr;

use crate::error::EditError;
use crate::traits::TextOps;
use crate::types::{Cursor, Direction};

impl Cursor {
    /// The cursor after one step in `direction`.
    ///
    /// Vertical moves keep the column where the target line allows it and
    /// clamp otherwise. Horizontal moves wrap across line boundaries and
    /// stop at the document start and end. On empty text the result is
    /// always [`Cursor::ZERO`].
    pub fn moved<T: TextOps + ?Sized>(self, text: &T, direction: Direction) -> Cursor {
        let Some(last_line) = text.line_count().checked_sub(1) else {
            return Cursor::ZERO;
        };
        let Cursor { line, column } = text.clamp(self);

        match direction {
            Direction::Up => {
                let line = line.saturating_sub(1);
                Cursor::new(line, column.min(text.line_len(line)))
            }
            Direction::Down => {
                let line = (line + 1).min(last_line);
                Cursor::new(line, column.min(text.line_len(line)))
            }
            Direction::Left => {
                if column > 0 {
                    Cursor::new(line, column - 1)
                } else if line > 0 {
                    Cursor::new(line - 1, text.line_len(line - 1))
                } else {
                    Cursor::new(line, column)
                }
            }
            Direction::Right => {
                if column < text.line_len(line) {
                    Cursor::new(line, column + 1)
                } else if line < last_line {
                    Cursor::new(line + 1, 0)
                } else {
                    Cursor::new(line, column)
                }
            }
        }
    }
}

/// Single-key directions: `w` up, `s` down, `a` left, `d` right.
impl TryFrom<char> for Direction {
    type Error = EditError;

    fn try_from(key: char) -> Result<Self, Self::Error> {
        match key.to_ascii_lowercase() {
            'w' => Ok(Direction::Up),
            's' => Ok(Direction::Down),
            'a' => Ok(Direction::Left),
            'd' => Ok(Direction::Right),
            _ => Err(EditError::InvalidDirection(key.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(key), None) = (chars.next(), chars.next()) {
            return Direction::try_from(key);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(EditError::InvalidDirection(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keys() {
        assert_eq!(Direction::try_from('w'), Ok(Direction::Up));
        assert_eq!(Direction::try_from('S'), Ok(Direction::Down));
        assert_eq!(Direction::try_from('a'), Ok(Direction::Left));
        assert_eq!(Direction::try_from('d'), Ok(Direction::Right));
        assert_eq!(
            Direction::try_from('x'),
            Err(EditError::InvalidDirection("x".to_string()))
        );
    }

    #[test]
    fn parse_names() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!(" Down ".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("LEFT".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("d".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(EditError::InvalidDirection("sideways".to_string()))
        );
        assert!("".parse::<Direction>().is_err());
    }
}
