use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Convert side to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Side::A => Cell::A,
            Side::B => Cell::B,
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
        }
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" | "X" | "x" => Ok(Side::A),
            "B" | "b" | "O" | "o" => Ok(Side::B),
            other => Err(format!("unknown side '{other}' (expected A or B)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_side() {
        assert_eq!(Side::A.other(), Side::B);
        assert_eq!(Side::B.other(), Side::A);
    }

    #[test]
    fn test_side_cells_differ() {
        assert_eq!(Side::A.to_cell(), Cell::A);
        assert_eq!(Side::B.to_cell(), Cell::B);
        assert_ne!(Side::A.to_cell(), Side::B.to_cell());
    }

    #[test]
    fn test_side_parse() {
        assert_eq!("A".parse::<Side>(), Ok(Side::A));
        assert_eq!("o".parse::<Side>(), Ok(Side::B));
        assert!("C".parse::<Side>().is_err());
    }
}
