use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Row delta of a pawn push. White starts at the bottom (row 7) and moves up.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    /// Row holding the rooks and king in the initial setup.
    pub fn home_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
    pub fn pawn_row(self) -> i8 {
        self.home_row() + self.forward()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Piece kinds in packed-code order; the discriminant is the 3-bit code stored in a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Empty = 0,
    Pawn = 1,
    Rook = 2,
    Knight = 3,
    Bishop = 4,
    King = 5,
    Queen = 6,
}

impl Piece {
    pub const ALL: [Piece; 7] = [
        Piece::Empty,
        Piece::Pawn,
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::King,
        Piece::Queen,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Piece {
        match code {
            0 => Piece::Empty,
            1 => Piece::Pawn,
            2 => Piece::Rook,
            3 => Piece::Knight,
            4 => Piece::Bishop,
            5 => Piece::King,
            6 => Piece::Queen,
            _ => panic!("invalid piece code {code}"),
        }
    }

    pub fn idx(self) -> usize {
        self as usize
    }
}

/// One-bit per-square flag. Pawns read it as "capturable en passant", rooks and
/// kings as "castling rights lost"; every other piece keeps `Default`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PieceStatus {
    #[default]
    Default,
    Flagged,
}

impl PieceStatus {
    pub const EN_PASSANT_ALLOWED: PieceStatus = PieceStatus::Flagged;
    pub const CASTLING_REVOKED: PieceStatus = PieceStatus::Flagged;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SquareContent {
    pub piece: Piece,
    pub status: PieceStatus,
    pub color: Color,
}

impl SquareContent {
    pub const EMPTY: SquareContent = SquareContent {
        piece: Piece::Empty,
        status: PieceStatus::Default,
        color: Color::White,
    };

    pub fn new(piece: Piece, status: PieceStatus, color: Color) -> Self {
        Self {
            piece,
            status,
            color,
        }
    }

    /// A piece with default status.
    pub fn piece(piece: Piece, color: Color) -> Self {
        Self::new(piece, PieceStatus::Default, color)
    }

    pub fn is_empty(self) -> bool {
        self.piece == Piece::Empty
    }

    pub fn is_enemy_of(self, color: Color) -> bool {
        !self.is_empty() && self.color != color
    }
}

/// Board coordinates; x is the column, y the row (row 0 is Black's home row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub fn in_board(self) -> bool {
        (0..8).contains(&self.x) && (0..8).contains(&self.y)
    }

    pub fn offset(self, mv: Move) -> Position {
        Position::new(self.x + mv.dx, self.y + mv.dy)
    }

    /// All 64 squares, row by row.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8i8).flat_map(|y| (0..8i8).map(move |x| Position::new(x, y)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Relative displacement from a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub dx: i8,
    pub dy: i8,
}

impl Move {
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FullMove {
    pub from: Position,
    pub step: Move,
}

impl FullMove {
    pub fn new(from: Position, step: Move) -> Self {
        Self { from, step }
    }

    pub fn to(self) -> Position {
        self.from.offset(self.step)
    }
}

impl fmt::Display for FullMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    pub const ALL: [Promotion; 4] = [
        Promotion::Queen,
        Promotion::Rook,
        Promotion::Bishop,
        Promotion::Knight,
    ];

    pub fn piece(self) -> Piece {
        match self {
            Promotion::Queen => Piece::Queen,
            Promotion::Rook => Piece::Rook,
            Promotion::Bishop => Piece::Bishop,
            Promotion::Knight => Piece::Knight,
        }
    }

    /// A promoted rook never castles.
    pub fn status(self) -> PieceStatus {
        match self {
            Promotion::Rook => PieceStatus::CASTLING_REVOKED,
            _ => PieceStatus::Default,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    /// Towards column 0.
    Queen,
    /// Towards column 7.
    King,
}

impl CastlingSide {
    pub const ALL: [CastlingSide; 2] = [CastlingSide::Queen, CastlingSide::King];

    pub fn direction(self) -> i8 {
        match self {
            CastlingSide::Queen => -1,
            CastlingSide::King => 1,
        }
    }

    pub fn rook_x(self) -> i8 {
        match self {
            CastlingSide::Queen => 0,
            CastlingSide::King => 7,
        }
    }
}
