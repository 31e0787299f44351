/// Which side of a parenthesis pair is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    /// A `)` was found with no `(` before it.
    Unopened,
    /// A `(` was still open when the input ended.
    Unclosed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or postfix conversion.
pub enum ParseError {
    /// Found a character outside the accepted set.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// A digit run does not fit in a 64-bit integer.
    LiteralTooLarge {
        /// The digits as written.
        literal:  String,
        /// Byte offset of the first digit in the input.
        position: usize,
    },
    /// Parentheses are not paired.
    UnpairedBracket {
        /// Which half of the pair is missing.
        kind: BracketKind,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Error at {position}: Illegal symbol {character:?}.")
            },
            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Error at {position}: Literal {literal} is too large.")
            },
            Self::UnpairedBracket { kind: BracketKind::Unopened } => {
                write!(f, "Brackets must be paired: ')' has no matching '('.")
            },
            Self::UnpairedBracket { kind: BracketKind::Unclosed } => {
                write!(f, "Brackets must be paired: '(' is never closed.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
