use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Disk widths must strictly decrease from bottom to top")]
    UnorderedStack,
    #[error("Too many disks for the board layout")]
    TooManyDisks,
}

pub type Result<T> = core::result::Result<T, GameError>;
