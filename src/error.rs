use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Rectangle construction with `right < left` or `bottom < top`.
    #[error("invalid rectangle coordinates: right < left or bottom < top")]
    InvalidCoordinates,
}
