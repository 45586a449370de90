use thiserror::Error;

/// Errors that can occur while building color windows or parsing colors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The host has no drawing surface with the configured identifier.
    #[error("surface `{id}` does not exist")]
    MissingSurface {
        /// The identifier that was looked up.
        id: String,
    },
    /// The background and selector surfaces of one window differ in size.
    #[error("picker surface is {picker:?} but selector surface is {selector:?}")]
    SurfaceSizeMismatch {
        /// Width and height of the background surface.
        picker: (u32, u32),
        /// Width and height of the selector surface.
        selector: (u32, u32),
    },
    /// A surface without any pixels was requested.
    #[error("cannot create a {width}x{height} surface")]
    EmptySurface {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The input is not six hexadecimal digits.
    #[error("`{0}` is not a six digit hexadecimal color")]
    InvalidHex(String),
}

/// Result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
