use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_format(element: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidFormat {
                element: element.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn unsupported_type(type_name: impl Into<String>, column: usize, row: usize) -> Error {
        Error(
            ErrorKind::UnsupportedType {
                type_name: type_name.into(),
                column,
                row,
            }
            .into(),
        )
    }

    pub fn invalid_decimal_width(width: u8) -> Error {
        Error(ErrorKind::InvalidDecimalWidth { width }.into())
    }

    pub fn index_out_of_bounds(index: usize, len: usize) -> Error {
        Error(ErrorKind::IndexOutOfBounds { index, len }.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid native layout for '{element}': {message}")]
    InvalidFormat { element: String, message: String },

    #[error("unsupported column type '{type_name}' (column {column}, row {row})")]
    UnsupportedType {
        type_name: String,
        column: usize,
        row: usize,
    },

    #[error("decimal width {width} is outside the supported range [1, 38]")]
    InvalidDecimalWidth { width: u8 },

    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
