use {std::any::type_name, thiserror::Error};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("failed to parse string `{value}` into {ty}: {reason}")]
    ParseNumber {
        ty: &'static str,
        value: String,
        reason: String,
    },

    #[error("addition overflow: {a} + {b} is out of range for {ty}")]
    OverflowAdd {
        ty: &'static str,
        a: String,
        b: String,
    },
}

impl MathError {
    pub fn parse_number<T, V, R>(value: V, reason: R) -> Self
    where
        V: ToString,
        R: ToString,
    {
        Self::ParseNumber {
            ty: type_name::<T>(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn overflow_add<T: ToString>(a: T, b: T) -> Self {
        Self::OverflowAdd {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }
}

pub type MathResult<T> = core::result::Result<T, MathError>;

// ----------------------------------- tests -----------------------------------
