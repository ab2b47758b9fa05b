use mufasa_model::{Failure, FailureKind};

/// A preset reply for one provider call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PresetReply {
    /// The call succeeds with this text.
    Text(String),
    /// The call fails.
    Failure(Failure),
}

impl PresetReply {
    /// Creates a successful reply.
    #[inline]
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::Text(text.into())
    }

    /// Creates a failed reply.
    #[inline]
    pub fn failure<S: Into<String>>(kind: FailureKind, reason: S) -> Self {
        Self::Failure(Failure::new(kind, reason))
    }

    #[inline]
    pub(crate) fn into_result(self) -> Result<String, Failure> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Failure(failure) => Err(failure),
        }
    }
}

impl From<&str> for PresetReply {
    #[inline]
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for PresetReply {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_result() {
        assert_eq!(PresetReply::from("Hi").into_result(), Ok("Hi".to_owned()));
        let failure = PresetReply::failure(FailureKind::Timeout, "slow")
            .into_result()
            .unwrap_err();
        assert_eq!(failure.kind(), FailureKind::Timeout);
    }
}
