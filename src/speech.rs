/// Result of a single speech recognition request, delivered exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionResult {
    /// Candidate transcriptions, most likely first.
    Recognized(Vec<String>),
    Cancelled,
}

impl RecognitionResult {
    pub fn best(&self) -> Option<&str> {
        match self {
            RecognitionResult::Recognized(alternatives) => {
                alternatives.first().map(String::as_str)
            }
            RecognitionResult::Cancelled => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::speech::RecognitionResult;

    #[test]
    fn best_is_first_alternative() {
        let result = RecognitionResult::Recognized(vec![
            "deposit 10".to_string(),
            "deposit 110".to_string(),
        ]);
        assert_eq!(Some("deposit 10"), result.best());
    }

    #[test]
    fn nothing_to_pick() {
        assert_eq!(None, RecognitionResult::Recognized(vec![]).best());
        assert_eq!(None, RecognitionResult::Cancelled.best());
    }
}
