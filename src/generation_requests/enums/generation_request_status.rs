#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationRequestStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

impl GenerationRequestStatus {
    pub fn value(&self) -> &str {
        match *self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Error => "error",
        }
    }

    pub fn is_valid(status: &str) -> bool {
        matches!(status, "pending" | "processing" | "completed" | "error")
    }
}
