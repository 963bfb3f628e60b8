use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// One uploaded file awaiting evaluation
#[derive(Clone, Debug)]
pub struct EvaluationRequest {
    request_id: Uuid,
    file_name: Option<String>,
    bytes: Arc<Vec<u8>>,
    received_at: DateTime<Utc>,
}

impl EvaluationRequest {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            file_name: None,
            bytes: Arc::new(bytes),
            received_at: Utc::now(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloning_request_shares_upload_buffer() {
        let r1 = EvaluationRequest::new(vec![1, 2, 3]).with_file_name("cat.png");
        let r2 = r1.clone();
        assert!(Arc::ptr_eq(&r1.bytes, &r2.bytes));
        assert_eq!(r1.request_id(), r2.request_id());
        assert_eq!(r2.file_name(), Some("cat.png"));
    }

    #[test]
    fn each_request_gets_its_own_id() {
        let a = EvaluationRequest::new(Vec::new());
        let b = EvaluationRequest::new(Vec::new());
        assert_ne!(a.request_id(), b.request_id());
    }
}
