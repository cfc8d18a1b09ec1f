/// Result threaded through the pipeline stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response<T> {
    Continue(T),
    Cancel,
}

impl<T> Response<T> {
    pub fn into_data(self) -> Option<T> {
        match self {
            Response::Continue(data) => Some(data),
            Response::Cancel => None,
        }
    }
}
