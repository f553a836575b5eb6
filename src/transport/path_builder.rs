/// Builds request paths with percent-encoded query strings.
pub struct PathBuilder {
    path: String,
    query_params: Vec<(String, String)>,
}

impl PathBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query_params: Vec::new(),
        }
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    pub fn build(&self) -> String {
        if self.query_params.is_empty() {
            return self.path.clone();
        }
        let query_string = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_params.iter())
            .finish();
        format!("{}?{}", self.path, query_string)
    }
}
