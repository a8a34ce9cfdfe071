/// Controls how a [`SchemaRegistry`](crate::SchemaRegistry) loads and resolves schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// When true, validating against an unregistered name returns
    /// `RegistryError::UnknownSchema`; when false it passes with no errors.
    pub fail_on_missing_schema: bool,
    /// Maximum number of schemas loaded from a directory.
    pub max_schemas_from_directory: usize,
    /// Maximum bytes allowed per description file loaded from a directory.
    pub max_schema_file_size: usize,
}

impl RegistryConfig {
    pub fn with_fail_on_missing_schema(mut self, fail: bool) -> Self {
        self.fail_on_missing_schema = fail;
        self
    }

    pub fn with_max_schemas(mut self, max: usize) -> Self {
        self.max_schemas_from_directory = max;
        self
    }

    pub fn with_max_file_size(mut self, bytes: usize) -> Self {
        self.max_schema_file_size = bytes;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            fail_on_missing_schema: true,
            max_schemas_from_directory: 256,
            max_schema_file_size: 256 * 1024,
        }
    }
}
