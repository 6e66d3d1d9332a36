#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DatasetError {
    #[error("dataset is empty")]
    Empty,
    #[error("missing column \"{0}\"")]
    MissingColumn(String),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
