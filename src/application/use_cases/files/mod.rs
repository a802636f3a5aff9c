//! File Use Cases

mod manage_files;

pub use manage_files::{RemoveFileUseCase, UploadFileUseCase};
