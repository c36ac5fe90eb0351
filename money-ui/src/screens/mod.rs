pub mod file_upload;
pub mod initial;

pub use file_upload::FileUploadScreen;
pub use initial::InitialScreen;
