mod health;
mod home;
mod upload;

pub use health::health_handler;
pub use home::{WELCOME_MESSAGE, home_handler};
pub use upload::{
    ClassificationResponse, ErrorResponse, UploadResponse, upload_handler,
    upload_without_file_handler,
};
