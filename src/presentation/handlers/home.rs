pub const WELCOME_MESSAGE: &str = "Welcome to the Flask Transcription Service!";

pub async fn home_handler() -> &'static str {
    WELCOME_MESSAGE
}
