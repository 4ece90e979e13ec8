const GREETING: &str = "How can I help you?";

pub fn run() -> String {
    GREETING.to_string()
}
