#[cfg(test)]
pub mod fake_message_sender;
pub mod time_source;
