// Messaging - editor to session command passing

pub mod channels;
pub mod command;

pub use channels::{CommandConsumer, CommandProducer, create_command_channel};
pub use command::SessionCommand;
