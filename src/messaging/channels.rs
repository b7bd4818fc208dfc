// Lock-free command channel between editor threads and the session loop

use ringbuf::{HeapRb, traits::Split};

use crate::messaging::command::SessionCommand;

pub type CommandProducer = ringbuf::HeapProd<SessionCommand>;
pub type CommandConsumer = ringbuf::HeapCons<SessionCommand>;

/// Create the SPSC command channel
///
/// The consumer side belongs to the single owner of the store and clock;
/// draining it in one place is the external serialization the core
/// assumes.
pub fn create_command_channel(capacity: usize) -> (CommandProducer, CommandConsumer) {
    let rb = HeapRb::<SessionCommand>::new(capacity);
    rb.split()
}
