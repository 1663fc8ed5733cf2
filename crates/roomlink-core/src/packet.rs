//! Room data packet (opaque bytes plus delivery metadata).

use bytes::Bytes;

/// One unit of delivery from the room transport.
///
/// The payload is peer-controlled and of unbounded size; nothing here is
/// validated or retained beyond a single handler invocation.
#[derive(Debug, Clone)]
pub struct DataPacket {
    /// Identity of the publishing participant, when the transport knows it.
    pub participant: Option<String>,
    /// Optional application topic attached by the sender.
    pub topic: Option<String>,
    /// Opaque payload (zero-copy).
    pub data: Bytes,
}

impl DataPacket {
    /// Packet with payload only, no delivery metadata.
    pub fn new(data: Bytes) -> Self {
        Self {
            participant: None,
            topic: None,
            data,
        }
    }

    /// Packet from a borrowed byte slice (copies once).
    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(data))
    }

    pub fn with_participant(mut self, participant: impl Into<String>) -> Self {
        self.participant = Some(participant.into());
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Payload length in bytes (cheap pre-decode policy checks).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
