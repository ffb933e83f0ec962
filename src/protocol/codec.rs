//! Half-duplex frame state machine.
//!
//! One state machine covers both directions because the link never
//! carries a command and an answer at the same time. Receive bytes feed
//! in one at a time; once a command is complete the dispatcher loads the
//! answer and the machine turns around to emit it byte by byte.
//!
//! Recovery is byte-oriented: an unknown opcode drops the machine back to
//! waiting for the next magic byte, so noise on the line costs at most
//! one frame.

use heapless::Vec;

use super::{Opcode, MAGIC};

/// Largest payload in either direction.
pub const MAX_PAYLOAD: usize = 4;

/// A fully received command, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFrame {
    pub opcode: Opcode,
    pub payload: Vec<u8, MAX_PAYLOAD>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodecState {
    AwaitMagic,
    AwaitOpcode,
    AwaitPayload { opcode: Opcode, expected: usize },
    SendMagic,
    SendOpcode,
    SendPayload { index: usize },
}

pub struct FrameCodec {
    state: CodecState,
    rx_payload: Vec<u8, MAX_PAYLOAD>,
    tx_opcode: Opcode,
    tx_payload: Vec<u8, MAX_PAYLOAD>,
}

impl FrameCodec {
    pub fn new() -> Self {
        Self {
            state: CodecState::AwaitMagic,
            rx_payload: Vec::new(),
            tx_opcode: Opcode::GetFirmwareVersion,
            tx_payload: Vec::new(),
        }
    }

    /// True while an answer is still being emitted.
    pub fn is_transmitting(&self) -> bool {
        matches!(
            self.state,
            CodecState::SendMagic | CodecState::SendOpcode | CodecState::SendPayload { .. }
        )
    }

    /// Feed one received byte. Returns a complete command when this byte
    /// finishes one. Bytes arriving while an answer is being transmitted
    /// are discarded, the link is half duplex.
    pub fn feed(&mut self, byte: u8) -> Option<CommandFrame> {
        match self.state {
            CodecState::AwaitMagic => {
                if byte == MAGIC {
                    self.state = CodecState::AwaitOpcode;
                }
                None
            }
            CodecState::AwaitOpcode => match Opcode::from_u8(byte) {
                Some(opcode) => {
                    let expected = opcode.request_len();
                    if expected == 0 {
                        self.state = CodecState::AwaitMagic;
                        return Some(CommandFrame {
                            opcode,
                            payload: Vec::new(),
                        });
                    }
                    self.rx_payload.clear();
                    self.state = CodecState::AwaitPayload { opcode, expected };
                    None
                }
                None => {
                    // Unknown opcode: resynchronise on the next magic byte.
                    self.state = CodecState::AwaitMagic;
                    None
                }
            },
            CodecState::AwaitPayload { opcode, expected } => {
                // Cannot overflow: expected <= MAX_PAYLOAD by construction.
                let _ = self.rx_payload.push(byte);
                if self.rx_payload.len() == expected {
                    self.state = CodecState::AwaitMagic;
                    let payload = core::mem::take(&mut self.rx_payload);
                    return Some(CommandFrame { opcode, payload });
                }
                None
            }
            // Half duplex: ignore anything received while answering.
            _ => None,
        }
    }

    /// Load an answer and turn the machine around to transmit it.
    pub fn start_response(&mut self, opcode: Opcode, payload: &[u8]) {
        self.tx_opcode = opcode;
        self.tx_payload.clear();
        // Cannot overflow: every response_len() fits MAX_PAYLOAD.
        let _ = self.tx_payload.extend_from_slice(payload);
        self.state = CodecState::SendMagic;
    }

    /// Next byte of the in-progress answer, `None` once it is drained.
    pub fn next_tx_byte(&mut self) -> Option<u8> {
        match self.state {
            CodecState::SendMagic => {
                self.state = CodecState::SendOpcode;
                Some(MAGIC)
            }
            CodecState::SendOpcode => {
                self.state = CodecState::SendPayload { index: 0 };
                Some(self.tx_opcode as u8)
            }
            CodecState::SendPayload { index } => {
                if index < self.tx_payload.len() {
                    self.state = CodecState::SendPayload { index: index + 1 };
                    Some(self.tx_payload[index])
                } else {
                    self.state = CodecState::AwaitMagic;
                    None
                }
            }
            _ => None,
        }
    }
}

impl Default for FrameCodec {
    fn default() -> Self {
        Self::new()
    }
}
