//! Supervisor wire protocol.
//!
//! Frames in both directions are `[0xA5][opcode][payload]` with a fixed
//! payload size per opcode. The link is half duplex: one command, one
//! answer, in strict alternation.

pub mod codec;
pub mod engine;
pub mod link;

pub use codec::{CommandFrame, FrameCodec, MAX_PAYLOAD};
pub use engine::ProtocolEngine;

/// Byte opening every frame in both directions.
pub const MAGIC: u8 = 0xA5;

/// Every command the supervisor can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    GetFirmwareVersion = 0,
    GetSensorsRawTemperatures = 1,
    GetSensorsCelsiusTemperatures = 2,
    GetMixingValvePosition = 3,
    SetNightMode = 4,
    GetDesiredRoomTemperatures = 5,
    SetDesiredRoomTemperatures = 6,
    GetTrimmersRawValues = 7,
    GetBoilerRunningMode = 8,
    SetBoilerRunningMode = 9,
    GetTargetStartWaterTemperature = 10,
    GetHeatingCurveParameters = 11,
    SetHeatingCurveParameters = 12,
}

impl Opcode {
    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::GetFirmwareVersion),
            1 => Some(Self::GetSensorsRawTemperatures),
            2 => Some(Self::GetSensorsCelsiusTemperatures),
            3 => Some(Self::GetMixingValvePosition),
            4 => Some(Self::SetNightMode),
            5 => Some(Self::GetDesiredRoomTemperatures),
            6 => Some(Self::SetDesiredRoomTemperatures),
            7 => Some(Self::GetTrimmersRawValues),
            8 => Some(Self::GetBoilerRunningMode),
            9 => Some(Self::SetBoilerRunningMode),
            10 => Some(Self::GetTargetStartWaterTemperature),
            11 => Some(Self::GetHeatingCurveParameters),
            12 => Some(Self::SetHeatingCurveParameters),
            _ => None,
        }
    }

    /// Command payload size the supervisor sends with this opcode.
    pub const fn request_len(self) -> usize {
        match self {
            Self::SetNightMode | Self::SetBoilerRunningMode => 1,
            Self::SetDesiredRoomTemperatures => 2,
            Self::SetHeatingCurveParameters => 4,
            _ => 0,
        }
    }

    /// Answer payload size the firmware replies with.
    pub const fn response_len(self) -> usize {
        match self {
            Self::GetFirmwareVersion
            | Self::GetMixingValvePosition
            | Self::GetBoilerRunningMode
            | Self::GetTargetStartWaterTemperature => 1,
            Self::GetSensorsCelsiusTemperatures | Self::GetDesiredRoomTemperatures => 2,
            Self::GetSensorsRawTemperatures
            | Self::GetTrimmersRawValues
            | Self::GetHeatingCurveParameters => 4,
            Self::SetNightMode
            | Self::SetDesiredRoomTemperatures
            | Self::SetBoilerRunningMode
            | Self::SetHeatingCurveParameters => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcode_codes_are_dense() {
        for raw in 0..=12u8 {
            let opcode = Opcode::from_u8(raw);
            assert!(opcode.is_some());
            assert_eq!(opcode.map(|o| o as u8), Some(raw));
        }
        assert_eq!(Opcode::from_u8(13), None);
        assert_eq!(Opcode::from_u8(0xFF), None);
    }

    #[test]
    fn payload_sizes_fit_the_codec_buffer() {
        for raw in 0..=12u8 {
            if let Some(opcode) = Opcode::from_u8(raw) {
                assert!(opcode.request_len() <= MAX_PAYLOAD);
                assert!(opcode.response_len() <= MAX_PAYLOAD);
            }
        }
    }
}
