//! Command dispatch: executes complete frames against the controller and
//! queues the answer.

use log::{debug, warn};

use crate::app::ports::{LinkPort, StoragePort};
use crate::app::BoilerService;
use crate::config::FIRMWARE_VERSION;
use crate::control::HeatingCurve;
use crate::sampler::ChannelId;
use crate::sensors::SensorId;

use super::codec::{CommandFrame, FrameCodec, MAX_PAYLOAD};
use super::Opcode;

pub struct ProtocolEngine {
    codec: FrameCodec,
}

impl ProtocolEngine {
    pub fn new() -> Self {
        Self {
            codec: FrameCodec::new(),
        }
    }

    /// Feed one received byte. When the byte completes a command it is
    /// executed immediately and its answer queued for transmission.
    pub fn feed_byte(
        &mut self,
        byte: u8,
        service: &mut BoilerService,
        store: &mut impl StoragePort,
    ) {
        if let Some(frame) = self.codec.feed(byte) {
            self.execute(frame, service, store);
        }
    }

    /// Push any queued answer bytes onto the link.
    pub fn transmit_pending(&mut self, link: &mut impl LinkPort) {
        while let Some(byte) = self.codec.next_tx_byte() {
            link.write_byte(byte);
        }
    }

    fn execute(
        &mut self,
        frame: CommandFrame,
        service: &mut BoilerService,
        store: &mut impl StoragePort,
    ) {
        debug!("protocol: executing {:?}", frame.opcode);
        let mut response = [0u8; MAX_PAYLOAD];
        let len = match frame.opcode {
            Opcode::GetFirmwareVersion => {
                response[0] = FIRMWARE_VERSION;
                1
            }
            Opcode::GetSensorsRawTemperatures => {
                let outside = service.sampler().value(ChannelId::OutsideThermistor);
                let start = service.sampler().value(ChannelId::RadiatorStartThermistor);
                response[..2].copy_from_slice(&outside.to_le_bytes());
                response[2..4].copy_from_slice(&start.to_le_bytes());
                4
            }
            Opcode::GetSensorsCelsiusTemperatures => {
                response[0] = service.temperature(SensorId::Outside) as u8;
                response[1] = service.temperature(SensorId::RadiatorStart) as u8;
                2
            }
            Opcode::GetMixingValvePosition => {
                response[0] = service.valve().position() as u8;
                1
            }
            Opcode::SetNightMode => {
                service.shared().set_night_mode(frame.payload[0] != 0);
                0
            }
            Opcode::GetDesiredRoomTemperatures => {
                response[0] = service.shared().day_temperature() as u8;
                response[1] = service.shared().night_temperature() as u8;
                2
            }
            Opcode::SetDesiredRoomTemperatures => {
                service.shared().set_day_temperature(frame.payload[0] as i8);
                service.shared().set_night_temperature(frame.payload[1] as i8);
                0
            }
            Opcode::GetTrimmersRawValues => {
                let day = service.sampler().value(ChannelId::DayTrimmer);
                let night = service.sampler().value(ChannelId::NightTrimmer);
                response[..2].copy_from_slice(&day.to_le_bytes());
                response[2..4].copy_from_slice(&night.to_le_bytes());
                4
            }
            Opcode::GetBoilerRunningMode => {
                response[0] = service.shared().is_running() as u8;
                1
            }
            Opcode::SetBoilerRunningMode => {
                let running = frame.payload[0] != 0;
                if !running {
                    warn!("protocol: supervisor stopped the boiler");
                }
                service.shared().set_running(running);
                0
            }
            Opcode::GetTargetStartWaterTemperature => {
                response[0] = service.shared().target_water_temperature() as u8;
                1
            }
            Opcode::GetHeatingCurveParameters => {
                let curve = service.shared().curve();
                response[..2].copy_from_slice(&curve.coefficient.to_le_bytes());
                response[2..4].copy_from_slice(&curve.parallel_shift.to_le_bytes());
                4
            }
            Opcode::SetHeatingCurveParameters => {
                let curve = HeatingCurve {
                    coefficient: u16::from_le_bytes([frame.payload[0], frame.payload[1]]),
                    parallel_shift: u16::from_le_bytes([frame.payload[2], frame.payload[3]]),
                };
                service.set_curve(store, curve);
                0
            }
        };

        self.codec.start_response(frame.opcode, &response[..len]);
    }
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new()
    }
}
