//! GPIO / peripheral pin assignments for the boiler controller board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Relay outputs (active HIGH through driver transistors)
// ---------------------------------------------------------------------------

/// Energises the mixing-valve "move left" winding.
pub const RELAY_VALVE_LEFT_GPIO: i32 = 4;
/// Energises the mixing-valve "move right" winding.
pub const RELAY_VALVE_RIGHT_GPIO: i32 = 5;
/// Gas burner enable.
pub const RELAY_BURNER_GPIO: i32 = 6;
/// Circulation pump enable.
pub const RELAY_PUMP_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Status LEDs (active HIGH)
// ---------------------------------------------------------------------------

/// Heartbeat, toggled once per control cycle.
pub const LED_STATUS_GPIO: i32 = 11;
/// Latched when link bring-up fails at boot.
pub const LED_NETWORK_ERROR_GPIO: i32 = 12;
/// Lit while the boiler is in idle mode.
pub const LED_BOILER_IDLE_GPIO: i32 = 13;
/// Lit while the mixing valve is travelling.
pub const LED_VALVE_MOVING_GPIO: i32 = 14;

// ---------------------------------------------------------------------------
// Analog inputs (ADC1)
// ---------------------------------------------------------------------------
//
// Channel numbers follow the multiplexer order the sampler iterates.

pub const ADC_CH_OUTSIDE_THERMISTOR: u32 = 0;
pub const ADC_CH_DAY_TRIMMER: u32 = 1;
pub const ADC_CH_NIGHT_TRIMMER: u32 = 2;
pub const ADC_CH_RADIATOR_START_THERMISTOR: u32 = 3;

// ---------------------------------------------------------------------------
// Serial link to the WiFi bridge
// ---------------------------------------------------------------------------

/// UART peripheral number wired to the bridge module.
pub const LINK_UART_PORT: i32 = 1;
pub const LINK_UART_TX_GPIO: i32 = 17;
pub const LINK_UART_RX_GPIO: i32 = 18;
