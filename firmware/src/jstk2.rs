//! PmodJSTK2 joystick driver.
//!
//! The module speaks SPI mode 0 at up to 1 MHz. Every exchange is a single
//! chip-select window where each byte is clocked separately with a short
//! gap, because the module's microcontroller needs time to load the next
//! byte.

use embedded_hal_async::spi::{Operation, SpiDevice};
use heapless::Vec;
use mouse_core::{InputError, JoystickButtons, JoystickSample, JoystickSource};

/// Ask for 8-bit X/Y positions, returned in the trailing two bytes.
pub const CMD_GET_POSITION: u8 = 0xF2;
/// No command; the module answers with its plain data packet.
pub const CMD_NOP: u8 = 0x00;

/// Bytes clocked for a position request.
pub const POSITION_PACKET_LEN: usize = 7;
/// Bytes clocked for a plain data packet.
pub const DATA_PACKET_LEN: usize = 5;

/// Pause after asserting chip select.
pub const CS_SETUP_NS: u32 = 15_000;
/// Pause between consecutive bytes.
pub const INTER_BYTE_NS: u32 = 10_000;

const BUTTONS_INDEX: usize = 4;
const X_POSITION_INDEX: usize = 5;
const Y_POSITION_INDEX: usize = 6;

const BUTTON_STICK: u8 = 1 << 0;
const BUTTON_TRIGGER: u8 = 1 << 1;

// setup delay + one op per byte + one gap between each pair of bytes
const MAX_OPS: usize = 2 * POSITION_PACKET_LEN;

/// Decode the button byte of a data packet.
///
/// Button 1 is the stick press, button 2 the trigger.
#[must_use]
pub const fn decode_buttons(byte: u8) -> JoystickButtons {
    JoystickButtons {
        button1: byte & BUTTON_STICK != 0,
        button2: byte & BUTTON_TRIGGER != 0,
    }
}

/// Decode a position packet into a full sample.
#[must_use]
pub const fn decode_position(packet: &[u8; POSITION_PACKET_LEN]) -> JoystickSample {
    let buttons = decode_buttons(packet[BUTTONS_INDEX]);
    JoystickSample {
        x: packet[X_POSITION_INDEX],
        y: packet[Y_POSITION_INDEX],
        button1: buttons.button1,
        button2: buttons.button2,
    }
}

/// PmodJSTK2 on an SPI device that owns its chip select.
pub struct Jstk2<SPI> {
    spi: SPI,
}

impl<SPI: SpiDevice> Jstk2<SPI> {
    #[must_use]
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Clock `N` bytes, the first being `command`, and return what came back.
    async fn exchange<const N: usize>(&mut self, command: u8) -> Result<[u8; N], InputError> {
        let mut packet = [0u8; N];
        packet[0] = command;

        {
            let mut ops: Vec<Operation<'_, u8>, MAX_OPS> = Vec::new();
            ops.push(Operation::DelayNs(CS_SETUP_NS))
                .map_err(|_| InputError::Io)?;
            for (i, byte) in packet.chunks_mut(1).enumerate() {
                if i > 0 {
                    ops.push(Operation::DelayNs(INTER_BYTE_NS))
                        .map_err(|_| InputError::Io)?;
                }
                ops.push(Operation::TransferInPlace(byte))
                    .map_err(|_| InputError::Io)?;
            }

            self.spi
                .transaction(&mut ops)
                .await
                .map_err(|_| InputError::Io)?;
        }

        Ok(packet)
    }
}

impl<SPI: SpiDevice> JoystickSource for Jstk2<SPI> {
    async fn sample(&mut self) -> Result<JoystickSample, InputError> {
        let packet = self
            .exchange::<POSITION_PACKET_LEN>(CMD_GET_POSITION)
            .await?;
        Ok(decode_position(&packet))
    }

    async fn raw_buttons(&mut self) -> Result<JoystickButtons, InputError> {
        let packet = self.exchange::<DATA_PACKET_LEN>(CMD_NOP).await?;
        Ok(decode_buttons(packet[BUTTONS_INDEX]))
    }
}
