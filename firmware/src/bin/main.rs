#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_embedded_hal::shared_bus::asynch::spi::SpiDevice;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::{SPI0, UART1};
use embassy_rp::spi::{self, Spi};
use embassy_rp::uart::{Config as UartConfig, Uart};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::Delay;
use joystick_mouse::{
    Bt2Output, ChassisButtonsGpio, EngineConfig, Jstk2, LedIndicator, MouseEngine, BT2_BAUDRATE,
};
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART1_IRQ => embassy_rp::uart::InterruptHandler<UART1>;
});

/// PmodJSTK2 tops out at 1 MHz.
const JSTK2_SPI_FREQUENCY: u32 = 1_000_000;

type SpiBus = Mutex<NoopRawMutex, Spi<'static, SPI0, spi::Async>>;

/// SPI bus shared through a mutex so the joystick can own its chip select.
static SPI_BUS: StaticCell<SpiBus> = StaticCell::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Joystick mouse starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- UART Setup (PmodBT2) ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BT2_BAUDRATE;

    let uart = Uart::new(
        p.UART1,
        p.PIN_8, // TX
        p.PIN_9, // RX
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        uart_config,
    );
    let (tx, _rx) = uart.split();
    let output = Bt2Output::new(tx);

    // --- SPI Setup (PmodJSTK2, mode 0) ---
    let mut spi_config = spi::Config::default();
    spi_config.frequency = JSTK2_SPI_FREQUENCY;

    let spi = Spi::new(
        p.SPI0,
        p.PIN_18, // SCK
        p.PIN_19, // MOSI
        p.PIN_16, // MISO
        p.DMA_CH2,
        p.DMA_CH3,
        spi_config,
    );
    let spi_bus = SPI_BUS.init(Mutex::new(spi));
    let cs = Output::new(p.PIN_17, Level::High);
    let joystick = Jstk2::new(SpiDevice::new(spi_bus, cs));

    // --- Chassis buttons and mode LED ---
    let chassis = ChassisButtonsGpio::new([
        Input::new(p.PIN_2, Pull::Down),
        Input::new(p.PIN_3, Pull::Down),
        Input::new(p.PIN_4, Pull::Down),
        Input::new(p.PIN_5, Pull::Down),
    ]);
    let indicator = LedIndicator::new(Output::new(p.PIN_25, Level::Low));

    let mut engine = MouseEngine::new(
        joystick,
        chassis,
        indicator,
        output,
        Delay,
        EngineConfig::default(),
    );

    info!("Joystick mouse initialized, polling every {} us", engine.config().tick_period_us);
    engine.run().await
}
