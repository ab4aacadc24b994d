//! STM32F407 Discovery pin assignment
//!
//! | Function | Pin | Notes |
//! |---|---|---|
//! | LIS3DSH SCK/MISO/MOSI | PA5/PA6/PA7 | SPI1, mode 3 |
//! | LIS3DSH CS | PE3 | active low |
//! | Sit-up LED | PD13 | orange (LD3) |
//! | Squat LED | PD14 | red (LD5) |
//! | Push-up LED | PD12 | green (LD4) |
//! | Jumping-jack LED | PD15 | blue (LD6) |
//! | User button | PA0 | active high, external pull-down |

use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::mode::Blocking;
use embassy_stm32::spi::{self, Spi};
use embassy_stm32::time::Hertz;
use embassy_stm32::Peripherals;

use repcount_core::EngineConfig;
use repcount_drivers::feedback::LedBank;
use repcount_drivers::input::TargetButton;
use repcount_drivers::sensor::Lis3dsh;

/// LIS3DSH SPI clock
const SENSOR_SPI_HZ: u32 = 1_000_000;

/// Board peripherals used by the counter
pub struct Board {
    pub sensor: Lis3dsh<Spi<'static, Blocking>, Output<'static>>,
    pub leds: LedBank<Output<'static>>,
    pub button: TargetButton<Input<'static>>,
}

impl Board {
    /// Claim and configure every pin
    pub fn new(p: Peripherals, config: &EngineConfig) -> Self {
        let mut spi_config = spi::Config::default();
        spi_config.mode = spi::MODE_3;
        spi_config.frequency = Hertz(SENSOR_SPI_HZ);

        let spi = Spi::new_blocking(p.SPI1, p.PA5, p.PA7, p.PA6, spi_config);
        let cs = Output::new(p.PE3, Level::High, Speed::VeryHigh);

        // Order follows Exercise::ALL: sit-up, squat, push-up, jumping-jack
        let leds = LedBank::new(
            [
                Output::new(p.PD13, Level::High, Speed::Low),
                Output::new(p.PD14, Level::High, Speed::Low),
                Output::new(p.PD12, Level::High, Speed::Low),
                Output::new(p.PD15, Level::High, Speed::Low),
            ],
            u64::from(config.blink_off_ms),
        );

        let button = TargetButton::new(
            Input::new(p.PA0, Pull::None),
            u64::from(config.button_holdoff_ms),
        );

        Self {
            sensor: Lis3dsh::new(spi, cs),
            leds,
            button,
        }
    }
}
