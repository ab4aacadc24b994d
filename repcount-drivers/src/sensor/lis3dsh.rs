//! LIS3DSH 3-axis accelerometer
//!
//! Reads raw acceleration over SPI and converts the gravity vector into
//! roll and pitch in whole degrees, each normalised to `[0, 360)`:
//!
//! - roll  = atan2(y, z)
//! - pitch = atan2(x, z)
//!
//! Chip select is driven manually around every transfer.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use repcount_core::traits::OrientationSensor;
use repcount_core::OrientationSample;

/// Register addresses
mod reg {
    pub const WHO_AM_I: u8 = 0x0F;
    pub const CTRL_REG4: u8 = 0x20;
    pub const CTRL_REG5: u8 = 0x24;
    pub const CTRL_REG6: u8 = 0x25;
    pub const OUT_X_L: u8 = 0x28;
}

/// WHO_AM_I response
pub const DEVICE_ID: u8 = 0x3F;

/// 100 Hz output data rate, X/Y/Z enabled
const CTRL_REG4_100HZ_XYZ: u8 = 0x67;

/// +/-2 g full scale, 800 Hz anti-aliasing bandwidth
const CTRL_REG5_2G: u8 = 0x00;

/// Register address auto-increment for burst reads
const CTRL_REG6_ADD_INC: u8 = 0x10;

/// Read flag in the SPI address byte
const READ: u8 = 0x80;

/// Errors that can occur talking to the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lis3dshError<SpiE, PinE> {
    /// SPI transfer failed
    Spi(SpiE),
    /// Chip select could not be driven
    Pin(PinE),
    /// WHO_AM_I returned an unexpected value
    WrongDevice(u8),
}

/// One raw acceleration reading (LSB, +/-2 g scale)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawAcceleration {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// LIS3DSH on a dedicated SPI bus
pub struct Lis3dsh<SPI, CS> {
    spi: SPI,
    cs: CS,
}

type Result<T, SPI, CS> = core::result::Result<
    T,
    Lis3dshError<<SPI as embedded_hal::spi::ErrorType>::Error, <CS as embedded_hal::digital::ErrorType>::Error>,
>;

impl<SPI: SpiBus, CS: OutputPin> Lis3dsh<SPI, CS> {
    /// Wrap an SPI bus and chip-select pin
    ///
    /// The bus must be configured for SPI mode 3.
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Release the bus and pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    /// Verify the device and start continuous conversion
    pub fn init(&mut self) -> Result<(), SPI, CS> {
        let id = self.read_register(reg::WHO_AM_I)?;
        if id != DEVICE_ID {
            return Err(Lis3dshError::WrongDevice(id));
        }

        self.write_register(reg::CTRL_REG4, CTRL_REG4_100HZ_XYZ)?;
        self.write_register(reg::CTRL_REG5, CTRL_REG5_2G)?;
        self.write_register(reg::CTRL_REG6, CTRL_REG6_ADD_INC)?;
        Ok(())
    }

    /// Burst-read the three output registers
    pub fn read_raw(&mut self) -> Result<RawAcceleration, SPI, CS> {
        let mut buf = [0u8; 7];
        buf[0] = reg::OUT_X_L | READ;
        self.transfer(&mut buf)?;

        Ok(RawAcceleration {
            x: i16::from_le_bytes([buf[1], buf[2]]),
            y: i16::from_le_bytes([buf[3], buf[4]]),
            z: i16::from_le_bytes([buf[5], buf[6]]),
        })
    }

    /// Read a single register
    pub fn read_register(&mut self, addr: u8) -> Result<u8, SPI, CS> {
        let mut buf = [addr | READ, 0];
        self.transfer(&mut buf)?;
        Ok(buf[1])
    }

    /// Write a single register
    pub fn write_register(&mut self, addr: u8, value: u8) -> Result<(), SPI, CS> {
        let mut buf = [addr & !READ, value];
        self.transfer(&mut buf)
    }

    fn transfer(&mut self, buf: &mut [u8]) -> Result<(), SPI, CS> {
        self.cs.set_low().map_err(Lis3dshError::Pin)?;
        let result = self
            .spi
            .transfer_in_place(buf)
            .and_then(|()| self.spi.flush());
        // Always release chip select, even after a failed transfer
        self.cs.set_high().map_err(Lis3dshError::Pin)?;
        result.map_err(Lis3dshError::Spi)
    }
}

impl<SPI: SpiBus, CS: OutputPin> OrientationSensor for Lis3dsh<SPI, CS> {
    type Error = Lis3dshError<SPI::Error, CS::Error>;

    fn read(&mut self) -> core::result::Result<OrientationSample, Self::Error> {
        self.read_raw().map(angles_from_raw)
    }
}

/// Convert a gravity vector to roll/pitch in whole degrees
///
/// Angles are rounded to the nearest degree before wrapping into `[0, 360)`.
pub fn angles_from_raw(raw: RawAcceleration) -> OrientationSample {
    let x = f32::from(raw.x);
    let y = f32::from(raw.y);
    let z = f32::from(raw.z);

    OrientationSample::new(degrees(libm::atan2f(y, z)), degrees(libm::atan2f(x, z)))
}

fn degrees(radians: f32) -> i32 {
    (libm::roundf(radians * 180.0 / core::f32::consts::PI) as i32).rem_euclid(360)
}
