//! BMP180 barometric sensor driver (temperature, pressure, altitude).
//!
//! Register-based I²C protocol: an 11-word factory calibration block is read
//! once at construction, then each sample triggers a conversion through the
//! control register and applies the datasheet integer pipeline to the raw
//! values. Altitude is derived from pressure by the sea-level power law.
//!
//! Fully independent of the ranging core — its only consumer is the
//! diagnostic log stream.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::error::BaroError;

/// Fixed I²C address of the BMP180.
pub const BMP180_ADDR: u8 = 0x77;

/// Standard sea-level pressure, Pa.
pub const SEA_LEVEL_PA: f32 = 101_325.0;

const REG_CALIB: u8 = 0xAA;
const REG_CTRL: u8 = 0xF4;
const REG_DATA: u8 = 0xF6;

const CMD_CONVERT_TEMP: u8 = 0x2E;
const CMD_CONVERT_PRESSURE: u8 = 0x34; // oss = 0

/// Conversion time at oss 0, rounded up from the datasheet's 4.5 ms.
const CONVERSION_DELAY_US: u32 = 5_000;

// ---------------------------------------------------------------------------
// Readings
// ---------------------------------------------------------------------------

/// One environmental sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvReading {
    pub temperature_c: f32,
    pub pressure_pa: i32,
    pub altitude_m: f32,
}

/// Altitude above sea level from barometric pressure.
pub fn altitude_m(pressure_pa: i32) -> f32 {
    44_330.0 * (1.0 - (pressure_pa as f32 / SEA_LEVEL_PA).powf(0.1903))
}

// ---------------------------------------------------------------------------
// Factory calibration
// ---------------------------------------------------------------------------

/// EEPROM calibration coefficients (registers 0xAA..=0xBF).
#[derive(Debug, Clone, Copy)]
pub struct Calibration {
    pub ac1: i16,
    pub ac2: i16,
    pub ac3: i16,
    pub ac4: u16,
    pub ac5: u16,
    pub ac6: u16,
    pub b1: i16,
    pub b2: i16,
    pub mb: i16,
    pub mc: i16,
    pub md: i16,
}

impl Calibration {
    /// Parse the 22-byte calibration block (big-endian words).
    ///
    /// A word of 0x0000 or 0xFFFF indicates a failed EEPROM read.
    pub fn from_bytes(raw: &[u8; 22]) -> Result<Self, BaroError> {
        for word in raw.chunks_exact(2) {
            let w = u16::from_be_bytes([word[0], word[1]]);
            if w == 0x0000 || w == 0xFFFF {
                return Err(BaroError::BadCalibration);
            }
        }
        let word = |i: usize| u16::from_be_bytes([raw[2 * i], raw[2 * i + 1]]);
        Ok(Self {
            ac1: word(0) as i16,
            ac2: word(1) as i16,
            ac3: word(2) as i16,
            ac4: word(3),
            ac5: word(4),
            ac6: word(5),
            b1: word(6) as i16,
            b2: word(7) as i16,
            mb: word(8) as i16,
            mc: word(9) as i16,
            md: word(10) as i16,
        })
    }

    /// Datasheet B5 intermediate from the uncompensated temperature.
    pub fn b5(&self, ut: i32) -> i32 {
        let x1 = ((ut - i32::from(self.ac6)) * i32::from(self.ac5)) >> 15;
        let x2 = (i32::from(self.mc) << 11) / (x1 + i32::from(self.md));
        x1 + x2
    }

    /// True temperature in °C.
    pub fn temperature_c(b5: i32) -> f32 {
        ((b5 + 8) >> 4) as f32 / 10.0
    }

    /// True pressure in Pa from B5 and the uncompensated pressure (oss 0).
    pub fn pressure_pa(&self, b5: i32, up: i32) -> i32 {
        let b6 = b5 - 4000;
        let x1 = (i32::from(self.b2) * ((b6 * b6) >> 12)) >> 11;
        let x2 = (i32::from(self.ac2) * b6) >> 11;
        let x3 = x1 + x2;
        let b3 = ((i32::from(self.ac1) * 4 + x3) + 2) / 4;
        let x1 = (i32::from(self.ac3) * b6) >> 13;
        let x2 = (i32::from(self.b1) * ((b6 * b6) >> 12)) >> 16;
        let x3 = (x1 + x2 + 2) >> 2;
        let b4 = (u32::from(self.ac4) * ((x3 + 32768) as u32)) >> 15;
        let b7 = (up - b3) as u32 * 50_000;
        let p = if b7 < 0x8000_0000 {
            ((b7 * 2) / b4) as i32
        } else {
            ((b7 / b4) * 2) as i32
        };
        let x1 = (p >> 8) * (p >> 8);
        let x1 = (x1 * 3038) >> 16;
        let x2 = (-7357 * p) >> 16;
        p + ((x1 + x2 + 3791) >> 4)
    }
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// BMP180 on any bus implementing the `embedded-hal` I²C trait.
pub struct Bmp180<I2C, D> {
    i2c: I2C,
    delay: D,
    cal: Calibration,
}

impl<I2C: I2c, D: DelayNs> Bmp180<I2C, D> {
    /// Read and validate the factory calibration block.
    pub fn new(i2c: I2C, delay: D) -> Result<Self, BaroError> {
        let mut i2c = i2c;
        let mut raw = [0u8; 22];
        i2c.write_read(BMP180_ADDR, &[REG_CALIB], &mut raw)
            .map_err(|_| BaroError::I2c)?;
        let cal = Calibration::from_bytes(&raw)?;
        Ok(Self { i2c, delay, cal })
    }

    /// Temperature, pressure and derived altitude in one sample.
    pub fn read_environment(&mut self) -> Result<EnvReading, BaroError> {
        let ut = self.read_raw(CMD_CONVERT_TEMP)?;
        let b5 = self.cal.b5(ut);
        let up = self.read_raw(CMD_CONVERT_PRESSURE)?;
        let pressure_pa = self.cal.pressure_pa(b5, up);
        Ok(EnvReading {
            temperature_c: Calibration::temperature_c(b5),
            pressure_pa,
            altitude_m: altitude_m(pressure_pa),
        })
    }

    /// Trigger one conversion and read the 16-bit uncompensated value.
    fn read_raw(&mut self, command: u8) -> Result<i32, BaroError> {
        self.i2c
            .write(BMP180_ADDR, &[REG_CTRL, command])
            .map_err(|_| BaroError::I2c)?;
        self.delay.delay_us(CONVERSION_DELAY_US);
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(BMP180_ADDR, &[REG_DATA], &mut buf)
            .map_err(|_| BaroError::I2c)?;
        Ok(i32::from(u16::from_be_bytes(buf)))
    }
}
