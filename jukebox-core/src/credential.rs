//! RFID badge reader on I2C.
//!
//! A scan is a zero-length write to the reader's address, which fails unless
//! the reader acknowledges, followed by a read of the six identifier bytes.
//! The HAL issues the stop condition for every transaction. A reader with
//! nothing new to report answers with all zeroes.

use embedded_hal::blocking::i2c::{Read, Write};
use ufmt::{derive::uDebug, uDebug, uWrite, Formatter};

pub const ADDRESS: u8 = 0x13_u8;
pub const UID_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Credential(pub [u8; UID_LEN]);

impl Credential {
    pub const ADMIN: Credential = Credential([0x3A, 0x00, 0x6C, 0x34, 0xF9, 0x9B]);
    pub const MEMBER: Credential = Credential([0x3A, 0x00, 0x6C, 0x6D, 0xBA, 0x81]);

    pub fn role(&self) -> Role {
        if *self == Self::ADMIN {
            Role::Admin
        } else if *self == Self::MEMBER {
            Role::Member
        } else {
            Role::Unknown
        }
    }

    fn is_blank(&self) -> bool {
        self.0.iter().all(|byte| *byte == 0)
    }
}

impl uDebug for Credential {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        const HEX: &str = "0123456789ABCDEF";
        f.write_str("Credential(")?;
        for (idx, byte) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(":")?;
            }
            let (high, low) = ((byte >> 4) as usize, (byte & 0x0F) as usize);
            f.write_str(&HEX[high..high + 1])?;
            f.write_str(&HEX[low..low + 1])?;
        }
        f.write_str(")")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uDebug)]
pub enum Role {
    Admin,
    Member,
    Unknown,
}

/// Why a read produced no credential. None of these are surfaced to the user.
#[derive(Debug, PartialEq, Eq)]
pub enum ScanError<E> {
    /// The reader didn't acknowledge its address for writing
    WriteHandshake(E),
    /// The reader didn't acknowledge its address for reading
    ReadHandshake(E),
    /// The reader answered but had nothing scanned
    NoCard,
}

pub struct CredentialReader<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C, E> CredentialReader<I2C>
where
    I2C: Read<Error = E> + Write<Error = E>,
{
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, ADDRESS)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn read(&mut self) -> Result<Credential, ScanError<E>> {
        self.i2c
            .write(self.address, &[])
            .map_err(ScanError::WriteHandshake)?;

        let mut uid = [0_u8; UID_LEN];
        self.i2c
            .read(self.address, &mut uid)
            .map_err(ScanError::ReadHandshake)?;

        let credential = Credential(uid);
        if credential.is_blank() {
            return Err(ScanError::NoCard);
        }
        Ok(credential)
    }

    /// The common case is no card at all, which is simply `None`.
    pub fn scan(&mut self) -> Option<Credential> {
        self.read().ok()
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}
